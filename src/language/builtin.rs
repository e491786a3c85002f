//! Built-in signature table.
//!
//! Order matters: ties go to the earlier entry. Generic JavaScript sits ahead
//! of TypeScript so plain JS snippets are not claimed by the superset, and
//! C++ sits ahead of C for `#include <iostream>` style code.

use super::signature::{SignatureSpec, SyntaxRule};

fn spec(
    id: &str,
    keywords: &[&str],
    extensions: &[&str],
    patterns: &[&str],
    shebangs: &[&str],
    rules: Vec<SyntaxRule>,
) -> SignatureSpec {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    SignatureSpec {
        id: id.to_string(),
        keywords: owned(keywords),
        extensions: owned(extensions),
        patterns: owned(patterns),
        shebangs: owned(shebangs),
        rules,
    }
}

fn braces(bonus: u32) -> SyntaxRule {
    SyntaxRule::all(&["{", "}"], bonus)
}

fn semicolons(bonus: u32) -> SyntaxRule {
    SyntaxRule::any(&[";"], bonus)
}

pub(crate) fn builtin_specs() -> Vec<SignatureSpec> {
    vec![
        spec(
            "javascript",
            &[
                "function", "const", "let", "var", "console", "require", "async", "await",
                "undefined", "typeof", "=>", "document", "prototype",
            ],
            &["js", "mjs", "cjs", "jsx"],
            &[
                r"function\s+\w+\s*\(",
                r"console\.log\s*\(",
                r"(?:const|let|var)\s+\w+\s*=",
                r"=>\s*\{",
                r#"require\s*\(\s*['"]"#,
                r"module\.exports",
            ],
            &["node", "nodejs"],
            vec![
                braces(5),
                semicolons(3),
                SyntaxRule::any(&["import ", "export "], 5),
            ],
        ),
        spec(
            "typescript",
            &[
                "interface", "type", "enum", "implements", "readonly", "namespace", "declare",
                "keyof", "string", "number", "boolean", "unknown", "never", "any",
            ],
            &["ts", "tsx", "mts", "cts"],
            &[
                r":\s*(?:string|number|boolean|any|void|unknown)\b",
                r"interface\s+\w+\s*\{",
                r"type\s+\w+\s*=",
                r"(?:public|private|protected)\s+readonly\s+\w+",
            ],
            &["ts-node", "deno"],
            vec![
                braces(5),
                semicolons(3),
                SyntaxRule::any(&["import ", "export "], 5),
            ],
        ),
        spec(
            "python",
            &[
                "def", "class", "import", "from", "self", "elif", "lambda", "None", "True",
                "False", "pass", "yield", "print", "__init__", "__name__", "except", "nonlocal",
            ],
            &["py", "pyw", "pyi"],
            &[
                r"def\s+\w+\s*\(",
                r"class\s+\w+(?:\(.*\))?\s*:",
                r"(?m)^\s*(?:from\s+[\w.]+\s+)?import\s+\w+",
                r"if\s+__name__\s*==",
                r"self\.\w+",
            ],
            &["python"],
            vec![
                SyntaxRule::any(&["    ", "\t"], 5),
                SyntaxRule::any(&[":\n", ":\r\n"], 5),
            ],
        ),
        spec(
            "java",
            &[
                "public", "private", "protected", "static", "void", "class", "extends", "package",
                "final", "throws", "System", "new", "import",
            ],
            &["java"],
            &[
                r"public\s+class\s+\w+",
                r"public\s+static\s+void\s+main",
                r"System\.out\.println\s*\(",
                r"import\s+java\.",
                r"@Override",
                r"(?:private|protected|public)\s+\w+(?:<[\w<>, ]+>)?\s+\w+\s*[;=(]",
            ],
            &[],
            vec![braces(5), semicolons(3)],
        ),
        spec(
            "cpp",
            &[
                "#include", "std", "cout", "cin", "endl", "namespace", "using", "template",
                "typename", "class", "virtual", "nullptr", "delete", "iostream", "vector",
            ],
            &["cpp", "cc", "cxx", "hpp", "hxx", "hh"],
            &[
                r"#include\s*<\w+>",
                r"std::\w+",
                r"using\s+namespace\s+std",
                r"cout\s*<<",
                r"template\s*<",
                r"\w+::\w+\s*\(",
            ],
            &[],
            vec![braces(5), semicolons(3), SyntaxRule::any(&["<<", ">>"], 3)],
        ),
        spec(
            "c",
            &[
                "#include", "int", "printf", "scanf", "malloc", "free", "sizeof", "struct",
                "typedef", "void", "char", "unsigned", "NULL", "stdio",
            ],
            &["c", "h"],
            &[
                r"#include\s*<[\w/]+\.h>",
                r"int\s+main\s*\(",
                r"printf\s*\(",
                r"malloc\s*\(",
                r"typedef\s+struct",
            ],
            &[],
            vec![braces(5), semicolons(3)],
        ),
        spec(
            "csharp",
            &[
                "using", "namespace", "public", "private", "static", "void", "class", "var",
                "async", "await", "Console", "string", "readonly", "override",
            ],
            &["cs", "csx"],
            &[
                r"using\s+System",
                r"namespace\s+[\w.]+",
                r"Console\.Write(?:Line)?\s*\(",
                r"\{\s*get;\s*set;\s*\}",
                r"public\s+(?:static\s+)?(?:async\s+)?\w+\s+\w+\s*\(",
            ],
            &[],
            vec![braces(5), semicolons(3)],
        ),
        spec(
            "go",
            &[
                "package", "func", "import", "fmt", "defer", "chan", "struct", "interface", ":=",
            ],
            &["go"],
            &[
                r"func\s+(?:\(\s*\w+\s+\*?\w+\s*\)\s*)?\w+\s*\(",
                r"package\s+main",
                r"fmt\.\w+\s*\(",
                r"\w+\s*:=",
                r"import\s*\(",
            ],
            &[],
            vec![braces(5)],
        ),
        spec(
            "rust",
            &[
                "fn", "let", "mut", "impl", "pub", "use", "struct", "enum", "match", "trait",
                "crate", "mod", "unwrap", "println",
            ],
            &["rs"],
            &[
                r"fn\s+main\s*\(",
                r"fn\s+\w+\s*(?:<[^>]*>)?\s*\(",
                r"let\s+mut\s+\w+",
                r"impl(?:<[^>]*>)?\s+\w+",
                r"println!\s*\(",
                r"use\s+\w+::",
                r"#\[derive\(",
                // Case-sensitive; as keywords these would fire on "some" and "ok"
                r"\b(?:Some|Ok|Err)\(",
            ],
            &["rust-script"],
            vec![braces(5), semicolons(3), SyntaxRule::any(&["::"], 3)],
        ),
        spec(
            "php",
            &[
                "<?php", "echo", "function", "namespace", "use", "public", "private", "array",
                "foreach", "$this",
            ],
            &["php", "phtml"],
            &[r"<\?php", r"\$\w+\s*=", r"\$this->\w+", r"echo\s+"],
            &["php"],
            vec![braces(5), semicolons(3), SyntaxRule::any(&["$"], 5)],
        ),
        spec(
            "ruby",
            &[
                "def", "end", "puts", "require", "attr_accessor", "elsif", "unless", "nil",
                "module", "lambda", "self",
            ],
            &["rb", "rake", "gemspec"],
            &[
                r"(?m)def\s+\w+[?!]?(?:\(.*\))?\s*$",
                r"(?m)^\s*end\s*$",
                r"puts\s+",
                r"attr_(?:accessor|reader|writer)\s+:",
                r"do\s*\|\w+",
            ],
            &["ruby"],
            vec![SyntaxRule::any(&["\nend"], 5)],
        ),
        spec(
            "swift",
            &[
                "func", "guard", "protocol", "extension", "import", "let", "var", "struct",
                "init", "fileprivate",
            ],
            &["swift"],
            &[
                r"func\s+\w+\s*\([^)]*\)\s*(?:->\s*\w+)?\s*\{",
                r"guard\s+let",
                r"if\s+let\s+\w+",
                r"import\s+(?:UIKit|Foundation|SwiftUI)",
                r"@(?:State|Published|objc)",
            ],
            &["swift"],
            vec![braces(5)],
        ),
        spec(
            "kotlin",
            &[
                "fun", "val", "var", "companion", "suspend", "override", "println", "lateinit",
            ],
            &["kt", "kts"],
            &[
                r"fun\s+\w+\s*\(",
                r"val\s+\w+\s*[:=]",
                r"data\s+class\s+\w+",
                r"companion\s+object",
                r"println\s*\(",
            ],
            &["kotlin"],
            vec![braces(5)],
        ),
        spec(
            "sql",
            &[
                "SELECT", "FROM", "WHERE", "INSERT", "INTO", "UPDATE", "DELETE", "CREATE",
                "TABLE", "JOIN", "VALUES", "GROUP", "ORDER",
            ],
            &["sql"],
            &[
                r"(?i)select\s+.+\s+from\s+\w+",
                r"(?i)insert\s+into",
                r"(?i)create\s+table",
                r"(?i)update\s+\w+\s+set",
                r"(?i)where\s+\w+\s*=",
            ],
            &[],
            vec![
                semicolons(3),
                SyntaxRule::any(&["SELECT ", "INSERT ", "UPDATE ", "DELETE ", "CREATE "], 5),
            ],
        ),
        spec(
            "bash",
            &[
                "echo", "fi", "then", "done", "esac", "export", "local", "sudo", "grep",
            ],
            &["sh", "bash", "zsh"],
            &[
                r"(?m)^\s*if\s+\[\[?\s",
                r"\$\{?\w+\}?",
                r"(?m)^\s*for\s+\w+\s+in\s",
                r"\$\(.+\)",
                r"(?m)^\s*(?:function\s+)?\w+\s*\(\)\s*\{",
            ],
            &["bash", "sh", "zsh", "ksh", "dash"],
            vec![SyntaxRule::any(&["$"], 3)],
        ),
        spec(
            "html",
            &[
                "<!DOCTYPE", "<html", "<div", "<span", "<body", "<head", "<script", "href",
            ],
            &["html", "htm", "xhtml"],
            &[
                r"(?i)<!DOCTYPE\s+html",
                r"</\w+>",
                r#"<\w+(?:\s+[\w-]+=["'][^"']*["'])+\s*/?>"#,
                r"<(?:div|span|p|a|ul|li|table|body|head)\b",
            ],
            &[],
            vec![SyntaxRule::all(&["<", ">"], 5), SyntaxRule::any(&["</"], 5)],
        ),
        spec(
            "css",
            &[
                "color", "margin", "padding", "display", "background", "font-size", "border",
                "@media", "!important",
            ],
            &["css", "scss", "less"],
            &[
                r"[.#]?[\w-]+\s*\{[^}]*:[^}]*;",
                r"@media\s",
                r":\s*#[0-9a-fA-F]{3,6}\b",
                r"\d+(?:px|em|rem|%)",
            ],
            &[],
            vec![braces(3), SyntaxRule::any(&[": "], 3), semicolons(3)],
        ),
    ]
}
