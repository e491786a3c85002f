use codesniff::{ClassificationResult, LanguageClassifier, classify, detect_language};
use rstest::rstest;

const JS_FIBONACCI: &str =
    "function fibonacci(n) { if (n <= 1) return n; return fibonacci(n-1)+fibonacci(n-2); }";
const PY_CLASS: &str = "class Calculator:\n    def __init__(self):\n        self.result = 0";
const CPP_MAIN: &str = "#include <iostream>\nusing namespace std;\nint main(){ return 0; }";
const PROSE: &str = "just some plain english prose with no code at all";
const SQL_SELECT: &str = "SELECT * FROM users WHERE id = 1;";

#[rstest]
#[case::javascript(JS_FIBONACCI, "javascript")]
#[case::python(PY_CLASS, "python")]
#[case::cpp(CPP_MAIN, "cpp")]
#[case::sql(SQL_SELECT, "sql")]
#[case::java("public class Foo {}", "java")]
fn test_scenarios_detect_language(#[case] text: &str, #[case] expected: &str) {
    let result = classify(text);
    assert_eq!(result.language, expected);
    assert!(result.confidence > 0, "confidence for {expected} was 0");
}

#[test]
fn test_python_matched_keywords() {
    let result = classify(PY_CLASS);
    assert!(result.matched_keywords.contains(&"def".to_string()));
    assert!(result.matched_keywords.contains(&"class".to_string()));
    // Table order, not text order
    assert_eq!(
        result.matched_keywords,
        vec!["def", "class", "self", "__init__"]
    );
}

#[test]
fn test_prose_is_plain_text() {
    let result = classify(PROSE);
    assert_eq!(result, ClassificationResult::plain_text());
    assert_eq!(detect_language(PROSE), "text");
}

#[rstest]
#[case::lowercase(PROSE)]
#[case::weather("the weather is lovely this morning")]
#[case::errand("please remember to buy milk and bread on the way home")]
#[case::capitalised_some("Some days are better than others, and that is ok")]
#[case::err_and_some("I made an err in judgement but some good came of it")]
#[case::thanks("Thanks for the help with my homework yesterday")]
fn test_english_sentences_are_plain_text(#[case] text: &str) {
    assert_eq!(classify(text), ClassificationResult::plain_text());
}

#[test]
fn test_sql_result_snapshot() {
    insta::assert_json_snapshot!(classify(SQL_SELECT), @r#"
    {
      "language": "sql",
      "confidence": 100,
      "matchedKeywords": [
        "SELECT",
        "FROM",
        "WHERE"
      ],
      "matchedExtensions": [
        "sql"
      ]
    }
    "#);
}

#[test]
fn test_line_count_normalization() {
    let short = classify("public class Foo {}");

    let mut long = "lorem ipsum dolor\n".repeat(49);
    long.push_str("public");
    let long = classify(&long);

    assert_eq!(short.language, "java");
    assert_eq!(long.language, "java");
    assert!(
        short.confidence > long.confidence,
        "short {} should beat long {}",
        short.confidence,
        long.confidence
    );
}

#[test]
fn test_empty_input_law() {
    for text in ["", "   \n\t", "\n\n\n", "\r\n"] {
        let result = classify(text);
        assert_eq!(result.language, "text");
        assert_eq!(result.confidence, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.matched_extensions.is_empty());
    }
}

#[test]
fn test_totality_and_bounds() {
    let long_line = "x".repeat(100_000);
    let many_lines = "fn main() {}\n".repeat(5_000);
    let inputs = [
        "\u{0}\u{1}\u{fffd}\u{7f}",
        "(((((*+?[[[\\",
        "$^.*|{}[]()",
        "<?php <?php <?php",
        "#include #include",
        "#!",
        "#!/usr/bin/env",
        "é ü ñ 日本語 🦀",
        long_line.as_str(),
        many_lines.as_str(),
    ];
    for text in inputs {
        let result = classify(text);
        assert!(result.confidence <= 100);
        assert!(!result.language.is_empty());
        if result.language == "text" {
            assert_eq!(result.confidence, 0);
        }
    }
}

#[test]
fn test_determinism() {
    let classifier = LanguageClassifier::new();
    for text in [JS_FIBONACCI, PY_CLASS, CPP_MAIN, PROSE, SQL_SELECT] {
        assert_eq!(classifier.classify(text), classifier.classify(text));
        assert_eq!(classifier.scores(text), classifier.scores(text));
    }
}

#[test]
fn test_whole_word_keywords_across_languages() {
    let classifier = LanguageClassifier::new();
    let scores = classifier.scores("define undefined_value");
    let python = scores.iter().find(|s| s.language == "python").unwrap();
    assert!(!python.matched_keywords.contains(&"def".to_string()));
}

#[test]
fn test_punctuation_keywords_match() {
    let php = classify("<?php\necho $name;");
    assert_eq!(php.language, "php");
    assert!(php.matched_keywords.contains(&"<?php".to_string()));

    let c = classify("#include <stdio.h>\nint main(void) { printf(\"hi\\n\"); return 0; }");
    assert_eq!(c.language, "c");
    assert!(c.matched_keywords.contains(&"#include".to_string()));
}

#[rstest]
#[case::python_env("#!/usr/bin/env python3\nx = 1", "python")]
#[case::bash("#!/bin/bash\nls -la", "bash")]
#[case::node("#!/usr/bin/env node\nx = 1", "javascript")]
#[case::ruby("#!/usr/bin/env ruby\nx = 1", "ruby")]
fn test_shebang_decides_sparse_scripts(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(detect_language(text), expected);
}

#[test]
fn test_trailing_filename_hint() {
    assert_eq!(detect_language("print('hi')\n# hello.py"), "python");
    assert_eq!(detect_language("x = 1\n// saved as notes.rb"), "ruby");
}

#[test]
fn test_batch_preserves_order() {
    let classifier = LanguageClassifier::new();
    let texts = vec![SQL_SELECT, PROSE, CPP_MAIN, "", PY_CLASS];
    let languages: Vec<String> = classifier
        .classify_batch(&texts)
        .into_iter()
        .map(|r| r.language)
        .collect();
    assert_eq!(languages, vec!["sql", "text", "cpp", "text", "python"]);
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LanguageClassifier>();

    let classifier = LanguageClassifier::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| classifier.detect_language(CPP_MAIN)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "cpp");
        }
    });
}
