//! Shebang interpreter extraction.
//!
//! Scripts often name their interpreter on a leading `#!` line
//! (e.g., `#!/usr/bin/env python3`). Signatures list interpreter names and
//! get a fixed bonus when the script's interpreter is one of them.

/// Extract the interpreter binary name from the first line of `content`.
///
/// Returns None unless the content starts with `#!`.
/// Handles both `/bin/bash` and `/usr/bin/env -S node --flag` styles.
pub fn shebang_interpreter(content: &str) -> Option<&str> {
    let first_line = content.lines().next()?;
    let shebang = first_line.strip_prefix("#!")?;

    let mut parts = shebang.split_whitespace();
    let program = basename(parts.next()?);
    if program != "env" {
        return Some(program);
    }

    // `env` options and `NAME=value` assignments precede the real interpreter
    parts
        .find(|part| !part.starts_with('-') && !part.contains('='))
        .map(basename)
}

/// Check whether an interpreter satisfies a signature's shebang matcher.
///
/// Exact names match, and so do versioned names: `python3` and
/// `python3.12` both satisfy `python`. Names are compared, not searched as
/// substrings, so `sh` never matches `bash`, `zsh` or `fish`.
pub fn interpreter_matches(interpreter: &str, matcher: &str) -> bool {
    match interpreter.strip_prefix(matcher) {
        Some("") => true,
        Some(suffix) => {
            suffix.starts_with(|c: char| c.is_ascii_digit())
                && suffix.chars().all(|c| c.is_ascii_digit() || c == '.')
        }
        None => false,
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_direct_path() {
        assert_eq!(shebang_interpreter("#!/bin/bash\necho hello"), Some("bash"));
        assert_eq!(shebang_interpreter("#!/usr/bin/perl -w\nprint 1;"), Some("perl"));
    }

    #[test]
    fn test_interpreter_via_env() {
        let content = "#!/usr/bin/env python\nprint('hello')";
        assert_eq!(shebang_interpreter(content), Some("python"));
        assert_eq!(
            shebang_interpreter("#!/usr/bin/env -S node --no-warnings\n"),
            Some("node")
        );
        assert_eq!(
            shebang_interpreter("#!/usr/bin/env LANG=C ruby\n"),
            Some("ruby")
        );
    }

    #[test]
    fn test_interpreter_none() {
        // No shebang
        assert_eq!(shebang_interpreter("print('hello')"), None);
        // Empty content
        assert_eq!(shebang_interpreter(""), None);
        // Bare shebang
        assert_eq!(shebang_interpreter("#!"), None);
        // env without a program
        assert_eq!(shebang_interpreter("#!/usr/bin/env -i"), None);
    }

    #[test]
    fn test_interpreter_matches_versions() {
        assert!(interpreter_matches("python", "python"));
        assert!(interpreter_matches("python3", "python"));
        assert!(interpreter_matches("python3.12", "python"));
        assert!(!interpreter_matches("pythonista", "python"));
        assert!(!interpreter_matches("bash", "sh"));
        assert!(!interpreter_matches("zsh", "sh"));
        assert!(!interpreter_matches("fish", "sh"));
        assert!(interpreter_matches("sh", "sh"));
    }
}
