//! Whole-word keyword matching.
//!
//! Keywords are literal text, so they are regex-escaped before compiling.
//! Word boundaries are only enforced on edges where the keyword itself
//! starts or ends with a word character: `def` must not match inside
//! `define`, while `#include` and `<?php` still match at the start of a line.

use regex::Regex;

use crate::error::{SniffError, SniffResult};

/// A compiled keyword matcher.
#[derive(Debug, Clone)]
pub struct Keyword {
    text: String,
    matcher: Regex,
}

impl Keyword {
    /// Compile a keyword for the given language.
    pub fn new(language: &str, text: &str) -> SniffResult<Self> {
        if text.is_empty() {
            return Err(SniffError::EmptyKeyword {
                language: language.to_string(),
            });
        }
        let pattern = keyword_pattern(text);
        let matcher =
            Regex::new(&pattern).map_err(|e| SniffError::invalid_pattern(language, text, e))?;
        Ok(Self {
            text: text.to_string(),
            matcher,
        })
    }

    /// The keyword as written in the signature.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of non-overlapping whole-word, case-insensitive occurrences.
    pub fn count_in(&self, haystack: &str) -> usize {
        self.matcher.find_iter(haystack).count()
    }
}

/// Build the regex source for a literal keyword.
pub fn keyword_pattern(keyword: &str) -> String {
    let escaped = regex::escape(keyword);
    let leading = if keyword.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let trailing = if keyword.chars().next_back().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    format!("(?i){leading}{escaped}{trailing}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
