//! Language signatures and the ordered signature table.
//!
//! A [`SignatureSpec`] is the declarative form (built-in table, user config).
//! A [`LanguageSignature`] is the compiled form the classifier scores with.
//! Table order is significant: on equal scores the earlier entry wins.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::builtin::builtin_specs;
use super::keyword::Keyword;
use crate::error::{SniffError, SniffResult};

/// Sentinel language id for text no signature recognizes.
pub const PLAIN_TEXT: &str = "text";

/// Substring condition gating a syntax bonus.
///
/// Checked against the raw text with plain `contains`, not whole-word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Every substring must be present
    All(Vec<String>),
    /// At least one substring must be present
    Any(Vec<String>),
}

impl Condition {
    pub fn holds(&self, text: &str) -> bool {
        match self {
            Condition::All(needles) => needles.iter().all(|n| text.contains(n.as_str())),
            Condition::Any(needles) => needles.iter().any(|n| text.contains(n.as_str())),
        }
    }
}

/// A per-language syntax bonus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyntaxRule {
    pub when: Condition,
    pub bonus: u32,
}

impl SyntaxRule {
    pub fn all(needles: &[&str], bonus: u32) -> Self {
        Self {
            when: Condition::All(needles.iter().map(|n| n.to_string()).collect()),
            bonus,
        }
    }

    pub fn any(needles: &[&str], bonus: u32) -> Self {
        Self {
            when: Condition::Any(needles.iter().map(|n| n.to_string()).collect()),
            bonus,
        }
    }
}

/// Declarative description of one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignatureSpec {
    pub id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub shebangs: Vec<String>,
    #[serde(default)]
    pub rules: Vec<SyntaxRule>,
}

/// Compiled signature for one language.
#[derive(Debug, Clone)]
pub struct LanguageSignature {
    id: String,
    keywords: Vec<Keyword>,
    extensions: Vec<String>,
    patterns: Vec<Regex>,
    shebangs: Vec<String>,
    rules: Vec<SyntaxRule>,
}

impl LanguageSignature {
    /// Compile a spec, escaping keywords and validating patterns.
    pub fn compile(spec: SignatureSpec) -> SniffResult<Self> {
        let SignatureSpec {
            id,
            keywords,
            extensions,
            patterns,
            shebangs,
            rules,
        } = spec;

        if id.trim().is_empty() || id == PLAIN_TEXT {
            return Err(SniffError::InvalidLanguageId { language: id });
        }

        let keywords = keywords
            .iter()
            .map(|k| Keyword::new(&id, k))
            .collect::<SniffResult<Vec<_>>>()?;
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).map_err(|e| SniffError::invalid_pattern(&id, p, e)))
            .collect::<SniffResult<Vec<_>>>()?;
        let extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();

        Ok(Self {
            id,
            keywords,
            extensions,
            patterns,
            shebangs,
            rules,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn shebangs(&self) -> &[String] {
        &self.shebangs
    }

    pub fn rules(&self) -> &[SyntaxRule] {
        &self.rules
    }
}

static BUILTIN_TABLE: LazyLock<Arc<SignatureTable>> = LazyLock::new(|| {
    let table = SignatureTable::from_specs(builtin_specs())
        .expect("built-in signature table must compile");
    Arc::new(table)
});

/// Ordered, immutable set of signatures with unique ids.
#[derive(Debug, Clone)]
pub struct SignatureTable {
    signatures: Vec<LanguageSignature>,
}

impl SignatureTable {
    /// The process-wide built-in table, compiled on first use.
    pub fn builtin() -> Arc<SignatureTable> {
        Arc::clone(&BUILTIN_TABLE)
    }

    /// Compile specs into a table, preserving their order.
    pub fn from_specs(specs: impl IntoIterator<Item = SignatureSpec>) -> SniffResult<Self> {
        let mut seen = HashSet::new();
        let mut signatures = Vec::new();
        for spec in specs {
            if !seen.insert(spec.id.clone()) {
                return Err(SniffError::duplicate_language(spec.id));
            }
            signatures.push(LanguageSignature::compile(spec)?);
        }
        Ok(Self { signatures })
    }

    /// The built-in table followed by `extra` specs.
    ///
    /// Extra languages come last, so built-ins keep winning ties.
    pub fn with_extra(extra: impl IntoIterator<Item = SignatureSpec>) -> SniffResult<Self> {
        Self::from_specs(builtin_specs().into_iter().chain(extra))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageSignature> {
        self.signatures.iter()
    }

    pub fn get(&self, id: &str) -> Option<&LanguageSignature> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Language ids in table order.
    pub fn ids(&self) -> Vec<&str> {
        self.signatures.iter().map(|s| s.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str) -> SignatureSpec {
        SignatureSpec {
            id: id.to_string(),
            keywords: vec!["foo".to_string()],
            extensions: vec![".FOO".to_string()],
            patterns: vec![r"foo\s*\(".to_string()],
            shebangs: vec![],
            rules: vec![SyntaxRule::any(&[";"], 3)],
        }
    }

    #[test]
    fn test_condition_all_and_any() {
        let all = Condition::All(vec!["{".to_string(), "}".to_string()]);
        assert!(all.holds("fn x() {}"));
        assert!(!all.holds("fn x() {"));

        let any = Condition::Any(vec!["    ".to_string(), "\t".to_string()]);
        assert!(any.holds("a:\n\tb"));
        assert!(!any.holds("a b"));
    }

    #[test]
    fn test_compile_normalizes_extensions() {
        let sig = LanguageSignature::compile(spec("foo")).unwrap();
        assert_eq!(sig.id(), "foo");
        assert_eq!(sig.extensions(), ["foo".to_string()]);
        assert_eq!(sig.keywords()[0].text(), "foo");
    }

    #[test]
    fn test_compile_rejects_bad_pattern() {
        let mut bad = spec("foo");
        bad.patterns = vec!["(unclosed".to_string()];
        let err = LanguageSignature::compile(bad).unwrap_err();
        assert!(matches!(err, SniffError::InvalidPattern { .. }));
    }

    #[test]
    fn test_compile_rejects_reserved_ids() {
        for id in ["", "  ", PLAIN_TEXT] {
            let err = LanguageSignature::compile(spec(id)).unwrap_err();
            assert!(matches!(err, SniffError::InvalidLanguageId { .. }));
        }
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let err = SignatureTable::from_specs(vec![spec("foo"), spec("bar"), spec("foo")])
            .unwrap_err();
        assert!(matches!(err, SniffError::DuplicateLanguage { language } if language == "foo"));
    }

    #[test]
    fn test_table_preserves_order() {
        let table = SignatureTable::from_specs(vec![spec("b"), spec("a"), spec("c")]).unwrap();
        assert_eq!(table.ids(), vec!["b", "a", "c"]);
        assert!(table.get("a").is_some());
        assert!(table.get("z").is_none());
    }

    #[test]
    fn test_builtin_table_order() {
        let table = SignatureTable::builtin();
        assert_eq!(
            table.ids(),
            vec![
                "javascript",
                "typescript",
                "python",
                "java",
                "cpp",
                "c",
                "csharp",
                "go",
                "rust",
                "php",
                "ruby",
                "swift",
                "kotlin",
                "sql",
                "bash",
                "html",
                "css",
            ]
        );
    }

    #[test]
    fn test_with_extra_appends_after_builtins() {
        let table = SignatureTable::with_extra(vec![spec("zig")]).unwrap();
        assert_eq!(table.ids().last(), Some(&"zig"));
        assert_eq!(table.len(), SignatureTable::builtin().len() + 1);

        let err = SignatureTable::with_extra(vec![spec("python")]).unwrap_err();
        assert!(matches!(err, SniffError::DuplicateLanguage { .. }));
    }

    #[test]
    fn test_spec_from_toml() {
        let spec: SignatureSpec = toml::from_str(
            r#"
            id = "zig"
            keywords = ["comptime"]
            rules = [{ when = { all = ["{", "}"] }, bonus = 5 }]
            "#,
        )
        .unwrap();
        assert_eq!(spec.id, "zig");
        assert!(spec.extensions.is_empty());
        assert_eq!(spec.rules, vec![SyntaxRule::all(&["{", "}"], 5)]);
    }
}
