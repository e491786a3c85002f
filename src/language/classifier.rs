//! Weighted heuristic language classifier.
//!
//! Every signature in the table is scored against the input by summing
//! independent signals (extension hint, shebang, keywords, structural
//! patterns, syntax rules). The highest score wins; ties go to the earlier
//! table entry. Confidence is the score per line, scaled and clamped to 0..=100.

use std::sync::{Arc, LazyLock};

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::extension::trailing_extension;
use super::shebang::{interpreter_matches, shebang_interpreter};
use super::signature::{LanguageSignature, PLAIN_TEXT, SignatureTable};
use crate::config::ClassifierSettings;
use crate::error::SniffResult;

const LOG_TARGET: &str = "codesniff::classifier";

static DEFAULT_CLASSIFIER: LazyLock<LanguageClassifier> = LazyLock::new(LanguageClassifier::new);

/// Classify `text` with the built-in table and default weights.
pub fn classify(text: &str) -> ClassificationResult {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Language id of `text` with the built-in table and default weights.
pub fn detect_language(text: &str) -> String {
    DEFAULT_CLASSIFIER.detect_language(text)
}

/// Weights for the table-wide signals.
///
/// Syntax-rule bonuses are carried by each rule instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Trailing `name.ext` hint on the last line
    pub extension: u32,
    /// Interpreter named on a leading `#!` line
    pub shebang: u32,
    /// Per keyword occurrence
    pub keyword: u32,
    /// Per matching structural pattern
    pub pattern: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            extension: 50,
            shebang: 40,
            keyword: 2,
            pattern: 10,
        }
    }
}

/// Outcome of classifying one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub language: String,
    pub confidence: u8,
    pub matched_keywords: Vec<String>,
    pub matched_extensions: Vec<String>,
}

impl ClassificationResult {
    /// The sentinel result for text no signature recognizes.
    pub fn plain_text() -> Self {
        Self {
            language: PLAIN_TEXT.to_string(),
            confidence: 0,
            matched_keywords: Vec::new(),
            matched_extensions: Vec::new(),
        }
    }

    pub fn is_plain_text(&self) -> bool {
        self.language == PLAIN_TEXT
    }
}

/// Per-signal contributions to one signature's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub extension: u32,
    pub shebang: u32,
    pub keywords: u32,
    pub patterns: u32,
    pub syntax: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.extension
            .saturating_add(self.shebang)
            .saturating_add(self.keywords)
            .saturating_add(self.patterns)
            .saturating_add(self.syntax)
    }
}

/// Score of one signature against one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageScore {
    pub language: String,
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Facts about the input computed once and shared by every signature.
struct ScoringInput<'a> {
    raw: &'a str,
    trimmed: &'a str,
    line_count: usize,
    extension: Option<String>,
    interpreter: Option<&'a str>,
}

impl<'a> ScoringInput<'a> {
    /// Returns None for empty or whitespace-only text.
    fn new(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            trimmed,
            line_count: trimmed.lines().count().max(1),
            extension: trailing_extension(trimmed),
            interpreter: shebang_interpreter(trimmed),
        })
    }
}

/// Heuristic classifier over an immutable signature table.
///
/// Cheap to clone and safe to share across threads; the table sits behind
/// an `Arc` and no state changes after construction.
#[derive(Debug, Clone)]
pub struct LanguageClassifier {
    table: Arc<SignatureTable>,
    weights: ScoreWeights,
}

impl Default for LanguageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageClassifier {
    /// Classifier over the built-in table with default weights.
    pub fn new() -> Self {
        Self::with_table(SignatureTable::builtin(), ScoreWeights::default())
    }

    pub fn with_table(table: Arc<SignatureTable>, weights: ScoreWeights) -> Self {
        Self { table, weights }
    }

    /// Build from settings: built-ins plus any configured extra languages.
    pub fn from_settings(settings: &ClassifierSettings) -> SniffResult<Self> {
        let table = if settings.languages.is_empty() {
            SignatureTable::builtin()
        } else {
            Arc::new(SignatureTable::with_extra(settings.languages.clone())?)
        };
        Ok(Self::with_table(table, settings.weights))
    }

    pub fn table(&self) -> &SignatureTable {
        &self.table
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Best-guess language for `text` with a 0..=100 confidence.
    ///
    /// Total over all inputs. Empty text and text no signature scores
    /// above zero both yield the `"text"` sentinel with confidence 0.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let Some(input) = ScoringInput::new(text) else {
            return ClassificationResult::plain_text();
        };

        let mut best: Option<(&LanguageSignature, LanguageScore)> = None;
        for signature in self.table.iter() {
            let score = self.score_signature(signature, &input);
            trace!(
                target: LOG_TARGET,
                "{} scored {} ({:?})",
                signature.id(),
                score.score,
                score.breakdown
            );
            // Strictly greater: on a tie the earlier table entry stays
            let best_score = best.as_ref().map_or(0, |(_, b)| b.score);
            if score.score > best_score {
                best = Some((signature, score));
            }
        }

        let Some((signature, score)) = best else {
            debug!(target: LOG_TARGET, "no signature matched {} line(s)", input.line_count);
            return ClassificationResult::plain_text();
        };

        let confidence = confidence(score.score, input.line_count);
        debug!(
            target: LOG_TARGET,
            "classified as {} (score {}, {} line(s), confidence {})",
            signature.id(),
            score.score,
            input.line_count,
            confidence
        );

        ClassificationResult {
            language: score.language,
            confidence,
            matched_keywords: score.matched_keywords,
            matched_extensions: signature.extensions().to_vec(),
        }
    }

    /// Only the language id of [`classify`](Self::classify).
    pub fn detect_language(&self, text: &str) -> String {
        self.classify(text).language
    }

    /// Scores for every signature in table order.
    ///
    /// Empty or whitespace-only text yields an empty list.
    pub fn scores(&self, text: &str) -> Vec<LanguageScore> {
        let Some(input) = ScoringInput::new(text) else {
            return Vec::new();
        };
        self.table
            .iter()
            .map(|signature| self.score_signature(signature, &input))
            .collect()
    }

    /// Classify many texts in parallel, preserving input order.
    pub fn classify_batch<S>(&self, texts: &[S]) -> Vec<ClassificationResult>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    fn score_signature(&self, signature: &LanguageSignature, input: &ScoringInput) -> LanguageScore {
        let weights = self.weights;
        let mut breakdown = ScoreBreakdown::default();

        if let Some(ext) = &input.extension
            && signature.extensions().iter().any(|e| e == ext)
        {
            breakdown.extension = weights.extension;
        }

        if let Some(interpreter) = input.interpreter
            && signature
                .shebangs()
                .iter()
                .any(|m| interpreter_matches(interpreter, m))
        {
            breakdown.shebang = weights.shebang;
        }

        let mut matched_keywords = Vec::new();
        for keyword in signature.keywords() {
            let count = keyword.count_in(input.trimmed);
            if count > 0 {
                let count = u32::try_from(count).unwrap_or(u32::MAX);
                breakdown.keywords = breakdown
                    .keywords
                    .saturating_add(weights.keyword.saturating_mul(count));
                matched_keywords.push(keyword.text().to_string());
            }
        }

        for pattern in signature.patterns() {
            if pattern.is_match(input.trimmed) {
                breakdown.patterns = breakdown.patterns.saturating_add(weights.pattern);
            }
        }

        for rule in signature.rules() {
            if rule.when.holds(input.raw) {
                breakdown.syntax = breakdown.syntax.saturating_add(rule.bonus);
            }
        }

        LanguageScore {
            language: signature.id().to_string(),
            score: breakdown.total(),
            matched_keywords,
            breakdown,
        }
    }
}

/// `round(clamp(score / lines * 10, 0, 100))`
fn confidence(score: u32, line_count: usize) -> u8 {
    let per_line = f64::from(score) / line_count.max(1) as f64 * 10.0;
    per_line.clamp(0.0, 100.0).round() as u8
}
