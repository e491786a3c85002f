//! Heuristic source-code language detection.
//!
//! The classifier scores an ordered [`SignatureTable`] against a text and
//! returns the best-scoring language with a 0..=100 confidence.

mod builtin;
pub mod classifier;
pub mod extension;
pub mod keyword;
pub mod shebang;
pub mod signature;

pub use classifier::{
    ClassificationResult, LanguageClassifier, LanguageScore, ScoreBreakdown, ScoreWeights,
    classify, detect_language,
};
pub use extension::trailing_extension;
pub use keyword::{Keyword, keyword_pattern};
pub use shebang::{interpreter_matches, shebang_interpreter};
pub use signature::{
    Condition, LanguageSignature, PLAIN_TEXT, SignatureSpec, SignatureTable, SyntaxRule,
};
