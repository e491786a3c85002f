//! Heuristic programming-language detection for code snippets.
//!
//! ```
//! let result = codesniff::classify("SELECT * FROM users WHERE id = 1;");
//! assert_eq!(result.language, "sql");
//! assert_eq!(codesniff::detect_language("just some words"), "text");
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod language;

pub use config::ClassifierSettings;
pub use error::{SniffError, SniffResult};
pub use language::{
    ClassificationResult, LanguageClassifier, LanguageScore, PLAIN_TEXT, ScoreWeights,
    SignatureSpec, SignatureTable, classify, detect_language,
};
