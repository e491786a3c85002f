use std::io::Read;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{SniffError, SniffResult};
use crate::language::{ScoreWeights, SignatureSpec};

/// Classifier configuration as read from `codesniff.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierSettings {
    /// Signal weights shared by every signature
    pub weights: ScoreWeights,
    /// Reject inputs larger than this many bytes before classifying
    pub max_input_bytes: Option<usize>,
    /// Extra languages appended after the built-in table
    pub languages: Vec<SignatureSpec>,
}

impl ClassifierSettings {
    pub fn from_toml_str(content: &str) -> SniffResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> SniffResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SniffError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        info!(
            target: "codesniff::config",
            "Loaded config from {} ({} extra language(s))",
            path.display(),
            settings.languages.len()
        );
        Ok(settings)
    }

    /// Read a whole input, stopping one byte past the ceiling.
    ///
    /// The ceiling applies to raw bytes, before invalid UTF-8 is replaced
    /// with U+FFFD. An oversized input reports `limit + 1` as its size.
    pub fn read_input<R: Read>(&self, mut reader: R) -> SniffResult<String> {
        let mut bytes = Vec::new();
        match self.max_input_bytes {
            Some(limit) => {
                let bound = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                reader.take(bound).read_to_end(&mut bytes)?;
                if bytes.len() > limit {
                    return Err(SniffError::input_too_large(limit, bytes.len()));
                }
            }
            None => {
                reader.read_to_end(&mut bytes)?;
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Enforce the input ceiling, if one is configured.
    pub fn check_input(&self, text: &str) -> SniffResult<()> {
        match self.max_input_bytes {
            Some(limit) if text.len() > limit => Err(SniffError::input_too_large(limit, text.len())),
            _ => Ok(()),
        }
    }
}
