//! Compiler configuration.

use serde::{Deserialize, Serialize};

use crate::collections::Collection;
use crate::error::{CompileError, CompileResult};

/// Configuration for the search compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Index name prefix (default: `"commerce"`).
    /// Indices are named: `{prefix}_{collection}`
    #[serde(default = "default_index_prefix")]
    pub index_prefix: String,

    /// Fuzziness of fuzzy multi-field matches (default: `"AUTO"`).
    #[serde(default = "default_fuzziness")]
    pub fuzziness: String,
}

fn default_index_prefix() -> String {
    "commerce".to_string()
}

fn default_fuzziness() -> String {
    "AUTO".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            index_prefix: default_index_prefix(),
            fuzziness: default_fuzziness(),
        }
    }
}

impl CompilerConfig {
    /// Parses and validates a configuration from JSON. Missing keys take
    /// their defaults.
    pub fn from_json_str(json: &str) -> CompileResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| CompileError::Config {
            message: format!("Failed to parse compiler config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the prefix and fuzziness values.
    pub fn validate(&self) -> CompileResult<()> {
        if self.index_prefix.is_empty() {
            return Err(CompileError::Config {
                message: "index_prefix must not be empty".to_string(),
            });
        }
        if let Some(bad) = self
            .index_prefix
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'))
        {
            return Err(CompileError::Config {
                message: format!(
                    "index_prefix '{}' contains invalid character '{}'",
                    self.index_prefix, bad
                ),
            });
        }
        if self.fuzziness.trim().is_empty() {
            return Err(CompileError::Config {
                message: "fuzziness must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the index name for a collection.
    pub fn index_name(&self, collection: Collection) -> String {
        format!("{}_{}", self.index_prefix, collection)
    }
}
