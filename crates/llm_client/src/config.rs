use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum LlmConfigError {
    #[error("failed to read llm config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse llm config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Completion-endpoint settings, loaded once at startup from
/// `llm/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
}

impl LlmConfig {
    /// Load from a YAML file. `OPENAI_API_KEY` in the environment overrides
    /// the file value; an unexpanded `${...}` placeholder counts as unset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LlmConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LlmConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: LlmConfig =
            serde_yaml::from_str(&content).map_err(|source| LlmConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if config
            .api_key
            .as_deref()
            .is_some_and(|key| key.starts_with("${"))
        {
            config.api_key = None;
        }
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            if !api_key.trim().is_empty() {
                config.api_key = Some(api_key);
            }
        }
        Ok(config)
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }
}
