//! Configuration management for the Neon agent demo.
//!
//! Configuration can be set via environment variables (a `.env` file in the
//! working directory is loaded at startup):
//! - `NEON_API_KEY` - Required. API key for the Neon console API.
//! - `OPENROUTER_API_KEY` - Required. Your OpenRouter API key.
//! - `DEFAULT_MODEL` - Optional. The LLM model to use. Defaults to `google/gemini-2.0-flash-001`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `25`.
//! - `GRAPH_OUTPUT_PATH` - Optional. Where to write the agent graph diagram. Defaults to `graph.mmd`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Neon console API key
    pub neon_api_key: String,

    /// OpenRouter API key
    pub llm_api_key: String,

    /// LLM model identifier (OpenRouter format)
    pub model: String,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,

    /// Output path for the agent graph diagram
    pub graph_output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `NEON_API_KEY` or
    /// `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let neon_api_key = std::env::var("NEON_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("NEON_API_KEY".to_string()))?;

        let llm_api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let model = std::env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| "google/gemini-2.0-flash-001".to_string());

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "25".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        let graph_output_path = std::env::var("GRAPH_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("graph.mmd"));

        Ok(Self {
            neon_api_key,
            llm_api_key,
            model,
            max_iterations,
            graph_output_path,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(neon_api_key: String, llm_api_key: String, model: String) -> Self {
        Self {
            neon_api_key,
            llm_api_key,
            model,
            max_iterations: 25,
            graph_output_path: PathBuf::from("graph.mmd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults_for_unset_fields() {
        let config = Config::new(
            "neon-key".to_string(),
            "llm-key".to_string(),
            "google/gemini-2.0-flash-001".to_string(),
        );
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.graph_output_path, PathBuf::from("graph.mmd"));
    }
}
