use crate::errors::ConfigError;
use scribe_export::DEFAULT_BASE_NAME;
use scribe_generation::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "scribe.config.json";

/// Environment variable a host may use to supply the generation credential
pub const API_KEY_ENV: &str = "SCRIBE_API_KEY";

/// What happens to published statistics when the document becomes empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyContentPolicy {
    /// Publish zero counts
    #[default]
    Reset,

    /// Keep showing the last counts
    Retain,
}

/// Scribe configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Remote generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// File name stem for exports
    #[serde(default = "default_export_base_name")]
    pub export_base_name: String,

    #[serde(default)]
    pub empty_content_policy: EmptyContentPolicy,
}

fn default_export_base_name() -> String {
    DEFAULT_BASE_NAME.to_string()
}

impl EditorConfig {
    /// Load config from a directory
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            // Return default config if none exists
            Ok(Self::default())
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Take the API key from `SCRIBE_API_KEY` when it is set
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.generation.api_key = Some(key);
        }
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            export_base_name: default_export_base_name(),
            empty_content_policy: EmptyContentPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "generation": { "model": "local", "apiKey": "sk-file" },
            "exportBaseName": "notes",
            "emptyContentPolicy": "retain"
        }"#;

        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.generation.model, "local");
        assert_eq!(config.generation.api_key.as_deref(), Some("sk-file"));
        assert_eq!(config.export_base_name, "notes");
        assert_eq!(config.empty_content_policy, EmptyContentPolicy::Retain);
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.export_base_name, "document");
        assert_eq!(config.empty_content_policy, EmptyContentPolicy::Reset);
        assert!(config.generation.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load(dir.path()).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "exportBaseName": "draft" }"#,
        )
        .unwrap();

        let config = EditorConfig::load(dir.path()).unwrap();
        assert_eq!(config.export_base_name, "draft");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();

        let result = EditorConfig::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_api_key_override() {
        let config = EditorConfig::default().with_api_key_override(Some("sk-env".to_string()));
        assert_eq!(config.generation.api_key.as_deref(), Some("sk-env"));

        let untouched = config.clone().with_api_key_override(Some("  ".to_string()));
        assert_eq!(untouched.generation.api_key.as_deref(), Some("sk-env"));

        let untouched = untouched.with_api_key_override(None);
        assert_eq!(untouched.generation.api_key.as_deref(), Some("sk-env"));
    }
}
