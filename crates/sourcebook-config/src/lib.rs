use serde::{Deserialize, Serialize};
use sourcebook_engine::book::{BookOptions, DEFAULT_LEAD_FILE, DEFAULT_MAX_DEPTH};
use sourcebook_engine::models::FileClassifier;
use sourcebook_engine::rendering::{DEFAULT_LANGUAGE, RenderOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Book-assembly settings. Every field has a default, so a config file only
/// names what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fence_language: String,
    pub text_extensions: Vec<String>,
    pub code_extensions: Vec<String>,
    pub max_depth: usize,
    pub lead_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fence_language: DEFAULT_LANGUAGE.to_string(),
            text_extensions: FileClassifier::TEXT_EXTENSIONS.map(String::from).to_vec(),
            code_extensions: FileClassifier::CODE_EXTENSIONS.map(String::from).to_vec(),
            max_depth: DEFAULT_MAX_DEPTH,
            lead_file: DEFAULT_LEAD_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sourcebook");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Maps the loaded settings onto engine options.
    pub fn book_options(&self) -> BookOptions {
        BookOptions {
            classifier: FileClassifier::new(
                self.text_extensions.iter().cloned(),
                self.code_extensions.iter().cloned(),
            ),
            render: RenderOptions {
                language: self.fence_language.clone(),
            },
            max_depth: self.max_depth,
            lead_file: self.lead_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/sourcebook/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fence_language, "cpp");
        assert_eq!(config.text_extensions, vec!["md", "txt", "mkd"]);
        assert_eq!(config.code_extensions, vec!["cpp", "cc", "h", "hpp"]);
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.lead_file, "README.md");
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let config: Config = toml::from_str(r#"fence_language = "rust""#).unwrap();
        assert_eq!(config.fence_language, "rust");
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.lead_file, "README.md");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            fence_language: "c".to_string(),
            max_depth: 3,
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(deserialized.fence_language, "c");
        assert_eq!(deserialized.max_depth, 3);
        assert_eq!(deserialized.text_extensions, original.text_extensions);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "max_depth = \"not a number\"").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            fence_language: "cc".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.fence_language, "cc");
    }

    #[test]
    fn test_book_options_mapping() {
        let config = Config {
            fence_language: "rust".to_string(),
            text_extensions: vec!["rst".to_string()],
            code_extensions: vec!["rs".to_string()],
            max_depth: 4,
            lead_file: "INDEX.md".to_string(),
        };

        let options = config.book_options();
        assert_eq!(options.render.language, "rust");
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.lead_file, "INDEX.md");
        assert_eq!(
            options.classifier,
            FileClassifier::new(["rst".to_string()], ["rs".to_string()])
        );
    }
}
