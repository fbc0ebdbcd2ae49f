use page_composer_engine::LayoutType;
use serde::{Deserialize, Serialize};
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

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding page JSON files
    pub pages_path: PathBuf,
    /// Where uploaded images are stored; defaults to `<pages_path>/assets`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_path: Option<PathBuf>,
    /// Template used when adding a section from the editor
    #[serde(default)]
    pub default_layout: LayoutType,
}

impl Config {
    pub fn new(pages_path: PathBuf) -> Self {
        Self {
            pages_path,
            assets_path: None,
            default_layout: LayoutType::default(),
        }
    }

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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.pages_path = Self::expand_path(&config.pages_path).unwrap_or(config.pages_path);
        config.assets_path = config
            .assets_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

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
        let config_dir = shellexpand::tilde("~/.config/page-composer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.assets_path
            .clone()
            .unwrap_or_else(|| self.pages_path.join("assets"))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/page-composer/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            pages_path: PathBuf::from("/tmp/pages"),
            assets_path: Some(PathBuf::from("/tmp/uploads")),
            default_layout: LayoutType::SidebarLeft,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.pages_path, deserialized.pages_path);
        assert_eq!(original.assets_path, deserialized.assets_path);
        assert_eq!(deserialized.default_layout, LayoutType::SidebarLeft);
        assert!(toml_str.contains("default_layout = \"sidebar-left\""));
    }

    #[test]
    fn test_optional_fields_default() {
        let config: Config = toml::from_str("pages_path = \"/srv/pages\"").unwrap();

        assert_eq!(config.assets_path, None);
        assert_eq!(config.default_layout, LayoutType::FullWidth);
        assert_eq!(config.assets_dir(), PathBuf::from("/srv/pages/assets"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(&PathBuf::from("~/test/path")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("PAGE_COMPOSER_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(&PathBuf::from("$PAGE_COMPOSER_TEST_VAR/subdir"));

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("PAGE_COMPOSER_TEST_VAR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "default_layout = \"7-equal\"").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config::new(PathBuf::from("/tmp/pages"));

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.pages_path, test_config.pages_path);
        assert_eq!(loaded_config.default_layout, LayoutType::FullWidth);
    }
}
