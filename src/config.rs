//! Optional user settings from `<config_dir>/konark-quest/config.toml`

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::i18n::Language;

const DEFAULT_CELEBRATION_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language active when the app starts.
    pub language: Language,
    /// Delay before the completion gems start lighting up.
    pub celebration_delay_ms: u64,
    /// Alternate sample dataset; the built-in one is used when absent.
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::English,
            celebration_delay_ms: DEFAULT_CELEBRATION_DELAY_MS,
            data_file: None,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("konark-quest").join("config.toml"))
}

/// Load settings from the default location, falling back to defaults when
/// there is no config file.
pub fn load_settings() -> Result<Settings> {
    match config_path() {
        Some(path) if path.exists() => load_settings_from(&path),
        _ => Ok(Settings::default()),
    }
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    tracing::debug!(?settings, "loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.celebration_delay_ms, 500);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("language = \"odia\"\n");
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.language, Language::Odia);
        assert_eq!(settings.celebration_delay_ms, 500);
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            "language = \"english\"\ncelebration_delay_ms = 50\ndata_file = \"/tmp/class.toml\"\n",
        );
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.celebration_delay_ms, 50);
        assert_eq!(settings.data_file, Some(PathBuf::from("/tmp/class.toml")));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = write_config("language = \"klingon\"\n");
        let err = load_settings_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
