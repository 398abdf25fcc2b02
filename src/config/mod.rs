use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{auth::CredentialStore, errors::ConfigError, utils};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User-adjustable presentation settings and the login table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub brand: String,
    pub currency_symbol: String,
    pub splash_duration_ms: u64,
    pub ui_color_enabled: bool,
    pub credentials: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut credentials = BTreeMap::new();
        credentials.insert("1".to_string(), "1".to_string());
        credentials.insert("user".to_string(), "1".to_string());
        Self {
            title: "account book".into(),
            brand: "webabiq".into(),
            currency_symbol: "$".into(),
            splash_duration_ms: 3000,
            ui_color_enabled: true,
            credentials,
        }
    }
}

impl Config {
    pub fn credential_store(&self) -> CredentialStore {
        CredentialStore::new(self.credentials.clone())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at `$ACCOUNT_BOOK_HOME`, falling back to `~/.account_book`.
    pub fn new() -> Self {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Loads the config file, or the defaults when none has been written yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.credentials.get("user").map(String::as_str), Some("1"));
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        fs::write(manager.path(), r#"{ "currency_symbol": "€" }"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.splash_duration_ms, 3000);
        assert_eq!(config.credentials.len(), 2);
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/a/config.json")),
            PathBuf::from("/a/config.json.tmp")
        );
    }
}
