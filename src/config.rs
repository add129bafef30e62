use crate::error::{Result, TrackerError};
use jd_tracker_common::{ResultsVariant, DEFAULT_ENDPOINT, DEFAULT_MAIL_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub mail_endpoint: String,
    pub default_view: ResultsVariant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            mail_endpoint: DEFAULT_MAIL_ENDPOINT.into(),
            default_view: ResultsVariant::Main,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("config loaded from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルは警告して既定値で代替
    ///
    /// 壊れたファイルを`config --set-*`で上書きして修復できるようにする。
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                log::warn!("{}; using default config", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TrackerError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("jd-tracker").join("config.json"))
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_mail_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.mail_endpoint = endpoint;
        self.save()
    }

    pub fn set_default_view(&mut self, view: ResultsVariant) -> Result<()> {
        self.default_view = view;
        self.save()
    }
}
