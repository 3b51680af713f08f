use crate::{Error, Result};
use itemreg_report::ReportBranding;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api-sistema-de-controle-de-itens.onrender.com/itens";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const PATH_ENV: &str = "ITEMREG_PATH";
pub const API_URL_ENV: &str = "ITEMREG_API_URL";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ITEMREG_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.itemreg
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("itemreg"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".itemreg"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Pick the collection URL: `--api-url`, then ITEMREG_API_URL, then the config file
pub fn resolve_api_url(explicit: Option<&str>, config: &Config) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => config.api.base_url.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where PDFs are written; the current directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub branding: ReportBranding,
}

impl ReportConfig {
    pub fn output_dir_or_cwd(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&Self::path_in(data_dir))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        self.save_to(&Self::path_in(data_dir))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn set_api_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        self.api.base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }
}
