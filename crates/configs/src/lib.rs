use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "inventory.toml";
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InventoryConfig {
    #[serde(default = "default_file_path")]
    pub file_path: String,
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { file_path: default_file_path(), low_stock_threshold: default_threshold() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { format: default_log_format() } }
}

fn default_file_path() -> String { DEFAULT_INVENTORY_FILE.to_string() }
fn default_threshold() -> i64 { DEFAULT_LOW_STOCK_THRESHOLD }
fn default_log_format() -> String { "compact".to_string() }

/// Load from `CONFIG_PATH`, falling back to `inventory.toml`.
/// A missing file is not an error: defaults apply.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_or_default(&path)
}

/// Like `load_from_file`, but an absent file yields `AppConfig::default()`.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.inventory.normalize();
        self.logging.normalize_and_validate()?;
        Ok(())
    }
}

impl InventoryConfig {
    fn normalize(&mut self) {
        if self.file_path.trim().is_empty() {
            self.file_path = default_file_path();
        }
    }
}

impl LoggingConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        let lower = self.format.trim().to_ascii_lowercase();
        if lower != "compact" && lower != "json" {
            return Err(anyhow!("logging.format must be \"compact\" or \"json\", got {:?}", self.format));
        }
        self.format = lower;
        Ok(())
    }

    pub fn is_json(&self) -> bool { self.format == "json" }
}
