use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::currency::{CurrencyConfig, MAX_FRACTION_DIGITS};
use crate::error::{AppError, Result};

/// 可绑定到功能键的预设数量上限 (F6..F12)
pub const MAX_PRESETS: usize = 7;

/// 一组示例输入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
}

impl Preset {
    pub const fn new(principal: f64, rate: f64, time: f64) -> Self {
        Self {
            principal,
            rate,
            time,
        }
    }
}

/// config.toml 文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency: CurrencyConfig,
    /// "Reset to Example" 使用的输入
    pub example: Preset,
    pub presets: Vec<Preset>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyConfig::default(),
            example: Preset::new(100000.0, 10.0, 1.0),
            presets: vec![
                Preset::new(50000.0, 7.5, 3.0),
                Preset::new(250000.0, 12.0, 2.0),
            ],
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str, origin: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content).map_err(|e| AppError::ConfigParse {
            path: origin.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        if self.currency.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(AppError::InvalidConfig {
                message: format!(
                    "currency.fraction_digits must be at most {}, got {}",
                    MAX_FRACTION_DIGITS, self.currency.fraction_digits
                ),
            });
        }

        if self.presets.len() > MAX_PRESETS {
            warn!(
                count = self.presets.len(),
                "only the first {} presets can be bound to keys", MAX_PRESETS
            );
            self.presets.truncate(MAX_PRESETS);
        }
        Ok(())
    }
}

/// 从 TOML 文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config = AppConfig::from_toml(&content, &path.display().to_string())?;
    info!(
        path = %path.display(),
        presets = config.presets.len(),
        "config loaded"
    );
    Ok(config)
}
