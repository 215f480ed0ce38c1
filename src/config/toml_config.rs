use crate::app::render::DisplayFormat;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Insert the fixed example set before the menu starts.
    pub seed_example: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn seed_example(&self) -> bool {
        self.session.seed_example.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }

    pub fn display_format(&self) -> Result<DisplayFormat> {
        match self.display.format.as_deref() {
            Some(format) => format.parse(),
            None => Ok(DisplayFormat::default()),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.display.format {
            validate_one_of("display.format", format, &DisplayFormat::NAMES)?;
        }
        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }
        Ok(())
    }
}
