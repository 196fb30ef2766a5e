use crate::utils::error::{Result, WardrobeError};
use crate::utils::validation::{
    self, Validate, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_UPLOAD_EXTENSIONS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://restapi.amap.com/v3/weather/weatherInfo";
pub const DEFAULT_TEMPERATURE: f64 = 25.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreSection,
    pub weather: WeatherSection,
    pub recommend: RecommendSection,
    pub upload: UploadSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub path: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: "wardrobe.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSection {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// City name -> AMap adcode.
    pub cities: HashMap<String, String>,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            api_key: None,
            cities: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendSection {
    pub default_count: usize,
    pub default_style: Option<String>,
    /// Used when no temperature is given and no live reading is available.
    pub default_temperature: f64,
}

impl Default for RecommendSection {
    fn default() -> Self {
        Self {
            default_count: 3,
            default_style: None,
            default_temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSection {
    /// Analyzed photos are copied under `<dir>/<category>/`.
    pub dir: String,
    pub max_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadSection {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_UPLOAD_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: LogFormat,
}

impl AppConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WardrobeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Falls back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("no config at {:?}, using defaults", path.as_ref());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WardrobeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WardrobeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_url("weather.endpoint", &self.weather.endpoint)?;
        validation::validate_positive_number("recommend.default_count", self.recommend.default_count, 1)?;
        validation::validate_path("upload.dir", &self.upload.dir)?;

        if !self.recommend.default_temperature.is_finite() {
            return Err(WardrobeError::InvalidConfigValueError {
                field: "recommend.default_temperature".to_string(),
                value: self.recommend.default_temperature.to_string(),
                reason: "Temperature must be a finite number".to_string(),
            });
        }

        if self.upload.allowed_extensions.is_empty() {
            return Err(WardrobeError::InvalidConfigValueError {
                field: "upload.allowed_extensions".to_string(),
                value: "[]".to_string(),
                reason: "At least one image extension must be allowed".to_string(),
            });
        }
        if self.upload.max_bytes == 0 {
            return Err(WardrobeError::InvalidConfigValueError {
                field: "upload.max_bytes".to_string(),
                value: "0".to_string(),
                reason: "Upload limit must be positive".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
