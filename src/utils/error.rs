use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardrobeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Image decoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Garment {id} not found")]
    NotFound { id: u64 },

    #[error("Item store error: {message}")]
    StoreError { message: String },

    #[error("Weather lookup failed: {message}")]
    WeatherError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Storage,
    Network,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WardrobeError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::InvalidInput { .. } | Self::NotFound { .. } => ErrorCategory::Input,
            Self::IoError(_)
            | Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::StoreError { .. } => ErrorCategory::Storage,
            Self::ApiError(_) | Self::WeatherError { .. } => ErrorCategory::Network,
            Self::ImageError(_) => ErrorCategory::Image,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Image => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { id } => format!("No garment with id {} in the wardrobe", id),
            Self::InvalidInput { message } => format!("Invalid input: {}", message),
            Self::WeatherError { .. } | Self::ApiError(_) => {
                "Could not fetch the current temperature".to_string()
            }
            Self::ImageError(_) => "The image could not be read".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file and environment variables",
            ErrorCategory::Input => "Check the command arguments and try again",
            ErrorCategory::Storage => "Make sure the wardrobe file exists and is writable",
            ErrorCategory::Network => "Pass --temperature directly or check the weather API key",
            ErrorCategory::Image => "Use a png, jpg, gif or webp photo",
        }
    }
}

pub type Result<T> = std::result::Result<T, WardrobeError>;
