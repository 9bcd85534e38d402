use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid surface {width}x{height}: dimensions must be finite and non-zero")]
    InvalidSurface { width: f64, height: f64 },

    #[error("Session step {index} ({action}) failed: {message}")]
    SessionError {
        index: usize,
        action: String,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Configuration,
    Surface,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TagError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TagError::IoError(_) => ErrorCategory::Io,
            TagError::SerializationError(_) | TagError::TomlError(_) => ErrorCategory::Parse,
            TagError::ConfigError { .. }
            | TagError::InvalidConfigValueError { .. }
            | TagError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TagError::InvalidSurface { .. } => ErrorCategory::Surface,
            TagError::SessionError { .. } => ErrorCategory::Session,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Session => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Parse | ErrorCategory::Surface => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TagError::IoError(e) => format!("Could not read or write a file: {}", e),
            TagError::TomlError(_) | TagError::SerializationError(_) => {
                format!("The input file is malformed: {}", self)
            }
            TagError::InvalidSurface { width, height } => {
                format!("The image surface {}x{} has no usable size", width, height)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Parse => "Check the file against the documented TOML layout",
            ErrorCategory::Configuration => "Fix the reported configuration field and retry",
            ErrorCategory::Surface => "Only convert coordinates once the image has been laid out",
            ErrorCategory::Session => "Check the failing session step",
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
