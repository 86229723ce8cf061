use thiserror::Error;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Membership plan not available.")]
    InvalidSelection { choice: String },

    #[error("Invalid input for {field}.")]
    InvalidInput { field: String, value: String },

    #[error("Program terminated by user.")]
    UserAborted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GymError {
    /// Errors the sign-up loop reports and then starts over from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GymError::InvalidSelection { .. } | GymError::InvalidInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GymError>;
