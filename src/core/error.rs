//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A value's text conversion failed during rendering
    #[error("text conversion failed for {type_name}: {message}")]
    ConversionFailed { type_name: String, message: String },

    /// A logging backend could not be constructed or used
    #[error("logging backend '{backend}' unavailable: {message}")]
    BackendUnavailable { backend: String, message: String },

    /// Invalid log level string
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LogError {
    /// Create a conversion failure error with the offending type's name
    pub fn conversion(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::ConversionFailed {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable(backend: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::BackendUnavailable {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LogError::Other(msg.into())
    }
}
