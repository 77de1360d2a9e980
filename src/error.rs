use thiserror::Error;

/// Main error type for the case engine
#[derive(Error, Debug)]
pub enum CaseEngineError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Case store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Topic is empty or blank
    #[error("Invalid topic: {0:?}")]
    InvalidTopic(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for CaseEngineError {
    fn from(s: String) -> Self {
        CaseEngineError::Other(s)
    }
}

impl From<&str> for CaseEngineError {
    fn from(s: &str) -> Self {
        CaseEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CaseEngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CaseEngineError::InvalidTopic("  ".to_string());
        assert_eq!(err.to_string(), "Invalid topic: \"  \"");

        let err: CaseEngineError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: CaseEngineError = parse.unwrap_err().into();
        assert!(matches!(err, CaseEngineError::Json(_)));
    }
}
