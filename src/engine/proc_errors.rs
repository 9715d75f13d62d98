/// Mesh engine error type.
#[derive(Debug)]
pub enum EngineError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Geometric precondition violation.
    Geometry(String),
    /// Invalid chop specification.
    InvalidChop(String),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::IoError(error) => write!(f, "IO Error:\n{}", error),
            EngineError::Geometry(error) => write!(f, "Geometry precondition violated:\n- {}", error),
            EngineError::InvalidChop(error) => write!(f, "Invalid chop spec:\n- {}", error),
            EngineError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for EngineError {
    fn from(error: crate::io::IoError) -> Self {
        EngineError::IoError(error)
    }
}
impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::IoError(crate::io::IoError{file: None, cause: crate::io::IoErrorType::File(error)})
    }
}
impl From<String> for EngineError {
    fn from(error: String) -> Self {
        EngineError::StringOnly(error)
    }
}

/// Result type for the `engine` module.
pub type ProcResult<T> = std::result::Result<T, EngineError>;

/// Create an `EngineError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(EngineError::StringOnly(error_str.to_string()))
}
