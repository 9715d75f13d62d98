/// Build process error type.
#[derive(Debug)]
pub enum BuildError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Mesh engine error.
    EngineError(crate::engine::EngineError),
    /// Patch correction error.
    CorrectorError(crate::corrector::CorrectorError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::IoError(error) => write!(f, "IO Error:\n{}", error),
            BuildError::EngineError(error) => write!(f, "Engine Error:\n{}", error),
            BuildError::CorrectorError(error) => write!(f, "Patch Correction Error:\n{}", error),
            BuildError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for BuildError {
    fn from(error: crate::io::IoError) -> Self {
        BuildError::IoError(error)
    }
}
impl From<crate::engine::EngineError> for BuildError {
    fn from(error: crate::engine::EngineError) -> Self {
        BuildError::EngineError(error)
    }
}
impl From<crate::corrector::CorrectorError> for BuildError {
    fn from(error: crate::corrector::CorrectorError) -> Self {
        BuildError::CorrectorError(error)
    }
}
impl From<String> for BuildError {
    fn from(error: String) -> Self {
        BuildError::StringOnly(error)
    }
}

/// Result type for the `builder` module.
pub type ProcResult<T> = std::result::Result<T, BuildError>;

/// Create a `BuildError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(BuildError::StringOnly(error_str.to_string()))
}
