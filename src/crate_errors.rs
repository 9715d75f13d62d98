use crate::{
    args,
    builder,
    corrector,
    engine,
};

/// Error-type enum for the `qcmesh` crate.
/// Wraps the per-module error types for the binary to report.
#[derive(Debug)]
pub enum QcmeshError {
    ArgError(args::ArgError),
    BuildError(builder::BuildError),
    EngineError(engine::EngineError),
    CorrectorError(corrector::CorrectorError),
    StringOnly(String),
}
impl std::fmt::Display for QcmeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QcmeshError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            QcmeshError::BuildError(error) => write!(f, "! BUILD ERROR:\n{}", error),
            QcmeshError::EngineError(error) => write!(f, "! ENGINE ERROR:\n{}", error),
            QcmeshError::CorrectorError(error) => write!(f, "! PATCH CORRECTION ERROR:\n{}", error),
            QcmeshError::StringOnly(error) => write!(f, "! QCMESH ERROR:\n- {}", error),
        }
    }
}
impl From<String> for QcmeshError {
    fn from(error: String) -> Self {
        QcmeshError::StringOnly(error)
    }
}
impl From<args::ArgError> for QcmeshError {
    fn from(error: args::ArgError) -> Self {
        QcmeshError::ArgError(error)
    }
}
impl From<builder::BuildError> for QcmeshError {
    fn from(error: builder::BuildError) -> Self {
        QcmeshError::BuildError(error)
    }
}
impl From<engine::EngineError> for QcmeshError {
    fn from(error: engine::EngineError) -> Self {
        QcmeshError::EngineError(error)
    }
}
impl From<corrector::CorrectorError> for QcmeshError {
    fn from(error: corrector::CorrectorError) -> Self {
        QcmeshError::CorrectorError(error)
    }
}

/// Result type for the `qcmesh` crate.
pub type QcmeshResult<T> = std::result::Result<T, QcmeshError>;

/// Create a `QcmeshResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::QcmeshError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> QcmeshResult<T> {
    Err(QcmeshError::StringOnly(error_str.to_string()))
}
