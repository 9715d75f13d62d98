pub mod methods;
mod primitive;
mod proc_errors;

// Re-export errors
pub use proc_errors::{
    EngineError,
    ProcResult,
    err_str,
};
// Re-export the primitive
pub use primitive::{
    QuarterCylinder,
    Chops,
};
// Re-export the engine registry
pub use methods::{
    EngineChoice,
    MeshEngine,
};
