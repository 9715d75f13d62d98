mod proc_errors;

use clap::Parser;

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Quarter-cylinder blockMeshDict generator.
#[derive(Debug, Parser)]
pub struct QcmeshCli {
    #[arg(short, long = "config", default_value = "config.yaml")]
    /// Path to the mesh config file (.yaml/.yml/.json/.toml).
    pub config_path: String,
}

/// Parse the command line arguments for the qcmesh binary.
/// Uses the `clap` crate.
pub fn parse_cli_args() -> QcmeshCli {
    QcmeshCli::parse()
}
