pub mod builder;
pub mod corrector;
pub mod engine;
pub mod grading;
pub mod patches;
pub mod args;
pub mod io;
pub mod geo_3d;
mod crate_errors;

pub use crate_errors::{
    QcmeshError,
    QcmeshResult,
    err_str,
};

/// [Stage 1.]
/// Load the config file named on the command line and resolve it into a
/// build target: validated options, a constructed engine, the normalized
/// symmetry type, and the resolved output path.
/// Returns a `QcmeshResult` with the `BuildTarget` or an `Err`.
pub fn build_target(cli_args: args::QcmeshCli) -> QcmeshResult<builder::BuildTarget> {
    println!("Loading mesh config file: {}...", cli_args.config_path);
    let target = builder::BuildTarget::from_cfg_file(&cli_args.config_path)?;
    Ok(target)
}

/// [Stage 2.]
/// Run the build process on the target and report the written paths.
/// Returns a `QcmeshResult` with `()` or an `Err`.
pub fn run_process(target: builder::BuildTarget) -> QcmeshResult<()> {
    println!();
    println!("################");
    println!("Running build...");
    println!("################");
    println!();
    let output_path = builder::do_build(&target)?;

    println!();
    println!("blockMeshDict written to: {}", output_path);
    if let Some(debug_vtk) = target.cfg.debug_vtk.as_ref() {
        println!("Debug VTK written to: {}", debug_vtk);
    }

    Ok(())
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_is_an_argument_error() {
        let cli_args = args::QcmeshCli{config_path: "definitely/not/a/config.yaml".to_string()};
        match build_target(cli_args) {
            Err(QcmeshError::ArgError(_)) => (),
            other => panic!("Expected an argument error, got: {:?}", other.map(|_| ())),
        }
    }
}
