mod proc_errors;
mod cfg;

use crate::corrector;
use crate::engine::{QuarterCylinder, MeshEngine};
use crate::geo_3d::Point;
use crate::grading::compute_chop;

// Re-export errors
pub use proc_errors::{
    BuildError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    MeshCfg,
    BuildTarget,
};

/// Run the build process: construct the quarter-cylinder primitive, apply
/// the chops and patch names, serialize through the engine, and correct the
/// symmetry patch type in the written descriptor.
/// Returns the descriptor path.
pub fn do_build(target: &BuildTarget) -> ProcResult<String> {
    let cfg = &target.cfg;

    // Axis along +z; the quarter spans +x/+y. The radius point must be
    // perpendicular to the axis.
    let axis_point_1 = Point::zero();
    let axis_point_2 = Point::new(0.0, 0.0, cfg.length);
    let radius_point_1 = Point::new(cfg.radius, 0.0, 0.0);

    let mut quarter_cyl = QuarterCylinder::new(axis_point_1, axis_point_2, radius_point_1)?;

    quarter_cyl.chop_axial(compute_chop(cfg.axial_cells, None, None))?;
    // A wall thickness pins a thin first cell at the wall; the default
    // expansion keeps the grading mild.
    quarter_cyl.chop_radial(compute_chop(cfg.radial_cells, cfg.wall_thickness, None))?;
    quarter_cyl.chop_tangential(compute_chop(cfg.tangential_cells, None, None))?;

    let patch_names = cfg.patch_names();
    quarter_cyl.set_start_patch(&patch_names.start);
    quarter_cyl.set_end_patch(&patch_names.end);
    quarter_cyl.set_outer_patch(&patch_names.wall);
    quarter_cyl.set_symmetry_patch(&patch_names.symmetry);

    if let Some(parent) = std::path::Path::new(&target.output_path).parent() {
        if !parent.as_os_str().is_empty() {
            crate::io::create_dir_all(&parent.to_string_lossy())?;
        }
    }

    println!("Serializing mesh with the {} engine...", target.engine.get_engine_name());
    target.engine.write_mesh(
        &quarter_cyl,
        &target.output_path,
        cfg.debug_vtk.as_deref(),
    )?;

    // The engine serializes every boundary patch with a plain type; the
    // symmetry patch needs its type overridden in the written text.
    println!("Setting patch \"{}\" type to \"{}\"...", patch_names.symmetry, target.symmetry_type);
    corrector::enforce_patch_type(&target.output_path, &patch_names.symmetry, &target.symmetry_type)?;

    Ok(target.output_path.clone())
}
