use crate::args;
use crate::engine::EngineChoice;
use crate::patches::{PatchNames, normalize_symmetry_type};
use serde::{Serialize, Deserialize};

/// Deserializer for the mesh config file.
/// Every recognized option is enumerated here with its default attached,
/// so the whole configuration is validated once at load time.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeshCfg {
    /// Axial length of the cylinder.
    #[serde(default = "MeshCfg::default_length")]
    pub length: f64,

    /// Cylinder radius.
    #[serde(default = "MeshCfg::default_radius")]
    pub radius: f64,

    /// Cell count along the axis.
    #[serde(default = "MeshCfg::default_axial_cells")]
    pub axial_cells: u32,

    /// Cell count along the radius (shell blocks).
    #[serde(default = "MeshCfg::default_radial_cells")]
    pub radial_cells: u32,

    /// Cell count along the outer arc.
    #[serde(default = "MeshCfg::default_tangential_cells")]
    pub tangential_cells: u32,

    /// Near-wall first-cell size. Absent means a uniform radial chop.
    #[serde(default)]
    pub wall_thickness: Option<f64>,

    /// Name of the outer curved face patch.
    #[serde(default = "MeshCfg::default_wall_patch")]
    pub wall_patch: String,

    /// Name of the symmetry-cut face patch.
    #[serde(default = "MeshCfg::default_symmetry_patch")]
    pub symmetry_patch: String,

    /// Desired boundary type of the symmetry patch.
    /// Normalized before use ("symmetryplane" in any case becomes
    /// "symmetry"; absent defaults to "symmetry").
    #[serde(default)]
    pub symmetry_patch_type: Option<String>,

    /// Name of the axial start face patch.
    #[serde(default = "MeshCfg::default_start_patch")]
    pub start_patch: String,

    /// Name of the axial end face patch.
    #[serde(default = "MeshCfg::default_end_patch")]
    pub end_patch: String,

    /// Registered mesh engine to serialize with.
    #[serde(default = "MeshCfg::default_engine")]
    pub engine: String,

    /// Output path for the descriptor file.
    /// Absent means `system/blockMeshDict` next to the config file.
    #[serde(default, alias = "output_path", alias = "out", alias = "o")]
    pub output: Option<String>,

    /// Optional output path for a debug VTK of the block structure.
    #[serde(default)]
    pub debug_vtk: Option<String>,
}
impl MeshCfg {
    pub fn default_length() -> f64 {
        1.0
    }
    pub fn default_radius() -> f64 {
        0.5
    }
    pub fn default_axial_cells() -> u32 {
        20
    }
    pub fn default_radial_cells() -> u32 {
        8
    }
    pub fn default_tangential_cells() -> u32 {
        12
    }
    pub fn default_wall_patch() -> String {
        "solidCylinder".to_string()
    }
    pub fn default_symmetry_patch() -> String {
        "symmetryPlane".to_string()
    }
    pub fn default_start_patch() -> String {
        "inlet".to_string()
    }
    pub fn default_end_patch() -> String {
        "topOutlet".to_string()
    }
    pub fn default_engine() -> String {
        "blockmesh".to_string()
    }
    pub fn default() -> Self {
        MeshCfg{
            length: Self::default_length(),
            radius: Self::default_radius(),
            axial_cells: Self::default_axial_cells(),
            radial_cells: Self::default_radial_cells(),
            tangential_cells: Self::default_tangential_cells(),
            wall_thickness: None,
            wall_patch: Self::default_wall_patch(),
            symmetry_patch: Self::default_symmetry_patch(),
            symmetry_patch_type: None,
            start_patch: Self::default_start_patch(),
            end_patch: Self::default_end_patch(),
            engine: Self::default_engine(),
            output: None,
            debug_vtk: None,
        }
    }

    /// Check every scalar option once, before any geometry work.
    pub fn validate(&self) -> Result<(), String> {
        if self.length <= 0.0 {
            return Err(format!("length must be positive (got {})", self.length));
        }
        if self.radius <= 0.0 {
            return Err(format!("radius must be positive (got {})", self.radius));
        }
        for (name, cells) in [
            ("axial_cells", self.axial_cells),
            ("radial_cells", self.radial_cells),
            ("tangential_cells", self.tangential_cells),
        ] {
            if cells == 0 {
                return Err(format!("{} must be positive", name));
            }
        }
        if let Some(wall_thickness) = self.wall_thickness {
            if wall_thickness <= 0.0 {
                return Err(format!("wall_thickness must be positive (got {})", wall_thickness));
            }
        }
        self.patch_names().validate()
    }

    /// The four logical patch names as configured.
    pub fn patch_names(&self) -> PatchNames {
        PatchNames{
            start: self.start_patch.clone(),
            end: self.end_patch.clone(),
            wall: self.wall_patch.clone(),
            symmetry: self.symmetry_patch.clone(),
        }
    }
}

/// Build target struct.
/// Contains the validated config, the resolved paths, the normalized
/// symmetry type, and the constructed engine.
pub struct BuildTarget {
    /// Validated mesh configuration.
    pub cfg: MeshCfg,
    /// Constructed mesh engine.
    pub engine: EngineChoice,
    /// Normalized symmetry boundary type.
    pub symmetry_type: String,
    /// Resolved descriptor output path.
    pub output_path: String,
}
impl BuildTarget {
    /// Construct a build target from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let cfg: MeshCfg = crate::io::read_cfg_file(cfg_file)?;

        if let Err(error) = cfg.validate() {
            return args::err_str(&error);
        }

        let engine = EngineChoice::from_name(&cfg.engine)?;

        let symmetry_type = normalize_symmetry_type(cfg.symmetry_patch_type.as_deref());

        // The original tool anchored the default output on its own install
        // location; a compiled binary anchors it on the config file instead.
        let output_path = match cfg.output.as_ref() {
            Some(output) => output.clone(),
            None => {
                let cfg_dir = std::path::Path::new(cfg_file)
                    .parent()
                    .unwrap_or_else(|| std::path::Path::new(""));
                cfg_dir.join("system").join("blockMeshDict").to_string_lossy().into_owned()
            },
        };

        Ok(BuildTarget{cfg, engine, symmetry_type, output_path})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_gives_the_documented_defaults() {
        let cfg: MeshCfg = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.length, 1.0);
        assert_eq!(cfg.radius, 0.5);
        assert_eq!(cfg.axial_cells, 20);
        assert_eq!(cfg.radial_cells, 8);
        assert_eq!(cfg.tangential_cells, 12);
        assert_eq!(cfg.wall_thickness, None);
        assert_eq!(cfg.wall_patch, "solidCylinder");
        assert_eq!(cfg.symmetry_patch, "symmetryPlane");
        assert_eq!(cfg.symmetry_patch_type, None);
        assert_eq!(cfg.start_patch, "inlet");
        assert_eq!(cfg.end_patch, "topOutlet");
        assert_eq!(cfg.engine, "blockmesh");
        assert_eq!(cfg.output, None);
        assert_eq!(cfg.debug_vtk, None);
    }

    #[test]
    fn default_fn_matches_serde_defaults() {
        let from_yaml: MeshCfg = serde_yaml::from_str("{}").unwrap();
        let built = MeshCfg::default();
        assert_eq!(serde_yaml::to_string(&from_yaml).unwrap(), serde_yaml::to_string(&built).unwrap());
    }

    #[test]
    fn zero_counts_fail_validation() {
        let mut cfg = MeshCfg::default();
        cfg.radial_cells = 0;
        assert!(cfg.validate().unwrap_err().contains("radial_cells"));
    }

    #[test]
    fn non_positive_scalars_fail_validation() {
        let mut cfg = MeshCfg::default();
        cfg.radius = -0.5;
        assert!(cfg.validate().unwrap_err().contains("radius"));

        let mut cfg = MeshCfg::default();
        cfg.wall_thickness = Some(0.0);
        assert!(cfg.validate().unwrap_err().contains("wall_thickness"));
    }

    #[test]
    fn duplicate_patch_names_fail_validation() {
        let mut cfg = MeshCfg::default();
        cfg.end_patch = "inlet".to_string();
        assert!(cfg.validate().unwrap_err().contains("distinct"));
    }
}
