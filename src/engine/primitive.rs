use crate::geo_3d::{Point, GeoVector};
use crate::grading::ChopSpec;
use crate::engine::{EngineError, ProcResult};

/// Relative tolerance for the radius-perpendicularity check.
const PERPENDICULAR_TOL: f64 = 1e-8;

/// Quarter-cylinder block primitive.
/// Defined by an axis (start and end points) and a radius point whose offset
/// from the axis start must be perpendicular to the axis. The quarter spans
/// the quadrant between the radius direction and axis cross radius.
/// Chops and patch names are applied before serialization is requested.
#[derive(Debug, Clone)]
pub struct QuarterCylinder {
    axis_point_1: Point,
    axis_point_2: Point,
    radius_point_1: Point,
    axial_chop: Option<ChopSpec>,
    radial_chop: Option<ChopSpec>,
    tangential_chop: Option<ChopSpec>,
    start_patch: Option<String>,
    end_patch: Option<String>,
    outer_patch: Option<String>,
    symmetry_patch: Option<String>,
}

/// The three chops of a fully specified primitive, in axial, radial,
/// tangential order.
#[derive(Debug, Clone, Copy)]
pub struct Chops {
    pub axial: ChopSpec,
    pub radial: ChopSpec,
    pub tangential: ChopSpec,
}

impl QuarterCylinder {
    /// Construct the primitive, checking the geometric preconditions loudly:
    /// positive axis length, positive radius, and a radius point
    /// perpendicular to the axis.
    pub fn new(axis_point_1: Point, axis_point_2: Point, radius_point_1: Point) -> ProcResult<Self> {
        let axis_vector = axis_point_2 - axis_point_1;
        let radius_vector = radius_point_1 - axis_point_1;

        if axis_vector.norm() <= 0.0 {
            return Err(EngineError::Geometry(
                "Axis length must be positive (axis points coincide)".to_string()));
        }
        if radius_vector.norm() <= 0.0 {
            return Err(EngineError::Geometry(
                "Radius must be positive (radius point coincides with the axis start)".to_string()));
        }
        let cos_angle = axis_vector.dot(&radius_vector) / (axis_vector.norm() * radius_vector.norm());
        if cos_angle.abs() > PERPENDICULAR_TOL {
            return Err(EngineError::Geometry(format!(
                "Radius point {} is not perpendicular to the axis {} -> {}",
                radius_point_1, axis_point_1, axis_point_2)));
        }

        Ok(QuarterCylinder{
            axis_point_1,
            axis_point_2,
            radius_point_1,
            axial_chop: None,
            radial_chop: None,
            tangential_chop: None,
            start_patch: None,
            end_patch: None,
            outer_patch: None,
            symmetry_patch: None,
        })
    }

    fn check_chop(chop: &ChopSpec, direction: &str) -> ProcResult<()> {
        if chop.count == 0 {
            return Err(EngineError::InvalidChop(format!(
                "{} chop count must be positive", direction)));
        }
        if let Some(end_size) = chop.end_size {
            if end_size <= 0.0 {
                return Err(EngineError::InvalidChop(format!(
                    "{} chop end size must be positive (got {})", direction, end_size)));
            }
        }
        if let Some(c2c) = chop.c2c_expansion {
            if c2c <= 0.0 {
                return Err(EngineError::InvalidChop(format!(
                    "{} chop cell-to-cell expansion must be positive (got {})", direction, c2c)));
            }
        }
        Ok(())
    }

    /// Apply the axial chop.
    pub fn chop_axial(&mut self, chop: ChopSpec) -> ProcResult<()> {
        Self::check_chop(&chop, "Axial")?;
        self.axial_chop = Some(chop);
        Ok(())
    }

    /// Apply the radial chop.
    pub fn chop_radial(&mut self, chop: ChopSpec) -> ProcResult<()> {
        Self::check_chop(&chop, "Radial")?;
        self.radial_chop = Some(chop);
        Ok(())
    }

    /// Apply the tangential chop.
    pub fn chop_tangential(&mut self, chop: ChopSpec) -> ProcResult<()> {
        Self::check_chop(&chop, "Tangential")?;
        self.tangential_chop = Some(chop);
        Ok(())
    }

    /// Name the axial start face patch.
    pub fn set_start_patch(&mut self, name: &str) {
        self.start_patch = Some(name.to_string());
    }

    /// Name the axial end face patch.
    pub fn set_end_patch(&mut self, name: &str) {
        self.end_patch = Some(name.to_string());
    }

    /// Name the outer curved face patch.
    pub fn set_outer_patch(&mut self, name: &str) {
        self.outer_patch = Some(name.to_string());
    }

    /// Name the flat symmetry-cut face patch.
    pub fn set_symmetry_patch(&mut self, name: &str) {
        self.symmetry_patch = Some(name.to_string());
    }

    /// Axis start point.
    pub fn axis_point_1(&self) -> Point {
        self.axis_point_1
    }

    /// Vector from axis start to axis end.
    pub fn axial_vector(&self) -> GeoVector {
        self.axis_point_2 - self.axis_point_1
    }

    /// Cylinder radius.
    pub fn radius(&self) -> f64 {
        (self.radius_point_1 - self.axis_point_1).norm()
    }

    /// Unit vector along the radius point (the first symmetry-cut plane).
    pub fn radial_dir(&self) -> GeoVector {
        (self.radius_point_1 - self.axis_point_1).normalize()
    }

    /// Unit vector perpendicular to the radius within the cross-section
    /// (the second symmetry-cut plane).
    pub fn tangential_dir(&self) -> GeoVector {
        self.axial_vector().normalize().cross(&self.radial_dir())
    }

    /// All three chops, required before serialization.
    pub fn require_chops(&self) -> ProcResult<Chops> {
        let missing = |direction: &str| EngineError::InvalidChop(format!(
            "{} chop was never applied to the primitive", direction));
        Ok(Chops{
            axial: self.axial_chop.ok_or_else(|| missing("Axial"))?,
            radial: self.radial_chop.ok_or_else(|| missing("Radial"))?,
            tangential: self.tangential_chop.ok_or_else(|| missing("Tangential"))?,
        })
    }

    /// The four patch names (start, end, outer, symmetry), required before
    /// serialization.
    pub fn require_patches(&self) -> ProcResult<(&str, &str, &str, &str)> {
        let missing = |role: &str| EngineError::StringOnly(format!(
            "The {} patch was never named on the primitive", role));
        Ok((
            self.start_patch.as_deref().ok_or_else(|| missing("start"))?,
            self.end_patch.as_deref().ok_or_else(|| missing("end"))?,
            self.outer_patch.as_deref().ok_or_else(|| missing("outer"))?,
            self.symmetry_patch.as_deref().ok_or_else(|| missing("symmetry"))?,
        ))
    }
}
