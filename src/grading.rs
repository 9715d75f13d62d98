/// Default cell-to-cell expansion ratio for graded chops.
/// A mild geometric growth away from the pinned wall cell keeps the total
/// cell count low without exposing an extra tunable.
pub const DEFAULT_C2C_EXPANSION: f64 = 1.2;

/// Subdivision specification for one local direction of a block.
/// Computed once per run from the configuration and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChopSpec {
    /// Cell count along the direction. Must be positive; enforced by the engine.
    pub count: u32,
    /// Size of the cell adjacent to the end boundary (the wall for radial chops).
    pub end_size: Option<f64>,
    /// Cell-to-cell growth ratio moving away from the end boundary.
    pub c2c_expansion: Option<f64>,
}
impl ChopSpec {
    /// Whether the chop carries any grading parameters.
    pub fn is_uniform(&self) -> bool {
        self.end_size.is_none() && self.c2c_expansion.is_none()
    }

    /// Total expansion ratio along the direction, as the ratio of the last
    /// cell size to the first. The pinned cell sits at the end boundary, so
    /// a graded chop contracts toward it.
    pub fn total_expansion(&self) -> f64 {
        match self.c2c_expansion {
            Some(c2c) => c2c.powi(-(self.count as i32 - 1)),
            None => 1.0,
        }
    }
}

/// Translate a per-direction subdivision request into a chop spec.
/// No wall-adjacent size requested: a uniform chop with `count` cells.
/// Wall-adjacent size requested: a graded chop with the adjacent cell pinned
/// to `end_size` and a cell-to-cell expansion of `expansion` (default 1.2).
pub fn compute_chop(count: u32, end_size: Option<f64>, expansion: Option<f64>) -> ChopSpec {
    match end_size {
        None => ChopSpec{count, end_size: None, c2c_expansion: None},
        Some(end_size) => ChopSpec{
            count,
            end_size: Some(end_size),
            c2c_expansion: Some(expansion.unwrap_or(DEFAULT_C2C_EXPANSION)),
        },
    }
}
