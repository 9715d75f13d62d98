/// Boundary type every patch is serialized with before correction.
pub const SERIALIZED_PATCH_TYPE: &str = "patch";

/// Canonical symmetry boundary type.
pub const SYMMETRY_TYPE: &str = "symmetry";

/// Legacy symmetry boundary keyword, coerced to the canonical one.
const LEGACY_SYMMETRY_TYPE: &str = "symmetryplane";

/// Names for the four logical boundary roles of the quarter-cylinder.
#[derive(Debug, Clone)]
pub struct PatchNames {
    /// Axial inlet face.
    pub start: String,
    /// Axial outlet face.
    pub end: String,
    /// Outer curved face.
    pub wall: String,
    /// The flat symmetry-cut faces.
    pub symmetry: String,
}
impl PatchNames {
    /// Check that every name is non-empty and that no two roles share a name.
    /// Duplicate names would merge unrelated faces into one patch in the
    /// descriptor, so this is rejected before any geometry work.
    pub fn validate(&self) -> Result<(), String> {
        let named_roles = [
            ("start_patch", &self.start),
            ("end_patch", &self.end),
            ("wall_patch", &self.wall),
            ("symmetry_patch", &self.symmetry),
        ];
        for (role, name) in named_roles.iter() {
            if name.is_empty() {
                return Err(format!("Patch name for {} must not be empty", role));
            }
        }
        for (i, (role_a, name_a)) in named_roles.iter().enumerate() {
            for (role_b, name_b) in named_roles.iter().skip(i + 1) {
                if name_a == name_b {
                    return Err(format!(
                        "Patch name \"{}\" is used for both {} and {} -- names must be distinct",
                        name_a, role_a, role_b,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Normalize a symmetry boundary-type token.
/// The descriptor format historically accepted a half-plane variant name
/// that modern consumers reject, so "symmetryplane" (any case) is coerced
/// to "symmetry". Any other token passes through unchanged; an absent token
/// defaults to "symmetry".
pub fn normalize_symmetry_type(token: Option<&str>) -> String {
    match token {
        None => SYMMETRY_TYPE.to_string(),
        Some(token) if token.to_lowercase() == LEGACY_SYMMETRY_TYPE => SYMMETRY_TYPE.to_string(),
        Some(token) => token.to_string(),
    }
}
