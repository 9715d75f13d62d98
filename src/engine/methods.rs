/*!
 * This is the mesh engine module.
 * Adding new engines should be done here.
 *
 * New engines need:
 * - A struct implementing `MeshEngine`
 * - An enum variant containing that struct in `EngineChoice`
 * - A constructor arg_name and function in `ENGINE_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    engine,
    args,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new engine
//      |
//      V
//

// Source files for the engines
mod blockmesh;

/// Mesh engine enum.
/// To add a new engine:
/// include it here,
/// add handling for its constructor in `ENGINE_CONSTRUCTION`,
/// and implement the `MeshEngine` trait for it.
#[derive(Debug)]
#[enum_dispatch(MeshEngine)]
pub enum EngineChoice {
    /// Engine that serializes to an OpenFOAM blockMeshDict.
    BlockMesh(blockmesh::Engine),
}

/// Engine construction array -- written out in one place for easy modification.
/// To add a new engine:
/// include it in the `EngineChoice` enum,
/// add handling for its constructor here,
/// and implement the `MeshEngine` trait for it.
const ENGINE_CONSTRUCTION: &[EngineConstructor] = &[
    // blockMesh descriptor engine constructor.
    EngineConstructor{
        arg_name: "blockmesh",
        constructor: || {Ok(EngineChoice::BlockMesh(blockmesh::Engine::new()?))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new engine
//      |
//      V
//

/// Mesh engine capability trait.
/// This trait must be implemented for all engines.
/// An engine takes a fully specified primitive (geometry, chops, patch
/// names), serializes the whole mesh to the output path, and optionally
/// emits a debug visualization artifact.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait MeshEngine {
    /// Get the name of the engine.
    fn get_engine_name(&self) -> String;

    /// Serialize the primitive to the output path.
    /// If a debug path is given, also write a debug visualization there.
    fn write_mesh(
        &self,
        primitive: &engine::QuarterCylinder,
        output_path: &str,
        debug_path: Option<&str>,
    ) -> engine::ProcResult<()>;
}

/// Engine constructor.
/// Used to construct an engine from a config file.
struct EngineConstructor {
    /// Name of the engine.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> args::ProcResult<EngineChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Engine construction
impl EngineChoice {
    /// Construct an engine from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in ENGINE_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)();
            }
        }

        let mut error_str = format!("Mesh engine not found: {arg_name}\n");
        error_str.push_str("Available engines:\n");
        for constructor in ENGINE_CONSTRUCTION {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        args::err_str(&error_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_engine_constructs() {
        let engine = EngineChoice::from_name("blockmesh").unwrap();
        assert_eq!(engine.get_engine_name(), "blockMesh");
    }

    #[test]
    fn unknown_engine_lists_the_registry() {
        let error = EngineChoice::from_name("gmsh").unwrap_err();
        let message = format!("{}", error);
        assert!(message.contains("Mesh engine not found: gmsh"));
        assert!(message.contains("blockmesh"));
    }
}
