use crate::{
    engine,
    args,
};
use engine::methods;
use crate::geo_3d::Point;

use itertools::Itertools;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::io::LineWriter;

use std::f64::consts::PI;

/// Fraction of the radius at which the core block meets the symmetry cuts.
const CORE_SIDE_RATIO: f64 = 0.8;
/// Fraction of the radius at which the core block corner sits on the diagonal.
const CORE_DIAGONAL_RATIO: f64 = 0.7;

/// blockMesh engine struct.
/// Serializes the quarter-cylinder O-grid topology to an OpenFOAM
/// blockMeshDict, and optionally writes a legacy-ASCII VTK visualization
/// of the block hexahedra.
#[derive(Debug)]
pub struct Engine {}
impl Engine {
    pub fn new() -> args::ProcResult<Self> {
        Ok(Engine{})
    }
}

/// One hexahedral block: vertex indices (bottom quad then top quad),
/// cell counts and total expansion ratios per local direction.
struct Block {
    vertices: [usize; 8],
    counts: (u32, u32, u32),
    grading: (f64, f64, f64),
}

/// A curved edge through a point on the outer circle.
struct ArcEdge {
    from: usize,
    to: usize,
    through: Point,
}

/// A named boundary patch and its faces.
struct Patch {
    name: String,
    faces: Vec<[usize; 4]>,
}

/// The full block structure of the quarter cylinder.
struct Topology {
    points: Vec<Point>,
    blocks: Vec<Block>,
    arcs: Vec<ArcEdge>,
    patches: Vec<Patch>,
}

/// Compute the O-grid block structure of a fully specified primitive.
/// Quarter cross-section: one core block from the axis to the 0.8r side
/// points and the 0.7r diagonal point, plus two shell blocks out to the
/// wall. Extruded axially this gives 14 vertices and 3 hexes. The core
/// cross edges pair with the shells' arc-parallel edges, so the core is
/// chopped tangentially in both cross directions and the radial count
/// lives on the shells only.
fn block_topology(primitive: &engine::QuarterCylinder) -> engine::ProcResult<Topology> {
    let chops = primitive.require_chops()?;
    let (start_patch, end_patch, outer_patch, symmetry_patch) = primitive.require_patches()?;

    let origin = primitive.axis_point_1();
    let axial = primitive.axial_vector();
    let radius = primitive.radius();
    let u = primitive.radial_dir();
    let v = primitive.tangential_dir();
    let diagonal = (u + v).normalize();

    let bottom = [
        origin,
        origin + u * (CORE_SIDE_RATIO * radius),
        origin + diagonal * (CORE_DIAGONAL_RATIO * radius),
        origin + v * (CORE_SIDE_RATIO * radius),
        origin + u * radius,
        origin + diagonal * radius,
        origin + v * radius,
    ];
    let mut points = bottom.to_vec();
    points.extend(bottom.iter().map(|&point| point + axial));

    let axial_count = chops.axial.count;
    let radial_count = chops.radial.count;
    let tangential_count = chops.tangential.count;
    let axial_exp = chops.axial.total_expansion();
    let radial_exp = chops.radial.total_expansion();
    let tangential_exp = chops.tangential.total_expansion();

    let blocks = vec![
        // Core block.
        Block{
            vertices: [0, 1, 2, 3, 7, 8, 9, 10],
            counts: (tangential_count, tangential_count, axial_count),
            grading: (tangential_exp, tangential_exp, axial_exp),
        },
        // Shell block along the radius-side cut, radial direction first.
        Block{
            vertices: [1, 4, 5, 2, 8, 11, 12, 9],
            counts: (radial_count, tangential_count, axial_count),
            grading: (radial_exp, tangential_exp, axial_exp),
        },
        // Shell block along the tangential-side cut, radial direction second.
        Block{
            vertices: [3, 2, 5, 6, 10, 9, 12, 13],
            counts: (tangential_count, radial_count, axial_count),
            grading: (tangential_exp, radial_exp, axial_exp),
        },
    ];

    let circle_point = |angle: f64| origin + (u * angle.cos() + v * angle.sin()) * radius;
    let arcs = vec![
        ArcEdge{from: 4, to: 5, through: circle_point(PI / 8.0)},
        ArcEdge{from: 5, to: 6, through: circle_point(3.0 * PI / 8.0)},
        ArcEdge{from: 11, to: 12, through: circle_point(PI / 8.0) + axial},
        ArcEdge{from: 12, to: 13, through: circle_point(3.0 * PI / 8.0) + axial},
    ];

    let patches = vec![
        Patch{
            name: start_patch.to_string(),
            faces: vec![[0, 3, 2, 1], [1, 2, 5, 4], [3, 6, 5, 2]],
        },
        Patch{
            name: end_patch.to_string(),
            faces: vec![[7, 8, 9, 10], [8, 11, 12, 9], [10, 9, 12, 13]],
        },
        Patch{
            name: outer_patch.to_string(),
            faces: vec![[4, 5, 12, 11], [5, 6, 13, 12]],
        },
        // Both flat cut planes belong to the symmetry patch.
        Patch{
            name: symmetry_patch.to_string(),
            faces: vec![[0, 1, 8, 7], [1, 4, 11, 8], [0, 7, 10, 3], [3, 10, 13, 6]],
        },
    ];

    Ok(Topology{points, blocks, arcs, patches})
}

impl methods::MeshEngine for Engine {
    /// Get the name of the engine.
    fn get_engine_name(&self) -> String {
        "blockMesh".to_string()
    }

    /// Serialize the primitive to a blockMeshDict at the output path.
    /// If a debug path is given, also write a legacy VTK file there.
    fn write_mesh(
        &self,
        primitive: &engine::QuarterCylinder,
        output_path: &str,
        debug_path: Option<&str>,
    ) -> engine::ProcResult<()> {
        let topology = block_topology(primitive)?;

        match self.save_blockmesh_dict(&topology, output_path) {
            Ok(_) => (),
            Err(error) => {
                return Err(crate::io::IoError{
                    file: Some(output_path.to_string()),
                    cause: crate::io::IoErrorType::File(error),
                }.into());
            },
        };

        if let Some(debug_path) = debug_path {
            println!("Saving debug VTK to {}...", debug_path);
            match self.save_debug_vtk(&topology, debug_path) {
                Ok(_) => (),
                Err(error) => {
                    return Err(crate::io::IoError{
                        file: Some(debug_path.to_string()),
                        cause: crate::io::IoErrorType::File(error),
                    }.into());
                },
            };
        }

        Ok(())
    }
}

impl Engine {
    /// Save a blockMeshDict file.
    fn save_blockmesh_dict(&self, topology: &Topology, output_path: &str) -> std::io::Result<()> {
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(output_path)?;
        let mut file = LineWriter::new(file);

        // Write the header
        writeln!(file, "/*--------------------------------*- C++ -*----------------------------------*\\")?;
        writeln!(file, "| =========                 |                                                 |")?;
        writeln!(file, "| \\\\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |")?;
        writeln!(file, "|  \\\\    /   O peration     |                                                 |")?;
        writeln!(file, "|   \\\\  /    A nd           |                                                 |")?;
        writeln!(file, "|    \\\\/     M anipulation  |                                                 |")?;
        writeln!(file, "\\*---------------------------------------------------------------------------*/")?;
        writeln!(file, "FoamFile")?;
        writeln!(file, "{{")?;
        writeln!(file, "    version     2.0;")?;
        writeln!(file, "    format      ascii;")?;
        writeln!(file, "    class       dictionary;")?;
        writeln!(file, "    object      blockMeshDict;")?;
        writeln!(file, "}}")?;
        writeln!(file, "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //")?;
        writeln!(file)?;
        writeln!(file, "convertToMeters 1;")?;
        writeln!(file)?;

        // Write the vertices
        writeln!(file, "vertices")?;
        writeln!(file, "(")?;
        for point in topology.points.iter() {
            writeln!(file, "    ({} {} {})", point.x, point.y, point.z)?;
        }
        writeln!(file, ");")?;
        writeln!(file)?;

        // Write the blocks
        writeln!(file, "blocks")?;
        writeln!(file, "(")?;
        for block in topology.blocks.iter() {
            writeln!(file, "    hex ({}) ({} {} {}) simpleGrading ({} {} {})",
                block.vertices.iter().join(" "),
                block.counts.0, block.counts.1, block.counts.2,
                block.grading.0, block.grading.1, block.grading.2)?;
        }
        writeln!(file, ");")?;
        writeln!(file)?;

        // Write the curved edges on the outer wall
        writeln!(file, "edges")?;
        writeln!(file, "(")?;
        for arc in topology.arcs.iter() {
            writeln!(file, "    arc {} {} ({} {} {})",
                arc.from, arc.to, arc.through.x, arc.through.y, arc.through.z)?;
        }
        writeln!(file, ");")?;
        writeln!(file)?;

        // Write the default patch for any face left unassigned
        writeln!(file, "defaultPatch")?;
        writeln!(file, "{{")?;
        writeln!(file, "    name default;")?;
        writeln!(file, "    type wall;")?;
        writeln!(file, "}}")?;
        writeln!(file)?;

        // Write the boundary patches
        writeln!(file, "boundary")?;
        writeln!(file, "(")?;
        for patch in topology.patches.iter() {
            writeln!(file, "    {}", patch.name)?;
            writeln!(file, "    {{")?;
            writeln!(file, "        type {};", crate::patches::SERIALIZED_PATCH_TYPE)?;
            writeln!(file, "        faces")?;
            writeln!(file, "        (")?;
            for face in patch.faces.iter() {
                writeln!(file, "            ({})", face.iter().join(" "))?;
            }
            writeln!(file, "        );")?;
            writeln!(file, "    }}")?;
        }
        writeln!(file, ");")?;
        writeln!(file)?;

        writeln!(file, "mergePatchPairs")?;
        writeln!(file, "(")?;
        writeln!(file, ");")?;
        writeln!(file)?;
        writeln!(file, "// ************************************************************************* //")?;

        Ok(())
    }

    /// Save a legacy-ASCII VTK unstructured grid of the block hexahedra.
    /// The VTK hexahedron vertex order matches the block order (bottom
    /// quad, then top quad).
    fn save_debug_vtk(&self, topology: &Topology, output_path: &str) -> std::io::Result<()> {
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(output_path)?;
        let mut file = LineWriter::new(file);

        writeln!(file, "# vtk DataFile Version 3.0")?;
        writeln!(file, "quarter-cylinder block structure")?;
        writeln!(file, "ASCII")?;
        writeln!(file, "DATASET UNSTRUCTURED_GRID")?;

        writeln!(file, "POINTS {} double", topology.points.len())?;
        for point in topology.points.iter() {
            writeln!(file, "{} {} {}", point.x, point.y, point.z)?;
        }

        let cell_count = topology.blocks.len();
        writeln!(file, "CELLS {} {}", cell_count, cell_count * 9)?;
        for block in topology.blocks.iter() {
            writeln!(file, "8 {}", block.vertices.iter().join(" "))?;
        }

        writeln!(file, "CELL_TYPES {}", cell_count)?;
        for _ in topology.blocks.iter() {
            // VTK_HEXAHEDRON
            writeln!(file, "12")?;
        }

        Ok(())
    }
}
