// src/editor/generator.rs

use glam::Vec3;

use crate::map::Vertex;

/// Corner `i` of a cube sits on the +X side when bit 0 is set, +Y for bit 1
/// and +Z for bit 2.
const CUBE_CORNERS: usize = 8;

/// Two counter-clockwise triangles per face, seen from outside the cube.
const CUBE_TRIANGLES: [u32; 36] = [
    0, 4, 6, 0, 6, 2, // -X
    1, 3, 7, 1, 7, 5, // +X
    0, 1, 5, 0, 5, 4, // -Y
    2, 6, 7, 2, 7, 3, // +Y
    0, 2, 3, 0, 3, 1, // -Z
    4, 5, 7, 4, 7, 6, // +Z
];

/// Geometry produced by a generator, ready to be appended to a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Builds an axis-aligned cube of edge `size` centered at `center`.
///
/// The returned indices are already offset by `start_index`. The caller
/// computes that offset from the document it is about to append to
/// (`Document::next_start_index`) right before appending.
pub fn build_cube(center: Vertex, size: f32, start_index: u32) -> Primitive {
    let d = size / 2.0;
    let vertices = (0..CUBE_CORNERS)
        .map(|i| {
            let sign = |bit: usize| if i & bit != 0 { d } else { -d };
            center + Vec3::new(sign(1), sign(2), sign(4))
        })
        .collect();
    let indices = CUBE_TRIANGLES.iter().map(|&i| i + start_index).collect();

    Primitive { vertices, indices }
}

/// The unit quad in the Z=0 plane the editor starts with.
pub fn demo_quad() -> Primitive {
    Primitive {
        vertices: vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}
