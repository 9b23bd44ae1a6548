// src/map/axis.rs
//! Orthographic view axes and the 2D <-> 3D projection each one uses.
//!
//! Screen space here is the edit view's own pixel space with the origin at
//! the view center, x to the right and y down. "Up" on screen is always
//! world +Y except in the top view, which has no Y extent on screen.
//!
//! | Axis | world -> screen | screen (u, v) at depth d -> world |
//! |------|-----------------|-----------------------------------|
//! | Z    | (x, -y)         | (u, -v, d)                        |
//! | X    | (-z, -y)        | (d, -v, -u)                       |
//! | Y    | (x, z)          | (u, d, v)                         |

use egui::{pos2, Pos2};
use glam::Vec3;

use super::Vertex;

/// The world axis an edit view looks along. It is the axis collapsed out of
/// the view's 2D projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Z, Axis::X, Axis::Y];

    /// Returns a user-friendly name for the view looking along this axis.
    pub fn view_name(&self) -> &'static str {
        match self {
            Axis::Z => "Front (Z)",
            Axis::X => "Side (X)",
            Axis::Y => "Top (Y)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Maps a grid coordinate `(u, v)` on this view, at out-of-plane `depth`,
    /// to world space.
    pub fn to_world(&self, u: f32, v: f32, depth: f32) -> Vertex {
        match self {
            Axis::Z => Vec3::new(u, -v, depth),
            Axis::X => Vec3::new(depth, -v, -u),
            Axis::Y => Vec3::new(u, depth, v),
        }
    }

    /// Projects a world position onto this view, in pixels from the view origin.
    pub fn to_screen(&self, vertex: Vertex, cell_size: f32) -> Pos2 {
        let (u, v) = self.to_grid(vertex);
        pos2(u * cell_size, v * cell_size)
    }

    /// Projects a world position onto this view in grid units.
    pub fn to_grid(&self, vertex: Vertex) -> (f32, f32) {
        match self {
            Axis::Z => (vertex.x, -vertex.y),
            Axis::X => (-vertex.z, -vertex.y),
            Axis::Y => (vertex.x, vertex.z),
        }
    }

    /// Inverse of [`Axis::to_screen`] for a point at the given depth.
    pub fn screen_to_world(&self, screen: Pos2, cell_size: f32, depth: f32) -> Vertex {
        self.to_world(screen.x / cell_size, screen.y / cell_size, depth)
    }

    /// The coordinate this view cannot show.
    pub fn depth_of(&self, vertex: Vertex) -> f32 {
        match self {
            Axis::X => vertex.x,
            Axis::Y => vertex.y,
            Axis::Z => vertex.z,
        }
    }
}
