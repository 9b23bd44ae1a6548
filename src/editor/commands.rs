// src/editor/commands.rs

use egui::Pos2;
use glam::Vec3;
use log::debug;

use crate::document::Document;
use crate::editor::tools::SelectTool;
use crate::error::EditorError;
use crate::map::{Axis, Vertex};

/// Screen direction of a translate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// World-space unit step for a translate key pressed while `axis`'s view is
/// active. The vertex moves the way it appears to move on that view.
pub fn translation_delta(axis: Axis, direction: Direction) -> Vec3 {
    use Direction::*;
    match (axis, direction) {
        (Axis::Z, Up) => Vec3::Y,
        (Axis::Z, Down) => Vec3::NEG_Y,
        (Axis::Z, Left) => Vec3::NEG_X,
        (Axis::Z, Right) => Vec3::X,

        (Axis::X, Up) => Vec3::Y,
        (Axis::X, Down) => Vec3::NEG_Y,
        (Axis::X, Left) => Vec3::Z,
        (Axis::X, Right) => Vec3::NEG_Z,

        (Axis::Y, Up) => Vec3::NEG_Z,
        (Axis::Y, Down) => Vec3::Z,
        (Axis::Y, Left) => Vec3::NEG_X,
        (Axis::Y, Right) => Vec3::X,
    }
}

/// Moves every selected vertex by `delta` and hands the result back to the
/// document through `replace_all`. Triangles sharing a moved vertex follow
/// it, since they address the vertex by slot.
///
/// Returns how many vertices moved. An empty selection leaves the document
/// (and its revision) alone.
pub fn translate_selected(
    doc: &mut Document,
    selection: &SelectTool,
    delta: Vec3,
) -> Result<usize, EditorError> {
    if selection.is_empty() {
        return Ok(0);
    }

    let mut vertices = doc.vertices().to_vec();
    let mut moved = 0;
    for id in selection.selected() {
        let vertex = vertices
            .get_mut(id.index())
            .ok_or(EditorError::UnknownVertex(id))?;
        *vertex += delta;
        moved += 1;
    }

    let indices = doc.indices().to_vec();
    doc.replace_all(vertices, indices)?;
    debug!("Translated {} vertices by {:?}", moved, delta);
    Ok(moved)
}

/// Every mutation the edit views can request. All of them run through
/// `Editor::execute_command`.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Place a cube under the view-local pixel `screen` of `axis`'s view.
    BuildCube { axis: Axis, screen: Pos2 },
    /// Nudge the selection one step in a screen direction of the active view.
    Translate(Direction),
    ClearSelection,
    /// Swap in a whole new mesh.
    ReplaceMesh { vertices: Vec<Vertex>, indices: Vec<u32> },
}
