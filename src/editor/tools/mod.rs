// src/editor/tools/mod.rs
pub mod select;

pub use select::{DragState, SelectTool, SelectionRect};

use egui::Pos2;

/// Rounds `raw` to the nearest multiple of `cell_size`. Halfway points round
/// towards positive infinity.
fn snap(raw: f32, cell_size: f32) -> f32 {
    (raw / cell_size + 0.5).floor() * cell_size
}

/// Snaps a raw pointer coordinate to the nearest grid intersection.
pub fn snap_to_cell(raw_x: f32, raw_y: f32, cell_size: f32) -> (f32, f32) {
    (snap(raw_x, cell_size), snap(raw_y, cell_size))
}

/// Moves the snapped intersection `(grid_x, grid_y)` half a cell towards the
/// side of each grid line the raw point fell on, giving the center of the
/// cell that contains the raw point. A raw point lying exactly on a grid line
/// resolves to the cell on its positive side.
pub fn cell_center_from_point(
    raw_x: f32,
    raw_y: f32,
    grid_x: f32,
    grid_y: f32,
    cell_size: f32,
) -> (f32, f32) {
    let half = cell_size / 2.0;
    let toward = |raw: f32, grid: f32| if raw >= grid { grid + half } else { grid - half };
    (toward(raw_x, grid_x), toward(raw_y, grid_y))
}

// Grid settings struct
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub cell_size: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { cell_size: 48.0 }
    }
}

impl GridSettings {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Nearest grid intersection to `pos`.
    pub fn snap_position(&self, pos: Pos2) -> Pos2 {
        let (x, y) = snap_to_cell(pos.x, pos.y, self.cell_size);
        egui::pos2(x, y)
    }

    /// Center of the cell containing `pos`.
    pub fn cell_center(&self, pos: Pos2) -> Pos2 {
        let grid = self.snap_position(pos);
        let (x, y) = cell_center_from_point(pos.x, pos.y, grid.x, grid.y, self.cell_size);
        egui::pos2(x, y)
    }
}
