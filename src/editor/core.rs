// src/editor/core.rs

use egui::{Modifiers, Pos2};
use log::{error, info, warn};

use crate::config::EditorSettings;
use crate::document::Document;
use crate::editor::commands::{self, Command, Direction};
use crate::editor::generator;
use crate::editor::tools::{GridSettings, SelectTool};
use crate::error::EditorError;
use crate::map::{Axis, Vertex};

/// The editor state shared by the four views: the mesh, the selection, and
/// which edit view the pointer was last over.
///
/// Views get read access through the getters; every write goes through the
/// input handlers below, which funnel into [`Editor::execute_command`].
pub struct Editor {
    document: Document,
    select_tool: SelectTool,
    grid: GridSettings,
    settings: EditorSettings,

    /// The edit view the pointer last moved over. Decides which way the
    /// translate keys push the selection.
    active_axis: Option<Axis>,

    /// Messages or status for UI.
    pub status_message: String,
    pub error_message: Option<String>,
}

impl Editor {
    pub fn new(settings: EditorSettings) -> Self {
        let document = initial_document(&settings);
        Self {
            document,
            select_tool: SelectTool::new(),
            grid: GridSettings::new(settings.cell_size),
            settings,
            active_axis: None,
            status_message: "Ready.".to_string(),
            error_message: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns and clears the document's dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        self.document.take_dirty()
    }

    pub fn selection(&self) -> &SelectTool {
        &self.select_tool
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn active_axis(&self) -> Option<Axis> {
        self.active_axis
    }

    // ----------------- Pointer & keyboard input -----------------

    pub fn pointer_moved(&mut self, axis: Axis) {
        self.active_axis = Some(axis);
    }

    pub fn primary_pressed(&mut self, axis: Axis, pos: Pos2) {
        self.select_tool.press(axis, pos);
        self.refresh_axis(axis);
    }

    pub fn primary_dragged(&mut self, axis: Axis, pos: Pos2) {
        self.select_tool.drag(axis, pos);
        self.refresh_axis(axis);
    }

    pub fn primary_released(&mut self, axis: Axis) {
        self.select_tool.release(axis);
        self.refresh_axis(axis);
    }

    /// Right click: place a cube, or clear the selection when Ctrl or Shift
    /// is held.
    pub fn secondary_clicked(&mut self, axis: Axis, pos: Pos2, modifiers: Modifiers) {
        if modifiers.ctrl || modifiers.shift {
            self.execute_command(Command::ClearSelection);
        } else {
            self.execute_command(Command::BuildCube { axis, screen: pos });
        }
    }

    pub fn key_pressed(&mut self, direction: Direction) {
        self.execute_command(Command::Translate(direction));
    }

    pub fn clear_selection(&mut self) {
        self.execute_command(Command::ClearSelection);
    }

    /// Runs the membership test of every view against the current mesh.
    /// Called once per frame so a vertex that moves into a held rectangle
    /// joins the selection.
    pub fn refresh_selection(&mut self) {
        for axis in Axis::ALL {
            self.refresh_axis(axis);
        }
    }

    fn refresh_axis(&mut self, axis: Axis) {
        self.select_tool
            .refresh(axis, &self.document, self.grid.cell_size);
    }

    /// Drops the mesh and the selection and starts over from the configured
    /// initial shape.
    pub fn reset_document(&mut self) {
        let seed = initial_document(&self.settings);
        self.execute_command(Command::ClearSelection);
        self.execute_command(Command::ReplaceMesh {
            vertices: seed.vertices().to_vec(),
            indices: seed.indices().to_vec(),
        });
        if self.error_message.is_none() {
            self.status_message = "Document reset.".to_string();
            info!("Document reset");
        }
    }

    // ----------------- Commands -----------------

    /// Execute a command, log errors and keep them for the status bar.
    pub fn execute_command(&mut self, command: Command) {
        match self.apply(command) {
            Ok(message) => {
                self.status_message = message;
                self.error_message = None;
            }
            Err(err) => {
                error!("Command failed: {}", err);
                self.error_message = Some(format!("Error executing command: {}", err));
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<String, EditorError> {
        match command {
            Command::BuildCube { axis, screen } => {
                let center = self.placement_anchor(axis, screen);
                self.build_cube(center)?;
                info!("Placed cube at {:?} from the {} view", center, axis.label());
                Ok(format!(
                    "Cube placed at ({}, {}, {}).",
                    center.x, center.y, center.z
                ))
            }
            Command::Translate(direction) => {
                let axis = match self.active_axis {
                    Some(axis) => axis,
                    None => return Ok("Hover a view before moving vertices.".to_string()),
                };
                let delta = commands::translation_delta(axis, direction) * self.settings.translate_step;
                let moved = commands::translate_selected(&mut self.document, &self.select_tool, delta)?;
                Ok(format!(
                    "Moved {} vertices {} in the {} view.",
                    moved,
                    direction.name(),
                    axis.label()
                ))
            }
            Command::ClearSelection => {
                self.select_tool.clear();
                info!("Selection cleared");
                Ok("Selection cleared.".to_string())
            }
            Command::ReplaceMesh { vertices, indices } => {
                self.document.replace_all(vertices, indices)?;
                // Handles past the new vertex count no longer name anything.
                let count = self.document.vertex_count();
                self.select_tool.retain(|id| id.index() < count);
                Ok(format!("Mesh replaced ({} vertices).", count))
            }
        }
    }

    /// World position a right click at the view-local pixel `screen` anchors a
    /// new cube on: the snapped grid point (or cell center) on the view's
    /// zero plane.
    pub fn placement_anchor(&self, axis: Axis, screen: Pos2) -> Vertex {
        let snapped = if self.settings.place_on_cell_center {
            self.grid.cell_center(screen)
        } else {
            self.grid.snap_position(screen)
        };
        axis.screen_to_world(snapped, self.grid.cell_size, 0.0)
    }

    fn build_cube(&mut self, center: Vertex) -> Result<(), EditorError> {
        let mut start = self.document.next_start_index();
        let vertex_count = self.document.vertex_count() as u32;
        if start != vertex_count {
            // Trailing vertices no triangle references; address the new
            // corners by their actual slots.
            warn!(
                "Index buffer ends at {} but there are {} vertices",
                start, vertex_count
            );
            start = vertex_count;
        }
        let cube = generator::build_cube(center, self.settings.cube_size, start);
        self.document.append(&cube.vertices, &cube.indices)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

fn initial_document(settings: &EditorSettings) -> Document {
    if settings.seed_demo_shape {
        Document::with_demo_shape()
    } else {
        Document::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::VertexId;
    use assert_approx_eq::assert_approx_eq;
    use egui::pos2;
    use glam::Vec3;

    fn empty_editor(cell_size: f32) -> Editor {
        Editor::new(EditorSettings {
            cell_size,
            cube_size: 1.0,
            seed_demo_shape: false,
            ..EditorSettings::default()
        })
    }

    fn editor_with(points: Vec<Vec3>) -> Editor {
        let mut editor = empty_editor(40.0);
        editor.execute_command(Command::ReplaceMesh {
            vertices: points,
            indices: vec![],
        });
        editor
    }

    fn box_select(editor: &mut Editor, axis: Axis, a: Pos2, b: Pos2) {
        editor.pointer_moved(axis);
        editor.primary_pressed(axis, a);
        editor.primary_dragged(axis, b);
        editor.primary_released(axis);
    }

    #[test]
    fn test_demo_shape_seeded_by_default() {
        let editor = Editor::default();
        assert_eq!(editor.document().vertex_count(), 4);
        assert_eq!(editor.document().indices(), &[0, 1, 2, 2, 3, 0]);
    }

    #[test]
    fn test_right_click_center_builds_cube_at_origin() {
        let mut editor = empty_editor(40.0);
        editor.secondary_clicked(Axis::Z, pos2(0.0, 0.0), Modifiers::default());

        let doc = editor.document();
        assert_eq!(doc.vertex_count(), 8);
        assert_eq!(doc.index_count(), 36);
        assert!(doc.indices().iter().all(|&i| i < 8));
        let centroid = doc.vertices().iter().copied().sum::<Vec3>() / 8.0;
        assert_approx_eq!(centroid.x, 0.0);
        assert_approx_eq!(centroid.y, 0.0);
        assert_approx_eq!(centroid.z, 0.0);
    }

    #[test]
    fn test_second_cube_offsets_indices() {
        let mut editor = Editor::new(EditorSettings {
            cell_size: 40.0,
            ..EditorSettings::default()
        });
        editor.secondary_clicked(Axis::Y, pos2(81.0, -38.0), Modifiers::default());

        let doc = editor.document();
        assert_eq!(doc.vertex_count(), 12);
        assert!(doc.indices()[6..].iter().all(|&i| (4..12).contains(&i)));
        assert!(doc.validate().is_ok());

        // Top view: (2, -1) grid units lands on x = 2, z = -1, y = 0.
        let centroid = doc.vertices()[4..].iter().copied().sum::<Vec3>() / 8.0;
        assert_approx_eq!(centroid.x, 2.0);
        assert_approx_eq!(centroid.y, 0.0);
        assert_approx_eq!(centroid.z, -1.0);
    }

    #[test]
    fn test_cell_center_placement() {
        let mut editor = Editor::new(EditorSettings {
            cell_size: 40.0,
            place_on_cell_center: true,
            seed_demo_shape: false,
            ..EditorSettings::default()
        });
        let anchor = editor.placement_anchor(Axis::Z, pos2(10.0, 10.0));
        assert_eq!(anchor, Vec3::new(0.5, -0.5, 0.0));
        editor.secondary_clicked(Axis::Z, pos2(10.0, 10.0), Modifiers::default());
        assert_eq!(editor.document().vertex_count(), 8);
    }

    #[test]
    fn test_select_then_translate_right() {
        let mut editor = editor_with(vec![Vec3::ZERO, Vec3::new(3.0, 3.0, 0.0)]);
        box_select(&mut editor, Axis::Z, pos2(-10.0, -10.0), pos2(10.0, 10.0));
        assert_eq!(editor.selection().len(), 1);

        editor.key_pressed(Direction::Right);
        assert_eq!(editor.document().position(VertexId(0)), Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(editor.document().position(VertexId(1)), Some(Vec3::new(3.0, 3.0, 0.0)));
    }

    #[test]
    fn test_translate_follows_active_view() {
        let mut editor = editor_with(vec![Vec3::ZERO]);
        box_select(&mut editor, Axis::Z, pos2(-10.0, -10.0), pos2(10.0, 10.0));

        editor.pointer_moved(Axis::X);
        editor.key_pressed(Direction::Left);
        assert_eq!(editor.document().position(VertexId(0)), Some(Vec3::Z));

        editor.pointer_moved(Axis::Y);
        editor.key_pressed(Direction::Up);
        assert_eq!(editor.document().position(VertexId(0)), Some(Vec3::ZERO));
    }

    #[test]
    fn test_translate_without_active_view_is_noop() {
        let mut editor = editor_with(vec![Vec3::ZERO]);
        editor.primary_pressed(Axis::Z, pos2(-10.0, -10.0));
        editor.primary_dragged(Axis::Z, pos2(10.0, 10.0));
        assert_eq!(editor.active_axis(), None);
        let rev = editor.document().revision();
        editor.key_pressed(Direction::Up);
        assert_eq!(editor.document().revision(), rev);
    }

    #[test]
    fn test_same_vertex_from_two_views_counts_once() {
        let mut editor = editor_with(vec![Vec3::new(2.0, 1.0, 0.0), Vec3::new(-4.0, -4.0, 4.0)]);
        // Front view sees (2, 1, 0) at (80, -40); side view at (0, -40).
        box_select(&mut editor, Axis::Z, pos2(60.0, -60.0), pos2(100.0, -20.0));
        box_select(&mut editor, Axis::X, pos2(-20.0, -60.0), pos2(20.0, -20.0));
        assert_eq!(editor.selection().selected().collect::<Vec<_>>(), vec![VertexId(0)]);
    }

    #[test]
    fn test_selection_survives_other_view_drag() {
        let mut editor = editor_with(vec![Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)]);
        box_select(&mut editor, Axis::Z, pos2(-10.0, -10.0), pos2(10.0, 10.0));
        // Top view box around (5, 0, 0) only.
        box_select(&mut editor, Axis::Y, pos2(190.0, -10.0), pos2(210.0, 10.0));
        editor.refresh_selection();
        assert!(editor.selection().is_selected(VertexId(0)));
        assert!(editor.selection().is_selected(VertexId(1)));

        editor.secondary_clicked(Axis::Y, pos2(0.0, 0.0), Modifiers { ctrl: true, ..Default::default() });
        assert!(editor.selection().is_empty());
        assert_eq!(editor.selection().rect(Axis::Z), None);
        assert_eq!(editor.document().vertex_count(), 2);
    }

    #[test]
    fn test_held_rect_picks_up_vertex_moved_into_it() {
        let mut editor = editor_with(vec![Vec3::ZERO]);
        // Held front-view box around world (1, 0, 0), empty for now.
        box_select(&mut editor, Axis::Z, pos2(20.0, -20.0), pos2(60.0, 20.0));
        assert!(editor.selection().is_empty());

        editor.execute_command(Command::ReplaceMesh {
            vertices: vec![Vec3::new(1.0, 0.0, 0.0)],
            indices: vec![],
        });
        editor.refresh_selection();
        assert_eq!(editor.selection().len(), 1);
    }

    #[test]
    fn test_replace_mesh_purges_stale_selection() {
        let mut editor = editor_with(vec![Vec3::ZERO, Vec3::ZERO, Vec3::ZERO]);
        box_select(&mut editor, Axis::Z, pos2(-10.0, -10.0), pos2(10.0, 10.0));
        assert_eq!(editor.selection().len(), 3);

        editor.execute_command(Command::ReplaceMesh {
            vertices: vec![Vec3::new(9.0, 9.0, 9.0)],
            indices: vec![],
        });
        assert_eq!(editor.selection().selected().collect::<Vec<_>>(), vec![VertexId(0)]);
    }

    #[test]
    fn test_invalid_replace_keeps_document() {
        let mut editor = editor_with(vec![Vec3::ZERO]);
        editor.execute_command(Command::ReplaceMesh {
            vertices: vec![Vec3::ZERO],
            indices: vec![0, 0, 4],
        });
        assert!(editor.error_message.is_some());
        assert_eq!(editor.document().vertex_count(), 1);
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let mut editor = Editor::default();
        editor.secondary_clicked(Axis::Z, pos2(0.0, 0.0), Modifiers::default());
        box_select(&mut editor, Axis::Z, pos2(-100.0, -100.0), pos2(100.0, 100.0));
        let rev = editor.document().revision();
        editor.reset_document();
        assert_eq!(editor.document().vertex_count(), 4);
        assert!(editor.document().revision() > rev);
        assert!(editor.selection().is_empty());
        assert_eq!(editor.status_message, "Document reset.");

        let mut empty = empty_editor(40.0);
        empty.secondary_clicked(Axis::Z, pos2(0.0, 0.0), Modifiers::default());
        empty.reset_document();
        assert!(empty.document().is_empty());
    }
}
