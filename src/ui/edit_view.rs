//! Orthographic edit view: draws the grid, the projected mesh and the
//! selection rectangle for one axis, and forwards pointer input for that
//! axis to the editor.
//!
//! Everything the editor sees is in view-local pixels, origin at the center
//! of the view, y down.

use eframe::egui::{
    self, Align2, Color32, FontId, Modifiers, Painter, Pos2, Rect, Sense, Stroke, Vec2,
};

use crate::editor::Editor;
use crate::map::{Axis, Vertex};
use crate::ui::ViewOptions;

const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 22);
const GRID_LINE: Color32 = Color32::from_rgb(40, 40, 46);
const ORIGIN_LINE: Color32 = Color32::from_rgb(70, 70, 80);
const EDGE: Color32 = Color32::from_rgb(90, 110, 140);
const VERTEX: Color32 = Color32::from_rgb(200, 200, 200);
const SELECTED_VERTEX: Color32 = Color32::YELLOW;
const BAND: Color32 = Color32::WHITE;
const HOVER_CELL: Color32 = Color32::from_rgba_premultiplied(60, 60, 80, 60);

pub struct EditView {
    axis: Axis,

    /// Pointer position over this view, view-local.
    hover: Option<Pos2>,

    /// A primary press started in this view and has not been released.
    dragging: bool,
}

/// What one edit view saw of the pointer during a frame, in view-local pixels.
#[derive(Debug, Clone, Copy, Default)]
struct PointerSample {
    /// Set only while this view is the topmost thing under the pointer.
    hover: Option<Pos2>,
    pos: Option<Pos2>,
    /// The primary button went down on this view this frame.
    pressed: bool,
    primary_down: bool,
    secondary_click: Option<Pos2>,
    modifiers: Modifiers,
}

impl EditView {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            hover: None,
            dragging: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Called each frame with the screen rectangle this view occupies.
    pub fn show(&mut self, ui: &mut egui::Ui, rect: Rect, editor: &mut Editor, options: &ViewOptions) {
        let id = ui.id().with(("edit_view", self.axis.label()));
        let response = ui.interact(rect, id, Sense::click_and_drag());
        let origin = rect.center();

        self.handle_input(ui, &response, origin, editor);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.draw_grid(&painter, rect, origin, editor.grid().cell_size);
        if options.show_cell_highlight {
            self.draw_hover_cell(&painter, origin, editor);
        }
        self.draw_mesh(&painter, origin, editor, options);
        self.draw_band(&painter, origin, editor);

        let active = editor.active_axis() == Some(self.axis);
        painter.text(
            rect.left_top() + Vec2::new(8.0, 6.0),
            Align2::LEFT_TOP,
            self.axis.view_name(),
            FontId::proportional(14.0),
            if active { Color32::WHITE } else { Color32::GRAY },
        );
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));
    }

    // ============================================================
    // Input
    // ============================================================

    fn handle_input(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        origin: Pos2,
        editor: &mut Editor,
    ) {
        let (any_pressed, primary_down, interact_pos, modifiers) = {
            let input = ui.input();
            (
                input.pointer.any_pressed(),
                input.pointer.primary_down(),
                input.pointer.interact_pos(),
                input.modifiers,
            )
        };
        let to_local = |p: Pos2| (p - origin).to_pos2();

        // `response` only reports hover and presses when this view is the
        // topmost layer under the pointer, so open menus shadow it.
        let sample = PointerSample {
            hover: response.hover_pos().map(to_local),
            pos: interact_pos.map(to_local),
            pressed: any_pressed && primary_down && response.is_pointer_button_down_on(),
            primary_down,
            secondary_click: if response.secondary_clicked() {
                response.interact_pointer_pos().map(to_local)
            } else {
                None
            },
            modifiers,
        };
        self.route(sample, editor);
    }

    /// Feeds one frame of pointer state to the editor.
    fn route(&mut self, sample: PointerSample, editor: &mut Editor) {
        self.hover = sample.hover;
        if self.hover.is_some() {
            editor.pointer_moved(self.axis);
        }

        if sample.pressed {
            if let Some(p) = sample.pos {
                editor.primary_pressed(self.axis, p);
                self.dragging = true;
            }
        } else if self.dragging {
            if sample.primary_down {
                if let Some(p) = sample.pos {
                    editor.primary_dragged(self.axis, p);
                }
            } else {
                editor.primary_released(self.axis);
                self.dragging = false;
            }
        }

        if let Some(p) = sample.secondary_click {
            editor.secondary_clicked(self.axis, p, sample.modifiers);
        }
    }

    // ============================================================
    // Drawing
    // ============================================================

    /// Grid lines every cell, anchored so that one line pair crosses the
    /// view origin.
    fn draw_grid(&self, painter: &Painter, rect: Rect, origin: Pos2, cell_size: f32) {
        let stroke = Stroke::new(1.0, GRID_LINE);
        for x in grid_lines(rect.left(), rect.right(), origin.x, cell_size) {
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        }
        for y in grid_lines(rect.top(), rect.bottom(), origin.y, cell_size) {
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        }

        let origin_stroke = Stroke::new(1.0, ORIGIN_LINE);
        painter.line_segment(
            [Pos2::new(origin.x, rect.top()), Pos2::new(origin.x, rect.bottom())],
            origin_stroke,
        );
        painter.line_segment(
            [Pos2::new(rect.left(), origin.y), Pos2::new(rect.right(), origin.y)],
            origin_stroke,
        );
    }

    fn draw_hover_cell(&self, painter: &Painter, origin: Pos2, editor: &Editor) {
        if let Some(hover) = self.hover {
            let grid = editor.grid();
            let center = origin + grid.cell_center(hover).to_vec2();
            let cell = Rect::from_center_size(center, Vec2::splat(grid.cell_size));
            painter.rect_filled(cell, 0.0, HOVER_CELL);
        }
    }

    fn draw_mesh(&self, painter: &Painter, origin: Pos2, editor: &Editor, options: &ViewOptions) {
        let doc = editor.document();
        let cell_size = editor.grid().cell_size;
        let project = |v: Vertex| origin + self.axis.to_screen(v, cell_size).to_vec2();

        if options.show_wireframe {
            let vertices = doc.vertices();
            let stroke = Stroke::new(1.0, EDGE);
            for tri in doc.indices().chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| project(vertices[i as usize]));
                painter.line_segment([a, b], stroke);
                painter.line_segment([b, c], stroke);
                painter.line_segment([c, a], stroke);
            }
        }

        let marker = Vec2::splat(editor.settings().vertex_marker_size);
        let selection = editor.selection();
        for (id, vertex) in doc.iter() {
            let selected = selection.is_selected(id);
            // Selected markers stay visible with points hidden.
            if !options.show_points && !selected {
                continue;
            }
            let color = if selected { SELECTED_VERTEX } else { VERTEX };
            painter.rect_filled(Rect::from_center_size(project(vertex), marker), 0.0, color);
        }
    }

    fn draw_band(&self, painter: &Painter, origin: Pos2, editor: &Editor) {
        let band = match editor.selection().rect(self.axis) {
            Some(band) => band,
            None => return,
        };
        let screen = band.to_screen_rect(origin);
        painter.rect_stroke(screen, 0.0, Stroke::new(1.0, BAND));

        // Size in cells, next to the trailing corner.
        let cell_size = editor.grid().cell_size;
        painter.text(
            screen.right_bottom() + Vec2::new(4.0, 2.0),
            Align2::LEFT_TOP,
            format!("{:.1} x {:.1}", band.width() / cell_size, band.height() / cell_size),
            FontId::monospace(11.0),
            BAND,
        );
    }
}

/// Positions of the grid lines between `min` and `max` that are a whole
/// number of cells away from `origin`. `cell_size` must be positive.
fn grid_lines(min: f32, max: f32, origin: f32, cell_size: f32) -> impl Iterator<Item = f32> {
    let first = ((min - origin) / cell_size).ceil() as i64;
    let last = ((max - origin) / cell_size).floor() as i64;
    (first..=last).map(move |k| origin + k as f32 * cell_size)
}
