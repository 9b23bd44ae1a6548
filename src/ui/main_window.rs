//! # Main Window Module
//!
//! The eframe application: a menu bar on top, a status bar at the bottom and
//! the four views in a 2x2 grid in between.
//!
//! ```text
//! +-------------+-------------+
//! | Front (Z)   | Render      |
//! +-------------+-------------+
//! | Side (X)    | Top (Y)     |
//! +-------------+-------------+
//! ```
//!
//! Each frame runs the input handlers of every view against the one
//! [`Editor`], refreshes the selection, and repaints everything from the
//! current document.

use std::error::Error;

use eframe::egui::{self, Color32, Key, Pos2, Rect};
use log::info;

use crate::editor::{Direction, Editor};
use crate::map::Axis;
use crate::ui::menu::MenuBar;
use crate::ui::status_bar::StatusBar;
use crate::ui::{EditView, RenderView, ViewOptions};

const TRANSLATE_KEYS: [(Key, Direction); 4] = [
    (Key::ArrowUp, Direction::Up),
    (Key::ArrowDown, Direction::Down),
    (Key::ArrowLeft, Direction::Left),
    (Key::ArrowRight, Direction::Right),
];

pub struct MeshEdApp {
    editor: Editor,
    menu: MenuBar,
    status_bar: StatusBar,
    edit_views: [EditView; 3],
    render_view: RenderView,
    options: ViewOptions,
}

impl MeshEdApp {
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            menu: MenuBar::new(),
            status_bar: StatusBar::new(),
            edit_views: Axis::ALL.map(EditView::new),
            render_view: RenderView::new(),
            options: ViewOptions::default(),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (pressed, escape) = {
            let input = ctx.input();
            let pressed: Vec<Direction> = TRANSLATE_KEYS
                .iter()
                .filter(|(key, _)| input.key_pressed(*key))
                .map(|&(_, dir)| dir)
                .collect();
            (pressed, input.key_pressed(Key::Escape))
        };

        for direction in pressed {
            self.editor.key_pressed(direction);
        }
        if escape {
            self.editor.clear_selection();
        }
    }

    fn show_views(&mut self, ui: &mut egui::Ui) {
        let full = ui.available_rect_before_wrap();
        let mid = full.center();
        let quadrant = |min: Pos2, max: Pos2| Rect::from_min_max(min, max);

        let top_left = quadrant(full.min, mid);
        let top_right = quadrant(Pos2::new(mid.x, full.top()), Pos2::new(full.right(), mid.y));
        let bottom_left = quadrant(Pos2::new(full.left(), mid.y), Pos2::new(mid.x, full.bottom()));
        let bottom_right = quadrant(mid, full.max);

        for view in self.edit_views.iter_mut() {
            let rect = match view.axis() {
                Axis::Z => top_left,
                Axis::X => bottom_left,
                Axis::Y => bottom_right,
            };
            view.show(ui, rect, &mut self.editor, &self.options);
        }

        // Edit views may have moved or selected vertices this frame; pick up
        // anything that now sits inside a held rectangle before the render
        // view draws.
        self.editor.refresh_selection();
        self.render_view
            .show(ui, top_right, &self.editor, &self.options);
    }
}

impl eframe::App for MeshEdApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.menu.update(ctx, &mut self.editor, &mut self.options);
        if self.menu.quit_requested {
            frame.close();
        }

        self.status_bar.update(ctx, &self.editor);
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| self.show_views(ui));

        if self.editor.take_dirty() {
            ctx.request_repaint();
        }
    }
}

/// Runs the editor as a standalone egui application.
pub fn run_main_window(editor: Editor) -> Result<(), Box<dyn Error>> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 860.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Mesh Ed",
        native_options,
        Box::new(move |_cc| Box::new(MeshEdApp::new(editor))),
    );
    info!("Main window closed.");
    Ok(())
}
