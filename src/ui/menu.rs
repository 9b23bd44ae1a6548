// src/ui/menu.rs

use eframe::egui::{self, Context};

use crate::editor::Editor;
use crate::ui::ViewOptions;

#[derive(Default)]
pub struct MenuBar {
    /// Set when the user picked File > Quit; the app closes the window.
    pub quit_requested: bool,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, ctx: &Context, editor: &mut Editor, options: &mut ViewOptions) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reset").clicked() {
                        editor.reset_document();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        self.quit_requested = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.button("Clear Selection (Esc)").clicked() {
                        editor.clear_selection();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.checkbox(&mut options.show_wireframe, "Wireframe").clicked() {
                        ui.close_menu();
                    }
                    if ui.checkbox(&mut options.show_points, "Points").clicked() {
                        ui.close_menu();
                    }
                    if ui.checkbox(&mut options.show_cell_highlight, "Hovered Cell").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });
    }
}
