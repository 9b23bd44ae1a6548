// src/ui/status_bar.rs

use eframe::egui::{self, Color32, Context};

use crate::editor::Editor;

#[derive(Default)]
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, ctx: &Context, editor: &Editor) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let doc = editor.document();
            let active = editor
                .active_axis()
                .map_or("-", |axis| axis.label());

            ui.horizontal(|ui| {
                match &editor.error_message {
                    Some(err) => ui.colored_label(Color32::LIGHT_RED, err.as_str()),
                    None => ui.label(editor.status_message.as_str()),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Active: {}  |  Vertices: {}  Triangles: {}  Selected: {}",
                        active,
                        doc.vertex_count(),
                        doc.triangle_count(),
                        editor.selection().len()
                    ));
                });
            });
        });
    }
}
