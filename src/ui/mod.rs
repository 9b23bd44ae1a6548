// src/ui/mod.rs
pub mod edit_view;
pub mod main_window;
pub mod menu;
pub mod render_view;
pub mod status_bar;

pub use edit_view::EditView;
pub use main_window::{run_main_window, MeshEdApp};
pub use render_view::RenderView;

/// Display toggles shared by the views, driven from the View menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_wireframe: bool,
    pub show_points: bool,
    pub show_cell_highlight: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_wireframe: true,
            show_points: true,
            show_cell_highlight: true,
        }
    }
}
