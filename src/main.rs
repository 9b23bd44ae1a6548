//! # Mesh Ed Main Entry Point
//!
//! Mesh Ed edits one shared triangle mesh through three orthographic views
//! (front, side, top) while a fourth view renders it in perspective. This
//! file sets up logging, resolves the settings and starts the eframe/egui
//! event loop.
//!
//! Usage: `mesh-ed [config.json]` (or set `MESH_ED_CONFIG`).
//!
//! ## License
//! Licensed under the MIT License.

use log::info;
use std::error::Error;

use mesh_ed::config::EditorSettings;
use mesh_ed::editor::Editor;
use mesh_ed::ui::run_main_window;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("Mesh Ed starting...");

    let config_path = std::env::args().nth(1);
    let settings = EditorSettings::resolve(config_path.as_deref());
    info!(
        "Cell size {}px, cube size {}, demo shape: {}",
        settings.cell_size, settings.cube_size, settings.seed_demo_shape
    );

    let editor = Editor::new(settings);
    run_main_window(editor)?;

    info!("Mesh Ed exiting.");
    Ok(())
}
