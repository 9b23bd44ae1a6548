// src/editor/mod.rs

pub mod commands;
pub mod core;
pub mod generator;
pub mod tools;

pub use commands::{Command, Direction};
pub use self::core::Editor;
pub use generator::{build_cube, Primitive};
pub use tools::{GridSettings, SelectTool, SelectionRect};
