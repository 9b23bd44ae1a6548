//! # Configuration
//!
//! Editor preferences, stored as JSON. Every field has a default so a config
//! file only needs to name the values it changes.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable consulted when no config path is passed on the command line.
pub const CONFIG_ENV_VAR: &str = "MESH_ED_CONFIG";

/// Smallest grid cell, in pixels, the edit views will draw.
pub const MIN_CELL_SIZE: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Edge length of one grid cell, in edit-view pixels.
    pub cell_size: f32,
    /// Edge length of cubes placed with a right click, in world units.
    pub cube_size: f32,
    /// Distance a translate key moves the selection, in world units.
    pub translate_step: f32,
    /// Place cubes on the center of the clicked cell rather than on the
    /// nearest grid intersection.
    pub place_on_cell_center: bool,
    /// Start with the demonstration quad instead of an empty mesh.
    pub seed_demo_shape: bool,
    /// Side length of the square vertex markers, in pixels.
    pub vertex_marker_size: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            cube_size: 1.0,
            translate_step: 1.0,
            place_on_cell_center: false,
            seed_demo_shape: true,
            vertex_marker_size: 8.0,
        }
    }
}

impl EditorSettings {
    /// Reads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let settings: EditorSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size >= MIN_CELL_SIZE) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be at least {} px, got {}",
                MIN_CELL_SIZE, self.cell_size
            )));
        }
        if !(self.cube_size.is_finite() && self.cube_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cube_size must be positive, got {}",
                self.cube_size
            )));
        }
        if !self.translate_step.is_finite() {
            return Err(ConfigError::Invalid("translate_step must be finite".into()));
        }
        Ok(())
    }

    /// Resolves settings from an optional explicit path, falling back to
    /// `MESH_ED_CONFIG` and then to the defaults. Load failures are logged,
    /// never fatal.
    pub fn resolve(cli_path: Option<&str>) -> Self {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        let path = match cli_path.map(str::to_owned).or(env_path) {
            Some(p) => p,
            None => return Self::default(),
        };

        match Self::load(Path::new(&path)) {
            Ok(settings) => {
                info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                warn!("Ignoring config {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = EditorSettings::from_json(r#"{ "cell_size": 40.0 }"#).unwrap();
        assert_eq!(settings.cell_size, 40.0);
        assert_eq!(settings.cube_size, 1.0);
        assert!(settings.seed_demo_shape);
    }

    #[test]
    fn test_rejects_non_positive_cell_size() {
        let err = EditorSettings::from_json(r#"{ "cell_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_tiny_cell_size() {
        let err = EditorSettings::from_json(r#"{ "cell_size": 0.00001 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(EditorSettings::from_json(r#"{ "cell_size": 4.0 }"#).is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = EditorSettings::from_json("{ cell_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EditorSettings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
