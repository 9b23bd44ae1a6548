// src/error.rs

use std::io;

use thiserror::Error;

use crate::map::VertexId;

/// Invariant violations raised by the mesh store and the editor.
///
/// None of these are user-facing failures: they mean a caller handed the
/// store a buffer that breaks the vertex/index contract. The store rejects
/// the whole batch and stays unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("index buffer length {len} is not a multiple of 3")]
    MisalignedIndexBuffer { len: usize },

    #[error("vertex {0} is not present in the mesh")]
    UnknownVertex(VertexId),

    #[error("vertex coordinates must be finite")]
    NonFiniteCoordinate,
}

/// Errors raised while loading `EditorSettings`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}
