// src/document/document.rs

use log::debug;

use crate::editor::generator;
use crate::error::EditorError;
use crate::map::{Vertex, VertexId};

/// The shared mesh every view reads from.
///
/// Vertices live in an append-only arena addressed by [`VertexId`]; the index
/// buffer is a flat triangle list over those slots. Only two operations write
/// to it: [`Document::append`] and [`Document::replace_all`]. Both validate
/// the incoming buffers and leave the document untouched on error.
#[derive(Debug, Clone, Default)]
pub struct Document {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,

    /// Bumped by every successful mutation; views cache derived data by it.
    revision: u64,

    /// Set by every mutation, cleared by the UI once it has requested a repaint.
    pub dirty: bool,
}

impl Document {
    /// Create a new empty Document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding the two-triangle quad new sessions start with.
    pub fn with_demo_shape() -> Self {
        let quad = generator::demo_quad();
        Self {
            vertices: quad.vertices,
            indices: quad.indices,
            revision: 0,
            dirty: true,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn position(&self, id: VertexId) -> Option<Vertex> {
        self.vertices.get(id.0).copied()
    }

    /// Iterates over every vertex handle together with its position.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), *v))
    }

    /// The offset new geometry must add to its local indices before it is
    /// appended: one past the largest index in use, or 0 for an empty buffer.
    ///
    /// Always compute this right before appending; never cache it.
    pub fn next_start_index(&self) -> u32 {
        self.indices.iter().max().map_or(0, |&max| max + 1)
    }

    /// Concatenates new vertices and indices onto the document. Existing
    /// vertices keep their handles and positions.
    pub fn append(&mut self, new_vertices: &[Vertex], new_indices: &[u32]) -> Result<(), EditorError> {
        check_vertices(new_vertices)?;
        check_indices(new_indices, self.vertices.len() + new_vertices.len())?;

        self.vertices.extend_from_slice(new_vertices);
        self.indices.extend_from_slice(new_indices);
        self.touch();
        debug!(
            "Appended {} vertices / {} indices (now {} / {})",
            new_vertices.len(),
            new_indices.len(),
            self.vertices.len(),
            self.indices.len()
        );
        Ok(())
    }

    /// Overwrites both buffers.
    pub fn replace_all(&mut self, vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<(), EditorError> {
        validate_buffers(&vertices, &indices)?;
        self.vertices = vertices;
        self.indices = indices;
        self.touch();
        Ok(())
    }

    /// Checks the vertex/index invariants of the current buffers.
    pub fn validate(&self) -> Result<(), EditorError> {
        validate_buffers(&self.vertices, &self.indices)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }
}

fn validate_buffers(vertices: &[Vertex], indices: &[u32]) -> Result<(), EditorError> {
    check_vertices(vertices)?;
    check_indices(indices, vertices.len())
}

fn check_vertices(vertices: &[Vertex]) -> Result<(), EditorError> {
    if vertices.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(EditorError::NonFiniteCoordinate)
    }
}

/// Every index must name an existing vertex and the buffer must hold whole
/// triangles.
fn check_indices(indices: &[u32], vertex_count: usize) -> Result<(), EditorError> {
    if indices.len() % 3 != 0 {
        return Err(EditorError::MisalignedIndexBuffer { len: indices.len() });
    }
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(EditorError::IndexOutOfRange { index, vertex_count }),
        None => Ok(()),
    }
}
