// src/map/vertex.rs
use std::fmt;

/// A vertex position in world space.
pub type Vertex = glam::Vec3;

/// Stable handle to a vertex stored in a [`Document`](crate::document::Document).
///
/// Two vertices with equal coordinates are still different vertices; the
/// selection and the translation code key off this handle, never off the
/// position. The handle is the vertex's slot in the store, and slots are
/// never reused because the store only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
