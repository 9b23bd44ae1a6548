// src/map/mod.rs
pub mod axis;
pub mod vertex;

pub use axis::Axis;
pub use vertex::{Vertex, VertexId};
