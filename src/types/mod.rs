/// Core data types for the graph snapshot layer
///
/// This module defines the fundamental types the persistence layer operates on:
/// - Vertex: Graph node with properties
/// - Edge: Graph relationship with properties
/// - GraphElement: Tagged slot in the id sequence (Tombstone | Vertex | Edge)
/// - Snapshot: Point-in-time view handed to save, reproduced by load

pub mod edge;
pub mod element;
pub mod vertex;

pub use edge::Edge;
pub use element::{GraphElement, Snapshot};
pub use vertex::Vertex;
