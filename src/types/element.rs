use super::{Edge, Vertex};
use serde::{Deserialize, Serialize};

/// A single slot in the graph's ordered element sequence
///
/// Identity is positional: an element's id is its index in the snapshot's
/// sequence. Deleted ids are kept as `Tombstone` so that the ids of all
/// surviving elements stay stable for the lifetime of the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GraphElement {
    /// A deleted, never-reused id slot
    Tombstone,

    /// A live vertex
    Vertex(Vertex),

    /// A live edge
    Edge(Edge),
}

impl GraphElement {
    /// Check whether this slot holds a deleted element
    pub fn is_tombstone(&self) -> bool {
        matches!(self, GraphElement::Tombstone)
    }

    /// Get the contained vertex, if any
    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            GraphElement::Vertex(v) => Some(v),
            _ => None,
        }
    }

    /// Get the contained edge, if any
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            GraphElement::Edge(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Vertex> for GraphElement {
    fn from(v: Vertex) -> Self {
        GraphElement::Vertex(v)
    }
}

impl From<Edge> for GraphElement {
    fn from(e: Edge) -> Self {
        GraphElement::Edge(e)
    }
}

/// Point-in-time view of the graph handed to the persistence layer
///
/// A snapshot is created transiently for one save call and must not observe
/// concurrent mutation; the caller is responsible for holding whatever lock
/// the owning engine uses while the snapshot is read.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Smallest unused element id (monotonic allocation counter)
    pub next_id: u64,

    /// Ordered element sequence; index == element id
    pub elements: Vec<GraphElement>,
}

impl Snapshot {
    /// Create a snapshot from an element sequence and allocation counter
    pub fn new(next_id: u64, elements: Vec<GraphElement>) -> Self {
        Self { next_id, elements }
    }

    /// Number of id slots in the snapshot, tombstones included
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of live (non-tombstone) elements
    pub fn live_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_tombstone()).count()
    }
}
