use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Vertex (node) in the graph
///
/// Represents a graph vertex with:
/// - Unique identifier (its position in the snapshot sequence)
/// - Label (type/class of the vertex)
/// - Properties (arbitrary JSON data)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    /// Unique identifier
    pub id: u64,

    /// Vertex label (e.g., "Person", "Company")
    pub label: String,

    /// Properties stored as JSON
    pub properties: JsonValue,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(id: u64, label: impl Into<String>, properties: JsonValue) -> Self {
        Self {
            id,
            label: label.into(),
            properties,
        }
    }

    /// Create a vertex with an empty property map
    pub fn new_empty(id: u64, label: impl Into<String>) -> Self {
        Self::new(id, label, JsonValue::Object(serde_json::Map::new()))
    }

    /// Get a property value by key
    pub fn get_property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: JsonValue) {
        if let JsonValue::Object(ref mut map) = self.properties {
            map.insert(key.into(), value);
        }
    }

    /// Check if vertex has a specific property
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.get(key).is_some()
    }
}
