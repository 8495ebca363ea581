use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Edge (relationship) in the graph
///
/// Represents a directed edge with:
/// - Unique identifier (its position in the snapshot sequence)
/// - Source vertex ID
/// - Target vertex ID
/// - Label (type/class of the edge)
/// - Properties (arbitrary JSON data)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    /// Unique identifier
    pub id: u64,

    /// Source vertex ID
    pub source: u64,

    /// Target vertex ID
    pub target: u64,

    /// Edge label (e.g., "KNOWS", "WORKS_FOR")
    pub label: String,

    /// Properties stored as JSON
    pub properties: JsonValue,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        id: u64,
        source: u64,
        target: u64,
        label: impl Into<String>,
        properties: JsonValue,
    ) -> Self {
        Self {
            id,
            source,
            target,
            label: label.into(),
            properties,
        }
    }

    /// Create an edge with an empty property map
    pub fn new_empty(id: u64, source: u64, target: u64, label: impl Into<String>) -> Self {
        Self::new(
            id,
            source,
            target,
            label,
            JsonValue::Object(serde_json::Map::new()),
        )
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edge_creation() {
        let edge = Edge::new(2, 0, 1, "KNOWS", json!({"since": 2020}));

        assert_eq!(edge.id, 2);
        assert_eq!(edge.source, 0);
        assert_eq!(edge.target, 1);
        assert_eq!(edge.label, "KNOWS");
        assert_eq!(edge.get_property("since"), Some(&json!(2020)));
    }

    #[test]
    fn test_edge_empty() {
        let edge = Edge::new_empty(5, 3, 4, "FOLLOWS");

        assert_eq!(edge.label, "FOLLOWS");
        assert_eq!(edge.get_property("since"), None);
    }
}
