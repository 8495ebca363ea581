/// Element payload codec boundary
///
/// The partition writer and reader are generic over this trait: they decide
/// *where* element bytes go (which file, which order, which framing) while a
/// codec decides *what* a vertex or edge payload looks like on the wire. An
/// engine with its own wire schema can swap in a different implementation
/// without touching the save/load machinery.

use super::error::SnapshotResult;
use super::wire;
use crate::types::{Edge, Vertex};
use std::io::{Read, Write};

/// Encodes and decodes single element payloads
///
/// Every payload must be self-delimiting: a matching decoder must be able to
/// consume exactly the bytes the encoder produced with no outer framing.
pub trait ElementCodec: Send + Sync {
    /// Encode a vertex payload onto the stream
    fn encode_vertex(&self, writer: &mut dyn Write, vertex: &Vertex) -> SnapshotResult<()>;

    /// Encode an edge payload onto the stream
    fn encode_edge(&self, writer: &mut dyn Write, edge: &Edge) -> SnapshotResult<()>;

    /// Decode a vertex payload from the stream
    fn decode_vertex(&self, reader: &mut dyn Read) -> SnapshotResult<Vertex>;

    /// Decode an edge payload from the stream
    fn decode_edge(&self, reader: &mut dyn Read) -> SnapshotResult<Edge>;
}

/// Default codec: varint ids, length-prefixed label, JSON property blob
///
/// Layout:
/// - Vertex: `id:varint | label:string | properties:blob`
/// - Edge:   `id:varint | source:varint | target:varint | label:string | properties:blob`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonElementCodec;

impl ElementCodec for JsonElementCodec {
    fn encode_vertex(&self, writer: &mut dyn Write, vertex: &Vertex) -> SnapshotResult<()> {
        wire::write_varint(writer, vertex.id)?;
        wire::write_string(writer, &vertex.label)?;
        let props = serde_json::to_vec(&vertex.properties)?;
        wire::write_blob(writer, &props)
    }

    fn encode_edge(&self, writer: &mut dyn Write, edge: &Edge) -> SnapshotResult<()> {
        wire::write_varint(writer, edge.id)?;
        wire::write_varint(writer, edge.source)?;
        wire::write_varint(writer, edge.target)?;
        wire::write_string(writer, &edge.label)?;
        let props = serde_json::to_vec(&edge.properties)?;
        wire::write_blob(writer, &props)
    }

    fn decode_vertex(&self, reader: &mut dyn Read) -> SnapshotResult<Vertex> {
        let id = wire::read_varint(reader)?;
        let label = wire::read_string(reader)?;
        let props = wire::read_blob(reader)?;
        let properties = serde_json::from_slice(&props)?;
        Ok(Vertex::new(id, label, properties))
    }

    fn decode_edge(&self, reader: &mut dyn Read) -> SnapshotResult<Edge> {
        let id = wire::read_varint(reader)?;
        let source = wire::read_varint(reader)?;
        let target = wire::read_varint(reader)?;
        let label = wire::read_string(reader)?;
        let props = wire::read_blob(reader)?;
        let properties = serde_json::from_slice(&props)?;
        Ok(Edge::new(id, source, target, label, properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_vertex_payload_roundtrip() {
        let codec = JsonElementCodec;
        let vertex = Vertex::new(42, "Person", json!({"name": "Alice", "age": 30}));

        let mut buf = Vec::new();
        codec.encode_vertex(&mut buf, &vertex).unwrap();

        let decoded = codec.decode_vertex(&mut Cursor::new(buf)).unwrap();
        assert_eq!(decoded, vertex);
    }

    #[test]
    fn test_edge_payload_roundtrip() {
        let codec = JsonElementCodec;
        let edge = Edge::new(7, 0, 42, "KNOWS", json!({"since": 2020}));

        let mut buf = Vec::new();
        codec.encode_edge(&mut buf, &edge).unwrap();

        let decoded = codec.decode_edge(&mut Cursor::new(buf)).unwrap();
        assert_eq!(decoded, edge);
    }

    #[test]
    fn test_payloads_are_self_delimiting() {
        // Two payloads written back to back must decode back to back.
        let codec = JsonElementCodec;
        let first = Vertex::new(0, "Person", json!({"name": "Alice"}));
        let second = Vertex::new(1, "Person", json!({"name": "Bob"}));

        let mut buf = Vec::new();
        codec.encode_vertex(&mut buf, &first).unwrap();
        codec.encode_vertex(&mut buf, &second).unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(codec.decode_vertex(&mut cursor).unwrap(), first);
        assert_eq!(codec.decode_vertex(&mut cursor).unwrap(), second);
        assert_eq!(cursor.position() as usize, cursor.get_ref().len());
    }
}
