/// Index subsystem boundary
///
/// The snapshot layer accepts the engine's indices as an opaque parameter so
/// that a save call carries everything the engine considers part of one
/// consistent state, but it never serializes them: index persistence is owned
/// by the index subsystem itself.

use std::collections::HashMap;
use std::sync::Arc;

/// Marker for an engine index handed through the save path
///
/// The snapshot layer never looks inside an index; the trait only pins down
/// the thread-safety the parallel save phase requires.
pub trait GraphIndex: Send + Sync {}

/// The engine's named indices, passed through save without being serialized
pub type IndexRegistry = HashMap<String, Arc<dyn GraphIndex>>;
