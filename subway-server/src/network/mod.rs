//! Cross-line routing.
//!
//! Every query assembles one undirected graph from all line chains and
//! runs Dijkstra over it. Since all distances are positive, the first
//! time the target is settled its distance is minimal.

mod assembler;
mod cache;
mod error;
mod path;

pub use assembler::Network;
pub use cache::{PathCache, PathCacheConfig};
pub use error::PathError;
pub use path::Path;
