//! DAG construction: chunking, bounded fan-out, and assembly
//!
//! This module turns arbitrary-size content into a single-rooted graph of
//! size-bounded nodes:
//!
//! - **[`Node`]**: the unit of storage - a typed record with an optional
//!   inline payload, an ordered link list, a logical size, and its
//!   indirection depth
//! - **[`chunk`]**: splits a byte payload into fixed-size leaf slices
//! - **[`create_file_dag`] / [`create_folder_dag`] / [`create_metadata_dag`]**:
//!   the three assembly operations, all returning a caller-owned [`Dag`]
//! - **[`Metadata`]**: the off-chain record fed to the metadata assembler
//!
//! # Architecture
//!
//! A file larger than one chunk becomes leaves plus, when the leaf count
//! exceeds the fan-out limit, layers of inlink nodes:
//!
//! ```text
//!                 FileRoot (link_depth = 2)
//!                /         |        \
//!         FileInlink   FileInlink   FileInlink     (link_depth = 1)
//!         /  | | \      /  | | \       /  \
//!        c0 c1 c2 c3   c4 c5 c6 c7    c8  c9       (FileChunk leaves)
//! ```
//!
//! Batching is strictly left-to-right, so reconstruction replays the
//! original byte order and identical inputs always produce identical
//! roots. Folders follow the same collapse over already-built child
//! links instead of chunks; metadata records serialize first and then
//! take the file path under their own node kinds.
//!
//! Every constructed node is checked against the node size budget before
//! it is admitted, so no assembly ever emits a node consumers cannot
//! store or frame.

mod assembler;
mod chunker;
#[allow(clippy::module_inception)]
mod dag;
mod error;
mod metadata;
mod node;
mod reader;
mod tree;

pub use assembler::{
    create_file_dag, create_folder_dag, create_metadata_dag, DagOptions, DEFAULT_CHUNK_SIZE,
    DEFAULT_MAX_LINK_PER_NODE, NODE_OVERHEAD,
};
pub use chunker::chunk;
pub use dag::Dag;
pub use error::DagError;
pub use metadata::Metadata;
pub use node::{Node, NodeKind};
pub use reader::{read_bytes, read_file_bytes};
pub use tree::ensure_max_size;
