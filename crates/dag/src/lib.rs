/**
 * Content-addressed DAG construction.
 * Turns byte payloads and child listings into trees of
 *  size-bounded, hash-identified nodes: files and metadata
 *  records are chunked into leaves, folders point at
 *  already-built child graphs, and everything above the
 *  leaves is batched under a configurable fan-out limit.
 */
pub mod dag;
/**
 * Block codec and identifier primitives.
 * DAG-CBOR canonical encoding for linked-data types,
 *  plus CID construction (CIDv1, BLAKE3) and the
 *  (cid, size) link pair nodes reference each other by.
 */
pub mod linked_data;

pub mod prelude {
    pub use crate::dag::{
        create_file_dag, create_folder_dag, create_metadata_dag, read_bytes, read_file_bytes,
        Dag, DagError, DagOptions, Metadata, Node, NodeKind,
    };
    pub use crate::linked_data::{BlockEncoded, Cid, CidError, CodecError, DagCborCodec, Link};
}
