use std::collections::BTreeMap;

use bytes::Bytes;

use crate::linked_data::{cid_for, BlockEncoded, DagCborCodec, Link, DAG_CBOR_CODE};

use super::chunker::chunk;
use super::dag::Dag;
use super::error::DagError;
use super::node::{Node, NodeKind};
use super::tree::{build_tree, insert_node, KindFamily};

/// Default chunk size for leaf payloads, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 65536;

/// Default maximum number of links a single node may hold.
pub const DEFAULT_MAX_LINK_PER_NODE: usize = 16;

/// Fixed allowance for the encoding envelope around a node's payload
/// (kind tag, field keys, link list framing, a reasonable name).
///
/// A leaf holding a full `chunk_size` payload necessarily encodes to
/// slightly more than `chunk_size`, so the node budget every assembler
/// enforces is `chunk_size + NODE_OVERHEAD`. Part of the wire contract:
/// raising it would admit nodes older consumers reject.
pub const NODE_OVERHEAD: usize = 256;

/// Tuning for an assembly call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DagOptions {
    /// Size of each leaf payload slice, in bytes.
    pub chunk_size: usize,
    /// Maximum number of links per node.
    pub max_link_per_node: usize,
}

impl Default for DagOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_link_per_node: DEFAULT_MAX_LINK_PER_NODE,
        }
    }
}

impl DagOptions {
    /// The hard bound on any node's canonical encoding under these
    /// options.
    pub fn max_node_size(&self) -> usize {
        self.chunk_size + NODE_OVERHEAD
    }

    fn validate(&self) -> Result<(), DagError> {
        if self.chunk_size == 0 {
            return Err(DagError::InvalidOptions("chunk_size must be positive"));
        }
        if self.max_link_per_node == 0 {
            return Err(DagError::InvalidOptions(
                "max_link_per_node must be positive",
            ));
        }
        Ok(())
    }
}

/// Assemble a file payload into a single-rooted DAG.
///
/// Content that fits in one node becomes a lone `FileRoot` holding the
/// payload inline. Anything larger is chunked into `FileChunk` leaves
/// and collapsed under the fan-out limit, with the root carrying the
/// name and the full logical size.
pub fn create_file_dag(
    data: Bytes,
    name: Option<String>,
    options: &DagOptions,
) -> Result<Dag, DagError> {
    options.validate()?;
    assemble_payload(data, name, KindFamily::FILE, NodeKind::FileChunk, options)
}

/// Assemble a folder over already-built child graphs.
///
/// No chunking: folders hold no payload bytes, only ordered references
/// to child roots constructed by earlier assembly calls. The returned
/// map holds the folder's own nodes; compose it with the children's
/// maps via [`Dag::merge`]. `total_size` is caller-supplied, since the
/// sum of the children is not recomputable from their CIDs alone.
pub fn create_folder_dag(
    children: Vec<Link>,
    name: String,
    total_size: u64,
    options: &DagOptions,
) -> Result<Dag, DagError> {
    options.validate()?;

    let mut nodes = BTreeMap::new();
    let child_count = children.len();
    let (links, depth) = build_tree(
        &mut nodes,
        children,
        KindFamily::FOLDER,
        options.max_link_per_node,
        options.max_node_size(),
    )?;
    // no links means no indirection at all
    let depth = if links.is_empty() { 0 } else { depth };

    let root = Node::root(NodeKind::FolderRoot, Some(name), links, total_size, depth);
    let head = insert_node(&mut nodes, root, options.max_node_size())?;
    tracing::debug!(
        head = %head.cid(),
        children = child_count,
        nodes = nodes.len(),
        "assembled folder dag"
    );
    Ok(Dag::new(*head.cid(), nodes))
}

/// Assemble a metadata record into a single-rooted DAG.
///
/// The record is serialized to its canonical byte form and then follows
/// the file algorithm under the metadata node kinds. Records small
/// enough for one node become a lone inline `MetadataRoot`; oversized
/// records (long names, large child listings) chunk into
/// `MetadataChunk` leaves like any file payload.
pub fn create_metadata_dag<M>(metadata: &M, options: &DagOptions) -> Result<Dag, DagError>
where
    M: BlockEncoded<DagCborCodec>,
{
    options.validate()?;
    let payload = Bytes::from(metadata.encode()?);
    assemble_payload(
        payload,
        None,
        KindFamily::METADATA,
        NodeKind::MetadataChunk,
        options,
    )
}

/// The shared chunk -> leaves -> collapse -> root pipeline for byte
/// payloads. Options are validated by the callers.
fn assemble_payload(
    data: Bytes,
    name: Option<String>,
    family: KindFamily,
    chunk_kind: NodeKind,
    options: &DagOptions,
) -> Result<Dag, DagError> {
    let mut nodes = BTreeMap::new();

    // single-node fast path: the whole payload rides inline on the root
    if data.len() <= options.max_node_size() {
        let inline = Node::inline_root(family.root, name.clone(), data.to_vec());
        let encoded = inline.encode()?;
        if encoded.len() <= options.max_node_size() {
            let head = cid_for(DAG_CBOR_CODE, &encoded);
            nodes.insert(head, inline);
            tracing::debug!(head = %head, bytes = data.len(), "assembled single-node dag");
            return Ok(Dag::new(head, nodes));
        }
    }

    let slices = chunk(&data, options.chunk_size);
    let mut links = Vec::with_capacity(slices.len());
    for slice in &slices {
        let leaf = Node::chunk(chunk_kind, slice.to_vec());
        links.push(insert_node(&mut nodes, leaf, options.max_node_size())?);
    }
    tracing::debug!(
        bytes = data.len(),
        leaves = links.len(),
        "chunked payload into leaves"
    );

    let (links, depth) = build_tree(
        &mut nodes,
        links,
        family,
        options.max_link_per_node,
        options.max_node_size(),
    )?;

    let root = Node::root(family.root, name, links, data.len() as u64, depth);
    let head = insert_node(&mut nodes, root, options.max_node_size())?;
    tracing::debug!(
        head = %head.cid(),
        nodes = nodes.len(),
        depth,
        "assembled chunked dag"
    );
    Ok(Dag::new(*head.cid(), nodes))
}
