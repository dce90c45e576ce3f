use std::collections::BTreeMap;

use cid::Cid;

use crate::linked_data::{cid_for, BlockEncoded, Link, DAG_CBOR_CODE};

use super::error::DagError;
use super::node::{Node, NodeKind};

/// The root/inlink kind pair the tree builder stamps onto the nodes it
/// creates for one assembly context.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KindFamily {
    pub(crate) root: NodeKind,
    pub(crate) inlink: NodeKind,
}

impl KindFamily {
    pub(crate) const FILE: Self = Self {
        root: NodeKind::FileRoot,
        inlink: NodeKind::FileInlink,
    };
    pub(crate) const FOLDER: Self = Self {
        root: NodeKind::FolderRoot,
        inlink: NodeKind::FolderInlink,
    };
    pub(crate) const METADATA: Self = Self {
        root: NodeKind::MetadataRoot,
        inlink: NodeKind::MetadataInlink,
    };
}

/// Recompute a node's canonical encoding and check it against the node
/// size budget. Returns the encoding so callers hash and store the same
/// bytes that were measured.
pub fn ensure_max_size(node: &Node, max_size: usize) -> Result<Vec<u8>, DagError> {
    let encoded = node.encode()?;
    if encoded.len() > max_size {
        return Err(DagError::NodeTooLarge {
            actual: encoded.len(),
            max: max_size,
        });
    }
    Ok(encoded)
}

/// Size-check a node, compute its CID, and admit it into the store.
///
/// Returns the (cid, size) reference a parent holds to it. Inserting a
/// byte-identical node twice is a no-op: same encoding, same CID.
pub(crate) fn insert_node(
    nodes: &mut BTreeMap<Cid, Node>,
    node: Node,
    max_size: usize,
) -> Result<Link, DagError> {
    let size = node.size();
    let encoded = ensure_max_size(&node, max_size)?;
    let cid = cid_for(DAG_CBOR_CODE, &encoded);
    nodes.insert(cid, node);
    Ok(Link::new(cid, size))
}

/// Collapse an ordered link list until it fits under a single root.
///
/// Level by level: partition the current list into left-to-right batches
/// of at most `max_link_per_node` entries (last batch short), emit one
/// inlink node per batch carrying the batch's links and summed size, and
/// carry the new references up. Stops as soon as the list fits the
/// fan-out limit and returns it together with the depth the root will
/// sit at: 1 when the inputs survive untouched, one more for every
/// inlink layer introduced.
///
/// An explicit loop rather than recursion, so stack depth stays flat no
/// matter how large the input is.
pub(crate) fn build_tree(
    nodes: &mut BTreeMap<Cid, Node>,
    mut links: Vec<Link>,
    family: KindFamily,
    max_link_per_node: usize,
    max_node_size: usize,
) -> Result<(Vec<Link>, u32), DagError> {
    let mut depth: u32 = 1;
    while links.len() > max_link_per_node {
        tracing::trace!(
            links = links.len(),
            depth,
            "collapsing link level under fan-out limit"
        );
        let mut next = Vec::with_capacity(links.len().div_ceil(max_link_per_node));
        for batch in links.chunks(max_link_per_node) {
            let size: u64 = batch.iter().map(Link::size).sum();
            let inlink = Node::inlink(family.inlink, batch.to_vec(), size, depth);
            next.push(insert_node(nodes, inlink, max_node_size)?);
        }
        links = next;
        depth += 1;
    }
    Ok((links, depth))
}
