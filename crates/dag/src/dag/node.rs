use serde::{Deserialize, Serialize};

use crate::linked_data::{BlockEncoded, CodecError, DagCborCodec, Link};

/**
 * Nodes
 * =====
 * Nodes are the unit of storage for every assembled graph.
 * A node either holds an inline byte payload (chunk leaves and
 *  small roots) or an ordered list of (cid, size) links to nodes
 *  one level below it - never both in the same construction.
 * The kind tag is a closed set across three families (file,
 *  folder, metadata); encode/decode is exhaustive over it, and
 *  the encoding of each kind is stable wire format.
 */

/// The closed set of node kinds.
///
/// Each family has a root kind and an inlink kind; the file and
/// metadata families additionally have a chunk kind for leaves.
/// Folders hold no payload bytes, so they have no chunk kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    FileRoot,
    FileChunk,
    FileInlink,
    FolderRoot,
    FolderInlink,
    MetadataRoot,
    MetadataChunk,
    MetadataInlink,
}

impl NodeKind {
    /// Check if this kind heads a graph.
    pub fn is_root(&self) -> bool {
        matches!(
            self,
            NodeKind::FileRoot | NodeKind::FolderRoot | NodeKind::MetadataRoot
        )
    }

    /// Check if this kind is an intermediate fan-out node.
    pub fn is_inlink(&self) -> bool {
        matches!(
            self,
            NodeKind::FileInlink | NodeKind::FolderInlink | NodeKind::MetadataInlink
        )
    }

    /// Check if this kind is a leaf holding raw payload bytes.
    pub fn is_chunk(&self) -> bool {
        matches!(self, NodeKind::FileChunk | NodeKind::MetadataChunk)
    }
}

/// The unit of storage: a typed, size-bounded record in the graph.
///
/// Nodes are created bottom-up (leaves first, root last) within a single
/// assembly call and never mutated afterwards; their identity is the CID
/// of their canonical encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    /// Human-readable label; only meaningful on roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Inline payload; present only on chunk leaves and on small roots
    /// that fit entirely in one node.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serde_bytes")]
    data: Option<Vec<u8>>,
    /// Ordered references to the nodes one level below. Order is
    /// semantically significant: reconstruction replays it as written.
    links: Vec<Link>,
    /// Logical size in bytes of the subtree behind this node,
    /// independent of graph shape.
    size: u64,
    /// Indirection levels between this node and the raw leaves:
    /// 0 for leaves and inline roots, 1 for a root referencing leaves
    /// directly, more for each inlink layer in between.
    link_depth: u32,
}

impl BlockEncoded<DagCborCodec> for Node {}

impl Node {
    /// Create a leaf holding one raw payload slice.
    pub fn chunk(kind: NodeKind, data: Vec<u8>) -> Self {
        debug_assert!(kind.is_chunk());
        let size = data.len() as u64;
        Node {
            kind,
            name: None,
            data: Some(data),
            links: Vec::new(),
            size,
            link_depth: 0,
        }
    }

    /// Create an intermediate fan-out node over one batch of links.
    pub fn inlink(kind: NodeKind, links: Vec<Link>, size: u64, link_depth: u32) -> Self {
        debug_assert!(kind.is_inlink());
        Node {
            kind,
            name: None,
            data: None,
            links,
            size,
            link_depth,
        }
    }

    /// Create a root over an already-collapsed link list.
    pub fn root(
        kind: NodeKind,
        name: Option<String>,
        links: Vec<Link>,
        size: u64,
        link_depth: u32,
    ) -> Self {
        debug_assert!(kind.is_root());
        Node {
            kind,
            name,
            data: None,
            links,
            size,
            link_depth,
        }
    }

    /// Create a root holding its whole payload inline (single-node graph).
    pub fn inline_root(kind: NodeKind, name: Option<String>, data: Vec<u8>) -> Self {
        debug_assert!(kind.is_root());
        let size = data.len() as u64;
        Node {
            kind,
            name,
            data: Some(data),
            links: Vec::new(),
            size,
            link_depth: 0,
        }
    }

    /// Build the (cid, size) reference a parent would hold to this node.
    pub fn link(&self) -> Result<Link, CodecError> {
        Ok(Link::new(self.cid()?, self.size))
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn link_depth(&self) -> u32 {
        self.link_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked_data::{cid_for, DAG_CBOR_CODE};

    #[test]
    fn test_node_encode_decode() {
        let node = Node::chunk(NodeKind::FileChunk, b"some chunk payload".to_vec());

        let encoded = node.encode().unwrap();
        let decoded = Node::decode(&encoded).unwrap();

        assert_eq!(node, decoded);
    }

    #[test]
    fn test_root_encode_decode_with_links() {
        let child = Node::chunk(NodeKind::FileChunk, b"child".to_vec());
        let root = Node::root(
            NodeKind::FileRoot,
            Some("test.txt".to_string()),
            vec![child.link().unwrap()],
            5,
            1,
        );

        let encoded = root.encode().unwrap();
        let decoded = Node::decode(&encoded).unwrap();

        assert_eq!(root, decoded);
        assert_eq!(decoded.name(), Some("test.txt"));
        assert_eq!(decoded.links().len(), 1);
    }

    #[test]
    fn test_node_cid_matches_encoding() {
        let node = Node::inline_root(NodeKind::MetadataRoot, None, b"record".to_vec());
        let cid = node.cid().unwrap();
        assert_eq!(cid, cid_for(DAG_CBOR_CODE, &node.encode().unwrap()));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NodeKind::FileRoot.is_root());
        assert!(NodeKind::FolderRoot.is_root());
        assert!(NodeKind::MetadataRoot.is_root());
        assert!(NodeKind::FileInlink.is_inlink());
        assert!(NodeKind::FolderInlink.is_inlink());
        assert!(NodeKind::MetadataInlink.is_inlink());
        assert!(NodeKind::FileChunk.is_chunk());
        assert!(NodeKind::MetadataChunk.is_chunk());
        assert!(!NodeKind::FolderRoot.is_chunk());
    }

    #[test]
    fn test_distinct_kinds_distinct_cids() {
        let file = Node::chunk(NodeKind::FileChunk, b"same bytes".to_vec());
        let meta = Node::chunk(NodeKind::MetadataChunk, b"same bytes".to_vec());
        assert_ne!(file.cid().unwrap(), meta.cid().unwrap());
    }

    #[test]
    fn test_empty_chunk() {
        let node = Node::chunk(NodeKind::FileChunk, Vec::new());
        assert_eq!(node.size(), 0);
        assert_eq!(node.link_depth(), 0);

        let decoded = Node::decode(&node.encode().unwrap()).unwrap();
        assert_eq!(decoded.data(), Some(&[] as &[u8]));
    }
}
