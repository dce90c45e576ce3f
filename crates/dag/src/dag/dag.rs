use std::collections::BTreeMap;

use cid::Cid;

use crate::linked_data::{cid_for, BlockEncoded, DAG_CBOR_CODE};

use super::error::DagError;
use super::node::Node;

/// The result of one assembly call: a head CID plus every node
/// reachable beneath it, keyed by content address.
///
/// The map is an owned, immutable value - callers decide whether to
/// merge it into a larger store. Folder graphs are the one place links
/// leave the map by design: their leaf-level references point at child
/// roots built by earlier assembly calls, composed back together with
/// [`Dag::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag {
    head: Cid,
    nodes: BTreeMap<Cid, Node>,
}

impl Dag {
    pub(crate) fn new(head: Cid, nodes: BTreeMap<Cid, Node>) -> Self {
        debug_assert!(nodes.contains_key(&head));
        Dag { head, nodes }
    }

    /// The CID of the root node.
    pub fn head(&self) -> &Cid {
        &self.head
    }

    /// The root node itself.
    pub fn root(&self) -> &Node {
        // the constructor guarantees the head is present
        &self.nodes[&self.head]
    }

    /// All nodes, keyed by CID.
    pub fn nodes(&self) -> &BTreeMap<Cid, Node> {
        &self.nodes
    }

    pub fn get(&self, cid: &Cid) -> Option<&Node> {
        self.nodes.get(cid)
    }

    pub fn contains(&self, cid: &Cid) -> bool {
        self.nodes.contains_key(cid)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Cid, &Node)> {
        self.nodes.iter()
    }

    /// Absorb another graph's nodes, keeping this head.
    ///
    /// Content addressing makes this a plain set union: equal CIDs name
    /// byte-identical nodes, so overlapping entries deduplicate. This is
    /// how a folder graph and the file graphs it references become one
    /// store.
    pub fn merge(&mut self, other: Dag) {
        self.nodes.extend(other.nodes);
    }

    /// Check the store against its own content addressing.
    ///
    /// Every node must re-encode to the CID it is keyed under, and every
    /// link that resolves inside the map must agree with its target on
    /// the declared size. Links that leave the map (folder children) are
    /// not an error here.
    pub fn verify(&self) -> Result<(), DagError> {
        if !self.nodes.contains_key(&self.head) {
            return Err(DagError::LinkNotFound(self.head));
        }
        for (cid, node) in &self.nodes {
            let encoded = node.encode()?;
            let actual = cid_for(DAG_CBOR_CODE, &encoded);
            if actual != *cid {
                return Err(DagError::Verification(format!(
                    "node keyed {cid} re-encodes to {actual}"
                )));
            }
            for link in node.links() {
                if let Some(child) = self.nodes.get(link.cid()) {
                    if child.size() != link.size() {
                        return Err(DagError::Verification(format!(
                            "link to {} declares {} bytes but the node holds {}",
                            link.cid(),
                            link.size(),
                            child.size()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
