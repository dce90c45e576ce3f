use std::collections::BTreeMap;

use bytes::Bytes;
use cid::Cid;

use super::dag::Dag;
use super::error::DagError;
use super::node::Node;

/// Reassemble the byte stream behind a head CID.
///
/// Walks the graph depth-first in link order, concatenating leaf
/// payloads - the same replay a gateway performs when serving content.
/// A CID referenced more than once contributes its bytes once per
/// occurrence, which is exactly how deduplicated repeats reconstruct.
pub fn read_bytes(nodes: &BTreeMap<Cid, Node>, head: &Cid) -> Result<Bytes, DagError> {
    let mut out = Vec::new();
    let mut stack: Vec<Cid> = vec![*head];
    while let Some(cid) = stack.pop() {
        let node = nodes.get(&cid).ok_or(DagError::LinkNotFound(cid))?;
        if let Some(data) = node.data() {
            out.extend_from_slice(data);
        }
        // reversed so the leftmost link is visited first
        for link in node.links().iter().rev() {
            stack.push(*link.cid());
        }
    }
    Ok(Bytes::from(out))
}

/// [`read_bytes`] from a graph's own head.
pub fn read_file_bytes(dag: &Dag) -> Result<Bytes, DagError> {
    read_bytes(dag.nodes(), dag.head())
}
