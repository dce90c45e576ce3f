use cid::Cid;

use crate::linked_data::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum DagError {
    /// A constructed node's canonical encoding exceeds the node size
    /// budget. Configuration mismatch, not a data error: nothing is
    /// retried and nothing partial is returned.
    #[error("node too large: {actual} bytes exceeds maximum {max}")]
    NodeTooLarge { actual: usize, max: usize },
    /// Bytes did not match the expected tagged node layout.
    #[error("malformed node: {0}")]
    MalformedNode(#[from] CodecError),
    /// Rejected before any work begins.
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
    /// A link points at a node the store does not hold.
    #[error("link not found: {0}")]
    LinkNotFound(Cid),
    /// A stored node disagrees with its own content address or with a
    /// link that references it.
    #[error("verification failed: {0}")]
    Verification(String),
}
