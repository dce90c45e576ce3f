use cid::Cid;
use serde::{Deserialize, Serialize};

/// A reference to another node: its CID plus the logical byte size of
/// the subtree behind it.
///
/// The size rides along so that parents can declare their own subtree
/// size without fetching children, and so that consumers can plan reads
/// before resolving anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    cid: Cid,
    size: u64,
}

impl Link {
    pub fn new(cid: Cid, size: u64) -> Self {
        Self { cid, size }
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl From<Link> for Cid {
    fn from(link: Link) -> Self {
        link.cid
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} bytes)", self.cid, self.size)
    }
}
