//! Linked-data primitives: canonical block encoding and content identifiers
//!
//! Everything stored by this crate is a *block*: a value with a single
//! canonical DAG-CBOR byte encoding, identified by the CID of those bytes.
//! Two rules hold everywhere:
//!
//! - encoding is deterministic: the same logical value always encodes to
//!   the same bytes, so byte-identical subtrees share a CID and deduplicate
//! - a CID is a pure function of the encoded bytes and is never mutated
//!   once assigned
//!
//! The identifier format is fixed: CIDv1, DAG-CBOR multicodec (0x71),
//! BLAKE3-256 multihash (0x1e). Changing either constant is a breaking
//! change, since historical content would no longer resolve.

mod cid;
mod codec;
mod link;

pub use self::cid::{cid_for, parse_cid, CidError, BLAKE3_CODE, DAG_CBOR_CODE};
pub use codec::{BlockEncoded, CodecError, DagCborCodec};
pub use link::Link;

pub use ::cid::Cid;
