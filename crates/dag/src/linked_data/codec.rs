use ipld_core::codec::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::cid::cid_for;
use cid::Cid;

pub use serde_ipld_dagcbor::codec::DagCborCodec;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode block: {0}")]
    Encode(String),
    #[error("failed to decode block: {0}")]
    Decode(String),
}

/// Canonical block encoding for linked-data types.
///
/// Types opt in with an empty impl against a codec, e.g.
/// `impl BlockEncoded<DagCborCodec> for Node {}`. `encode` is
/// deterministic and `decode` is its exact inverse, so a type's CID
/// is well-defined as the hash of its encoding.
pub trait BlockEncoded<C>
where
    Self: Serialize + DeserializeOwned + Sized,
    C: Codec<Self>,
    C::Error: std::fmt::Display,
{
    /// Encode to the canonical byte form.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        C::encode_to_vec(self).map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Decode from the canonical byte form.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        C::decode_from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    /// The CID identifying this value's canonical encoding.
    fn cid(&self) -> Result<Cid, CodecError> {
        Ok(cid_for(C::CODE, &self.encode()?))
    }
}
