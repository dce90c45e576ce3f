use cid::Cid;
use multihash::Multihash;

/// Multicodec code for DAG-CBOR encoded blocks.
pub const DAG_CBOR_CODE: u64 = 0x71;

/// Multihash code for BLAKE3-256.
pub const BLAKE3_CODE: u64 = 0x1e;

#[derive(Debug, thiserror::Error)]
pub enum CidError {
    #[error("invalid cid string: {0}")]
    Parse(#[from] cid::Error),
}

/// Compute the CID identifying `bytes` under the given multicodec.
///
/// CIDv1 with a BLAKE3-256 multihash. Deterministic: byte-identical
/// inputs always produce equal CIDs.
pub fn cid_for(codec: u64, bytes: &[u8]) -> Cid {
    let digest = blake3::hash(bytes);
    // a 32-byte digest always fits the 64-byte multihash table
    let hash = Multihash::<64>::wrap(BLAKE3_CODE, digest.as_bytes())
        .expect("BLAKE3 digest fits multihash");
    Cid::new_v1(codec, hash)
}

/// Parse a CID from its canonical string form.
pub fn parse_cid(s: &str) -> Result<Cid, CidError> {
    Ok(Cid::try_from(s)?)
}
