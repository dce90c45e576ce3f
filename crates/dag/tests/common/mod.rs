//! Shared fixtures for dag assembly integration tests
#![allow(dead_code)]

use bytes::Bytes;
use rand::RngCore;

use dag::prelude::*;

/// Install a fmt subscriber so RUST_LOG surfaces assembly tracing.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A buffer of `runs` runs, each `run_len` bytes of one repeated value.
/// Every run differs from its neighbors, so chunking at `run_len`
/// produces distinct leaves.
pub fn run_patterned(runs: usize, run_len: usize) -> Bytes {
    let mut buf = Vec::with_capacity(runs * run_len);
    for run in 0..runs {
        buf.extend(std::iter::repeat(run as u8).take(run_len));
    }
    Bytes::from(buf)
}

/// A buffer of random bytes.
pub fn random_bytes(len: usize) -> Bytes {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    Bytes::from(buf)
}

/// Links to `count` pretend child graphs, each claiming `each_size`
/// bytes, addressed by random raw-codec CIDs.
pub fn fake_children(count: usize, each_size: u64) -> Vec<Link> {
    (0..count)
        .map(|_| {
            let mut seed = [0u8; 32];
            rand::rng().fill_bytes(&mut seed);
            Link::new(dag::linked_data::cid_for(0x55, &seed), each_size)
        })
        .collect()
}

/// Assert the two structural bounds every produced graph must honor:
/// no node exceeds the fan-out limit, and no node's encoding exceeds
/// the node size budget.
pub fn assert_bounds(dag: &Dag, options: &DagOptions) {
    for (cid, node) in dag.iter() {
        assert!(
            node.links().len() <= options.max_link_per_node,
            "node {} holds {} links, fan-out limit is {}",
            cid,
            node.links().len(),
            options.max_link_per_node
        );
        let encoded = node.encode().unwrap();
        assert!(
            encoded.len() <= options.max_node_size(),
            "node {} encodes to {} bytes, budget is {}",
            cid,
            encoded.len(),
            options.max_node_size()
        );
    }
}
