//! Integration tests for metadata assembly

mod common;

use std::collections::BTreeMap;
use std::path::PathBuf;

use dag::prelude::*;

#[test]
fn test_small_record_is_a_single_inline_node() {
    common::init_tracing();

    let options = DagOptions::default();
    let metadata = Metadata::file(&PathBuf::from("/files/notes.txt"), 1234);
    let dag = create_metadata_dag(&metadata, &options).unwrap();

    assert_eq!(dag.len(), 1);
    let root = dag.root();
    assert_eq!(root.kind(), NodeKind::MetadataRoot);
    assert_eq!(root.link_depth(), 0);
    assert!(root.links().is_empty());

    // the inline payload is the record's own encoding
    let decoded = Metadata::decode(root.data().unwrap()).unwrap();
    assert_eq!(decoded, metadata);
}

#[test]
fn test_oversized_record_chunks_like_a_file() {
    let options = DagOptions {
        chunk_size: 512,
        max_link_per_node: 4,
    };

    // a listing big enough to blow well past one node
    let mut children = BTreeMap::new();
    for i in 0..100 {
        children.insert(
            format!("entry-{i:03}"),
            Link::new(
                dag::linked_data::cid_for(0x55, format!("child {i}").as_bytes()),
                1000,
            ),
        );
    }
    let metadata = Metadata::folder("big-folder".to_string(), 100_000, children);
    let encoded_len = metadata.encode().unwrap().len() as u64;
    assert!(encoded_len > 512);

    let dag = create_metadata_dag(&metadata, &options).unwrap();

    assert!(dag.len() > 1);
    let root = dag.root();
    assert_eq!(root.kind(), NodeKind::MetadataRoot);
    assert!(root.link_depth() >= 1);
    assert_eq!(root.size(), encoded_len);

    let kinds_ok = dag.iter().all(|(_, n)| {
        matches!(
            n.kind(),
            NodeKind::MetadataRoot | NodeKind::MetadataChunk | NodeKind::MetadataInlink
        )
    });
    assert!(kinds_ok);

    let chunks = dag
        .iter()
        .filter(|(_, n)| n.kind() == NodeKind::MetadataChunk)
        .count();
    assert!(chunks > 1);

    common::assert_bounds(&dag, &options);

    // the record reassembles from its leaves
    let bytes = read_file_bytes(&dag).unwrap();
    let decoded = Metadata::decode(&bytes).unwrap();
    assert_eq!(decoded, metadata);
}

#[test]
fn test_metadata_assembly_is_deterministic() {
    let options = DagOptions {
        chunk_size: 256,
        max_link_per_node: 4,
    };
    let mut children = BTreeMap::new();
    for i in 0..40 {
        children.insert(
            format!("file-{i}"),
            Link::new(dag::linked_data::cid_for(0x55, &[i as u8; 8]), 10),
        );
    }
    let metadata = Metadata::folder("dir".to_string(), 400, children);

    let first = create_metadata_dag(&metadata, &options).unwrap();
    let second = create_metadata_dag(&metadata, &options).unwrap();

    assert_eq!(first, second);
}
