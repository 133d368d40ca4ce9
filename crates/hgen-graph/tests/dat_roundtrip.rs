use std::collections::BTreeSet;
use std::fs;

use hgen_core::rng::RngHandle;
use hgen_graph::{
    canonical_hash, gen_from_scratch, gen_from_tree, read_dat, write_dat, ScratchFlags, TreeFlags,
};

fn naive_parse(text: &str) -> BTreeSet<BTreeSet<u32>> {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .map(|token| token.parse::<u32>().unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn scratch_output_survives_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scratch.dat");
    let mut rng = RngHandle::from_seed(2024);
    let graph = gen_from_scratch(30, 40, 0.15, ScratchFlags::default(), &mut rng).unwrap();

    write_dat(&graph, &path).unwrap();
    let restored = read_dat(&path).unwrap();
    assert_eq!(restored, graph);
    assert_eq!(canonical_hash(&restored), canonical_hash(&graph));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), graph.len());
    let expected: BTreeSet<BTreeSet<u32>> = graph
        .iter()
        .map(|edge| edge.vertices().iter().copied().collect())
        .collect();
    assert_eq!(naive_parse(&text), expected);
}

#[test]
fn tree_output_survives_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.dat");
    let mut rng = RngHandle::from_seed(7);
    let graph = gen_from_tree(40, 0.1, TreeFlags { sperner: true }, &mut rng).unwrap();

    write_dat(&graph, &path).unwrap();
    assert_eq!(read_dat(&path).unwrap(), graph);
}

#[test]
fn writing_into_missing_directory_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.dat");
    let mut rng = RngHandle::from_seed(1);
    let graph = gen_from_tree(5, 0.5, TreeFlags::default(), &mut rng).unwrap();

    let err = write_dat(&graph, &path).unwrap_err();
    assert!(matches!(err, hgen_core::HgenError::Io(_)));
    assert_eq!(err.info().context["path"], path.display().to_string());
}
