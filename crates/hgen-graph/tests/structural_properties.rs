use hgen_core::rng::RngHandle;
use hgen_core::{Hyperedge, Hypergraph};
use hgen_graph::reduce::sperner_reduce;
use hgen_graph::{gen_from_scratch, gen_from_tree, ScratchFlags, TreeFlags};
use proptest::prelude::*;

fn assert_canonical(graph: &Hypergraph) {
    for edge in graph {
        assert!(
            edge.vertices().windows(2).all(|pair| pair[0] < pair[1]),
            "hyperedge {edge:?} is not strictly ascending"
        );
    }
}

fn has_strict_containment(graph: &Hypergraph) -> bool {
    graph
        .iter()
        .any(|a| graph.iter().any(|b| a.is_proper_subset(b)))
}

proptest! {
    #[test]
    fn scratch_output_is_simple_and_connected(
        seed in any::<u64>(),
        nodes in 0usize..25,
        hyperedges in 0usize..25,
        p in 0.0f64..=1.0,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_from_scratch(nodes, hyperedges, p, ScratchFlags::default(), &mut rng).unwrap();
        assert_canonical(&graph);
        prop_assert!(graph.len() <= hyperedges);
        prop_assert!(graph.is_simple());
        prop_assert!(graph.is_connected());
        prop_assert!(graph.iter().all(|edge| !edge.is_empty()));
        prop_assert!(graph.num_vertices() <= nodes);
    }

    #[test]
    fn scratch_without_filters_keeps_every_non_empty_sample(
        seed in any::<u64>(),
        nodes in 1usize..12,
        hyperedges in 0usize..12,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_from_scratch(nodes, hyperedges, 0.5, ScratchFlags::raw(), &mut rng).unwrap();
        assert_canonical(&graph);
        prop_assert!(graph.len() <= hyperedges);
        prop_assert!(graph.iter().all(|edge| !edge.is_empty()));
    }

    #[test]
    fn tree_vertices_are_contiguous(
        seed in any::<u64>(),
        total_size in 2usize..40,
        p in 0.0f64..=1.0,
        sperner in any::<bool>(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_from_tree(total_size, p, TreeFlags { sperner }, &mut rng).unwrap();
        assert_canonical(&graph);
        let vertices: Vec<u32> = graph.vertex_set().into_iter().collect();
        let expected: Vec<u32> = (0..graph.num_vertices() as u32).collect();
        prop_assert_eq!(vertices, expected);
        prop_assert!(graph.num_vertices() >= 1);
        prop_assert!(graph.num_vertices() < total_size);
        prop_assert!(graph.len() + graph.num_vertices() <= total_size);
        prop_assert!(graph.is_connected());
    }

    #[test]
    fn tree_with_sperner_is_an_antichain(
        seed in any::<u64>(),
        total_size in 1usize..40,
        p in 0.0f64..=1.0,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_from_tree(total_size, p, TreeFlags { sperner: true }, &mut rng).unwrap();
        prop_assert!(!has_strict_containment(&graph));
    }

    #[test]
    fn sperner_reduction_is_idempotent(seed in any::<u64>(), total_size in 1usize..30) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_from_tree(total_size, 0.3, TreeFlags { sperner: true }, &mut rng).unwrap();
        let again: Hypergraph = sperner_reduce(graph.clone().into_edges()).into_iter().collect();
        prop_assert_eq!(again, graph);
    }

    #[test]
    fn generators_are_reproducible(seed in any::<u64>()) {
        let a = gen_from_tree(25, 0.2, TreeFlags::default(), &mut RngHandle::from_seed(seed)).unwrap();
        let b = gen_from_tree(25, 0.2, TreeFlags::default(), &mut RngHandle::from_seed(seed)).unwrap();
        prop_assert_eq!(a, b);
        let c = gen_from_scratch(15, 15, 0.3, ScratchFlags::default(), &mut RngHandle::from_seed(seed)).unwrap();
        let d = gen_from_scratch(15, 15, 0.3, ScratchFlags::default(), &mut RngHandle::from_seed(seed)).unwrap();
        prop_assert_eq!(c, d);
    }
}

#[test]
fn tree_of_size_one_is_single_empty_hyperedge() {
    let mut rng = RngHandle::from_seed(99);
    let graph = gen_from_tree(1, 0.0, TreeFlags::default(), &mut rng).unwrap();
    let expected: Hypergraph = [Hyperedge::empty()].into_iter().collect();
    assert_eq!(graph, expected);
}

#[test]
fn tree_of_size_zero_is_rejected() {
    let mut rng = RngHandle::from_seed(99);
    let err = gen_from_tree(0, 0.5, TreeFlags::default(), &mut rng).unwrap_err();
    assert!(matches!(err, hgen_core::HgenError::InvalidArgument(_)));
}

#[test]
fn scratch_with_no_hyperedges_is_empty() {
    let mut rng = RngHandle::from_seed(99);
    let graph = gen_from_scratch(5, 0, 0.5, ScratchFlags::default(), &mut rng).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn tree_without_perturbation_reproduces_star_sizes() {
    // With p = 0 every hyperedge holds exactly its tree neighbours, so the
    // arities sum to the tree's edge count unless hyperedges coincide.
    let mut rng = RngHandle::from_seed(5);
    let graph = gen_from_tree(30, 0.0, TreeFlags::default(), &mut rng).unwrap();
    let incidences: usize = graph.iter().map(Hyperedge::len).sum();
    assert!(incidences <= 29);
    assert!(graph.iter().all(|edge| !edge.is_empty()));
}
