use hgen_core::errors::{check_probability, ErrorInfo, HgenError};
use hgen_core::rng::RngHandle;
use hgen_core::{Hyperedge, Hypergraph, VertexId};
use rand::Rng;
use tracing::debug;

use crate::flags::ScratchFlags;
use crate::reduce::{drop_contained, largest_component};

/// Generates a hypergraph by independent Bernoulli membership sampling.
///
/// Each of `num_hyperedges` candidates includes every node of
/// `0..num_nodes` with probability `p`. Empty candidates are discarded, then
/// the optional connectivity and simplicity filters run in that order. The
/// result can hold fewer than `num_hyperedges` hyperedges, possibly none.
pub fn gen_from_scratch(
    num_nodes: usize,
    num_hyperedges: usize,
    p: f64,
    flags: ScratchFlags,
    rng: &mut RngHandle,
) -> Result<Hypergraph, HgenError> {
    check_probability(p)?;
    let node_count = VertexId::try_from(num_nodes).map_err(|_| {
        HgenError::InvalidArgument(
            ErrorInfo::new("too-many-nodes", "node count exceeds the vertex id range")
                .with_context("num_nodes", num_nodes.to_string()),
        )
    })?;

    let mut edges: Vec<Hyperedge> = (0..num_hyperedges)
        .map(|_| {
            (0..node_count)
                .filter(|_| rng.gen_bool(p))
                .collect::<Hyperedge>()
        })
        .collect();
    edges.retain(|edge| !edge.is_empty());
    debug!(
        requested = num_hyperedges,
        non_empty = edges.len(),
        "sampled scratch hyperedges"
    );

    if flags.make_connected {
        edges = largest_component(edges);
        debug!(kept = edges.len(), "kept largest connected component");
    }
    if flags.make_simple {
        edges = drop_contained(edges);
        debug!(kept = edges.len(), "removed contained hyperedges");
    }

    Ok(edges.into_iter().collect())
}
