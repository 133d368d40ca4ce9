use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, VecDeque};

use hgen_core::errors::{check_probability, ErrorInfo, HgenError};
use hgen_core::rng::RngHandle;
use hgen_core::{Hyperedge, Hypergraph, VertexId};
use rand::Rng;
use tracing::{debug, warn};

use crate::flags::TreeFlags;
use crate::reduce::sperner_reduce;

/// Generates a connected hypergraph from the level-parity bipartition of a
/// uniformly random labeled tree on `total_size` nodes.
///
/// Even-level tree nodes become hyperedges and odd-level nodes become the
/// vertices `0..num_vertices`, numbered in order of their tree label. Every
/// hyperedge starts with its tree neighbours and then gains each missing
/// vertex independently with probability `p`. With `flags.sperner` the result
/// is reduced to an antichain.
///
/// `total_size == 1` yields the single empty hyperedge.
pub fn gen_from_tree(
    total_size: usize,
    p: f64,
    flags: TreeFlags,
    rng: &mut RngHandle,
) -> Result<Hypergraph, HgenError> {
    if total_size < 1 {
        return Err(HgenError::InvalidArgument(
            ErrorInfo::new(
                "total-size-too-small",
                "tree generator needs at least one node",
            )
            .with_context("total_size", total_size.to_string()),
        ));
    }
    check_probability(p)?;
    if VertexId::try_from(total_size).is_err() {
        return Err(HgenError::InvalidArgument(
            ErrorInfo::new("total-size-too-large", "tree size exceeds the vertex id range")
                .with_context("total_size", total_size.to_string()),
        ));
    }
    if total_size == 1 {
        warn!("total_size = 1, the hypergraph is a single empty hyperedge");
    }

    let tree_edges = random_labeled_tree(total_size, rng);
    let root = rng.gen_range(0..total_size);
    let even_level = level_parity(total_size, &tree_edges, root);

    // Odd-level nodes, relabelled 0.. in label order.
    let mut vertex_ids: Vec<Option<VertexId>> = vec![None; total_size];
    let mut num_vertices: VertexId = 0;
    for (node, even) in even_level.iter().enumerate() {
        if !even {
            vertex_ids[node] = Some(num_vertices);
            num_vertices += 1;
        }
    }

    let mut incidence: BTreeMap<usize, BTreeSet<VertexId>> = even_level
        .iter()
        .enumerate()
        .filter_map(|(node, even)| even.then_some((node, BTreeSet::new())))
        .collect();
    for &(u, v) in &tree_edges {
        let (hub, member) = if even_level[u] { (u, v) } else { (v, u) };
        if let (Some(members), Some(vertex)) = (incidence.get_mut(&hub), vertex_ids[member]) {
            members.insert(vertex);
        }
    }

    let mut edges: Vec<Hyperedge> = Vec::with_capacity(incidence.len());
    for members in incidence.into_values() {
        let mut grown = members.clone();
        for vertex in 0..num_vertices {
            if !members.contains(&vertex) && rng.gen_bool(p) {
                grown.insert(vertex);
            }
        }
        edges.push(Hyperedge::from_vertices(grown));
    }
    debug!(
        total_size,
        root,
        hyperedges = edges.len(),
        vertices = num_vertices,
        "built hypergraph from tree bipartition"
    );

    if flags.sperner && edges.len() > 1 {
        let before = edges.len();
        edges = sperner_reduce(edges);
        debug!(before, after = edges.len(), "applied sperner reduction");
    }

    Ok(edges.into_iter().collect())
}

/// Samples a uniformly random labeled tree on `n` nodes as an edge list.
///
/// Decodes a uniformly random Prüfer sequence, which is in bijection with the
/// labeled trees on `n >= 2` nodes.
pub fn random_labeled_tree(n: usize, rng: &mut RngHandle) -> Vec<(usize, usize)> {
    match n {
        0 | 1 => return Vec::new(),
        2 => return vec![(0, 1)],
        _ => {}
    }
    let sequence: Vec<usize> = (0..n - 2).map(|_| rng.gen_range(0..n)).collect();
    prufer_decode(n, &sequence)
}

fn prufer_decode(n: usize, sequence: &[usize]) -> Vec<(usize, usize)> {
    let mut degree = vec![1usize; n];
    for &node in sequence {
        degree[node] += 1;
    }
    let mut leaves: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&node| degree[node] == 1)
        .map(Reverse)
        .collect();

    let mut edges = Vec::with_capacity(n - 1);
    for &node in sequence {
        let Some(Reverse(leaf)) = leaves.pop() else {
            break;
        };
        edges.push((leaf, node));
        degree[node] -= 1;
        if degree[node] == 1 {
            leaves.push(Reverse(node));
        }
    }
    if let (Some(Reverse(u)), Some(Reverse(v))) = (leaves.pop(), leaves.pop()) {
        edges.push((u, v));
    }
    edges
}

/// Breadth-first level parity from `root`: `true` for even levels.
pub(crate) fn level_parity(n: usize, edges: &[(usize, usize)], root: usize) -> Vec<bool> {
    let mut adjacency = vec![Vec::new(); n];
    for &(u, v) in edges {
        adjacency[u].push(v);
        adjacency[v].push(u);
    }
    let mut level: Vec<Option<usize>> = vec![None; n];
    level[root] = Some(0);
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        let next_level = level[current].map_or(1, |l| l + 1);
        for &next in &adjacency[current] {
            if level[next].is_none() {
                level[next] = Some(next_level);
                queue.push_back(next);
            }
        }
    }
    level
        .into_iter()
        .map(|l| l.map_or(true, |depth| depth % 2 == 0))
        .collect()
}
