//! Structural reductions applied to freshly sampled hyperedge lists.
//!
//! All reductions take and return plain sequences so that the comparison
//! order stays explicit; the callers collapse the result into a
//! [`Hypergraph`](hgen_core::Hypergraph) afterwards.

use std::collections::BTreeSet;

use hgen_core::Hyperedge;

/// Keeps the hyperedges of the largest connected component of the
/// intersection graph, where two hyperedges are adjacent iff they share a
/// vertex.
///
/// Components are discovered by stack-based search in index order. On a tie
/// the component discovered first wins. Survivors keep their relative order.
pub fn largest_component(edges: Vec<Hyperedge>) -> Vec<Hyperedge> {
    let count = edges.len();
    let mut visited = vec![false; count];
    let mut best: Vec<usize> = Vec::new();

    for start in 0..count {
        if visited[start] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            component.push(current);
            for next in 0..count {
                if !visited[next] && edges[current].intersects(&edges[next]) {
                    stack.push(next);
                }
            }
        }
        if component.len() > best.len() {
            best = component;
        }
    }

    let keep: BTreeSet<usize> = best.into_iter().collect();
    edges
        .into_iter()
        .enumerate()
        .filter_map(|(idx, edge)| keep.contains(&idx).then_some(edge))
        .collect()
}

/// Removes every hyperedge that is a (non-strict) subset of another one.
///
/// Pairs `(i, j)` with `i < j` are compared once. When `edges[i]` is contained
/// in `edges[j]` it is dropped and its remaining comparisons are skipped;
/// otherwise `edges[j]` is dropped if contained in `edges[i]`. Of two equal
/// hyperedges only the later one survives.
pub fn drop_contained(edges: Vec<Hyperedge>) -> Vec<Hyperedge> {
    let mut removed = vec![false; edges.len()];
    for i in 0..edges.len() {
        for j in i + 1..edges.len() {
            if edges[i].is_subset(&edges[j]) {
                removed[i] = true;
                break;
            } else if edges[j].is_subset(&edges[i]) {
                removed[j] = true;
            }
        }
    }
    retain_unmarked(edges, &removed)
}

/// Sperner reduction: deduplicates, then removes every hyperedge strictly
/// contained in another member of the deduplicated list.
///
/// Marking is a single pass against the full deduplicated list, so a
/// hyperedge already marked for removal still disqualifies its own subsets.
/// Fewer than two hyperedges are returned untouched.
pub fn sperner_reduce(edges: Vec<Hyperedge>) -> Vec<Hyperedge> {
    if edges.len() < 2 {
        return edges;
    }
    let mut seen = BTreeSet::new();
    let unique: Vec<Hyperedge> = edges
        .into_iter()
        .filter(|edge| seen.insert(edge.clone()))
        .collect();

    let removed: Vec<bool> = unique
        .iter()
        .enumerate()
        .map(|(k, candidate)| {
            unique
                .iter()
                .enumerate()
                .any(|(j, other)| k != j && candidate.is_proper_subset(other))
        })
        .collect();
    retain_unmarked(unique, &removed)
}

fn retain_unmarked(edges: Vec<Hyperedge>, removed: &[bool]) -> Vec<Hyperedge> {
    edges
        .into_iter()
        .zip(removed)
        .filter_map(|(edge, gone)| (!gone).then_some(edge))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(ids: &[u32]) -> Hyperedge {
        Hyperedge::from_vertices(ids.iter().copied())
    }

    #[test]
    fn largest_component_prefers_bigger_cluster() {
        let edges = vec![
            edge(&[0, 1]),
            edge(&[5, 6]),
            edge(&[1, 2]),
            edge(&[2, 3]),
            edge(&[6, 7]),
        ];
        let kept = largest_component(edges);
        assert_eq!(kept, vec![edge(&[0, 1]), edge(&[1, 2]), edge(&[2, 3])]);
    }

    #[test]
    fn largest_component_tie_keeps_first_found() {
        let kept = largest_component(vec![edge(&[0]), edge(&[1])]);
        assert_eq!(kept, vec![edge(&[0])]);
        assert!(largest_component(Vec::new()).is_empty());
    }

    #[test]
    fn drop_contained_handles_chains_and_duplicates() {
        let kept = drop_contained(vec![
            edge(&[0]),
            edge(&[0, 1]),
            edge(&[0, 1, 2]),
            edge(&[3, 4]),
            edge(&[3, 4]),
        ]);
        assert_eq!(kept, vec![edge(&[0, 1, 2]), edge(&[3, 4])]);
    }

    #[test]
    fn drop_contained_removes_later_subsets() {
        let kept = drop_contained(vec![edge(&[0, 1, 2]), edge(&[1]), edge(&[2, 5])]);
        assert_eq!(kept, vec![edge(&[0, 1, 2]), edge(&[2, 5])]);
    }

    #[test]
    fn sperner_reduce_collapses_chain() {
        let kept = sperner_reduce(vec![
            edge(&[0, 1, 2]),
            edge(&[0]),
            edge(&[0, 1]),
            edge(&[0, 1]),
            edge(&[3]),
        ]);
        assert_eq!(kept, vec![edge(&[0, 1, 2]), edge(&[3])]);
    }

    #[test]
    fn sperner_reduce_is_idempotent_on_antichains() {
        let antichain = vec![edge(&[0, 1]), edge(&[1, 2]), edge(&[0, 2])];
        assert_eq!(sperner_reduce(antichain.clone()), antichain);
    }

    #[test]
    fn sperner_reduce_leaves_singletons_alone() {
        assert_eq!(sperner_reduce(vec![edge(&[])]), vec![edge(&[])]);
    }
}
