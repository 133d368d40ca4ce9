use hgen_core::Hypergraph;
use sha2::{Digest, Sha256};

/// Computes the canonical structural hash of the hypergraph.
///
/// Hyperedges are visited in lexicographic order and each is encoded as its
/// length followed by its vertex ids, all little endian. Two hypergraphs share
/// a hash iff they hold the same set of hyperedges.
pub fn canonical_hash(graph: &Hypergraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.len() as u64).to_le_bytes());
    for edge in graph {
        hasher.update((edge.len() as u64).to_le_bytes());
        for vertex in edge.vertices() {
            hasher.update(vertex.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgen_core::Hyperedge;

    #[test]
    fn hash_ignores_insertion_order() {
        let a: Hypergraph = [Hyperedge::from_vertices([0, 1]), Hyperedge::from_vertices([2])]
            .into_iter()
            .collect();
        let b: Hypergraph = [Hyperedge::from_vertices([2]), Hyperedge::from_vertices([1, 0])]
            .into_iter()
            .collect();
        assert_eq!(canonical_hash(&a), canonical_hash(&b));
    }

    #[test]
    fn hash_separates_edge_boundaries() {
        let joined: Hypergraph = [Hyperedge::from_vertices([0, 1])].into_iter().collect();
        let split: Hypergraph = [Hyperedge::from_vertices([0]), Hyperedge::from_vertices([1])]
            .into_iter()
            .collect();
        assert_ne!(canonical_hash(&joined), canonical_hash(&split));
        assert_eq!(canonical_hash(&Hypergraph::new()).len(), 64);
    }
}
