//! Undirected hyperedges and hypergraphs with set semantics.

use std::cmp::Ordering;
use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HgenError};

/// Vertex identifier. Ids are plain non-negative integers.
pub type VertexId = u32;

/// A hyperedge: vertex ids sorted ascending with no repeats.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<VertexId>", into = "Vec<VertexId>")]
pub struct Hyperedge(Vec<VertexId>);

impl Hyperedge {
    /// The hyperedge with no vertices.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Builds a hyperedge from arbitrary ids, sorting and collapsing repeats.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let set: BTreeSet<VertexId> = vertices.into_iter().collect();
        Self(set.into_iter().collect())
    }

    /// Builds a hyperedge from ids in any order, rejecting repeated ids.
    pub fn try_new(mut vertices: Vec<VertexId>) -> Result<Self, HgenError> {
        vertices.sort_unstable();
        if let Some(pair) = vertices.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(HgenError::Parse(
                ErrorInfo::new("duplicate-vertex", "hyperedge lists a vertex more than once")
                    .with_context("vertex", pair[0].to_string()),
            ));
        }
        Ok(Self(vertices))
    }

    /// Sorted vertex ids.
    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    /// Number of vertices (arity).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty hyperedge.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every vertex of `self` also belongs to `other`.
    pub fn is_subset(&self, other: &Hyperedge) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut rest = other.0.iter();
        self.0
            .iter()
            .all(|vertex| rest.by_ref().any(|candidate| candidate == vertex))
    }

    /// Subset test that excludes equality.
    pub fn is_proper_subset(&self, other: &Hyperedge) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// True when the two hyperedges share at least one vertex.
    pub fn intersects(&self, other: &Hyperedge) -> bool {
        let (a, b) = (&self.0, &other.0);
        let mut idx_a = 0;
        let mut idx_b = 0;
        while idx_a < a.len() && idx_b < b.len() {
            match a[idx_a].cmp(&b[idx_b]) {
                Ordering::Less => idx_a += 1,
                Ordering::Greater => idx_b += 1,
                Ordering::Equal => return true,
            }
        }
        false
    }
}

impl TryFrom<Vec<VertexId>> for Hyperedge {
    type Error = HgenError;

    fn try_from(value: Vec<VertexId>) -> Result<Self, Self::Error> {
        Hyperedge::try_new(value)
    }
}

impl From<Hyperedge> for Vec<VertexId> {
    fn from(value: Hyperedge) -> Self {
        value.0
    }
}

impl FromIterator<VertexId> for Hyperedge {
    fn from_iter<T: IntoIterator<Item = VertexId>>(iter: T) -> Self {
        Hyperedge::from_vertices(iter)
    }
}

/// A set of hyperedges. Structurally identical hyperedges collapse into one.
///
/// Iteration is in lexicographic hyperedge order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hypergraph {
    edges: BTreeSet<Hyperedge>,
}

impl Hypergraph {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a hyperedge, returning `false` when an identical one was present.
    pub fn insert(&mut self, edge: Hyperedge) -> bool {
        self.edges.insert(edge)
    }

    /// Number of distinct hyperedges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the hypergraph has no hyperedges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates hyperedges in lexicographic order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Hyperedge> + '_ {
        self.edges.iter()
    }

    /// All vertex ids touched by some hyperedge.
    pub fn vertex_set(&self) -> BTreeSet<VertexId> {
        self.edges
            .iter()
            .flat_map(|edge| edge.vertices().iter().copied())
            .collect()
    }

    /// One past the largest vertex id in use, or zero without vertices.
    pub fn num_vertices(&self) -> usize {
        self.edges
            .iter()
            .filter_map(|edge| edge.vertices().last())
            .max()
            .map_or(0, |max| *max as usize + 1)
    }

    /// Largest hyperedge arity.
    pub fn max_arity(&self) -> usize {
        self.edges.iter().map(Hyperedge::len).max().unwrap_or(0)
    }

    /// True when no hyperedge is contained in a different one.
    ///
    /// Members are distinct, so this coincides with being an antichain.
    pub fn is_simple(&self) -> bool {
        let edges: Vec<&Hyperedge> = self.edges.iter().collect();
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                if a.is_subset(b) || b.is_subset(a) {
                    return false;
                }
            }
        }
        true
    }

    /// True when the intersection graph of the hyperedges is connected.
    ///
    /// Hypergraphs with fewer than two hyperedges count as connected.
    pub fn is_connected(&self) -> bool {
        let edges: Vec<&Hyperedge> = self.edges.iter().collect();
        if edges.len() < 2 {
            return true;
        }
        let mut seen = vec![false; edges.len()];
        let mut queue = VecDeque::from([0usize]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(current) = queue.pop_front() {
            for (next, edge) in edges.iter().enumerate() {
                if !seen[next] && edges[current].intersects(edge) {
                    seen[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == edges.len()
    }

    /// Consumes the hypergraph, yielding hyperedges in lexicographic order.
    pub fn into_edges(self) -> Vec<Hyperedge> {
        self.edges.into_iter().collect()
    }
}

impl FromIterator<Hyperedge> for Hypergraph {
    fn from_iter<T: IntoIterator<Item = Hyperedge>>(iter: T) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hypergraph {
    type Item = &'a Hyperedge;
    type IntoIter = std::collections::btree_set::Iter<'a, Hyperedge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for Hypergraph {
    type Item = Hyperedge;
    type IntoIter = std::collections::btree_set::IntoIter<Hyperedge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
