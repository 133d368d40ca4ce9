use std::fmt;
use std::fs;
use std::path::Path;

use hgen_core::errors::HgenError;

use crate::plan::Method;

/// Plain-text summary written next to each dataset instance.
#[derive(Debug, Clone, PartialEq)]
pub struct IdCard {
    /// Nodes handed to the generator.
    pub num_nodes: usize,
    /// Hyperedges in the written hypergraph.
    pub num_hyperedges: usize,
    /// Probability used.
    pub p: f64,
    /// Generator used.
    pub method: Method,
    /// Seed of the instance's random stream.
    pub seed: u64,
    /// Canonical structural hash.
    pub hash: String,
}

impl fmt::Display for IdCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of nodes: {}", self.num_nodes)?;
        writeln!(f, "Number of hyperedges: {}", self.num_hyperedges)?;
        writeln!(f, "nodes + hyperedges: {}", self.num_nodes + self.num_hyperedges)?;
        writeln!(f, "Probability p: {:.2}", self.p)?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Seed: {}", self.seed)?;
        writeln!(f, "Hash: {}", self.hash)
    }
}

impl IdCard {
    /// Writes the card to `path`.
    pub fn write(&self, path: &Path) -> Result<(), HgenError> {
        fs::write(path, self.to_string()).map_err(|err| HgenError::io("write-id-card", path, err))
    }
}
