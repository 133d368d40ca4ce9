#![deny(missing_docs)]
#![doc = "Core types, structured errors and seeded randomness shared by the hgen crates."]

pub mod errors;
mod hypergraph;
pub mod rng;

pub use errors::{check_probability, ErrorInfo, HgenError};
pub use hypergraph::{Hyperedge, Hypergraph, VertexId};
pub use rng::{derive_substream_seed, RngHandle};
