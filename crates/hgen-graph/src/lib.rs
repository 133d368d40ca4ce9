#![deny(missing_docs)]

//! Random hypergraph generators and the `.dat` text format.
//!
//! Two independent generators are provided:
//!
//! * [`gen_from_scratch`] samples node membership per hyperedge with a
//!   Bernoulli trial, then optionally keeps the largest connected component
//!   and drops hyperedges contained in others.
//! * [`gen_from_tree`] turns the level-parity bipartition of a uniformly
//!   random labeled tree into a hypergraph, grows every hyperedge with
//!   Bernoulli vertex additions, and optionally reduces it to a Sperner
//!   family.
//!
//! Both take an explicit [`RngHandle`](hgen_core::RngHandle), so equal seeds
//! produce equal hypergraphs.

mod flags;
mod hash;
pub mod reduce;
mod scratch;
mod serialization;
mod tree;

pub use flags::{ScratchFlags, TreeFlags};
pub use hash::canonical_hash;
pub use scratch::gen_from_scratch;
pub use serialization::{parse_dat, read_dat, to_dat_string, write_dat, write_dat_to};
pub use tree::{gen_from_tree, random_labeled_tree};
