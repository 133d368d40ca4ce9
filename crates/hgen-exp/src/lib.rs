//! Dataset orchestration: fixed-size batches and probability sweeps that
//! write random hypergraphs to `.dat` files.

mod dataset;
mod hash;
mod id_card;
mod plan;

pub use dataset::{generate_batch, run_dataset, DatasetReport, InstanceRecord, MANIFEST_FILE};
pub use hash::stable_hash_string;
pub use id_card::IdCard;
pub use plan::{generate, tree_size, BatchSpec, CountRange, DatasetPlan, GeneratorFlags, Method};
