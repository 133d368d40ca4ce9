use std::fs;
use std::path::Path;

use hgen_core::errors::{ErrorInfo, HgenError};
use hgen_core::rng::{derive_substream_seed, RngHandle};
use hgen_graph::{canonical_hash, write_dat};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::hash::stable_hash_string;
use crate::id_card::IdCard;
use crate::plan::{generate, BatchSpec, CountRange, DatasetPlan, Method};

/// Manifest file written at the root of a dataset directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Record of one written hypergraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// `.dat` path relative to the output directory.
    pub file: String,
    /// Id-card path relative to the output directory, if one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    /// Nodes handed to the generator.
    pub num_nodes: usize,
    /// Hyperedges requested from the generator.
    pub requested_hyperedges: usize,
    /// Hyperedges actually produced.
    pub num_hyperedges: usize,
    /// One past the largest vertex id in the output.
    pub num_vertices: usize,
    /// Probability used.
    pub p: f64,
    /// Generator used.
    pub method: Method,
    /// Seed of the instance's random stream.
    pub seed: u64,
    /// Canonical structural hash of the output.
    pub hash: String,
}

/// Summary of a batch or dataset run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Hash of the plan or batch spec that produced the run.
    pub plan_hash: String,
    /// One record per written instance, in generation order.
    pub instances: Vec<InstanceRecord>,
}

/// Generates `spec.num_hypergraphs` instances with fixed sizes, writing
/// `hypergraph_{i}.dat` into `out_dir`.
pub fn generate_batch(spec: &BatchSpec, out_dir: &Path) -> Result<DatasetReport, HgenError> {
    spec.validate()?;
    create_dir(out_dir)?;
    let plan_hash = stable_hash_string(spec)?;

    let mut instances = Vec::with_capacity(spec.num_hypergraphs);
    for index in 0..spec.num_hypergraphs {
        let seed = derive_substream_seed(spec.seed, index as u64);
        let mut rng = RngHandle::from_seed(seed);
        let graph = generate(
            spec.method,
            spec.num_nodes,
            spec.num_hyperedges,
            spec.p,
            &spec.flags,
            &mut rng,
        )?;
        let file = format!("hypergraph_{index}.dat");
        write_dat(&graph, &out_dir.join(&file))?;
        if graph.is_empty() {
            warn!(file = %file, "generated hypergraph is empty");
        }
        info!(file = %file, hyperedges = graph.len(), "wrote hypergraph");
        instances.push(InstanceRecord {
            file,
            id_card: None,
            num_nodes: spec.num_nodes,
            requested_hyperedges: spec.num_hyperedges,
            num_hyperedges: graph.len(),
            num_vertices: graph.num_vertices(),
            p: spec.p,
            method: spec.method,
            seed,
            hash: canonical_hash(&graph),
        });
    }

    Ok(DatasetReport {
        plan_hash,
        instances,
    })
}

/// Runs a full probability sweep into `out_dir`.
///
/// Each probability gets a `p_{p:.2}` directory holding, per instance, the
/// `.dat` file and its id card. Node and hyperedge counts are drawn from the
/// plan's ranges using the instance's own random stream. A `manifest.json`
/// describing every instance is written last.
pub fn run_dataset(plan: &DatasetPlan, out_dir: &Path) -> Result<DatasetReport, HgenError> {
    plan.validate()?;
    create_dir(out_dir)?;
    let plan_hash = stable_hash_string(plan)?;

    let mut instances = Vec::with_capacity(plan.probabilities.len() * plan.instances_per_p);
    let mut job = 0u64;
    for &p in &plan.probabilities {
        let p_dir = format!("p_{p:.2}");
        create_dir(&out_dir.join(&p_dir))?;
        for index in 0..plan.instances_per_p {
            let seed = derive_substream_seed(plan.seed, job);
            job += 1;
            let mut rng = RngHandle::from_seed(seed);
            let num_nodes = draw(&plan.nodes, &mut rng);
            let requested = draw(&plan.hyperedges, &mut rng);
            let graph = generate(plan.method, num_nodes, requested, p, &plan.flags, &mut rng)?;

            let stem = format!(
                "hypergraph_{index}_nodes_{num_nodes}_hyperedges_{requested}_p_{p:.2}_{}",
                plan.method
            );
            let file = format!("{p_dir}/{stem}.dat");
            let card_file = format!("{p_dir}/hypergraph_{index}_id.txt");
            let hash = canonical_hash(&graph);
            write_dat(&graph, &out_dir.join(&file))?;
            let card = IdCard {
                num_nodes,
                num_hyperedges: graph.len(),
                p,
                method: plan.method,
                seed,
                hash: hash.clone(),
            };
            card.write(&out_dir.join(&card_file))?;
            if graph.is_empty() {
                warn!(file = %file, "generated hypergraph is empty");
            }

            instances.push(InstanceRecord {
                file,
                id_card: Some(card_file),
                num_nodes,
                requested_hyperedges: requested,
                num_hyperedges: graph.len(),
                num_vertices: graph.num_vertices(),
                p,
                method: plan.method,
                seed,
                hash,
            });
        }
        info!(dir = %p_dir, instances = plan.instances_per_p, "finished probability");
    }

    let report = DatasetReport {
        plan_hash,
        instances,
    };
    write_manifest(&report, &out_dir.join(MANIFEST_FILE))?;
    info!(
        instances = report.instances.len(),
        out = %out_dir.display(),
        "dataset complete"
    );
    Ok(report)
}

fn draw(range: &CountRange, rng: &mut RngHandle) -> usize {
    rng.gen_range(range.min..=range.max)
}

fn create_dir(path: &Path) -> Result<(), HgenError> {
    fs::create_dir_all(path).map_err(|err| HgenError::io("create-dir", path, err))
}

fn write_manifest(report: &DatasetReport, path: &Path) -> Result<(), HgenError> {
    let bytes = serde_json::to_vec_pretty(report)
        .map_err(|err| HgenError::Serde(ErrorInfo::new("json-encode", err.to_string())))?;
    fs::write(path, bytes).map_err(|err| HgenError::io("write-manifest", path, err))
}
