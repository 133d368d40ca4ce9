use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use hgen_exp::{generate_batch, BatchSpec, GeneratorFlags};
use hgen_graph::{ScratchFlags, TreeFlags};

use crate::MethodArg;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of random hypergraphs to generate.
    pub num_hypergraphs: usize,
    /// Number of nodes in each hypergraph.
    pub num_nodes: usize,
    /// Number of hyperedges requested per hypergraph.
    pub num_hyperedges: usize,
    /// Probability of a node joining a hyperedge.
    pub p: f64,
    /// Directory receiving the `.dat` files.
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "from_scratch")]
    pub method: MethodArg,
    /// Master seed; instance `i` draws from substream `i`.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Reduce tree-method output to a Sperner family.
    #[arg(long)]
    pub sperner: bool,
    /// Keep hyperedges contained in others (scratch method).
    #[arg(long)]
    pub allow_contained: bool,
    /// Keep every connected component (scratch method).
    #[arg(long)]
    pub allow_disconnected: bool,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let spec = BatchSpec {
        num_hypergraphs: args.num_hypergraphs,
        num_nodes: args.num_nodes,
        num_hyperedges: args.num_hyperedges,
        p: args.p,
        method: args.method.into(),
        seed: args.seed,
        flags: GeneratorFlags {
            scratch: ScratchFlags {
                make_simple: !args.allow_contained,
                make_connected: !args.allow_disconnected,
            },
            tree: TreeFlags {
                sperner: args.sperner,
            },
        },
    };
    let report = generate_batch(&spec, &args.path)?;
    for record in &report.instances {
        println!(
            "{}\t{} hyperedges\t{} vertices",
            record.file, record.num_hyperedges, record.num_vertices
        );
    }
    Ok(())
}
