use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use hgen_graph::{canonical_hash, read_dat};
use serde_json::json;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// `.dat` file to summarise.
    pub file: PathBuf,
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &InspectArgs) -> Result<(), Box<dyn Error>> {
    let graph = read_dat(&args.file)?;
    let hash = canonical_hash(&graph);
    let vertices = graph.vertex_set().len();
    if args.json {
        let summary = json!({
            "file": args.file.display().to_string(),
            "hyperedges": graph.len(),
            "vertices": vertices,
            "num_vertices": graph.num_vertices(),
            "max_arity": graph.max_arity(),
            "simple": graph.is_simple(),
            "connected": graph.is_connected(),
            "hash": hash,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("file:        {}", args.file.display());
    println!("hyperedges:  {}", graph.len());
    println!("vertices:    {vertices}");
    println!("max arity:   {}", graph.max_arity());
    println!("simple:      {}", graph.is_simple());
    println!("connected:   {}", graph.is_connected());
    println!("hash:        {hash}");
    Ok(())
}
