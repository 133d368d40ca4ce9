use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use hgen_exp::{run_dataset, DatasetPlan, MANIFEST_FILE};
use tracing::info;

use crate::MethodArg;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Output directory for the dataset.
    #[arg(long)]
    pub out: PathBuf,
    /// YAML plan; the built-in probability grid is used when absent.
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Overrides the plan's generation method.
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,
    /// Overrides the plan's master seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let mut plan = match &args.plan {
        Some(path) => DatasetPlan::load(path)?,
        None => DatasetPlan::default(),
    };
    if let Some(method) = args.method {
        plan.method = method.into();
    }
    if let Some(seed) = args.seed {
        plan.seed = seed;
    }
    info!(
        method = %plan.method,
        probabilities = plan.probabilities.len(),
        instances_per_p = plan.instances_per_p,
        "starting sweep"
    );
    let report = run_dataset(&plan, &args.out)?;
    println!(
        "wrote {} hypergraphs, manifest at {}",
        report.instances.len(),
        args.out.join(MANIFEST_FILE).display()
    );
    Ok(())
}
