use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    generate::{self, GenerateArgs},
    inspect::{self, InspectArgs},
    sweep::{self, SweepArgs},
};
use hgen_exp::Method;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hgen", about = "Random hypergraph dataset generator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of hypergraphs with fixed sizes.
    Generate(GenerateArgs),
    /// Run a probability sweep and write a full dataset.
    Sweep(SweepArgs),
    /// Summarise an existing `.dat` file.
    Inspect(InspectArgs),
}

/// Command-line spelling of [`Method`].
#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "snake_case")]
pub enum MethodArg {
    FromScratch,
    FromTree,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::FromScratch => Method::FromScratch,
            MethodArg::FromTree => Method::FromTree,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Sweep(args) => sweep::run(&args),
        Command::Inspect(args) => inspect::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
