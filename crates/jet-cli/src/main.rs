mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::{inputs::InputsArgs, run::RunArgs, status::StatusArgs};

#[derive(Parser)]
#[command(
    name = "reprocess-jet",
    about = "Batch reprocessing of the ECOSTRESS L3T JET tile product from archived L2T inputs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair archived inputs and drive the JET stage for every
    /// still-missing date
    Run(RunArgs),

    /// List the paired work units a run would consider
    Inputs(InputsArgs),

    /// Show per-date done/pending status from the completion gate
    Status(StatusArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Run(_) => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run(args) => cmd::run::run(args, cli.json),
        Commands::Inputs(args) => cmd::inputs::run(args, cli.json),
        Commands::Status(args) => cmd::status::run(args, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
