use super::DirArgs;
use crate::output::print_json;
use anyhow::bail;
use chrono::NaiveDate;
use jet_core::config::{CentralPools, RunOptions};
use jet_core::orchestrator::Orchestrator;
use jet_core::paths;
use jet_core::stage::CommandStage;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Sentinel-2 grid tile to reprocess (e.g. 11SPS)
    pub tile: String,

    /// Restrict to a single acquisition date (overrides --start/--end)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Earliest acquisition date to process
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Latest acquisition date to process
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Maximum cloud percent (accepted for scene-search compatibility;
    /// not applied in the reprocessing path)
    #[arg(long = "max-cloud")]
    pub max_cloud_percent: Option<f64>,

    /// Executable invoked once per work unit with the runconfig path
    #[arg(long = "stage-command", env = "JET_STAGE_COMMAND", default_value = "L3T_L4T_JET")]
    pub stage_command: PathBuf,

    /// Stop the whole run on the first unhandled failure instead of
    /// skipping that unit
    #[arg(long = "halt-on-failure")]
    pub halt_on_failure: bool,

    /// Central static reference-data pool to link against
    #[arg(long, env = "JET_CENTRAL_STATIC", default_value = paths::CENTRAL_STATIC_DIRECTORY)]
    pub central_static: PathBuf,

    /// Central L2T STARS sources pool to link against
    #[arg(long, env = "JET_CENTRAL_STARS_SOURCES", default_value = paths::CENTRAL_STARS_SOURCES)]
    pub central_stars_sources: PathBuf,

    /// Central L3T L4T JET sources pool to link against
    #[arg(long, env = "JET_CENTRAL_JET_SOURCES", default_value = paths::CENTRAL_JET_SOURCES)]
    pub central_jet_sources: PathBuf,

    #[command(flatten)]
    pub dirs: DirArgs,
}

pub fn run(args: RunArgs, json: bool) -> anyhow::Result<()> {
    let (start_date, end_date) = match args.date {
        Some(d) => (Some(d), Some(d)),
        None => (args.start, args.end),
    };

    let dirs = args.dirs.resolve()?;
    let pools = CentralPools {
        static_directory: args.central_static,
        stars_sources: args.central_stars_sources,
        jet_sources: args.central_jet_sources,
    };
    let options = RunOptions {
        start_date,
        end_date,
        max_cloud_percent: args.max_cloud_percent,
        halt_on_unhandled: args.halt_on_failure,
    };

    let orchestrator = Orchestrator::new(&args.tile, dirs, pools, options)?;
    let stage = CommandStage::new(paths::JET_PGE, args.stage_command);
    let summary = orchestrator.run(&stage)?;

    if json {
        print_json(&summary)?;
    } else {
        println!(
            "processed {} skipped {} failed {}",
            summary.processed, summary.skipped, summary.failed
        );
    }

    if summary.halted {
        bail!("halted on unhandled failure for tile {}", args.tile);
    }

    Ok(())
}
