use super::DirArgs;
use crate::output::{print_inputs_table, print_json};
use jet_core::config::{CentralPools, RunOptions};
use jet_core::orchestrator::Orchestrator;

#[derive(Debug, clap::Args)]
pub struct InputsArgs {
    /// Sentinel-2 grid tile to scan (e.g. 11SPS)
    pub tile: String,

    #[command(flatten)]
    pub dirs: DirArgs,
}

/// Dry-run discovery: show the paired work units without touching any of
/// them.
pub fn run(args: InputsArgs, json: bool) -> anyhow::Result<()> {
    let dirs = args.dirs.resolve()?;
    let orchestrator = Orchestrator::new(
        &args.tile,
        dirs,
        CentralPools::default(),
        RunOptions::default(),
    )?;
    let units = orchestrator.find_inputs()?;

    if json {
        print_json(&units)?;
    } else {
        print_inputs_table(&units);
    }

    Ok(())
}
