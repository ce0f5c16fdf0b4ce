use super::DirArgs;
use crate::output::{print_json, print_status_table};
use jet_core::config::{CentralPools, RunOptions};
use jet_core::orchestrator::Orchestrator;
use serde::Serialize;

#[derive(Debug, clap::Args)]
pub struct StatusArgs {
    /// Sentinel-2 grid tile to report on (e.g. 11SPS)
    pub tile: String,

    #[command(flatten)]
    pub dirs: DirArgs,
}

#[derive(Serialize)]
struct DateStatus {
    date_utc: String,
    done: bool,
}

#[derive(Serialize)]
struct StatusReport {
    tile: String,
    pending: usize,
    done: usize,
    dates: Vec<DateStatus>,
}

/// Report, per paired acquisition date, whether the completion gate sees a
/// finished output archive.
pub fn run(args: StatusArgs, json: bool) -> anyhow::Result<()> {
    let dirs = args.dirs.resolve()?;
    let orchestrator = Orchestrator::new(
        &args.tile,
        dirs,
        CentralPools::default(),
        RunOptions::default(),
    )?;

    let mut dates = Vec::new();
    for unit in orchestrator.find_inputs()? {
        dates.push(DateStatus {
            date_utc: unit.date_utc.to_string(),
            done: orchestrator.unit_already_done(&unit)?,
        });
    }

    let report = StatusReport {
        tile: args.tile,
        pending: dates.iter().filter(|d| !d.done).count(),
        done: dates.iter().filter(|d| d.done).count(),
        dates,
    };

    if json {
        print_json(&report)?;
    } else {
        print_status_table(report.dates.iter().map(|d| (d.date_utc.as_str(), d.done)));
        println!("{} done, {} pending", report.done, report.pending);
    }

    Ok(())
}
