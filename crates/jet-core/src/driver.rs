//! Stage Driver: one unit, one runconfig, one stage invocation.

use crate::config::Directories;
use crate::pairing::WorkUnitInputs;
use crate::paths;
use crate::runconfig::generate_runconfig;
use crate::stage::ProcessingStage;
use crate::types::{StageOutcome, WorkUnitId};
use tracing::info;

/// Drive the external stage once for one work unit.
///
/// No retry happens here: re-invoking the orchestrator is the retry
/// mechanism, and the completion gate keeps already-successful units from
/// being redone. All faults are folded into the returned outcome; nothing
/// escapes the unit boundary.
pub fn run_unit(
    unit: &WorkUnitId,
    inputs: &WorkUnitInputs,
    dirs: &Directories,
    stage: &dyn ProcessingStage,
) -> StageOutcome {
    let run_directory = paths::run_directory(&dirs.main, &unit.run_id());

    let runconfig = match generate_runconfig(unit, inputs, dirs, &run_directory) {
        Ok(handle) => handle,
        Err(e) => return StageOutcome::Unhandled(e),
    };
    info!(
        "L3T L4T JET output directory: {}",
        runconfig.output_directory.display()
    );

    match stage.run(&runconfig.path) {
        Ok(0) => StageOutcome::Success,
        Ok(code) => StageOutcome::ExitCode(code),
        Err(e) => StageOutcome::Unhandled(e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
