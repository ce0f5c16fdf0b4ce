//! Orchestrator: bootstrap, discovery, and the sequential work-unit loop.

use crate::config::{CentralPools, Directories, RunOptions};
use crate::error::Result;
use crate::gate::is_already_done;
use crate::granule::open_granule;
use crate::index::index;
use crate::io::symlink_if_missing;
use crate::locate::locate;
use crate::pairing::{pair, WorkUnitInputs};
use crate::paths;
use crate::stage::ProcessingStage;
use crate::types::{validate_tile, StageOutcome, WorkUnitId};
use serde::Serialize;
use tracing::{debug, error, info, warn};

// ---------------------------------------------------------------------------
// RunSummary
// ---------------------------------------------------------------------------

/// What happened to each unit over one orchestration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Units whose stage ran and exited on the success path.
    pub processed: usize,
    /// Units skipped by the completion gate.
    pub skipped: usize,
    /// Units that failed (recognized stage exit code or unhandled fault).
    pub failed: usize,
    /// True when an unhandled fault stopped the loop early.
    pub halted: bool,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

pub struct Orchestrator {
    tile: String,
    dirs: Directories,
    pools: CentralPools,
    options: RunOptions,
}

impl Orchestrator {
    pub fn new(
        tile: impl Into<String>,
        dirs: Directories,
        pools: CentralPools,
        options: RunOptions,
    ) -> Result<Self> {
        let tile = tile.into();
        validate_tile(&tile)?;
        Ok(Self {
            tile,
            dirs,
            pools,
            options,
        })
    }

    /// Link each resource pool to its shared central location if the local
    /// path does not exist yet. Pools are read-only from here on.
    fn bootstrap_pools(&self) -> Result<()> {
        for (link, target) in [
            (&self.dirs.static_dir, &self.pools.static_directory),
            (&self.dirs.stars_sources, &self.pools.stars_sources),
            (&self.dirs.jet_sources, &self.pools.jet_sources),
        ] {
            if symlink_if_missing(target, link)? {
                info!("linked {} -> {}", link.display(), target.display());
            }
        }
        Ok(())
    }

    /// Discover and pair the two input products, freshly from the
    /// filesystem, restricted to the configured date range.
    pub fn find_inputs(&self) -> Result<Vec<WorkUnitInputs>> {
        let lste = locate(
            &self.dirs.output,
            paths::LSTE_PGE,
            paths::LSTE_PRODUCT,
            &self.tile,
            None,
        )?;
        let stars = locate(
            &self.dirs.output,
            paths::STARS_PGE,
            paths::STARS_PRODUCT,
            &self.tile,
            None,
        )?;

        let pairs = pair(&index(lste), &index(stars));
        Ok(pairs
            .into_iter()
            .filter(|p| {
                self.options.start_date.map_or(true, |d| p.date_utc >= d)
                    && self.options.end_date.map_or(true, |d| p.date_utc <= d)
            })
            .collect())
    }

    /// The completion gate, scoped to this run's tile and output tree.
    pub fn unit_already_done(&self, inputs: &WorkUnitInputs) -> Result<bool> {
        is_already_done(&self.dirs.output, &self.tile, inputs.date_utc)
    }

    /// Run every still-missing unit through the stage, in date order.
    ///
    /// Failures never cross the unit boundary: a recognized stage exit
    /// code or an unhandled fault is logged against the unit's identity
    /// and the loop moves on, unless halt-on-unhandled is set.
    pub fn run(&self, stage: &dyn ProcessingStage) -> Result<RunSummary> {
        self.bootstrap_pools()?;

        if self.options.max_cloud_percent.is_some() {
            debug!("max cloud percent is not applied in the reprocessing path");
        }

        let units = self.find_inputs()?;
        let mut summary = RunSummary::default();

        for inputs in &units {
            // The primary granule's embedded metadata carries the orbit,
            // scene, and acquisition timestamp the run identity needs.
            let metadata = match open_granule(&inputs.l2t_lste) {
                Ok(m) => m,
                Err(e) => {
                    warn!("skipping unit on {}: {e}", inputs.date_utc);
                    summary.failed += 1;
                    continue;
                }
            };
            let unit = WorkUnitId {
                tile: metadata.tile.clone(),
                orbit: metadata.orbit.unwrap_or(0),
                scene: metadata.scene.unwrap_or(0),
                time_utc: metadata.time_utc,
            };

            if self.unit_already_done(inputs)? {
                info!("found previously completed L3T JET for {unit}");
                summary.skipped += 1;
                continue;
            }

            info!("processing L3T JET {unit}");
            match crate::driver::run_unit(&unit, inputs, &self.dirs, stage) {
                StageOutcome::Success => {
                    summary.processed += 1;
                }
                StageOutcome::ExitCode(code) => {
                    warn!("{} exit code {code} for {unit}", stage.name());
                    summary.failed += 1;
                }
                StageOutcome::Unhandled(e) => {
                    error!("unhandled failure for {unit}: {e}");
                    summary.failed += 1;
                    if self.options.halt_on_unhandled {
                        summary.halted = true;
                        break;
                    }
                }
            }
        }

        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
