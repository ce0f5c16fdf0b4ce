//! Runconfig generation for the L3T_L4T_JET stage.
//!
//! The stage is an opaque external program; the runconfig file is the
//! entire interface to it. One runconfig is written per work unit, into
//! that unit's disposable run directory, and handed to the stage as its
//! single argument.

use crate::config::Directories;
use crate::error::{JetError, Result};
use crate::io::atomic_write;
use crate::pairing::WorkUnitInputs;
use crate::paths;
use crate::types::WorkUnitId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Runconfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runconfig {
    pub orbit: u32,
    pub scene: u32,
    pub tile: String,
    pub l2t_lste_filename: PathBuf,
    pub l2t_stars_filename: PathBuf,
    pub working_directory: PathBuf,
    pub sources_directory: PathBuf,
    pub static_directory: PathBuf,
    pub srtm_directory: PathBuf,
    pub output_directory: PathBuf,
}

/// A written runconfig: where it lives and the output directory it
/// resolved, which is all downstream callers need from it.
#[derive(Debug, Clone)]
pub struct RunconfigHandle {
    pub path: PathBuf,
    pub output_directory: PathBuf,
}

/// Assemble and atomically write the runconfig for one work unit.
///
/// The output directory is the per-stage, per-date convention under the
/// run's output root, resolved here once so every consumer sees the same
/// value.
pub fn generate_runconfig(
    unit: &WorkUnitId,
    inputs: &WorkUnitInputs,
    dirs: &Directories,
    run_directory: &Path,
) -> Result<RunconfigHandle> {
    let output_directory = paths::stage_output_dir(&dirs.output, paths::JET_PGE, unit.date_utc());

    let runconfig = Runconfig {
        orbit: unit.orbit,
        scene: unit.scene,
        tile: unit.tile.clone(),
        l2t_lste_filename: inputs.l2t_lste.clone(),
        l2t_stars_filename: inputs.l2t_stars.clone(),
        working_directory: run_directory.to_path_buf(),
        sources_directory: dirs.jet_sources.clone(),
        static_directory: dirs.static_dir.clone(),
        srtm_directory: dirs.srtm.clone(),
        output_directory: output_directory.clone(),
    };

    let path = run_directory.join(format!("L3T_L4T_JET_{}.yaml", unit.run_id()));
    let yaml = serde_yaml::to_string(&runconfig).map_err(|e| JetError::RunconfigGeneration {
        run_id: unit.run_id(),
        reason: e.to_string(),
    })?;
    atomic_write(&path, yaml.as_bytes()).map_err(|e| JetError::RunconfigGeneration {
        run_id: unit.run_id(),
        reason: e.to_string(),
    })?;

    Ok(RunconfigHandle {
        path,
        output_directory,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
