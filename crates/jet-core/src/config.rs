//! Run-level configuration: effective directories and failure policy.
//!
//! Every path is resolved exactly once, before the first work unit runs.
//! The loop never rewrites any of these values, so unit N sees the same
//! directories as unit 1.

use crate::paths;
use chrono::NaiveDate;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CentralPools
// ---------------------------------------------------------------------------

/// Well-known shared locations the resource-pool symlinks point at.
#[derive(Debug, Clone)]
pub struct CentralPools {
    pub static_directory: PathBuf,
    pub stars_sources: PathBuf,
    pub jet_sources: PathBuf,
}

impl Default for CentralPools {
    fn default() -> Self {
        Self {
            static_directory: PathBuf::from(paths::CENTRAL_STATIC_DIRECTORY),
            stars_sources: PathBuf::from(paths::CENTRAL_STARS_SOURCES),
            jet_sources: PathBuf::from(paths::CENTRAL_JET_SOURCES),
        }
    }
}

// ---------------------------------------------------------------------------
// Directories
// ---------------------------------------------------------------------------

/// Explicit directory overrides from the command line; `None` falls back to
/// the conventional subpath of the main working directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryOverrides {
    pub static_dir: Option<PathBuf>,
    pub srtm: Option<PathBuf>,
    pub stars_sources: Option<PathBuf>,
    pub jet_sources: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// The effective directory set for one orchestration run.
#[derive(Debug, Clone)]
pub struct Directories {
    pub main: PathBuf,
    pub static_dir: PathBuf,
    pub srtm: PathBuf,
    pub stars_sources: PathBuf,
    pub jet_sources: PathBuf,
    pub output: PathBuf,
}

impl Directories {
    pub fn resolve(main: PathBuf, overrides: DirectoryOverrides) -> Self {
        let sub = |name: &str| main.join(name);
        Self {
            static_dir: overrides
                .static_dir
                .unwrap_or_else(|| sub(paths::STATIC_DIR_NAME)),
            srtm: overrides.srtm.unwrap_or_else(|| sub(paths::SRTM_DIR_NAME)),
            stars_sources: overrides
                .stars_sources
                .unwrap_or_else(|| sub(paths::STARS_SOURCES_DIR_NAME)),
            jet_sources: overrides
                .jet_sources
                .unwrap_or_else(|| sub(paths::JET_SOURCES_DIR_NAME)),
            output: overrides
                .output
                .unwrap_or_else(|| sub(paths::OUTPUT_DIR_NAME)),
            main,
        }
    }
}

// ---------------------------------------------------------------------------
// RunOptions
// ---------------------------------------------------------------------------

/// Non-path knobs for one orchestration run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Accepted for interface compatibility with scene search; the
    /// reprocessing path does not filter on cloud cover.
    pub max_cloud_percent: Option<f64>,
    /// When set, an unhandled fault stops the whole run instead of
    /// skipping that one unit.
    pub halt_on_unhandled: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
