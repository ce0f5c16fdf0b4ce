use crate::error::{JetError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Tile validation
// ---------------------------------------------------------------------------

static TILE_RE: OnceLock<Regex> = OnceLock::new();

fn tile_re() -> &'static Regex {
    TILE_RE.get_or_init(|| Regex::new(r"^\d{2}[A-Z]{3}$").unwrap())
}

/// Validate a Sentinel-2 MGRS tile identifier (e.g. `11SPS`).
pub fn validate_tile(tile: &str) -> Result<()> {
    if !tile_re().is_match(tile) {
        return Err(JetError::InvalidTile(tile.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// WorkUnitId
// ---------------------------------------------------------------------------

/// Identity of one reprocessing job, derived from the primary input
/// granule's embedded metadata (the filename alone carries no orbit/scene).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUnitId {
    pub tile: String,
    pub orbit: u32,
    pub scene: u32,
    pub time_utc: NaiveDateTime,
}

impl WorkUnitId {
    pub fn date_utc(&self) -> NaiveDate {
        self.time_utc.date()
    }

    /// Run identifier in the mission convention:
    /// `ECOv002_<orbit:05>_<scene:03>_<YYYYMMDDTHHMMSS>`.
    pub fn run_id(&self) -> String {
        format!(
            "ECOv002_{:05}_{:03}_{}",
            self.orbit,
            self.scene,
            self.time_utc.format("%Y%m%dT%H%M%S")
        )
    }
}

impl std::fmt::Display for WorkUnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "orbit {} scene {} tile {} on {}",
            self.orbit,
            self.scene,
            self.tile,
            self.date_utc()
        )
    }
}

// ---------------------------------------------------------------------------
// StageOutcome
// ---------------------------------------------------------------------------

/// Result of driving one external processing stage for one work unit.
#[derive(Debug)]
pub enum StageOutcome {
    /// The stage exited on its recognized success path.
    Success,
    /// The stage exited with a recognized, non-fatal domain exit code
    /// (e.g. input disqualified by a quality threshold).
    ExitCode(i32),
    /// Anything else: runconfig generation failed, the stage could not be
    /// spawned, or it died without a code.
    Unhandled(JetError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
