use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PGE and product names
// ---------------------------------------------------------------------------

/// Producer of the primary input (land-surface temperature tiles).
pub const LSTE_PGE: &str = "L1_L2_RAD_LSTE";
/// Producer of the secondary input (downscaled spectral index tiles).
pub const STARS_PGE: &str = "L2T_STARS";
/// The stage this orchestrator drives.
pub const JET_PGE: &str = "L3T_L4T_JET";

pub const LSTE_PRODUCT: &str = "L2T_LSTE";
pub const STARS_PRODUCT: &str = "L2T_STARS";
pub const JET_PRODUCT: &str = "L3T_JET";

// ---------------------------------------------------------------------------
// Conventional subdirectories of the main working directory
// ---------------------------------------------------------------------------

pub const STATIC_DIR_NAME: &str = "L3T_L4T_STATIC";
pub const SRTM_DIR_NAME: &str = "SRTM";
pub const STARS_SOURCES_DIR_NAME: &str = "L2T_STARS_SOURCES";
pub const JET_SOURCES_DIR_NAME: &str = "L3T_L4T_JET_SOURCES";
pub const OUTPUT_DIR_NAME: &str = "output";
pub const RUNS_DIR_NAME: &str = "runs";

// ---------------------------------------------------------------------------
// Central resource pools (shared reference-data locations)
// ---------------------------------------------------------------------------

pub const CENTRAL_STATIC_DIRECTORY: &str = "/shared/ECOv002_L3T_L4T/L3T_L4T_STATIC";
pub const CENTRAL_STARS_SOURCES: &str = "/shared/ECOv002_L3T_L4T/L2T_STARS_SOURCES";
pub const CENTRAL_JET_SOURCES: &str = "/shared/ECOv002_L3T_L4T/L3T_L4T_JET_SOURCES";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Per-stage, per-date output directory: `<root>/<pge>/<YYYY-MM-DD>`.
pub fn stage_output_dir(output_root: &Path, pge_name: &str, date: NaiveDate) -> PathBuf {
    output_root
        .join(pge_name)
        .join(date.format("%Y-%m-%d").to_string())
}

/// Disposable working directory for one stage run: `<main>/runs/<run_id>`.
pub fn run_directory(main_directory: &Path, run_id: &str) -> PathBuf {
    main_directory.join(RUNS_DIR_NAME).join(run_id)
}

/// Glob pattern for archived products under the cal/val layout:
/// `<root>/<pge>/<date or **>/*<product>*_<tile>_*.zip`.
///
/// This naming convention is load-bearing; discovery stops working if it
/// drifts from what the stages actually write.
pub fn search_pattern(
    output_root: &Path,
    pge_name: &str,
    product_name: &str,
    tile: &str,
    date: Option<NaiveDate>,
) -> String {
    let date_part = match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "**".to_string(),
    };
    output_root
        .join(pge_name)
        .join(date_part)
        .join(format!("*{product_name}*_{tile}_*.zip"))
        .to_string_lossy()
        .into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
