//! Artifact Locator: glob-based discovery of archived tile products.
//!
//! The filesystem is the only job-state store in this system, so discovery
//! re-runs the glob on every call instead of caching anything; other
//! producers may be appending to the archive concurrently.

use crate::error::{JetError, Result};
use crate::paths;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Find every archived product matching the cal/val naming convention under
/// `output_root`, optionally pinned to an exact acquisition date.
///
/// An empty result is not an error; it means the product has not been
/// produced yet. Unreadable individual entries are logged and skipped; only
/// a malformed pattern is fatal.
pub fn locate(
    output_root: &Path,
    pge_name: &str,
    product_name: &str,
    tile: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<PathBuf>> {
    let pattern = paths::search_pattern(output_root, pge_name, product_name, tile, date);
    info!("searching cal/val output with pattern: {pattern}");

    let entries = glob::glob(&pattern).map_err(|e| JetError::InvalidPattern {
        pattern: pattern.clone(),
        reason: e.to_string(),
    })?;

    let mut filenames = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => filenames.push(path),
            Err(e) => warn!("skipping unreadable entry under {pattern}: {e}"),
        }
    }

    info!("found {} files", filenames.len());
    Ok(filenames)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_matching_archives_across_dates() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join(
            "L1_L2_RAD_LSTE/2024-01-01/ECOv002_L2T_LSTE_35800_012_11SPS_20240101T181000_0700_01.zip",
        ));
        touch(&root.path().join(
            "L1_L2_RAD_LSTE/2024-01-02/ECOv002_L2T_LSTE_35815_013_11SPS_20240102T181000_0700_01.zip",
        ));
        // Different tile, must not match.
        touch(&root.path().join(
            "L1_L2_RAD_LSTE/2024-01-01/ECOv002_L2T_LSTE_35800_012_12ABC_20240101T181000_0700_01.zip",
        ));

        let found = locate(root.path(), "L1_L2_RAD_LSTE", "L2T_LSTE", "11SPS", None).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn date_filter_narrows_to_one_day() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join(
            "L3T_L4T_JET/2024-01-01/ECOv002_L3T_JET_35800_012_11SPS_20240101T181000_0700_01.zip",
        ));
        touch(&root.path().join(
            "L3T_L4T_JET/2024-01-02/ECOv002_L3T_JET_35815_013_11SPS_20240102T181000_0700_01.zip",
        ));

        let found = locate(
            root.path(),
            "L3T_L4T_JET",
            "L3T_JET",
            "11SPS",
            NaiveDate::from_ymd_opt(2024, 1, 2),
        )
        .unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].to_string_lossy().contains("2024-01-02"));
    }

    #[test]
    fn empty_archive_is_not_an_error() {
        let root = TempDir::new().unwrap();
        let found = locate(root.path(), "L2T_STARS", "L2T_STARS", "11SPS", None).unwrap();
        assert!(found.is_empty());
    }
}
