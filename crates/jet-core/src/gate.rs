//! Completion Gate: the system's sole resumability mechanism.
//!
//! "Done" means a finished, named output archive exists in the output
//! tree for the unit's tile and date. Failed runs leave nothing the gate
//! could mistake for success, so re-running the orchestrator after a
//! partial batch redoes only the unfinished units.

use crate::error::Result;
use crate::locate::locate;
use crate::paths;
use chrono::NaiveDate;
use std::path::Path;

/// True iff at least one L3T JET output archive already exists for this
/// tile and date. Queries the filesystem fresh on every call; no caching.
pub fn is_already_done(output_root: &Path, tile: &str, date: NaiveDate) -> Result<bool> {
    let outputs = locate(
        output_root,
        paths::JET_PGE,
        paths::JET_PRODUCT,
        tile,
        Some(date),
    )?;
    Ok(!outputs.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn done_when_output_archive_exists() {
        let root = TempDir::new().unwrap();
        let output = root.path().join(
            "L3T_L4T_JET/2024-01-01/ECOv002_L3T_JET_35800_012_T1ABC_20240101T181000_0700_01.zip",
        );
        std::fs::create_dir_all(output.parent().unwrap()).unwrap();
        std::fs::write(&output, b"").unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(is_already_done(root.path(), "T1ABC", date).unwrap());
    }

    #[test]
    fn not_done_when_archive_missing() {
        let root = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(!is_already_done(root.path(), "T1ABC", date).unwrap());
    }

    #[test]
    fn gate_is_scoped_to_date() {
        let root = TempDir::new().unwrap();
        let output = root.path().join(
            "L3T_L4T_JET/2024-01-01/ECOv002_L3T_JET_35800_012_T1ABC_20240101T181000_0700_01.zip",
        );
        std::fs::create_dir_all(output.parent().unwrap()).unwrap();
        std::fs::write(&output, b"").unwrap();

        let other = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(!is_already_done(root.path(), "T1ABC", other).unwrap());
    }

    #[test]
    fn gate_is_scoped_to_tile() {
        let root = TempDir::new().unwrap();
        let output = root.path().join(
            "L3T_L4T_JET/2024-01-01/ECOv002_L3T_JET_35800_012_T1ABC_20240101T181000_0700_01.zip",
        );
        std::fs::create_dir_all(output.parent().unwrap()).unwrap();
        std::fs::write(&output, b"").unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(!is_already_done(root.path(), "T2XYZ", date).unwrap());
    }
}
