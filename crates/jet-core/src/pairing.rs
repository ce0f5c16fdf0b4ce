//! Pairing Engine: align the two input tables on acquisition date.

use crate::index::ArtifactTable;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// The paired inputs for one candidate work unit. Both sides are required;
/// dates with only one side present never become units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkUnitInputs {
    pub date_utc: NaiveDate,
    pub l2t_lste: PathBuf,
    pub l2t_stars: PathBuf,
}

/// Join the primary (L2T LSTE) and secondary (L2T STARS) tables on date,
/// dropping any date missing either side. Output follows the primary
/// table's date ordering.
pub fn pair(primary: &ArtifactTable, secondary: &ArtifactTable) -> Vec<WorkUnitInputs> {
    let pairs: Vec<WorkUnitInputs> = primary
        .iter()
        .filter_map(|(date, lste)| {
            secondary.get(date).map(|stars| WorkUnitInputs {
                date_utc: *date,
                l2t_lste: lste.path.clone(),
                l2t_stars: stars.path.clone(),
            })
        })
        .collect();

    info!(
        "found {} matching pairs of L2T LSTE and L2T STARS",
        pairs.len()
    );

    pairs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
