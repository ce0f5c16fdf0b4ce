//! Artifact Indexer: per-date tables of discovered granules.

use crate::granule;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One discovered file on durable storage, keyed by acquisition date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRef {
    pub date_utc: NaiveDate,
    pub path: PathBuf,
}

/// Mapping from acquisition date to artifact, for one (stage, product,
/// tile) triple. BTreeMap keeps iteration in date order, which downstream
/// pairing relies on for a deterministic processing sequence.
pub type ArtifactTable = BTreeMap<NaiveDate, ArtifactRef>;

/// Open each located archive just far enough to read its acquisition date.
///
/// A malformed granule must not block a multi-day batch, so it is logged
/// and dropped from the table. If two archives carry the same date the
/// later one encountered wins; legitimate archives don't duplicate dates.
pub fn index<I, P>(paths: I) -> ArtifactTable
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut table = ArtifactTable::new();

    for path in paths {
        let path = path.as_ref();
        match granule::open_granule(path) {
            Ok(metadata) => {
                table.insert(
                    metadata.date_utc(),
                    ArtifactRef {
                        date_utc: metadata.date_utc(),
                        path: path.to_path_buf(),
                    },
                );
            }
            Err(e) => warn!("dropping granule from index: {e}"),
        }
    }

    table
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
