//! Tiled granule inspection.
//!
//! A granule is a zip archive whose layers we never touch here; the only
//! thing the orchestrator needs is the JSON properties entry carrying the
//! acquisition identity (tile, acquisition time, and for scene-based
//! products the orbit and scene numbers).

use crate::error::{JetError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// ---------------------------------------------------------------------------
// GranuleMetadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GranuleMetadata {
    pub product: String,
    pub tile: String,
    /// Present on scene-based products (L2T LSTE); absent on composited
    /// products (L2T STARS).
    pub orbit: Option<u32>,
    pub scene: Option<u32>,
    pub time_utc: NaiveDateTime,
}

impl GranuleMetadata {
    pub fn date_utc(&self) -> NaiveDate {
        self.time_utc.date()
    }
}

/// Wire shape of the properties entry. Timestamps are kept as text here and
/// parsed leniently below.
#[derive(Debug, Deserialize)]
struct RawMetadata {
    product: String,
    tile: String,
    #[serde(default)]
    orbit: Option<u32>,
    #[serde(default)]
    scene: Option<u32>,
    #[serde(rename = "time_UTC")]
    time_utc: String,
}

/// Acquisition timestamps show up in a few shapes across builds; accept the
/// common ones rather than failing an entire archive scan on formatting.
fn parse_time_utc(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y%m%dT%H%M%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// open_granule
// ---------------------------------------------------------------------------

/// Open a granule archive just far enough to read its properties entry.
///
/// Any failure along the way (unreadable file, not a zip, no JSON entry,
/// undecodable JSON, unparseable timestamp) is reported as
/// `MalformedGranule` so callers can drop the one file and keep scanning.
pub fn open_granule(path: &Path) -> Result<GranuleMetadata> {
    let malformed = |reason: String| JetError::MalformedGranule {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| malformed(e.to_string()))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| malformed(e.to_string()))?;

    let entry_name = (0..archive.len())
        .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
        .find(|name| name.to_ascii_lowercase().ends_with(".json"))
        .ok_or_else(|| malformed("no JSON properties entry in archive".to_string()))?;

    let mut entry = archive
        .by_name(&entry_name)
        .map_err(|e| malformed(e.to_string()))?;
    let mut contents = String::new();
    entry
        .read_to_string(&mut contents)
        .map_err(|e| malformed(e.to_string()))?;

    let raw: RawMetadata =
        serde_json::from_str(&contents).map_err(|e| malformed(e.to_string()))?;

    let time_utc = parse_time_utc(&raw.time_utc)
        .ok_or_else(|| malformed(format!("unparseable time_UTC '{}'", raw.time_utc)))?;

    Ok(GranuleMetadata {
        product: raw.product,
        tile: raw.tile,
        orbit: raw.orbit,
        scene: raw.scene,
        time_utc,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_granule(dir: &Path, name: &str, json: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("properties.json", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(json.as_bytes()).unwrap();
        writer.finish().unwrap();
        path
    }

    #[test]
    fn reads_metadata_from_archive() {
        let dir = TempDir::new().unwrap();
        let path = write_granule(
            dir.path(),
            "ECOv002_L2T_LSTE_35800_012_11SPS_20240903T184207_0700_01.zip",
            r#"{"product": "L2T_LSTE", "tile": "11SPS", "orbit": 35800, "scene": 12,
                "time_UTC": "2024-09-03T18:42:07"}"#,
        );
        let metadata = open_granule(&path).unwrap();
        assert_eq!(metadata.product, "L2T_LSTE");
        assert_eq!(metadata.orbit, Some(35800));
        assert_eq!(metadata.scene, Some(12));
        assert_eq!(
            metadata.date_utc(),
            NaiveDate::from_ymd_opt(2024, 9, 3).unwrap()
        );
    }

    #[test]
    fn composited_product_has_no_orbit() {
        let dir = TempDir::new().unwrap();
        let path = write_granule(
            dir.path(),
            "ECOv002_L2T_STARS_11SPS_20240903.zip",
            r#"{"product": "L2T_STARS", "tile": "11SPS", "time_UTC": "2024-09-03 00:00:00"}"#,
        );
        let metadata = open_granule(&path).unwrap();
        assert_eq!(metadata.orbit, None);
        assert_eq!(metadata.scene, None);
    }

    #[test]
    fn not_a_zip_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"this is not an archive").unwrap();
        let err = open_granule(&path).unwrap_err();
        assert!(matches!(err, JetError::MalformedGranule { .. }));
    }

    #[test]
    fn missing_json_entry_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.zip");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("LST.tif", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"raster bytes").unwrap();
        writer.finish().unwrap();

        let err = open_granule(&path).unwrap_err();
        assert!(matches!(err, JetError::MalformedGranule { .. }));
    }

    #[test]
    fn bad_timestamp_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_granule(
            dir.path(),
            "bad-time.zip",
            r#"{"product": "L2T_LSTE", "tile": "11SPS", "time_UTC": "sometime"}"#,
        );
        assert!(matches!(
            open_granule(&path).unwrap_err(),
            JetError::MalformedGranule { .. }
        ));
    }

    #[test]
    fn accepts_compact_timestamp() {
        assert_eq!(
            parse_time_utc("20240903T184207").unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 3)
                .unwrap()
                .and_hms_opt(18, 42, 7)
                .unwrap()
        );
    }
}
