//! The static dataset the chart loads at startup.
//!
//! # JSON Format
//!
//! ```text
//! {
//!   "source": "NOAA GHCN-Daily USC00051959",
//!   "units": "inches",
//!   "dataRange": "1990-08-01 to 2024-04-30",
//!   "seasons": [
//!     { "label": "2023-24", "startYear": 2023, "totalSnowfall": 12.0,
//!       "dailyData": [ { "date": "2023-11-02", "dayOfSeason": 93, "snowDepth": 5.0,
//!                        "dailySnowfall": 5.0, "cumulativeSnowfall": 5.0 } ] }
//!   ]
//! }
//! ```
//!
//! Loading always runs [`SnowfallBundle::normalize`], so everything
//! downstream can rely on the season invariants.

use crate::season::{Season, SeasonRepairs};
use anyhow::Context;
use csf_utils::dates::format_date;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Unit every snowfall and depth value is expected in.
pub const EXPECTED_UNITS: &str = "inches";

/// Seasonal snowfall for a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowfallBundle {
    /// Station attribution, shown under the chart.
    pub source: String,
    pub units: String,
    /// Human-readable span of the underlying records.
    #[serde(default)]
    pub data_range: String,
    pub seasons: Vec<Season>,
}

/// Summary of what [`SnowfallBundle::normalize`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleRepairs {
    pub duplicate_seasons: usize,
    /// Per-season repairs, keyed by start year, for seasons that needed any.
    pub seasons: Vec<(i32, SeasonRepairs)>,
}

impl BundleRepairs {
    pub fn is_clean(&self) -> bool {
        self.duplicate_seasons == 0 && self.seasons.is_empty()
    }
}

impl SnowfallBundle {
    /// Build a bundle in the expected units, deriving `data_range` from the
    /// first and last records.
    pub fn new(source: impl Into<String>, seasons: Vec<Season>) -> Self {
        let mut bundle = SnowfallBundle {
            source: source.into(),
            units: EXPECTED_UNITS.to_string(),
            data_range: String::new(),
            seasons,
        };
        bundle.normalize();
        bundle.data_range = bundle.derive_data_range();
        bundle
    }

    /// Parse a bundle from JSON and normalize it.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut bundle: SnowfallBundle =
            serde_json::from_str(json).context("invalid snowfall bundle JSON")?;
        if !bundle.units.eq_ignore_ascii_case(EXPECTED_UNITS) {
            log::warn!(
                "[CSF] bundle: units are {:?}, expected {:?}; values are used as-is",
                bundle.units,
                EXPECTED_UNITS
            );
        }
        bundle.normalize();
        log::info!(
            "[CSF] bundle: loaded {} seasons from {:?}",
            bundle.seasons.len(),
            bundle.source
        );
        Ok(bundle)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a bundle from disk; `.gz` files are decompressed.
    pub fn read_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut json = String::new();
        if is_gzip_path(path) {
            GzDecoder::new(BufReader::new(file))
                .read_to_string(&mut json)
                .with_context(|| format!("decompressing {}", path.display()))?;
        } else {
            BufReader::new(file)
                .read_to_string(&mut json)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        Self::from_json(&json)
    }

    /// Write a bundle to disk; `.gz` paths are gzip-compressed.
    pub fn write_path(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json()?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        if is_gzip_path(path) {
            let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
            encoder.write_all(json.as_bytes())?;
            encoder.finish()?.flush()?;
        } else {
            let mut writer = BufWriter::new(file);
            writer.write_all(json.as_bytes())?;
            writer.flush()?;
        }
        log::info!(
            "[CSF] bundle: wrote {} seasons to {}",
            self.seasons.len(),
            path.display()
        );
        Ok(())
    }

    /// Enforce the season invariants: seasons ascending and unique by start
    /// year, records re-derived by [`Season::normalize`].
    pub fn normalize(&mut self) -> BundleRepairs {
        let mut repairs = BundleRepairs::default();

        self.seasons.sort_by_key(|s| s.start_year);
        let before = self.seasons.len();
        self.seasons.dedup_by_key(|s| s.start_year);
        repairs.duplicate_seasons = before - self.seasons.len();
        if repairs.duplicate_seasons > 0 {
            log::warn!(
                "[CSF] bundle: dropped {} duplicate seasons",
                repairs.duplicate_seasons
            );
        }

        for season in &mut self.seasons {
            let season_repairs = season.normalize();
            if !season_repairs.is_clean() {
                log::warn!(
                    "[CSF] bundle: repaired season {}: {:?}",
                    season.label,
                    season_repairs
                );
                repairs.seasons.push((season.start_year, season_repairs));
            }
        }
        repairs
    }

    /// Smallest and largest start year present.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.seasons.first()?.start_year;
        let last = self.seasons.last()?.start_year;
        Some((first, last))
    }

    fn derive_data_range(&self) -> String {
        let mut dates = self
            .seasons
            .iter()
            .flat_map(|s| s.daily_data.iter().map(|r| r.date));
        let first = dates.next();
        let last = dates.last().or(first);
        match (first, last) {
            (Some(first), Some(last)) => {
                format!("{} to {}", format_date(&first), format_date(&last))
            }
            _ => String::new(),
        }
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
