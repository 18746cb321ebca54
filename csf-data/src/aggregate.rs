//! Season aggregation: raw daily observations -> ordered seasons with
//! daily and cumulative snowfall.
//!
//! Two derivation modes are supported, chosen by what the station reports:
//! - **Depth**: daily snowfall is the positive day-over-day rise in snow
//!   depth. Melt and settling never produce negative snowfall.
//! - **Snowfall**: the station already measures new snow; values are used
//!   directly, clamped to zero.
//!
//! Deltas restart at every season boundary, so each season is derived only
//! from its own records.

use chrono::NaiveDate;
use csf_core::bundle::SnowfallBundle;
use csf_core::observation::{Measurement, RawObservation};
use csf_core::season::{Season, SeasonDay};
use csf_utils::dates::season_start_year;
use std::collections::BTreeMap;

/// Seasons with fewer recorded days than this are reported, not charted.
pub const MIN_SEASON_DAYS_DEFAULT: usize = 30;

/// How daily snowfall is obtained from the raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivationMode {
    /// Raw values are snow depth; snowfall is the positive delta.
    #[default]
    Depth,
    /// Raw values are already daily snowfall.
    Snowfall,
}

/// Snowfall credited to the first day of a season in depth mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstDayPolicy {
    /// Day 0 has no previous depth to compare against: 0.
    #[default]
    Zero,
    /// Day 0 is credited with its whole measured depth.
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub mode: DerivationMode,
    pub first_day: FirstDayPolicy,
    pub min_season_days: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            mode: DerivationMode::default(),
            first_day: FirstDayPolicy::default(),
            min_season_days: MIN_SEASON_DAYS_DEFAULT,
        }
    }
}

/// A season left out of the output because it had too few days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludedSeason {
    pub start_year: i32,
    pub days: usize,
}

/// Output of [`SeasonAggregator::aggregate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Ascending by start year; records ascending by date.
    pub seasons: Vec<Season>,
    pub excluded: Vec<ExcludedSeason>,
    /// Observations dropped because an earlier one had the same date.
    pub duplicate_dates: Vec<NaiveDate>,
}

impl Aggregation {
    /// Package the charted seasons for `source` in the bundle format.
    pub fn into_bundle(self, source: impl Into<String>) -> SnowfallBundle {
        SnowfallBundle::new(source, self.seasons)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonAggregator {
    config: AggregatorConfig,
}

impl SeasonAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Group observations into seasons and derive their snowfall series.
    ///
    /// Input need not be sorted. When two observations share a date the
    /// first one wins. A station with no observations yields no seasons.
    pub fn aggregate(&self, observations: &[RawObservation]) -> Aggregation {
        let mut aggregation = Aggregation::default();

        let mut sorted: Vec<&RawObservation> = observations.iter().collect();
        sorted.sort_by_key(|obs| obs.date);

        let mut by_season: BTreeMap<i32, Vec<&RawObservation>> = BTreeMap::new();
        let mut last_date: Option<NaiveDate> = None;
        for obs in sorted {
            if last_date == Some(obs.date) {
                log::warn!("[CSF] aggregate: dropping duplicate record for {}", obs.date);
                aggregation.duplicate_dates.push(obs.date);
                continue;
            }
            last_date = Some(obs.date);
            by_season
                .entry(season_start_year(&obs.date))
                .or_default()
                .push(obs);
        }

        for (start_year, records) in by_season {
            if records.len() < self.config.min_season_days {
                log::warn!(
                    "[CSF] aggregate: excluding season {} with only {} days (minimum {})",
                    start_year,
                    records.len(),
                    self.config.min_season_days
                );
                aggregation.excluded.push(ExcludedSeason {
                    start_year,
                    days: records.len(),
                });
                continue;
            }
            aggregation
                .seasons
                .push(self.build_season(start_year, &records));
        }

        log::info!(
            "[CSF] aggregate: built {} seasons from {} observations ({} excluded, {} duplicates)",
            aggregation.seasons.len(),
            observations.len(),
            aggregation.excluded.len(),
            aggregation.duplicate_dates.len()
        );
        aggregation
    }

    fn build_season(&self, start_year: i32, records: &[&RawObservation]) -> Season {
        let amounts: Vec<f64> = records.iter().map(|r| r.value.amount()).collect();
        let daily = match self.config.mode {
            DerivationMode::Depth => daily_from_depths(&amounts, self.config.first_day),
            DerivationMode::Snowfall => amounts,
        };
        let days = records.iter().zip(daily).map(|(record, daily_snowfall)| SeasonDay {
            date: record.date,
            snow_depth: match (self.config.mode, record.value) {
                (DerivationMode::Snowfall, _) | (_, Measurement::Missing) => None,
                (DerivationMode::Depth, value) => Some(value.amount()),
            },
            daily_snowfall,
        });
        Season::accumulate(start_year, days)
    }
}

/// Daily snowfall from a season's depth sequence:
/// `max(0, depth[i] - depth[i - 1])`, with day 0 set by `first_day`.
pub fn daily_from_depths(depths: &[f64], first_day: FirstDayPolicy) -> Vec<f64> {
    let mut daily = Vec::with_capacity(depths.len());
    if let Some(first) = depths.first() {
        daily.push(match first_day {
            FirstDayPolicy::Zero => 0.0,
            FirstDayPolicy::Depth => first.max(0.0),
        });
    }
    for pair in depths.windows(2) {
        daily.push((pair[1] - pair[0]).max(0.0));
    }
    daily
}
