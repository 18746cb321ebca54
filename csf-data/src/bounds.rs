//! Axis extents for a displayed set of seasons.

use csf_core::season::Season;
use serde::Serialize;
use std::borrow::Borrow;

/// X extent used when no displayed season has a snow day.
pub const DEFAULT_MIN_DAY: u32 = 0;
pub const DEFAULT_MAX_DAY: u32 = 365;

/// The minimal display range covering a set of seasons: the first and last
/// day with new snow, and the largest running total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBounds {
    pub min_day_of_season: u32,
    pub max_day_of_season: u32,
    pub max_cumulative: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            min_day_of_season: DEFAULT_MIN_DAY,
            max_day_of_season: DEFAULT_MAX_DAY,
            max_cumulative: 0.0,
        }
    }
}

/// Compute [`AxisBounds`] over every record of every given season.
///
/// Accepts owned seasons or references (e.g. the output of
/// [`filter_seasons_by_range`](crate::filter::filter_seasons_by_range)).
pub fn axis_bounds<S: Borrow<Season>>(seasons: &[S]) -> AxisBounds {
    let mut max_cumulative: f64 = 0.0;
    let mut snow_days: Option<(u32, u32)> = None;

    let records = seasons.iter().flat_map(|s| {
        let season: &Season = s.borrow();
        season.daily_data.iter()
    });
    for record in records {
        if record.cumulative_snowfall.is_finite() {
            max_cumulative = max_cumulative.max(record.cumulative_snowfall);
        }
        if record.daily_snowfall > 0.0 {
            let day = record.day_of_season;
            snow_days = Some(match snow_days {
                Some((min, max)) => (min.min(day), max.max(day)),
                None => (day, day),
            });
        }
    }

    let (min_day_of_season, max_day_of_season) =
        snow_days.unwrap_or((DEFAULT_MIN_DAY, DEFAULT_MAX_DAY));
    AxisBounds {
        min_day_of_season,
        max_day_of_season,
        max_cumulative,
    }
}
