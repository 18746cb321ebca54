//! The strongly-typed season model.
//!
//! A ski season runs from August 1 through July 31 and is identified by the
//! calendar year it starts in. Each `Season` exclusively owns its ordered
//! `DailyRecord`s; within a season
//! `cumulative_snowfall[i] == cumulative_snowfall[i - 1] + daily_snowfall[i]`
//! and `daily_snowfall[i] >= 0`.

use chrono::NaiveDate;
use csf_utils::dates::{day_of_season, season_start_year};
use serde::{Deserialize, Serialize};

/// Label returned for any start year that cannot name a season.
pub const INVALID_SEASON_LABEL: &str = "Invalid season";

/// Smallest start year accepted by [`format_season_label`].
pub const MIN_SEASON_YEAR: i64 = 1000;

/// Largest start year accepted by [`format_season_label`].
pub const MAX_SEASON_YEAR: i64 = 9999;

/// One calendar day's measurement within a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Days since Aug 1 of the season (0..=365).
    #[serde(default)]
    pub day_of_season: u32,
    /// Measured depth in inches, absent when the source reports snowfall directly.
    #[serde(default)]
    pub snow_depth: Option<f64>,
    #[serde(default)]
    pub daily_snowfall: f64,
    #[serde(default)]
    pub cumulative_snowfall: f64,
}

/// Input to [`Season::accumulate`]: a day before running totals are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonDay {
    pub date: NaiveDate,
    pub snow_depth: Option<f64>,
    pub daily_snowfall: f64,
}

/// One ski season's worth of daily records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(default)]
    pub label: String,
    pub start_year: i32,
    #[serde(default)]
    pub total_snowfall: f64,
    #[serde(default)]
    pub daily_data: Vec<DailyRecord>,
}

impl Season {
    /// Build a season from days already known to belong to `start_year`,
    /// in chronological order. Negative or non-finite snowfall is clamped
    /// to 0 and the running total is computed here, so the invariants hold
    /// by construction.
    pub fn accumulate<I>(start_year: i32, days: I) -> Season
    where
        I: IntoIterator<Item = SeasonDay>,
    {
        let mut cumulative = 0.0;
        let daily_data: Vec<DailyRecord> = days
            .into_iter()
            .map(|day| {
                let daily_snowfall = clamp_snowfall(day.daily_snowfall);
                cumulative += daily_snowfall;
                DailyRecord {
                    date: day.date,
                    day_of_season: day_of_season(&day.date),
                    snow_depth: day.snow_depth,
                    daily_snowfall,
                    cumulative_snowfall: cumulative,
                }
            })
            .collect();
        Season {
            label: format_season_label(start_year),
            start_year,
            total_snowfall: cumulative,
            daily_data,
        }
    }

    /// Number of days with a record.
    pub fn days(&self) -> usize {
        self.daily_data.len()
    }

    /// Highest running total in the season (the last record's, by construction).
    pub fn max_cumulative(&self) -> f64 {
        self.daily_data
            .iter()
            .map(|r| r.cumulative_snowfall)
            .fold(0.0, f64::max)
    }

    /// Re-derive every dependent field from the records' dates and daily
    /// amounts. Records dated outside the season or repeating an earlier
    /// date are dropped.
    pub fn normalize(&mut self) -> SeasonRepairs {
        let mut repairs = SeasonRepairs::default();
        let start_year = self.start_year;

        let mut records = std::mem::take(&mut self.daily_data);
        let before = records.len();
        records.retain(|r| season_start_year(&r.date) == start_year);
        repairs.out_of_season = before - records.len();

        records.sort_by_key(|r| r.date);
        let before = records.len();
        records.dedup_by_key(|r| r.date);
        repairs.duplicate_dates = before - records.len();

        repairs.clamped = records
            .iter()
            .filter(|r| clamp_snowfall(r.daily_snowfall) != r.daily_snowfall)
            .count();

        let stored: Vec<(u32, f64)> = records
            .iter()
            .map(|r| (r.day_of_season, r.cumulative_snowfall))
            .collect();
        let label = self.label.clone();
        let total = self.total_snowfall;

        *self = Season::accumulate(
            start_year,
            records.into_iter().map(|r| SeasonDay {
                date: r.date,
                snow_depth: r.snow_depth,
                daily_snowfall: r.daily_snowfall,
            }),
        );

        repairs.rederived = self
            .daily_data
            .iter()
            .zip(stored)
            .filter(|(r, (day, cumulative))| {
                r.day_of_season != *day || (r.cumulative_snowfall - cumulative).abs() > 1e-9
            })
            .count();
        repairs.relabeled = label != self.label;
        repairs.total_corrected = (total - self.total_snowfall).abs() > 1e-9;
        repairs
    }
}

/// What [`Season::normalize`] had to fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonRepairs {
    pub out_of_season: usize,
    pub duplicate_dates: usize,
    pub clamped: usize,
    pub rederived: usize,
    pub relabeled: bool,
    pub total_corrected: bool,
}

impl SeasonRepairs {
    pub fn is_clean(&self) -> bool {
        *self == SeasonRepairs::default()
    }
}

fn clamp_snowfall(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// A value that may name a season's start year.
///
/// Implemented for the integer and float types and for loosely-typed JSON
/// values, so labels can be requested for untrusted input without panicking.
pub trait SeasonYear {
    fn season_year(&self) -> Option<i32>;
}

impl SeasonYear for i64 {
    fn season_year(&self) -> Option<i32> {
        (MIN_SEASON_YEAR..=MAX_SEASON_YEAR)
            .contains(self)
            .then_some(*self as i32)
    }
}

impl SeasonYear for i32 {
    fn season_year(&self) -> Option<i32> {
        i64::from(*self).season_year()
    }
}

impl SeasonYear for u32 {
    fn season_year(&self) -> Option<i32> {
        i64::from(*self).season_year()
    }
}

impl SeasonYear for f64 {
    fn season_year(&self) -> Option<i32> {
        if !self.is_finite() || self.fract() != 0.0 {
            return None;
        }
        if *self < MIN_SEASON_YEAR as f64 || *self > MAX_SEASON_YEAR as f64 {
            return None;
        }
        (*self as i64).season_year()
    }
}

impl SeasonYear for serde_json::Value {
    fn season_year(&self) -> Option<i32> {
        match self {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => i.season_year(),
                None => n.as_f64().and_then(|f| f.season_year()),
            },
            _ => None,
        }
    }
}

impl<T: SeasonYear + ?Sized> SeasonYear for &T {
    fn season_year(&self) -> Option<i32> {
        (**self).season_year()
    }
}

/// Display label for the season starting in `start_year`, e.g. 2023 -> "2023-24".
///
/// Anything that is not an integer year in `1000..=9999` yields
/// [`INVALID_SEASON_LABEL`].
///
/// ```rust
/// use csf_core::season::{format_season_label, INVALID_SEASON_LABEL};
///
/// assert_eq!(format_season_label(2023), "2023-24");
/// assert_eq!(format_season_label(1999), "1999-00");
/// assert_eq!(format_season_label(f64::NAN), INVALID_SEASON_LABEL);
/// ```
pub fn format_season_label<Y: SeasonYear>(start_year: Y) -> String {
    match start_year.season_year() {
        Some(year) => format!("{}-{:02}", year, (year + 1) % 100),
        None => INVALID_SEASON_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32, snowfall: f64) -> SeasonDay {
        SeasonDay {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            snow_depth: None,
            daily_snowfall: snowfall,
        }
    }

    #[test]
    fn label_format() {
        assert_eq!(format_season_label(2023), "2023-24");
        assert_eq!(format_season_label(1999), "1999-00");
        assert_eq!(format_season_label(2009), "2009-10");
        assert_eq!(format_season_label(2023.0_f64), "2023-24");
        assert_eq!(format_season_label(&json!(2023)), "2023-24");
    }

    #[test]
    fn label_invalid_inputs_share_sentinel() {
        assert_eq!(format_season_label(f64::NAN), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(f64::INFINITY), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(2023.5_f64), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(&json!("2023")), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(&json!(null)), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(999), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(10000), INVALID_SEASON_LABEL);
        assert_eq!(format_season_label(-2023_i64), INVALID_SEASON_LABEL);
    }

    #[test]
    fn accumulate_builds_running_total() {
        let season = Season::accumulate(
            2023,
            vec![
                day(2023, 11, 1, 0.0),
                day(2023, 11, 2, 5.0),
                day(2023, 11, 3, -1.0),
                day(2023, 11, 4, 7.0),
            ],
        );
        let daily: Vec<f64> = season.daily_data.iter().map(|r| r.daily_snowfall).collect();
        let cumulative: Vec<f64> = season
            .daily_data
            .iter()
            .map(|r| r.cumulative_snowfall)
            .collect();
        assert_eq!(daily, vec![0.0, 5.0, 0.0, 7.0]);
        assert_eq!(cumulative, vec![0.0, 5.0, 5.0, 12.0]);
        assert_eq!(season.total_snowfall, 12.0);
        assert_eq!(season.label, "2023-24");
        assert_eq!(season.daily_data[0].day_of_season, 92);
    }

    #[test]
    fn accumulate_empty_season() {
        let season = Season::accumulate(2020, Vec::new());
        assert_eq!(season.days(), 0);
        assert_eq!(season.total_snowfall, 0.0);
        assert_eq!(season.max_cumulative(), 0.0);
    }

    #[test]
    fn normalize_repairs_inconsistent_records() {
        let mut season: Season = serde_json::from_value(json!({
            "label": "wrong",
            "startYear": 2021,
            "totalSnowfall": 99.0,
            "dailyData": [
                { "date": "2022-01-02", "dayOfSeason": 0, "dailySnowfall": 3.0, "cumulativeSnowfall": 3.0 },
                { "date": "2022-01-01", "dayOfSeason": 153, "dailySnowfall": 2.0, "cumulativeSnowfall": 2.0 },
                { "date": "2022-01-01", "dayOfSeason": 153, "dailySnowfall": 9.0, "cumulativeSnowfall": 9.0 },
                { "date": "2022-01-03", "dayOfSeason": 155, "dailySnowfall": -4.0, "cumulativeSnowfall": 1.0 },
                { "date": "2022-09-01", "dayOfSeason": 31, "dailySnowfall": 1.0, "cumulativeSnowfall": 1.0 }
            ]
        }))
        .unwrap();

        let repairs = season.normalize();
        assert_eq!(repairs.out_of_season, 1);
        assert_eq!(repairs.duplicate_dates, 1);
        assert_eq!(repairs.clamped, 1);
        assert!(repairs.relabeled);
        assert!(repairs.total_corrected);
        assert!(!repairs.is_clean());

        assert_eq!(season.label, "2021-22");
        assert_eq!(season.days(), 3);
        let cumulative: Vec<f64> = season
            .daily_data
            .iter()
            .map(|r| r.cumulative_snowfall)
            .collect();
        assert_eq!(cumulative, vec![2.0, 5.0, 5.0]);
        assert_eq!(season.daily_data[1].day_of_season, 154);
        assert_eq!(season.total_snowfall, 5.0);
    }

    #[test]
    fn normalize_is_clean_for_consistent_season() {
        let mut season = Season::accumulate(
            2023,
            vec![day(2023, 12, 1, 1.5), day(2023, 12, 2, 2.5)],
        );
        let repairs = season.normalize();
        assert!(repairs.is_clean(), "unexpected repairs: {repairs:?}");
    }
}
