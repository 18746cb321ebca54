//! The contract handed to the line-chart renderer.
//!
//! All structs serialize to camelCase JSON. One [`ChartSeries`] per
//! displayed season, newest first, each a list of
//! `(x = dayOfSeason, y = cumulativeSnowfall)` points plus its style.

use crate::highlight::{Emphasis, HighlightState};
use crate::palette::season_color;
use csf_core::season::Season;
use csf_data::bounds::{AxisBounds, DEFAULT_MAX_DAY};
use csf_data::filter::YearRange;
use serde::Serialize;
use std::borrow::Borrow;

/// Days of padding on each side of the snow-day range.
pub const DAY_PADDING: u32 = 10;
/// Fraction of headroom above the largest running total.
pub const Y_HEADROOM: f64 = 0.10;
/// Y maximum when nothing displayed has any snow.
pub const FALLBACK_Y_MAX: f64 = 10.0;

pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const ACTIVE_STROKE_WIDTH: f64 = 3.5;
pub const DIMMED_STROKE_WIDTH: f64 = 1.0;

pub const DEFAULT_OPACITY: f64 = 0.85;
pub const ACTIVE_OPACITY: f64 = 1.0;
pub const DIMMED_OPACITY: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: u32,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub start_year: i32,
    /// CSS color of the full-strength line; `opacity` carries the dimming.
    pub color: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub emphasis: Emphasis,
    pub points: Vec<ChartPoint>,
}

/// Axis configuration with padding applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub x_min: u32,
    pub x_max: u32,
    pub y_max: f64,
}

impl From<AxisBounds> for AxisConfig {
    fn from(bounds: AxisBounds) -> Self {
        let y_max = if bounds.max_cumulative > 0.0 {
            bounds.max_cumulative * (1.0 + Y_HEADROOM)
        } else {
            FALLBACK_Y_MAX
        };
        AxisConfig {
            x_min: bounds.min_day_of_season.saturating_sub(DAY_PADDING),
            x_max: (bounds.max_day_of_season + DAY_PADDING)
                .min(DEFAULT_MAX_DAY)
                .max(bounds.max_day_of_season),
            y_max,
        }
    }
}

/// Bounds for the year-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeControl {
    pub min_year: i32,
    pub max_year: i32,
}

impl From<YearRange> for RangeControl {
    fn from(range: YearRange) -> Self {
        RangeControl {
            min_year: range.start,
            max_year: range.end,
        }
    }
}

/// Everything the renderer needs for one draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFrame {
    pub series: Vec<ChartSeries>,
    pub axis: AxisConfig,
    pub range: Option<RangeControl>,
    pub selected: Option<YearRange>,
    pub highlighted_index: Option<usize>,
    pub is_persistent: bool,
}

impl ChartFrame {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build styled series for seasons ordered newest first.
pub fn build_series<S: Borrow<Season>>(
    seasons: &[S],
    highlight: &HighlightState,
) -> Vec<ChartSeries> {
    let total = seasons.len();
    seasons
        .iter()
        .enumerate()
        .map(|(index, season)| {
            let season: &Season = season.borrow();
            let emphasis = highlight.emphasis(index);
            let (stroke_width, opacity) = match emphasis {
                Emphasis::Default => (DEFAULT_STROKE_WIDTH, DEFAULT_OPACITY),
                Emphasis::Active => (ACTIVE_STROKE_WIDTH, ACTIVE_OPACITY),
                Emphasis::Dimmed => (DIMMED_STROKE_WIDTH, DIMMED_OPACITY),
            };
            ChartSeries {
                label: season.label.clone(),
                start_year: season.start_year,
                color: season_color(index, total).to_css(),
                stroke_width,
                opacity,
                emphasis,
                points: season
                    .daily_data
                    .iter()
                    .map(|r| ChartPoint {
                        x: r.day_of_season,
                        y: r.cumulative_snowfall,
                    })
                    .collect(),
            }
        })
        .collect()
}
