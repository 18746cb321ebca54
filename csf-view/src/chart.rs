use crate::highlight::{HighlightEvent, HighlightMode, HighlightState};
use crate::series::{build_series, AxisConfig, ChartFrame, RangeControl};
use csf_core::bundle::SnowfallBundle;
use csf_core::season::Season;
use csf_data::bounds::{axis_bounds, AxisBounds};
use csf_data::filter::{filter_seasons_by_range, YearRange};

/// Owns the loaded seasons, the selected year range and the highlight
/// state between UI events.
///
/// The loaded seasons never change after construction. Every range change
/// re-filters, and the highlight is reset to `Normal` whenever a filter is
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonChart {
    /// Ascending by start year.
    seasons: Vec<Season>,
    range: Option<YearRange>,
    highlight: HighlightState,
}

impl SeasonChart {
    /// Start with every season selected.
    pub fn new(mut seasons: Vec<Season>) -> Self {
        seasons.sort_by_key(|s| s.start_year);
        let range = YearRange::spanning(&seasons);
        let mut chart = SeasonChart {
            seasons,
            range,
            highlight: HighlightState::default(),
        };
        chart.highlight = HighlightState::new(chart.visible_seasons().len());
        log::info!(
            "[CSF] chart: {} seasons loaded, range {:?}",
            chart.seasons.len(),
            chart.range
        );
        chart
    }

    pub fn from_bundle(bundle: SnowfallBundle) -> Self {
        SeasonChart::new(bundle.seasons)
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Slider bounds: the first and last loaded start year.
    pub fn range_control(&self) -> Option<RangeControl> {
        YearRange::spanning(&self.seasons).map(RangeControl::from)
    }

    pub fn selected_range(&self) -> Option<YearRange> {
        self.range
    }

    /// Apply a new start-year filter. Reversed ends are swapped.
    ///
    /// Returns whether the displayed season set changed. The highlight is
    /// reset either way.
    pub fn set_range(&mut self, start_year: i32, end_year: i32) -> bool {
        let before: Vec<i32> = self.visible_years();
        self.range = Some(YearRange::new(start_year, end_year));
        let after = self.visible_years();
        self.highlight.reset(after.len());
        let changed = before != after;
        log::debug!(
            "[CSF] chart: range {:?} shows {} seasons (changed: {})",
            self.range,
            after.len(),
            changed
        );
        changed
    }

    /// Feed one renderer event to the highlight state machine. Returns
    /// whether the emphasis changed and the chart needs restyling.
    pub fn handle(&mut self, event: HighlightEvent) -> bool {
        self.highlight.apply(event)
    }

    pub fn highlight_mode(&self) -> HighlightMode {
        self.highlight.mode()
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    /// Seasons in the selected range, newest first.
    pub fn visible_seasons(&self) -> Vec<&Season> {
        let mut visible = match self.range {
            Some(range) => filter_seasons_by_range(&self.seasons, range.start, range.end),
            None => Vec::new(),
        };
        visible.reverse();
        visible
    }

    /// Bounds over the displayed seasons only.
    pub fn bounds(&self) -> AxisBounds {
        axis_bounds(&self.visible_seasons())
    }

    /// Everything the renderer needs for the current state.
    pub fn frame(&self) -> ChartFrame {
        let visible = self.visible_seasons();
        ChartFrame {
            series: build_series(&visible, &self.highlight),
            axis: AxisConfig::from(axis_bounds(&visible)),
            range: self.range_control(),
            selected: self.range,
            highlighted_index: self.highlight.highlighted_index(),
            is_persistent: self.highlight.is_persistent(),
        }
    }

    fn visible_years(&self) -> Vec<i32> {
        self.visible_seasons().iter().map(|s| s.start_year).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Emphasis;
    use crate::palette::season_color;
    use chrono::NaiveDate;
    use csf_core::season::SeasonDay;

    /// One snow day on Dec 1 whose amount grows with the year, so later
    /// seasons have larger totals.
    fn season(start_year: i32) -> Season {
        let amount = (start_year - 1980) as f64;
        Season::accumulate(
            start_year,
            [
                SeasonDay {
                    date: NaiveDate::from_ymd_opt(start_year, 12, 1).unwrap(),
                    snow_depth: None,
                    daily_snowfall: amount,
                },
                SeasonDay {
                    date: NaiveDate::from_ymd_opt(start_year + 1, 1, 1).unwrap(),
                    snow_depth: None,
                    daily_snowfall: 0.0,
                },
            ],
        )
    }

    fn chart(years: impl IntoIterator<Item = i32>) -> SeasonChart {
        SeasonChart::new(years.into_iter().map(season).collect())
    }

    #[test]
    fn starts_with_everything_selected() {
        let chart = chart([2003, 2001, 2002]);
        assert_eq!(
            chart.range_control(),
            Some(RangeControl {
                min_year: 2001,
                max_year: 2003
            })
        );
        let years: Vec<i32> = chart.visible_seasons().iter().map(|s| s.start_year).collect();
        assert_eq!(years, vec![2003, 2002, 2001]);
        assert_eq!(chart.highlight().series_count(), 3);
    }

    #[test]
    fn empty_chart() {
        let chart = SeasonChart::new(Vec::new());
        assert_eq!(chart.range_control(), None);
        assert_eq!(chart.selected_range(), None);
        let frame = chart.frame();
        assert!(frame.series.is_empty());
        assert_eq!(frame.axis, AxisConfig::from(AxisBounds::default()));
    }

    #[test]
    fn filter_limits_series_and_bounds() {
        let mut chart = chart(1990..=2024);
        chart.set_range(2020, 2024);

        let frame = chart.frame();
        let labels: Vec<&str> = frame.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["2024-25", "2023-24", "2022-23", "2021-22", "2020-21"]
        );

        // 2024 has the largest total of the five and nothing older counts
        let expected = (2024 - 1980) as f64;
        assert_eq!(chart.bounds().max_cumulative, expected);
        assert!((frame.axis.y_max - expected * 1.1).abs() < 1e-9);
        assert_eq!(
            frame.range,
            Some(RangeControl {
                min_year: 1990,
                max_year: 2024
            })
        );
    }

    #[test]
    fn three_season_colors_newest_darkest() {
        let chart = chart(2021..=2023);
        let frame = chart.frame();
        assert_eq!(frame.series[0].start_year, 2023);
        assert_eq!(frame.series[0].color, season_color(0, 3).to_css());
        assert_eq!(frame.series[2].color, season_color(2, 3).to_css());
        assert_ne!(frame.series[0].color, frame.series[1].color);
        assert_ne!(frame.series[1].color, frame.series[2].color);
    }

    #[test]
    fn range_change_resets_highlight() {
        let mut chart = chart(2000..=2010);
        assert!(chart.handle(HighlightEvent::Tap(2)));
        assert_eq!(chart.highlight_mode(), HighlightMode::TapLocked(2));

        assert!(chart.set_range(2005, 2010));
        assert_eq!(chart.highlight_mode(), HighlightMode::Normal);
        assert_eq!(chart.highlight().series_count(), 6);

        // same set again: unchanged, highlight still cleared
        chart.handle(HighlightEvent::PointerEnter(0));
        assert!(!chart.set_range(2010, 2005));
        assert_eq!(chart.highlight_mode(), HighlightMode::Normal);
    }

    #[test]
    fn events_past_filtered_set_are_ignored() {
        let mut chart = chart(2000..=2010);
        chart.set_range(2009, 2010);
        assert!(!chart.handle(HighlightEvent::Tap(5)));
        assert_eq!(chart.highlight_mode(), HighlightMode::Normal);
    }

    #[test]
    fn frame_reflects_highlight() {
        let mut chart = chart(2000..=2002);
        chart.handle(HighlightEvent::PointerEnter(1));
        let frame = chart.frame();
        assert_eq!(frame.highlighted_index, Some(1));
        assert!(!frame.is_persistent);
        assert_eq!(frame.series[1].emphasis, Emphasis::Active);
        assert_eq!(frame.series[0].emphasis, Emphasis::Dimmed);

        chart.handle(HighlightEvent::Tap(0));
        let frame = chart.frame();
        assert_eq!(frame.highlighted_index, Some(0));
        assert!(frame.is_persistent);
    }

    #[test]
    fn range_outside_data_shows_nothing() {
        let mut chart = chart(2000..=2002);
        assert!(chart.set_range(1950, 1960));
        let frame = chart.frame();
        assert!(frame.series.is_empty());
        assert_eq!(frame.axis.y_max, crate::series::FALLBACK_Y_MAX);
    }

    #[test]
    fn from_bundle_keeps_seasons() {
        let bundle = SnowfallBundle::new("Test", vec![season(2001), season(2000)]);
        let chart = SeasonChart::from_bundle(bundle);
        assert_eq!(chart.seasons().len(), 2);
        assert_eq!(chart.seasons()[0].start_year, 2000);
    }
}
