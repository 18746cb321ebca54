//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use csf_core::bundle::SnowfallBundle;
use csf_view::{HighlightEvent, SeasonChart};
use dioxus::prelude::*;

/// Shared application state for the seasonal snowfall chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded seasons, selected range and highlight (None until loaded)
    pub chart: Signal<Option<SeasonChart>>,
    /// Station attribution from the bundle
    pub source: Signal<String>,
    /// Human-readable span of the underlying records
    pub data_range: Signal<String>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            chart: Signal::new(None),
            source: Signal::new(String::new()),
            data_range: Signal::new(String::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Install a freshly loaded bundle with every season selected.
    pub fn load_bundle(&mut self, bundle: SnowfallBundle) {
        self.source.set(bundle.source.clone());
        self.data_range.set(bundle.data_range.clone());
        self.chart.set(Some(SeasonChart::from_bundle(bundle)));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Apply a new start-year range; the highlight is reset.
    pub fn set_range(&mut self, start_year: i32, end_year: i32) {
        if let Some(chart) = self.chart.write().as_mut() {
            chart.set_range(start_year, end_year);
        }
    }

    /// Forward a hover/tap event. Subscribers are only notified when the
    /// emphasis actually changes; events hidden behind a tap lock are dropped.
    pub fn handle(&mut self, event: HighlightEvent) {
        let changed = self
            .chart
            .peek()
            .as_ref()
            .map(|chart| {
                let mut next = *chart.highlight();
                next.apply(event)
            })
            .unwrap_or(false);
        if changed {
            if let Some(chart) = self.chart.write().as_mut() {
                chart.handle(event);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
