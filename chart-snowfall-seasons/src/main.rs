//! Cumulative Snowfall by Season
//!
//! Overlays every ski season (Aug 1 - Jul 31) of one station on a shared
//! day-of-season axis, newest season darkest. Two sliders narrow the
//! displayed start years; hovering or tapping a line emphasizes it.
//!
//! Data flow:
//! 1. `csf-cli aggregate` writes `fixtures/snowfall_seasons.json`.
//! 2. `build.rs` copies it into `OUT_DIR` (or an empty bundle if absent).
//! 3. `include_str!` embeds the bundle into the WASM binary.
//! 4. On mount the bundle is parsed and normalized into a `SeasonChart`.
//! 5. Every range or highlight change re-serializes the chart frame and
//!    hands it to the renderer.

use csf_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, SeasonLegend, SeasonRangeSlider,
};
use csf_chart_ui::js_bridge;
use csf_chart_ui::state::AppState;
use csf_core::bundle::SnowfallBundle;
use dioxus::prelude::*;

/// Seasonal snowfall bundle for the charted station.
const SNOWFALL_BUNDLE_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/snowfall_seasons.json"));

/// Chart container DOM element ID the renderer draws into.
const CHART_ID: &str = "snowfall-seasons-chart";

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("[CSF] logger init failed: {}", e).into());
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("snowfall-seasons-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded bundle and hook up renderer events on mount
    use_effect(move || {
        match SnowfallBundle::from_json(SNOWFALL_BUNDLE_JSON) {
            Ok(bundle) => {
                log::info!(
                    "[CSF] loaded {} seasons for {:?}",
                    bundle.seasons.len(),
                    bundle.source
                );
                state.load_bundle(bundle);
            }
            Err(e) => {
                log::error!("[CSF] failed to parse snowfall bundle: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
                state.loading.set(false);
            }
        }
        js_bridge::register_series_events(move |event| state.handle(event));
    });

    // Redraw whenever the range or the highlight changes
    use_effect(move || {
        let frame = match &*state.chart.read() {
            Some(chart) => chart.frame(),
            None => return,
        };
        if frame.series.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        match frame.to_json() {
            Ok(json) => js_bridge::render_season_chart(CHART_ID, &json),
            Err(e) => log::error!("[CSF] could not serialize chart frame: {}", e),
        }
    });

    let empty = state
        .chart
        .read()
        .as_ref()
        .map(|chart| chart.visible_seasons().is_empty())
        .unwrap_or(true);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Cumulative Snowfall by Season".to_string(),
                source: (state.source)(),
                data_range: (state.data_range)(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else {
                SeasonRangeSlider {}

                ChartContainer {
                    id: CHART_ID.to_string(),
                    loading: (state.loading)(),
                    empty: empty && !(state.loading)(),
                }

                SeasonLegend {}
            }
        }
    }
}
