//! Legend of the displayed seasons, newest first.
//!
//! Mirrors the renderer's interaction: hovering an entry emphasizes its
//! series, tapping locks it, tapping again releases.

use crate::state::AppState;
use csf_view::{ChartSeries, HighlightEvent};
use dioxus::prelude::*;

#[component]
pub fn SeasonLegend() -> Element {
    let mut state = use_context::<AppState>();
    let series: Vec<ChartSeries> = match &*state.chart.read() {
        Some(chart) => chart.frame().series,
        None => Vec::new(),
    };
    if series.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 12px; flex-wrap: wrap;",
            onmouseleave: move |_| state.handle(HighlightEvent::PointerLeave),
            for (index, entry) in series.into_iter().enumerate() {
                div {
                    key: "{entry.start_year}",
                    style: "display: flex; align-items: center; gap: 4px; cursor: pointer; opacity: {entry.opacity};",
                    onmouseenter: move |_| state.handle(HighlightEvent::PointerEnter(index)),
                    onclick: move |_| state.handle(HighlightEvent::Tap(index)),
                    span {
                        style: "display: inline-block; width: 16px; height: {entry.stroke_width}px; background: {entry.color};",
                    }
                    "{entry.label}"
                }
            }
        }
    }
}
