//! Start/end season sliders over the loaded years.

use crate::state::AppState;
use dioxus::prelude::*;

/// Two range inputs bounded by the first and last loaded season. Either
/// thumb may pass the other; the chart swaps a reversed range.
#[component]
pub fn SeasonRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let (control, selected) = match &*state.chart.read() {
        Some(chart) => (chart.range_control(), chart.selected_range()),
        None => (None, None),
    };
    let (Some(control), Some(selected)) = (control, selected) else {
        return rsx! {};
    };
    let (start, end) = (selected.start, selected.end);

    let on_start = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.set_range(year, end);
        }
    };
    let on_end = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.set_range(start, year);
        }
    };

    let start_label = csf_view::format_season_label(start);
    let end_label = csf_view::format_season_label(end);

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "range",
                    min: "{control.min_year}",
                    max: "{control.max_year}",
                    step: "1",
                    value: "{start}",
                    oninput: on_start,
                }
                " {start_label}"
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "range",
                    min: "{control.min_year}",
                    max: "{control.max_year}",
                    step: "1",
                    value: "{end}",
                    oninput: on_end,
                }
                " {end_label}"
            }
        }
    }
}
