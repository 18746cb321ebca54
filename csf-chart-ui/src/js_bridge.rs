//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Drawing is done by a line-chart renderer the host page loads before the
//! app starts and exposes as `window.renderSnowfallSeasons(containerId, frameJson)`.
//! It receives a serialized [`ChartFrame`](csf_view::ChartFrame) and reports
//! pointer activity back through `window.__csfSeriesEvent(kind, index)`.

use csf_view::HighlightEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Global the renderer calls with `("enter" | "leave" | "tap", seriesIndex)`.
const SERIES_EVENT_CALLBACK: &str = "__csfSeriesEvent";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[CSF] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Render (or redraw) the season chart into `container_id`.
///
/// Polls until the renderer is defined and the container exists, since
/// both may appear after the first Dioxus render.
pub fn render_season_chart(container_id: &str, frame_json: &str) {
    let id = js_string(container_id);
    let frame = js_string(frame_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof window.renderSnowfallSeasons === 'function' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderSnowfallSeasons({id}, {frame});
                    }} catch(e) {{ console.error('[CSF] renderSnowfallSeasons error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

/// Expose `window.__csfSeriesEvent` so the renderer can report hover and
/// tap events. Undecodable events are logged and dropped.
pub fn register_series_events<F>(mut on_event: F)
where
    F: FnMut(HighlightEvent) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::warn!("[CSF] no window; series events disabled");
        return;
    };

    let callback = Closure::wrap(Box::new(move |kind: String, index: f64| {
        match HighlightEvent::from_renderer(&kind, index) {
            Some(event) => on_event(event),
            None => log::debug!("[CSF] ignoring series event {:?} {}", kind, index),
        }
    }) as Box<dyn FnMut(String, f64)>);

    let installed = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(SERIES_EVENT_CALLBACK),
        callback.as_ref(),
    );
    if installed.is_err() {
        log::warn!("[CSF] could not install {}", SERIES_EVENT_CALLBACK);
    }
    // Lives as long as the page.
    callback.forget();
}
