//! Shared Dioxus components and renderer bridge for seasonal snowfall charts.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around the page's line-chart renderer via `js_sys::eval()`,
//!   plus the callback the renderer reports hover/tap events through
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (range slider, legend, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
