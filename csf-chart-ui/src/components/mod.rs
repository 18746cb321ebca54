//! Reusable Dioxus RSX components for the seasonal snowfall chart.

mod chart_container;
mod chart_header;
mod error_display;
mod season_legend;
mod season_range_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use season_legend::SeasonLegend;
pub use season_range_slider::SeasonRangeSlider;
