//! Derived-view logic for the seasonal snowfall chart.
//!
//! Everything here is a pure function of the displayed seasons plus the
//! current [`HighlightState`]; the renderer only ever sees the serialized
//! [`ChartFrame`].
//!
//! - `palette`: newest-to-oldest blue gradient and season labels
//! - `highlight`: hover / tap-lock emphasis state machine
//! - `series`: the renderer contract (series, axis, range control)
//! - `chart`: `SeasonChart`, the controller that owns the state between events

pub mod chart;
pub mod highlight;
pub mod palette;
pub mod series;

pub use chart::SeasonChart;
pub use highlight::{Emphasis, HighlightEvent, HighlightMode, HighlightState};
pub use palette::{format_season_label, season_color, Hsla};
pub use series::{AxisConfig, ChartFrame, ChartPoint, ChartSeries, RangeControl};
