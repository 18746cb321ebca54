//! Data processing for seasonal snowfall.
//!
//! This crate turns raw daily station measurements into per-season
//! cumulative series and derives what the chart needs from them:
//! - `aggregate`: raw observations -> ordered `Season`s
//! - `bounds`: axis extents for a set of seasons
//! - `filter`: start-year range selection

pub mod aggregate;
pub mod bounds;
pub mod filter;

pub use aggregate::{Aggregation, AggregatorConfig, DerivationMode, FirstDayPolicy, SeasonAggregator};
pub use bounds::{axis_bounds, AxisBounds};
pub use filter::{filter_seasons_by_range, YearRange};
