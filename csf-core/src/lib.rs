//! Core types for seasonal snowfall data.
//!
//! - `observation`: raw per-day rows parsed from a station CSV export
//! - `season`: the strongly-typed `Season` / `DailyRecord` model and season labels
//! - `bundle`: the static JSON dataset loaded by the chart at startup

pub mod bundle;
pub mod observation;
pub mod season;
