//! Shared utility functions for CSF crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, NaiveDate};

    /// Month (1-based) on which a ski season starts.
    pub const SEASON_START_MONTH: u32 = 8;

    /// Date formats accepted from vendor exports, tried in order.
    pub const ACCEPTED_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date in any of the [`ACCEPTED_DATE_FORMATS`].
    ///
    /// Surrounding whitespace is ignored. Returns a [`DateError`] carrying the
    /// offending input when no format matches.
    pub fn parse_flexible_date(s: &str) -> Result<NaiveDate, DateError> {
        let trimmed = s.trim();
        ACCEPTED_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .ok_or_else(|| DateError(trimmed.to_string()))
    }

    /// Get the ski season start year for a given date.
    /// A ski season runs Aug 1 to Jul 31.
    /// e.g., Aug 1 2023 -> season 2023, Jul 31 2024 -> season 2023
    pub fn season_start_year(date: &NaiveDate) -> i32 {
        if date.month() >= SEASON_START_MONTH {
            date.year()
        } else {
            date.year() - 1
        }
    }

    /// Aug 1 of the given start year.
    pub fn season_start(start_year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(start_year, SEASON_START_MONTH, 1)
    }

    /// Get the day-of-season (0-365) for a given date.
    /// Aug 1 = day 0. Feb 29 is kept, so a season spanning a leap day
    /// ends on day 365 instead of 364.
    pub fn day_of_season(date: &NaiveDate) -> u32 {
        let start = season_start(season_start_year(date)).unwrap_or(*date);
        (*date - start).num_days().max(0) as u32
    }

    /// Number of calendar days in the season beginning Aug 1 of `start_year`.
    pub fn season_length(start_year: i32) -> u32 {
        match (season_start(start_year), season_start(start_year + 1)) {
            (Some(start), Some(end)) => (end - start).num_days() as u32,
            _ => 365,
        }
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// A date string that matched none of the accepted formats.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unrecognized date: {:?}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
