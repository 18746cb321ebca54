//! Command implementations for the CSF CLI.
//!
//! `aggregate` turns a station's daily CSV into a snowfall bundle;
//! `summary` and `series` read a bundle back and report on a range of
//! seasons.

use clap::{Subcommand, ValueEnum};
use csf_data::{DerivationMode, FirstDayPolicy};
use std::path::PathBuf;

pub mod aggregate;
pub mod report;

/// What the CSV value column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// Snow depth; snowfall is the day-over-day rise
    Depth,
    /// Measured new snowfall
    Snowfall,
}

impl From<ValueKind> for DerivationMode {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Depth => DerivationMode::Depth,
            ValueKind::Snowfall => DerivationMode::Snowfall,
        }
    }
}

/// Snowfall credited to the first recorded day of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstDay {
    Zero,
    Depth,
}

impl From<FirstDay> for FirstDayPolicy {
    fn from(first_day: FirstDay) -> Self {
        match first_day {
            FirstDay::Zero => FirstDayPolicy::Zero,
            FirstDay::Depth => FirstDayPolicy::Depth,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate a daily observations CSV into a seasonal snowfall bundle
    Aggregate {
        /// Path to the daily observations CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Output bundle path (.json, or .json.gz for gzip)
        #[arg(short, long)]
        output: PathBuf,

        /// Station attribution stored in the bundle
        #[arg(short, long, default_value = "Unknown station")]
        source: String,

        #[arg(long, value_enum, default_value_t = ValueKind::Depth)]
        mode: ValueKind,

        #[arg(long, value_enum, default_value_t = FirstDay::Zero)]
        first_day: FirstDay,

        /// Seasons with fewer recorded days are left out
        #[arg(long, default_value_t = csf_data::aggregate::MIN_SEASON_DAYS_DEFAULT)]
        min_days: usize,

        /// Zero-based index of the date column
        #[arg(long, default_value_t = 0)]
        date_column: usize,

        /// Zero-based index of the value column
        #[arg(long, default_value_t = 1)]
        value_column: usize,

        /// The CSV has no header row
        #[arg(long)]
        no_headers: bool,
    },

    /// Print per-season totals and axis bounds for a range of seasons
    Summary {
        /// Bundle path (.json or .json.gz)
        #[arg(short, long)]
        bundle: PathBuf,

        /// First season start year (defaults to the oldest season)
        #[arg(long)]
        start: Option<i32>,

        /// Last season start year (defaults to the newest season)
        #[arg(long)]
        end: Option<i32>,
    },

    /// Write the chart frame JSON for a range of seasons
    Series {
        #[arg(short, long)]
        bundle: PathBuf,

        #[arg(long)]
        start: Option<i32>,

        #[arg(long)]
        end: Option<i32>,

        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Aggregate {
            input,
            output,
            source,
            mode,
            first_day,
            min_days,
            date_column,
            value_column,
            no_headers,
        } => {
            let options = aggregate::AggregateOptions {
                source,
                config: csf_data::AggregatorConfig {
                    mode: mode.into(),
                    first_day: first_day.into(),
                    min_season_days: min_days,
                },
                layout: csf_core::observation::ColumnLayout {
                    date_column,
                    value_column,
                    has_headers: !no_headers,
                },
            };
            aggregate::run_aggregate(&input, &output, &options).map(|_| ())
        }
        Command::Summary { bundle, start, end } => {
            let stdout = std::io::stdout();
            report::run_summary(&bundle, start, end, &mut stdout.lock())
        }
        Command::Series {
            bundle,
            start,
            end,
            output,
        } => report::run_series(&bundle, start, end, output.as_deref()),
    }
}
