use chrono::NaiveDate;
use csf_utils::dates::parse_flexible_date;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which CSV columns hold the date and the raw measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date_column: usize,
    pub value_column: usize,
    pub has_headers: bool,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date_column: 0,
            value_column: 1,
            has_headers: true,
        }
    }
}

impl ColumnLayout {
    fn required_columns(&self) -> usize {
        self.date_column.max(self.value_column) + 1
    }
}

/// A raw measurement cell from a station export.
/// - `Value(f64)`: a numeric reading in inches
/// - `Trace`: a trace amount ("T"), too small to measure
/// - `Missing`: empty, "M", "---" or otherwise non-numeric
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Measurement {
    Value(f64),
    Trace,
    Missing,
}

impl Measurement {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("t") || trimmed.eq_ignore_ascii_case("trace") {
            return Measurement::Trace;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Measurement::Value(v),
            _ => Measurement::Missing,
        }
    }

    /// The usable amount: trace and missing readings count as 0, negatives clamp to 0.
    pub fn amount(&self) -> f64 {
        match self {
            Measurement::Value(v) => v.max(0.0),
            Measurement::Trace | Measurement::Missing => 0.0,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Measurement::Missing)
    }
}

/// Why a single CSV row was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    TooFewColumns { expected: usize, found: usize },
    MalformedDate(String),
    Unreadable(String),
}

impl fmt::Display for ObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationError::TooFewColumns { expected, found } => {
                write!(f, "expected at least {expected} columns, found {found}")
            }
            ObservationError::MalformedDate(raw) => write!(f, "malformed date {raw:?}"),
            ObservationError::Unreadable(reason) => write!(f, "unreadable row: {reason}"),
        }
    }
}

impl std::error::Error for ObservationError {}

/// One row of a station export: a calendar date and its raw measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub date: NaiveDate,
    pub value: Measurement,
}

/// A row that was skipped, with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub error: ObservationError,
}

/// Result of parsing a CSV export: every usable row plus every rejected one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedObservations {
    pub observations: Vec<RawObservation>,
    pub skipped: Vec<SkippedRow>,
}

impl RawObservation {
    pub fn from_record(
        record: &StringRecord,
        layout: &ColumnLayout,
    ) -> Result<Self, ObservationError> {
        let expected = layout.required_columns();
        if record.len() < expected {
            return Err(ObservationError::TooFewColumns {
                expected,
                found: record.len(),
            });
        }
        let raw_date = record.get(layout.date_column).unwrap_or_default();
        let date = parse_flexible_date(raw_date)
            .map_err(|e| ObservationError::MalformedDate(e.0))?;
        let value = Measurement::parse(record.get(layout.value_column).unwrap_or_default());
        Ok(RawObservation { date, value })
    }

    /// Parse a station CSV export. Bad rows are collected in `skipped`,
    /// never fatal to the rest of the file.
    pub fn parse_csv(csv_data: &str, layout: &ColumnLayout) -> ParsedObservations {
        let mut rdr = ReaderBuilder::new()
            .has_headers(layout.has_headers)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut parsed = ParsedObservations::default();
        for (index, row) in rdr.records().enumerate() {
            let fallback_line = index as u64 + if layout.has_headers { 2 } else { 1 };
            let outcome = match row {
                Ok(record) => {
                    let line = record
                        .position()
                        .map(|p| p.line())
                        .unwrap_or(fallback_line);
                    (line, RawObservation::from_record(&record, layout))
                }
                Err(e) => (fallback_line, Err(ObservationError::Unreadable(e.to_string()))),
            };
            match outcome {
                (_, Ok(obs)) => parsed.observations.push(obs),
                (line, Err(error)) => {
                    log::warn!("[CSF] observation: skipping line {}: {}", line, error);
                    parsed.skipped.push(SkippedRow { line, error });
                }
            }
        }
        log::info!(
            "[CSF] observation: parsed {} rows, skipped {}",
            parsed.observations.len(),
            parsed.skipped.len()
        );
        parsed
    }
}
