//! `aggregate`: daily observations CSV -> seasonal snowfall bundle.

use anyhow::Context;
use csf_core::bundle::SnowfallBundle;
use csf_core::observation::{ColumnLayout, RawObservation};
use csf_data::{AggregatorConfig, SeasonAggregator};
use log::info;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AggregateOptions {
    pub source: String,
    pub config: AggregatorConfig,
    pub layout: ColumnLayout,
}

/// What one `aggregate` run did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateReport {
    pub observations: usize,
    pub skipped_rows: usize,
    pub duplicate_dates: usize,
    pub seasons: usize,
    pub excluded_seasons: usize,
}

/// Parse `input`, aggregate it into seasons and write the bundle to `output`.
pub fn run_aggregate(
    input: &Path,
    output: &Path,
    options: &AggregateOptions,
) -> anyhow::Result<AggregateReport> {
    let csv_data = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let parsed = RawObservation::parse_csv(&csv_data, &options.layout);
    if parsed.observations.is_empty() {
        anyhow::bail!(
            "{} has no usable observations ({} rows skipped)",
            input.display(),
            parsed.skipped.len()
        );
    }

    let aggregation = SeasonAggregator::new(options.config).aggregate(&parsed.observations);
    let report = AggregateReport {
        observations: parsed.observations.len(),
        skipped_rows: parsed.skipped.len(),
        duplicate_dates: aggregation.duplicate_dates.len(),
        seasons: aggregation.seasons.len(),
        excluded_seasons: aggregation.excluded.len(),
    };
    for excluded in &aggregation.excluded {
        info!(
            "Season starting {} left out: {} days recorded",
            excluded.start_year, excluded.days
        );
    }

    let bundle: SnowfallBundle = aggregation.into_bundle(options.source.as_str());
    bundle.write_path(output)?;

    info!(
        "Aggregated {} observations into {} seasons ({}). Output: {}",
        report.observations,
        report.seasons,
        bundle.data_range,
        output.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csf_data::{DerivationMode, FirstDayPolicy};
    use std::fmt::Write as _;

    /// A depth series covering Dec 1 - Jan 9 of the 2023-24 season.
    fn depth_csv() -> String {
        let mut csv = String::from("DATE,SNWD\n");
        for day in 1..=31 {
            writeln!(csv, "2023-12-{:02},{}", day, day).unwrap();
        }
        for day in 1..=9 {
            writeln!(csv, "2024-01-{:02},{}", day, 31 + day).unwrap();
        }
        csv.push_str("not-a-date,4\n");
        csv
    }

    fn options() -> AggregateOptions {
        AggregateOptions {
            source: "Test Ridge".to_string(),
            config: AggregatorConfig::default(),
            layout: ColumnLayout::default(),
        }
    }

    #[test]
    fn writes_gzip_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("daily.csv");
        let output = dir.path().join("bundle.json.gz");
        std::fs::write(&input, depth_csv()).unwrap();

        let report = run_aggregate(&input, &output, &options()).unwrap();
        assert_eq!(report.observations, 40);
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(report.seasons, 1);
        assert_eq!(report.excluded_seasons, 0);

        let bundle = SnowfallBundle::read_path(&output).unwrap();
        assert_eq!(bundle.source, "Test Ridge");
        assert_eq!(bundle.data_range, "2023-12-01 to 2024-01-09");
        let season = &bundle.seasons[0];
        assert_eq!(season.label, "2023-24");
        // depth rises one inch a day; the first day credits nothing
        assert_eq!(season.total_snowfall, 39.0);
    }

    #[test]
    fn short_seasons_are_left_out() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("daily.csv");
        let output = dir.path().join("bundle.json");
        std::fs::write(&input, "DATE,SNOW\n2023-12-01,2\n2023-12-02,3\n").unwrap();

        let mut options = options();
        options.config.mode = DerivationMode::Snowfall;
        let report = run_aggregate(&input, &output, &options).unwrap();
        assert_eq!(report.seasons, 0);
        assert_eq!(report.excluded_seasons, 1);

        options.config.min_season_days = 1;
        options.config.first_day = FirstDayPolicy::Depth;
        let report = run_aggregate(&input, &output, &options).unwrap();
        assert_eq!(report.seasons, 1);
        let bundle = SnowfallBundle::read_path(&output).unwrap();
        assert_eq!(bundle.seasons[0].total_snowfall, 5.0);
    }

    #[test]
    fn headerless_custom_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("daily.csv");
        let output = dir.path().join("bundle.json");
        std::fs::write(&input, "STN,1.5,20231201\nSTN,2.5,20231202\n").unwrap();

        let options = AggregateOptions {
            source: "STN".to_string(),
            config: AggregatorConfig {
                mode: DerivationMode::Snowfall,
                first_day: FirstDayPolicy::Zero,
                min_season_days: 0,
            },
            layout: ColumnLayout {
                date_column: 2,
                value_column: 1,
                has_headers: false,
            },
        };
        let report = run_aggregate(&input, &output, &options).unwrap();
        assert_eq!(report.observations, 2);
        let bundle = SnowfallBundle::read_path(&output).unwrap();
        assert_eq!(bundle.seasons[0].total_snowfall, 4.0);
    }

    #[test]
    fn missing_input_and_empty_input_fail() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("bundle.json");
        assert!(run_aggregate(&dir.path().join("nope.csv"), &output, &options()).is_err());

        let input = dir.path().join("empty.csv");
        std::fs::write(&input, "DATE,SNWD\n").unwrap();
        assert!(run_aggregate(&input, &output, &options()).is_err());
        assert!(!output.exists());
    }
}
