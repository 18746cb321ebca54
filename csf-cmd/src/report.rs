//! `summary` and `series`: reports over a range of seasons in a bundle.

use anyhow::Context;
use csf_core::bundle::SnowfallBundle;
use csf_view::SeasonChart;
use log::info;
use std::io::Write;
use std::path::Path;

/// Load a bundle into a chart and apply the requested range. Open ends
/// default to the oldest / newest season in the bundle.
fn load_chart(bundle: &Path, start: Option<i32>, end: Option<i32>) -> anyhow::Result<SeasonChart> {
    let bundle = SnowfallBundle::read_path(bundle)?;
    let mut chart = SeasonChart::from_bundle(bundle);
    if let Some(control) = chart.range_control() {
        chart.set_range(
            start.unwrap_or(control.min_year),
            end.unwrap_or(control.max_year),
        );
    }
    Ok(chart)
}

/// Write one line per displayed season (newest first), then the axis bounds.
pub fn run_summary<W: Write>(
    bundle: &Path,
    start: Option<i32>,
    end: Option<i32>,
    out: &mut W,
) -> anyhow::Result<()> {
    let chart = load_chart(bundle, start, end)?;
    let visible = chart.visible_seasons();
    info!("Summarizing {} seasons from {}", visible.len(), bundle.display());

    writeln!(out, "{:<10} {:>6} {:>10}", "season", "days", "total_in")?;
    for season in &visible {
        writeln!(
            out,
            "{:<10} {:>6} {:>10.1}",
            season.label,
            season.days(),
            season.total_snowfall
        )?;
    }
    let bounds = chart.bounds();
    writeln!(
        out,
        "days {}..={}, max cumulative {:.1} in",
        bounds.min_day_of_season, bounds.max_day_of_season, bounds.max_cumulative
    )?;
    Ok(())
}

/// Write the chart frame JSON to `output`, or stdout when none is given.
pub fn run_series(
    bundle: &Path,
    start: Option<i32>,
    end: Option<i32>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let chart = load_chart(bundle, start, end)?;
    let json = chart.frame().to_json().context("serializing chart frame")?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Chart frame written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
