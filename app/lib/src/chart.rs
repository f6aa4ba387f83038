//! Grouped bar chart rendering.
//!
//! Turns one [`ResultTable`] into an SVG grouped bar chart: one group of
//! bars per IR size (in the table's first-seen order), one bar per algorithm
//! (in configured legend order). Rendering uses the `plotters` SVG backend
//! and always produces the chart in memory; persisting to a file is
//! optional.

use plotters::prelude::*;
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::table::ResultTable;
use log::info;

/// Chart canvas size in pixels.
const CHART_SIZE: (u32, u32) = (800, 520);

/// One distinguishable color per algorithm, in legend order.
const PALETTE: [RGBColor; 5] = [
    RGBColor(231, 76, 60),  // red
    RGBColor(230, 160, 0),  // amber
    RGBColor(52, 152, 219), // blue
    RGBColor(46, 204, 113), // emerald
    RGBColor(155, 89, 182), // violet
];

const Y_DESC: &str = "speed [seconds of audio processed per millisecond]";
const X_DESC: &str = "IR length in samples";

/// Render a grouped bar chart for one result table.
///
/// X positions follow the table's insertion order, not numeric order; this
/// reproduces the reference figure layout, where the axis order mirrors the
/// log scan order. Bars for the K algorithms are laid out side by side
/// around each tick: bar `i` is centered at
/// `ind - (width * (K - 1) / 2 - width / 2) + width * i`.
///
/// Returns the rendered SVG document. If `output` is given, the SVG is also
/// written to that path.
///
/// # Errors
///
/// - [`ReportError::RaggedTable`] if any IR size lacks a speed value for one
///   of the configured algorithms.
/// - [`ReportError::Chart`] if the table is empty or a drawing operation
///   fails.
/// - [`ReportError::Io`] if the output file cannot be written.
pub fn render_chart(
    table: &ResultTable,
    config: &ReportConfig,
    title: &str,
    output: Option<&Path>,
) -> Result<String> {
    if table.is_empty() {
        return Err(ReportError::Chart(
            "cannot render a chart from an empty result table".to_string(),
        ));
    }

    // One Vec of speed values per algorithm, aligned with the IR-size order.
    let series = collect_series(table, &config.algorithms)?;

    let keys = table.ir_sizes();
    let width = config.bar_width;
    let group = config.algorithms.len();
    let offset = width * (group as f64 - 1.0) / 2.0 - width / 2.0;

    let y_max = series
        .iter()
        .flat_map(|values| values.iter().copied())
        .fold(0.0f64, f64::max);

    let x_min = -offset - width / 2.0 - 0.35;
    let x_max = (keys.len() as f64 - 1.0) - offset + width * (group as f64 - 1.0)
        + width / 2.0
        + 0.35;

    let mut svg = String::new();
    let drawn: std::result::Result<(), Box<dyn std::error::Error>> = (|| {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 18))
            .margin(14)
            .x_label_area_size(44)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max * 1.15)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(keys.len() * 2 + 1)
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .x_label_formatter(&|x| {
                // Label only the group tick marks (integer positions).
                if (x - x.round()).abs() > 0.1 || x.round() < 0.0 {
                    return String::new();
                }
                keys.get(x.round() as usize)
                    .map(|k| k.to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        for (i, (algorithm, values)) in config.algorithms.iter().zip(&series).enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let bars = values.iter().enumerate().map(|(ind, &speed)| {
                let center = ind as f64 - offset + width * i as f64;
                Rectangle::new(
                    [(center - width / 2.0, 0.0), (center + width / 2.0, speed)],
                    color.mix(0.8).filled(),
                )
            });
            chart
                .draw_series(bars)?
                .label(algorithm.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .margin(12)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK.mix(0.3))
            .label_font(("sans-serif", 13))
            .draw()?;

        root.present()?;
        Ok(())
    })();
    drawn.map_err(|e| ReportError::Chart(e.to_string()))?;

    if let Some(path) = output {
        std::fs::write(path, &svg)?;
        info!("wrote chart: {}", path.display());
    }

    Ok(svg)
}

/// Collect one speed series per algorithm, aligned with the IR-size order.
///
/// Fails on the first missing `(ir_size, algorithm)` cell; a ragged table
/// cannot be charted.
fn collect_series(table: &ResultTable, algorithms: &[String]) -> Result<Vec<Vec<f64>>> {
    algorithms
        .iter()
        .map(|algorithm| {
            table
                .ir_sizes()
                .iter()
                .map(|&ir_size| {
                    table
                        .speed(ir_size, algorithm)
                        .ok_or_else(|| ReportError::RaggedTable {
                            ir_size,
                            algorithm: algorithm.clone(),
                        })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::RunRecord;

    fn full_table(config: &ReportConfig, ir_sizes: &[u32]) -> ResultTable {
        let mut table = ResultTable::new();
        for (n, &ir_size) in ir_sizes.iter().enumerate() {
            table.record(RunRecord {
                ir_size,
                timings: config
                    .algorithms
                    .iter()
                    .enumerate()
                    .map(|(i, a)| (a.clone(), 1.0 + i as f64 + n as f64))
                    .collect(),
            });
        }
        table
    }

    #[test]
    fn test_render_produces_svg_with_labels() {
        let config = ReportConfig::default();
        let table = full_table(&config, &[16, 32, 64]);
        let svg = render_chart(&table, &config, "Power of 2 Benchmarks (Test)", None).unwrap();

        assert!(svg.starts_with("<svg") || svg.contains("<svg"));
        assert!(svg.contains("Power of 2 Benchmarks (Test)"));
        // Legend entries and axis tick labels end up as SVG text nodes.
        for algorithm in &config.algorithms {
            assert!(svg.contains(algorithm.as_str()), "missing {}", algorithm);
        }
        assert!(svg.contains("16"));
    }

    #[test]
    fn test_render_writes_output_file() {
        let config = ReportConfig::default();
        let table = full_table(&config, &[16]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        render_chart(&table, &config, "t", Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }

    #[test]
    fn test_ragged_table_is_fatal() {
        let config = ReportConfig::default();
        let mut table = full_table(&config, &[16]);
        // Second size only has one algorithm.
        table.record(RunRecord {
            ir_size: 32,
            timings: vec![("JuceFIR".to_string(), 1.0)],
        });

        let err = render_chart(&table, &config, "t", None).unwrap_err();
        assert!(matches!(
            err,
            ReportError::RaggedTable { ir_size: 32, .. }
        ));
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let config = ReportConfig::default();
        let err = render_chart(&ResultTable::new(), &config, "t", None).unwrap_err();
        assert!(matches!(err, ReportError::Chart(_)));
    }

    #[test]
    fn test_custom_algorithm_set() {
        let config = ReportConfig::new().with_algorithms(["Fast", "Slow"]);
        let table = full_table(&config, &[31, 67]);
        let svg = render_chart(&table, &config, "Prime Benchmarks", None).unwrap();
        assert!(svg.contains("Fast"));
        assert!(svg.contains("Slow"));
    }
}
