//! PNG line charts of the wind load distribution and the wind speed profile.

use std::fs;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;
use tower_windload::CalculationResult;

/// Errors raised while rendering charts.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no segments to plot")]
    NoData,
    #[error("output path contains invalid UTF-8")]
    InvalidPath,
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart drawing failed: {0}")]
    Drawing(String),
}

/// One line series keyed by segment height.
struct LineChart<'a> {
    caption: &'a str,
    y_desc: &'a str,
    color: RGBColor,
    points: Vec<(f64, f64)>,
}

/// Plot segment wind load (N) against height.
pub fn render_load_chart(
    result: &CalculationResult,
    output: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let chart = LineChart {
        caption: "Wind load distribution",
        y_desc: "Wind load (N)",
        color: RGBColor(102, 126, 234),
        points: result
            .results
            .iter()
            .map(|s| (s.height, s.wind_load))
            .collect(),
    };
    render_line_chart(&chart, output, size)
}

/// Plot segment wind speed (m/s) against height.
pub fn render_wind_profile_chart(
    result: &CalculationResult,
    output: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let chart = LineChart {
        caption: "Wind speed profile",
        y_desc: "Wind speed (m/s)",
        color: RGBColor(40, 167, 69),
        points: result
            .results
            .iter()
            .map(|s| (s.height, s.wind_speed))
            .collect(),
    };
    render_line_chart(&chart, output, size)
}

fn render_line_chart(chart: &LineChart<'_>, output: &Path, size: (u32, u32)) -> Result<(), ChartError> {
    if chart.points.is_empty() {
        return Err(ChartError::NoData);
    }
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = output.to_str().ok_or(ChartError::InvalidPath)?;

    let x_max = chart
        .points
        .iter()
        .map(|(x, _)| *x)
        .fold(0.0_f64, f64::max);
    let y_max = chart
        .points
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max);
    let x_range = 0.0..(x_max * 1.1).max(1.0);
    let y_range = 0.0..(y_max * 1.15).max(1.0);

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let root = BitMapBackend::new(output_str, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut ctx = ChartBuilder::on(&root)
        .margin(20)
        .caption(chart.caption, caption_font)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing)?;

    ctx.configure_mesh()
        .x_desc("Height (m)")
        .y_desc(chart.y_desc)
        .label_style(label_font.clone())
        .axis_desc_style(label_font)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .draw()
        .map_err(drawing)?;

    let style = ShapeStyle::from(&chart.color).stroke_width(3);
    ctx.draw_series(LineSeries::new(chart.points.iter().copied(), style))
        .map_err(drawing)?;
    ctx.draw_series(
        chart
            .points
            .iter()
            .map(|&point| Circle::new(point, 4, chart.color.filled())),
    )
    .map_err(drawing)?;

    root.present().map_err(drawing)?;
    Ok(())
}

fn drawing<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
