use crate::domain::burndown::BurndownSeries;
use crate::services::burndown_csv::{deserialize_burndown_from_csv_str, BurndownCsvError};
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurndownPlotError {
    #[error("failed to read burndown file: {0}")]
    ReadBurndown(#[from] std::io::Error),
    #[error("failed to parse burndown csv: {0}")]
    ParseBurndown(#[from] BurndownCsvError),
    #[error("burndown data is empty")]
    EmptyBurndown,
    #[error("failed to render burndown plot: {0}")]
    Plot(String),
}

pub async fn plot_burndown_from_csv_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), BurndownPlotError> {
    let burndown_csv = tokio::fs::read_to_string(input_path).await?;
    let series = deserialize_burndown_from_csv_str(&burndown_csv)?;
    if series.is_empty() {
        return Err(BurndownPlotError::EmptyBurndown);
    }
    log::debug!("Plotting {} burndown series to {output_path}", series.len());
    write_plot_png(output_path, series).await
}

async fn write_plot_png(
    output_path: &str,
    series: Vec<BurndownSeries>,
) -> Result<(), BurndownPlotError> {
    let output_path = output_path.to_string();
    tokio::task::spawn_blocking(move || render_plot_png(&output_path, &series))
        .await
        .map_err(|e| BurndownPlotError::Plot(e.to_string()))?
}

/// Draws one line chart per priority, stacked vertically, each with its
/// y-axis starting at zero.
fn render_plot_png(output_path: &str, series: &[BurndownSeries]) -> Result<(), BurndownPlotError> {
    let height = 400 * series.len().max(1) as u32;
    let root = BitMapBackend::new(output_path, (900, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BurndownPlotError::Plot(e.to_string()))?;

    let areas = root.split_evenly((series.len().max(1), 1));
    for (area, item) in areas.iter().zip(series) {
        render_series(area, item)?;
    }

    root.present()
        .map_err(|e| BurndownPlotError::Plot(e.to_string()))?;
    Ok(())
}

fn render_series<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    series: &BurndownSeries,
) -> Result<(), BurndownPlotError> {
    let max_count = series.peak_count().unwrap_or(0);
    let max_y = max_count.saturating_add(1).max(1) as i32;
    let max_x = series.counts.len().saturating_sub(1).max(1) as i32;

    let caption = format!("{} open bugs", series.priority);
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(caption, ("sans-serif", 26))
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| BurndownPlotError::Plot(e.to_string()))?;

    let label_count = series.counts.len().clamp(1, 8);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Day")
        .y_desc("Open issues")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            series
                .counts
                .get(*index as usize)
                .map(|daily| daily.day.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| BurndownPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            series
                .counts
                .iter()
                .enumerate()
                .map(|(idx, daily)| (idx as i32, daily.count as i32)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| BurndownPlotError::Plot(e.to_string()))?;

    Ok(())
}
