//! Signal history chart rendering.

use std::collections::VecDeque;
use std::path::Path;

use plotters::prelude::*;

use crate::error::RenderError;

/// Output bitmap size for history charts.
pub const CHART_SIZE: (u32, u32) = (800, 600);

/// Render a network's retained signal history as a line chart PNG.
///
/// The y range is derived from the recorded samples with a small pad so a
/// perfectly flat series still renders a visible line.
pub fn render_history_chart(
    path: &Path,
    name: &str,
    history: &VecDeque<i32>,
) -> Result<(), RenderError> {
    if history.is_empty() {
        return Err(RenderError::NoHistory {
            name: name.to_owned(),
        });
    }

    let (y_min, y_max) = y_range(history);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let x_max = history.len() as i32;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Signal Strength - {name}"), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("sample")
        .y_desc("dBm")
        .draw()
        .map_err(backend_err)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    chart
        .draw_series(LineSeries::new(
            history.iter().enumerate().map(|(i, &v)| (i as i32, v)),
            &GREEN,
        ))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

/// The padded y range for a sample set.
fn y_range(history: &VecDeque<i32>) -> (i32, i32) {
    let min = history.iter().copied().min().unwrap_or(0);
    let max = history.iter().copied().max().unwrap_or(0);
    (min - 2, max + 2)
}

fn backend_err<E: std::fmt::Display>(error: E) -> RenderError {
    RenderError::Backend(error.to_string())
}
