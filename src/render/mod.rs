//! SVG heatmap rendering
//!
//! The display collaborator for grid results: takes a labeled matrix and a
//! title, produces a visual artifact.  One filled rectangle per cell with the
//! cell value annotated, axis tick labels taken from the grid's own label
//! vectors.  Holds no pricing logic.

pub mod colormap;

use std::path::Path;

use anyhow::{bail, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::grid::PriceGrid;

/// How cell values map to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    /// Min-to-max ramp; suited to raw price grids.
    Sequential,
    /// Red-white-green ramp centered on zero; suited to P&L grids.
    Diverging,
}

/// Label for the tick at grid coordinate `coord`, empty outside the matrix.
fn axis_label(labels: &[f64], coord: f64) -> String {
    let idx = coord.floor();
    if idx < 0.0 || idx >= labels.len() as f64 {
        return String::new();
    }
    format!("{:.2}", labels[idx as usize])
}

/// Render a grid as an SVG heatmap at `path`.
///
/// Rows (volatilities) run along the y axis, columns (spots) along the x
/// axis, matching the grid's own axis convention.
pub fn render_heatmap(
    grid: &PriceGrid,
    title: &str,
    scale: ColorScale,
    path: impl AsRef<Path>,
) -> Result<()> {
    let (n_rows, n_cols) = grid.shape();
    if n_rows == 0 || n_cols == 0 {
        bail!("cannot render an empty grid");
    }

    let (lo, hi) = grid.value_bounds();
    let span = (hi - lo).max(f64::EPSILON);
    let max_abs = grid.max_abs().max(f64::EPSILON);
    let color_for = |v: f64| match scale {
        ColorScale::Sequential => colormap::sequential((v - lo) / span),
        ColorScale::Diverging => colormap::diverging(0.5 + 0.5 * v / max_abs),
    };

    let root = SVGBackend::new(path.as_ref(), (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 28))
        .x_label_area_size(46)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..n_cols as f64, 0f64..n_rows as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_desc("Stock Price")
        .y_desc("Volatility")
        .x_label_formatter(&|x| axis_label(&grid.spots, *x))
        .y_label_formatter(&|y| axis_label(&grid.vols, *y))
        .draw()?;

    chart.draw_series(
        (0..n_rows)
            .flat_map(|row| (0..n_cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                Rectangle::new(
                    [
                        (col as f64, row as f64),
                        (col as f64 + 1.0, row as f64 + 1.0),
                    ],
                    color_for(grid.value(row, col)).filled(),
                )
            }),
    )?;

    // Per-cell annotations, flipping to white text on dark cells.
    chart.draw_series(
        (0..n_rows)
            .flat_map(|row| (0..n_cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let v = grid.value(row, col);
                let text_color = if colormap::luminance(&color_for(v)) < 0.5 {
                    WHITE
                } else {
                    BLACK
                };
                let style = ("sans-serif", 13)
                    .into_font()
                    .color(&text_color)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                Text::new(
                    format!("{v:.2}"),
                    (col as f64 + 0.5, row as f64 + 0.5),
                    style,
                )
            }),
    )?;

    root.present()?;
    Ok(())
}
