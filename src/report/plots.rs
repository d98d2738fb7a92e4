//! Confusion-matrix heatmaps.

use ndarray::Array2;
use ndarray_stats::QuantileExt;
use plotly::common::{ColorScale, ColorScalePalette, Font};
use plotly::layout::{Annotation, Axis, Layout};
use plotly::{HeatMap, Plot};

/// Render a confusion matrix as an annotated heatmap.
///
/// Class names label both axes, every cell carries its numeric value, and the
/// annotation text flips to white once the cell exceeds half the matrix
/// maximum so it stays readable on the dark end of the color scale.
pub fn confusion_matrix_heatmap(
    matrix: &Array2<f64>,
    classes: &[String],
    title: &str,
    precision: usize,
) -> Result<Plot, String> {
    let (nrows, ncols) = matrix.dim();
    if nrows != classes.len() || ncols != classes.len() {
        return Err(format!(
            "Matrix is {}x{} but there are {} class names",
            nrows,
            ncols,
            classes.len()
        ));
    }

    let z: Vec<Vec<f64>> = matrix
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();

    let trace = HeatMap::new(classes.to_vec(), classes.to_vec(), z)
        .color_scale(ColorScale::Palette(ColorScalePalette::Blues));

    let threshold = matrix.max().map(|m| m / 2.0).unwrap_or(0.0);
    let mut annotations = Vec::with_capacity(nrows * ncols);
    for i in 0..nrows {
        for j in 0..ncols {
            let value = matrix[(i, j)];
            let color = if value > threshold { "white" } else { "black" };
            annotations.push(
                Annotation::new()
                    .x(classes[j].clone())
                    .y(classes[i].clone())
                    .text(format!("{:.*}", precision, value))
                    .show_arrow(false)
                    .font(Font::new().color(color)),
            );
        }
    }

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Predicted label"))
        .y_axis(Axis::new().title("True label"))
        .annotations(annotations);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}
