use super::{Axis, Grid};

/// Trapezoidal integral of `y` against the sample positions `x`.
///
/// Both slices must have the same length. Fewer than two samples integrate
/// to zero.
#[must_use]
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len(), "trapezoid: sample/position length mismatch");
    y.windows(2)
        .zip(x.windows(2))
        .map(|(yw, xw)| (xw[1] - xw[0]) * (yw[1] + yw[0]) / 2.0)
        .sum()
}

/// Trapezoidal integral of every grid line along `axis`.
///
/// With [`Axis::Rows`] each column is integrated over the row index against
/// `x`, giving one value per column. With [`Axis::Columns`] each row is
/// integrated over the column index, giving one value per row.
#[must_use]
pub fn trapezoid_axis(grid: &Grid, axis: Axis, x: &[f64]) -> Vec<f64> {
    debug_assert_eq!(axis.len(grid.shape()), x.len(), "trapezoid_axis: axis length mismatch");
    match axis {
        Axis::Rows => grid
            .column_iter()
            .map(|column| {
                let y: Vec<f64> = column.iter().copied().collect();
                trapezoid(&y, x)
            })
            .collect(),
        Axis::Columns => grid
            .row_iter()
            .map(|row| {
                let y: Vec<f64> = row.iter().copied().collect();
                trapezoid(&y, x)
            })
            .collect(),
    }
}
