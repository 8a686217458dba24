use super::{Axis, Grid, MIN_SAMPLES};

/// Finite-difference derivative of a uniformly sampled sequence.
///
/// Interior samples use central differences `(f[k+1] - f[k-1]) / (2h)`;
/// the first and last samples use one-sided first-order differences.
/// Sequences shorter than two samples have no slope and yield zeros.
///
/// `spacing` is the sample step `h` and must be non-zero.
#[must_use]
pub fn gradient(samples: &[f64], spacing: f64) -> Vec<f64> {
    let len = samples.len();
    (0..len)
        .map(|k| difference_at(len, k, spacing, |idx| samples[idx]))
        .collect()
}

/// Finite-difference derivative of a grid along one axis.
///
/// Applies the same stencil as [`gradient`] independently to every row
/// ([`Axis::Columns`]) or every column ([`Axis::Rows`]).
#[must_use]
pub fn gradient_axis(grid: &Grid, axis: Axis, spacing: f64) -> Grid {
    let (rows, cols) = grid.shape();
    let len = axis.len((rows, cols));
    match axis {
        Axis::Rows => Grid::from_fn(rows, cols, |i, j| {
            difference_at(len, i, spacing, |k| grid[(k, j)])
        }),
        Axis::Columns => Grid::from_fn(rows, cols, |i, j| {
            difference_at(len, j, spacing, |k| grid[(i, k)])
        }),
    }
}

fn difference_at(len: usize, k: usize, spacing: f64, at: impl Fn(usize) -> f64) -> f64 {
    if len < MIN_SAMPLES {
        0.0
    } else if k == 0 {
        (at(1) - at(0)) / spacing
    } else if k == len - 1 {
        (at(k) - at(k - 1)) / spacing
    } else {
        (at(k + 1) - at(k - 1)) / (2.0 * spacing)
    }
}
