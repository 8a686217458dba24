use super::Grid;

/// Smallest sample count that still defines an interval and a difference.
pub const MIN_SAMPLES: usize = 2;

/// Returns `count` evenly spaced samples over the closed interval `[start, end]`.
///
/// Sample `i` is `start + i * step`; the last sample is pinned to `end` so the
/// interval is closed exactly. A count of one yields `[start]`, zero yields
/// an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (count - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            let mut samples: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            samples[count - 1] = end;
            samples
        }
    }
}

/// Builds the Cartesian product of two sample sequences as a pair of grids.
///
/// Both grids have `rows.len()` rows and `columns.len()` columns. The first
/// grid repeats `columns` on every row; the second repeats `rows` down every
/// column.
#[must_use]
pub fn meshgrid(columns: &[f64], rows: &[f64]) -> (Grid, Grid) {
    let along_columns = Grid::from_fn(rows.len(), columns.len(), |_, j| columns[j]);
    let along_rows = Grid::from_fn(rows.len(), columns.len(), |i, _| rows[i]);
    (along_columns, along_rows)
}
