use std::f64::consts::TAU;

use crate::math::{linspace, meshgrid, Grid};

use super::StripConfig;

/// The 2D parameter mesh of a Möbius strip: loop angle `u` by width shift `v`.
///
/// Row index follows the shift sample, column index the angle sample, so
/// [`angles`](Self::angles) is constant down each column and
/// [`shifts`](Self::shifts) is constant along each row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    angle_grid: Vec<f64>,
    width_shift: Vec<f64>,
    angles: Grid,
    shifts: Grid,
}

impl ParameterGrid {
    /// Builds the parameter mesh of a validated configuration.
    ///
    /// `angle_grid` holds `N` samples over `[0, 2*pi]` and `width_shift`
    /// holds `N` samples over `[-W/2, W/2]`, both inclusive of their
    /// endpoints.
    #[must_use]
    pub fn new(config: &StripConfig) -> Self {
        let half = config.strip_width() / 2.0;
        let angle_grid = linspace(0.0, TAU, config.mesh_points());
        let width_shift = linspace(-half, half, config.mesh_points());
        let (angles, shifts) = meshgrid(&angle_grid, &width_shift);

        Self {
            angle_grid,
            width_shift,
            angles,
            shifts,
        }
    }

    /// Angle samples `u`, one per grid column.
    #[must_use]
    pub fn angle_grid(&self) -> &[f64] {
        &self.angle_grid
    }

    /// Width shift samples `v`, one per grid row.
    #[must_use]
    pub fn width_shift(&self) -> &[f64] {
        &self.width_shift
    }

    /// Angle value at every grid node.
    #[must_use]
    pub fn angles(&self) -> &Grid {
        &self.angles
    }

    /// Shift value at every grid node.
    #[must_use]
    pub fn shifts(&self) -> &Grid {
        &self.shifts
    }

    /// Number of samples per axis.
    #[must_use]
    pub fn mesh_points(&self) -> usize {
        self.angle_grid.len()
    }

    /// Step between consecutive angle samples.
    #[must_use]
    pub fn angle_step(&self) -> f64 {
        self.angle_grid[1] - self.angle_grid[0]
    }

    /// Step between consecutive shift samples.
    #[must_use]
    pub fn shift_step(&self) -> f64 {
        self.width_shift[1] - self.width_shift[0]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(strip_width: f64, mesh_points: usize) -> ParameterGrid {
        ParameterGrid::new(&StripConfig::new(5.0, strip_width, mesh_points).unwrap())
    }

    #[test]
    fn axis_samples() {
        let g = grid(1.0, 5);
        assert_eq!(g.mesh_points(), 5);
        assert_relative_eq!(g.angle_grid()[0], 0.0);
        assert_relative_eq!(g.angle_grid()[4], TAU);
        assert_relative_eq!(g.width_shift()[0], -0.5);
        assert_relative_eq!(g.width_shift()[2], 0.0);
        assert_relative_eq!(g.width_shift()[4], 0.5);
        assert_relative_eq!(g.angle_step(), TAU / 4.0);
        assert_relative_eq!(g.shift_step(), 0.25);
    }

    #[test]
    fn angles_vary_by_column_only() {
        let g = grid(2.0, 6);
        let a = g.angles();
        assert_eq!(a.shape(), (6, 6));
        for j in 0..6 {
            for i in 0..6 {
                assert!((a[(i, j)] - g.angle_grid()[j]).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn shifts_vary_by_row_only() {
        let g = grid(2.0, 6);
        let s = g.shifts();
        for i in 0..6 {
            for j in 0..6 {
                assert!((s[(i, j)] - g.width_shift()[i]).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn minimum_mesh() {
        let g = grid(1.0, 2);
        assert_eq!(g.angle_grid(), &[0.0, TAU]);
        assert_eq!(g.width_shift(), &[-0.5, 0.5]);
    }
}
