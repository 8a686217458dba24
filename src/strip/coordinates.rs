use crate::geometry::MobiusSurface;
use crate::math::{Grid, Point3};

use super::ParameterGrid;

/// The X, Y, Z coordinate grids of a sampled surface.
///
/// Node `(i, j)` holds the point at shift sample `i` and angle sample `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrids {
    x: Grid,
    y: Grid,
    z: Grid,
}

impl CoordinateGrids {
    /// Maps every node of `parameters` through the surface equations.
    #[must_use]
    pub fn from_parameters(parameters: &ParameterGrid, surface: &MobiusSurface) -> Self {
        let angles = parameters.angles();
        let shifts = parameters.shifts();
        let (rows, cols) = angles.shape();

        let mut x = Grid::zeros(rows, cols);
        let mut y = Grid::zeros(rows, cols);
        let mut z = Grid::zeros(rows, cols);
        for j in 0..cols {
            for i in 0..rows {
                let p = surface.point(angles[(i, j)], shifts[(i, j)]);
                x[(i, j)] = p.x;
                y[(i, j)] = p.y;
                z[(i, j)] = p.z;
            }
        }

        Self { x, y, z }
    }

    /// X coordinate grid.
    #[must_use]
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// Y coordinate grid.
    #[must_use]
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// Z coordinate grid.
    #[must_use]
    pub fn z(&self) -> &Grid {
        &self.z
    }

    /// Grid shape as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// The 3D point at node `(row, column)`.
    #[must_use]
    pub fn point(&self, row: usize, column: usize) -> Point3 {
        Point3::new(
            self.x[(row, column)],
            self.y[(row, column)],
            self.z[(row, column)],
        )
    }
}
