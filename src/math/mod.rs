pub mod gradient;
pub mod integrate;
pub mod sampling;

pub use gradient::{gradient, gradient_axis};
pub use integrate::{trapezoid, trapezoid_axis};
pub use sampling::{linspace, meshgrid, MIN_SAMPLES};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Dense 2D grid of samples.
///
/// Row index follows the second (shift) parameter, column index the first
/// (angle) parameter.
pub type Grid = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Selects which index of a [`Grid`] an operation runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along the row index, i.e. down each column.
    Rows,
    /// Along the column index, i.e. across each row.
    Columns,
}

impl Axis {
    /// Number of samples a grid of the given shape has along this axis.
    #[must_use]
    pub fn len(self, shape: (usize, usize)) -> usize {
        match self {
            Self::Rows => shape.0,
            Self::Columns => shape.1,
        }
    }
}
