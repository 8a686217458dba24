mod area;
mod length;

pub use area::SurfaceArea;
pub use length::{BoundaryLength, EdgeArcLength};

/// Step used to turn finite differences into derivatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientSpacing {
    /// Divide by one, giving differences in sample-index space.
    ///
    /// Matches the established reference figures for the strip. Each
    /// derivative carries a factor of the parameter step it spans.
    #[default]
    Unit,
    /// Divide by the parameter step, giving derivatives with respect to `u`
    /// and `v`, so the element magnitude is `dA / (du * dv)`.
    Parameter,
}

/// How the boundary length of the strip is derived from its edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Twice the length of the edge at `v = +W/2` over one loop.
    ///
    /// Assumes the two apparent edge traces are symmetric rather than
    /// following the single boundary curve.
    #[default]
    Doubled,
    /// Length of the single boundary curve, traced at `v = +W/2` over two
    /// loops (`u` in `[0, 4*pi]`) with the same sample count.
    FullTraversal,
}

/// Numeric settings shared by the estimators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimationParams {
    /// Finite-difference spacing.
    pub spacing: GradientSpacing,
}

impl EstimationParams {
    /// Creates parameters with the given spacing.
    #[must_use]
    pub fn with_spacing(spacing: GradientSpacing) -> Self {
        Self { spacing }
    }
}
