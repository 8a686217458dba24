use tracing::debug;

use crate::error::{MeshError, Result};
use crate::geometry::MobiusEdge;
use crate::math::{gradient, trapezoid, MIN_SAMPLES};
use crate::strip::MobiusStrip;

use super::{BoundaryMode, EstimationParams, GradientSpacing};

/// Estimates the arc length of a Möbius edge curve from uniform samples.
///
/// Samples the curve over its parameter sweep, differentiates each coordinate
/// with finite differences, and integrates the pointwise speed with the
/// trapezoidal rule.
pub struct EdgeArcLength {
    edge: MobiusEdge,
    samples: usize,
    params: EstimationParams,
}

impl EdgeArcLength {
    /// Creates a new `EdgeArcLength` query.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooFewPoints`] if `samples < 2`.
    pub fn new(edge: MobiusEdge, samples: usize) -> Result<Self> {
        if samples < MIN_SAMPLES {
            return Err(MeshError::TooFewPoints {
                points: samples,
                min: MIN_SAMPLES,
            }
            .into());
        }
        Ok(Self {
            edge,
            samples,
            params: EstimationParams::default(),
        })
    }

    /// Sets custom estimation parameters.
    #[must_use]
    pub fn with_params(mut self, params: EstimationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the estimated arc length.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let (ts, points) = self.edge.sample(self.samples);
        let spacing = match self.params.spacing {
            GradientSpacing::Parameter => ts[1] - ts[0],
            GradientSpacing::Unit => 1.0,
        };

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
        let dx = gradient(&xs, spacing);
        let dy = gradient(&ys, spacing);
        let dz = gradient(&zs, spacing);

        let speed: Vec<f64> = dx
            .iter()
            .zip(&dy)
            .zip(&dz)
            .map(|((dx, dy), dz)| (dx * dx + dy * dy + dz * dz).sqrt())
            .collect();
        trapezoid(&speed, &ts)
    }
}

/// Estimates the boundary length of a sampled Möbius strip.
///
/// The default [`BoundaryMode::Doubled`] measures the edge at `v = +W/2` over
/// one loop and doubles it. [`BoundaryMode::FullTraversal`] measures the
/// single boundary curve over two loops instead.
pub struct BoundaryLength<'a> {
    strip: &'a MobiusStrip,
    mode: BoundaryMode,
    params: EstimationParams,
}

impl<'a> BoundaryLength<'a> {
    /// Creates a new `BoundaryLength` query with the default mode and parameters.
    #[must_use]
    pub fn new(strip: &'a MobiusStrip) -> Self {
        Self {
            strip,
            mode: BoundaryMode::default(),
            params: EstimationParams::default(),
        }
    }

    /// Selects how the boundary is traced.
    #[must_use]
    pub fn with_mode(mut self, mode: BoundaryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets custom estimation parameters.
    #[must_use]
    pub fn with_params(mut self, params: EstimationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the estimated boundary length.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let surface = *self.strip.surface();
        let samples = self.strip.config().mesh_points();

        let length = match self.mode {
            BoundaryMode::Doubled => 2.0 * self.edge_length(MobiusEdge::outer(surface), samples),
            BoundaryMode::FullTraversal => {
                self.edge_length(MobiusEdge::full_boundary(surface), samples)
            }
        };

        debug!(
            length,
            mode = ?self.mode,
            spacing = ?self.params.spacing,
            mesh_points = samples,
            "estimated boundary length"
        );
        length
    }

    // The strip's mesh size is validated on construction.
    fn edge_length(&self, edge: MobiusEdge, samples: usize) -> f64 {
        EdgeArcLength {
            edge,
            samples,
            params: self.params,
        }
        .execute()
    }
}
