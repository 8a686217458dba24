use crate::error::{MeshError, Result};
use crate::geometry::require_positive;
use crate::math::MIN_SAMPLES;

/// Validated construction parameters of a Möbius strip model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripConfig {
    loop_radius: f64,
    strip_width: f64,
    mesh_points: usize,
}

impl StripConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `loop_radius` - Distance from the center axis to the strip's centerline (must be positive)
    /// * `strip_width` - Full width of the strip (must be positive)
    /// * `mesh_points` - Samples per parameter axis (at least 2)
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`](crate::error::GeometryError::ParameterOutOfRange)
    /// for a non-positive or non-finite radius or width, and
    /// [`MeshError::TooFewPoints`] when `mesh_points < 2`.
    pub fn new(loop_radius: f64, strip_width: f64, mesh_points: usize) -> Result<Self> {
        require_positive("loop_radius", loop_radius)?;
        require_positive("strip_width", strip_width)?;
        if mesh_points < MIN_SAMPLES {
            return Err(MeshError::TooFewPoints {
                points: mesh_points,
                min: MIN_SAMPLES,
            }
            .into());
        }
        Ok(Self {
            loop_radius,
            strip_width,
            mesh_points,
        })
    }

    /// Returns the loop radius `R`.
    #[must_use]
    pub fn loop_radius(&self) -> f64 {
        self.loop_radius
    }

    /// Returns the full strip width `W`.
    #[must_use]
    pub fn strip_width(&self) -> f64 {
        self.strip_width
    }

    /// Returns the number of samples per parameter axis `N`.
    #[must_use]
    pub fn mesh_points(&self) -> usize {
        self.mesh_points
    }

    /// Returns a copy with every length multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaled lengths are no longer positive.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        Self::new(
            self.loop_radius * factor,
            self.strip_width * factor,
            self.mesh_points,
        )
    }
}
