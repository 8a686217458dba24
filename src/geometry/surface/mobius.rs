use crate::error::Result;
use crate::geometry::require_positive;
use crate::math::Point3;
use crate::strip::StripConfig;

/// A Möbius strip centred on the origin, looping around the Z axis.
///
/// `P(u, v) = ((R + v*cos(u/2))*cos(u), (R + v*cos(u/2))*sin(u), v*sin(u/2))`
///
/// Parameters: `u` in `[0, 2*pi]` around the loop, `v` in `[-W/2, W/2]`
/// across the strip. The half-angle terms flip sign after one loop, so the
/// cross-section at `u = 2*pi` is the one at `u = 0` reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    loop_radius: f64,
    strip_width: f64,
}

impl MobiusSurface {
    /// Creates a new Möbius surface.
    ///
    /// # Arguments
    ///
    /// * `loop_radius` - Distance from the Z axis to the strip's centerline (must be positive)
    /// * `strip_width` - Full width of the strip (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-positive or not finite.
    pub fn new(loop_radius: f64, strip_width: f64) -> Result<Self> {
        require_positive("loop_radius", loop_radius)?;
        require_positive("strip_width", strip_width)?;
        Ok(Self {
            loop_radius,
            strip_width,
        })
    }

    /// Creates the surface described by an already validated configuration.
    #[must_use]
    pub fn from_config(config: &StripConfig) -> Self {
        Self {
            loop_radius: config.loop_radius(),
            strip_width: config.strip_width(),
        }
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

    /// Returns half the strip width, the shift of either edge.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.strip_width / 2.0
    }

    /// Maps `(u, v)` to its 3D point. Total for every finite input.
    #[must_use]
    pub fn point(&self, u: f64, v: f64) -> Point3 {
        let half = u / 2.0;
        let r = self.loop_radius + v * half.cos();
        Point3::new(r * u.cos(), r * u.sin(), v * half.sin())
    }
}
