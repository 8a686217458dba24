use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::surface::MobiusSurface;
use crate::math::{linspace, Point3, TOLERANCE};

/// A curve on a Möbius strip at a fixed lateral shift.
///
/// `C(t) = P(t, shift)` for `t` in `[0, sweep]`, where `P` is the strip's
/// parametrization. One loop (`sweep = 2*pi`) at `shift = W/2` traces one of
/// the two apparent edges; two loops (`sweep = 4*pi`) close the strip's single
/// boundary curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusEdge {
    surface: MobiusSurface,
    shift: f64,
    sweep: f64,
}

impl MobiusEdge {
    /// Creates a new edge curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `shift` lies outside `[-W/2, W/2]` or `sweep` is
    /// non-positive or not finite.
    pub fn new(surface: MobiusSurface, shift: f64, sweep: f64) -> Result<Self> {
        let half = surface.half_width();
        if !shift.is_finite() || shift.abs() > half {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "shift",
                value: shift,
                min: -half,
                max: half,
            }
            .into());
        }
        if !sweep.is_finite() || sweep < TOLERANCE {
            return Err(GeometryError::Degenerate("edge sweep must be positive".into()).into());
        }
        Ok(Self {
            surface,
            shift,
            sweep,
        })
    }

    /// The edge at `v = +W/2` over a single loop.
    #[must_use]
    pub fn outer(surface: MobiusSurface) -> Self {
        Self {
            surface,
            shift: surface.half_width(),
            sweep: TAU,
        }
    }

    /// The strip's single boundary, traced from `v = +W/2` over two loops.
    #[must_use]
    pub fn full_boundary(surface: MobiusSurface) -> Self {
        Self {
            surface,
            shift: surface.half_width(),
            sweep: 2.0 * TAU,
        }
    }

    /// Returns the underlying surface.
    #[must_use]
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// Returns the fixed lateral shift.
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns the parameter sweep.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Maps parameter `t` to its 3D point.
    #[must_use]
    pub fn point(&self, t: f64) -> Point3 {
        self.surface.point(t, self.shift)
    }

    /// Samples `count` evenly spaced parameters over `[0, sweep]` and the
    /// points they map to.
    #[must_use]
    pub fn sample(&self, count: usize) -> (Vec<f64>, Vec<Point3>) {
        let params = linspace(0.0, self.sweep, count);
        let points = params.iter().map(|&t| self.point(t)).collect();
        (params, points)
    }
}
