use tracing::{debug, trace};

use crate::math::{gradient_axis, trapezoid, trapezoid_axis, Axis, Grid, Vector3};
use crate::strip::MobiusStrip;

use super::{EstimationParams, GradientSpacing};

/// Estimates the surface area of a sampled Möbius strip.
///
/// Differentiates the coordinate grids along both parameter axes, takes the
/// norm of the cross product of the two tangent vectors at every node, and
/// integrates that density first over the shift axis, then over the angle
/// axis, with the trapezoidal rule.
pub struct SurfaceArea<'a> {
    strip: &'a MobiusStrip,
    params: EstimationParams,
}

impl<'a> SurfaceArea<'a> {
    /// Creates a new `SurfaceArea` query with default parameters.
    #[must_use]
    pub fn new(strip: &'a MobiusStrip) -> Self {
        Self {
            strip,
            params: EstimationParams::default(),
        }
    }

    /// Sets custom estimation parameters.
    #[must_use]
    pub fn with_params(mut self, params: EstimationParams) -> Self {
        self.params = params;
        self
    }

    /// Surface-element density `|dP/du x dP/dv|` at every grid node.
    #[must_use]
    pub fn element_magnitudes(&self) -> Grid {
        let parameters = self.strip.parameters();
        let coords = self.strip.coordinates();
        let (du, dv) = match self.params.spacing {
            GradientSpacing::Parameter => (parameters.angle_step(), parameters.shift_step()),
            GradientSpacing::Unit => (1.0, 1.0),
        };

        let x_u = gradient_axis(coords.x(), Axis::Columns, du);
        let x_v = gradient_axis(coords.x(), Axis::Rows, dv);
        let y_u = gradient_axis(coords.y(), Axis::Columns, du);
        let y_v = gradient_axis(coords.y(), Axis::Rows, dv);
        let z_u = gradient_axis(coords.z(), Axis::Columns, du);
        let z_v = gradient_axis(coords.z(), Axis::Rows, dv);

        let (rows, cols) = coords.shape();
        Grid::from_fn(rows, cols, |i, j| {
            let t_u = Vector3::new(x_u[(i, j)], y_u[(i, j)], z_u[(i, j)]);
            let t_v = Vector3::new(x_v[(i, j)], y_v[(i, j)], z_v[(i, j)]);
            t_u.cross(&t_v).norm()
        })
    }

    /// Executes the query, returning the estimated area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let parameters = self.strip.parameters();
        let magnitudes = self.element_magnitudes();

        let per_angle = trapezoid_axis(&magnitudes, Axis::Rows, parameters.width_shift());
        trace!(columns = per_angle.len(), "integrated element density over shift axis");
        let area = trapezoid(&per_angle, parameters.angle_grid());

        debug!(
            area,
            spacing = ?self.params.spacing,
            mesh_points = parameters.mesh_points(),
            "estimated surface area"
        );
        area
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    fn area(r: f64, w: f64, n: usize) -> f64 {
        SurfaceArea::new(&MobiusStrip::new(r, w, n).unwrap()).execute()
    }

    fn parameter_area(r: f64, w: f64, n: usize) -> f64 {
        SurfaceArea::new(&MobiusStrip::new(r, w, n).unwrap())
            .with_params(EstimationParams::with_spacing(GradientSpacing::Parameter))
            .execute()
    }

    // |dP/du x dP/dv| for the strip parametrization.
    fn exact_density(r: f64, u: f64, v: f64) -> f64 {
        let radial = r + v * (u / 2.0).cos();
        (radial * radial + v * v / 4.0).sqrt()
    }

    #[test]
    fn reference_scenario() {
        assert_relative_eq!(area(5.0, 1.0, 250), 0.003_184_683_874_946_748, max_relative = 1e-6);
    }

    #[test]
    fn reference_scenario_parameter_spacing() {
        assert_relative_eq!(
            parameter_area(5.0, 1.0, 250),
            31.425_714_072_916_17,
            max_relative = 1e-6
        );
    }

    #[test]
    fn close_to_flat_band() {
        // The strip is nearly a band of width W around a circle of radius R.
        let a = parameter_area(5.0, 1.0, 250);
        let band = TAU * 5.0;
        assert!((a - band).abs() / band < 1e-3, "expected ~{band}, got {a}");
    }

    #[test]
    fn converges_with_mesh_resolution() {
        for estimate in [area, parameter_area] {
            let estimates: Vec<f64> = [50, 100, 250, 500]
                .iter()
                .map(|&n| estimate(5.0, 1.0, n))
                .collect();
            let diffs: Vec<f64> = estimates.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
            assert!(
                diffs.windows(2).all(|d| d[1] < d[0]),
                "successive differences should shrink: {estimates:?}"
            );
        }
        assert_relative_eq!(area(5.0, 1.0, 500), 0.000_793_046_335_470_616_4, max_relative = 1e-6);
        assert_relative_eq!(
            parameter_area(5.0, 1.0, 500),
            31.428_220_070_618_845,
            max_relative = 1e-6
        );
    }

    #[test]
    fn minimum_mesh_is_finite() {
        for a in [area(5.0, 1.0, 2), parameter_area(5.0, 1.0, 2)] {
            assert!(a.is_finite());
            assert!(a >= 0.0);
            assert!(a < 1e-9, "two-point mesh collapses, got {a}");
        }
    }

    #[test]
    fn small_mesh_is_non_negative() {
        for n in 2..8 {
            let a = area(1.0, 0.5, n);
            assert!(a.is_finite() && a >= 0.0, "n = {n}: {a}");
        }
        assert_relative_eq!(area(1.0, 0.5, 3), PI / 32.0, max_relative = 1e-9);
        assert_relative_eq!(parameter_area(1.0, 0.5, 3), 0.125, max_relative = 1e-9);
    }

    #[test]
    fn narrow_strip_has_vanishing_area() {
        assert_relative_eq!(
            parameter_area(5.0, 1e-3, 500),
            0.031_415_096_404_239_19,
            max_relative = 1e-6
        );
        assert!(parameter_area(5.0, 1e-6, 500) < 1e-4);
        assert!(area(5.0, 1e-3, 500) < 1e-8);
        assert!(area(5.0, 1e-6, 500) < area(5.0, 1e-3, 500));
    }

    #[test]
    fn scales_quadratically_with_parameter_spacing() {
        let base = parameter_area(2.0, 1.0, 64);
        let scaled = parameter_area(4.0, 2.0, 64);
        assert_relative_eq!(scaled, 4.0 * base, max_relative = 1e-9);
    }

    #[test]
    fn unit_spacing_scales_cubically() {
        let base = area(2.0, 1.0, 64);
        assert_relative_eq!(base, 0.019_912_902_591_522_137, max_relative = 1e-6);
        assert_relative_eq!(area(4.0, 2.0, 64), 8.0 * base, max_relative = 1e-9);
    }

    #[test]
    fn interior_density_matches_analytic() {
        let strip = MobiusStrip::new(5.0, 1.0, 200).unwrap();
        let density = SurfaceArea::new(&strip)
            .with_params(EstimationParams::with_spacing(GradientSpacing::Parameter))
            .element_magnitudes();
        let params = strip.parameters();
        for &(i, j) in &[(1, 1), (50, 120), (100, 100), (198, 30)] {
            let exact = exact_density(5.0, params.angle_grid()[j], params.width_shift()[i]);
            assert_relative_eq!(density[(i, j)], exact, max_relative = 1e-3);
        }
    }

    #[test]
    fn unit_density_carries_both_steps() {
        let strip = MobiusStrip::new(5.0, 1.0, 200).unwrap();
        let params = strip.parameters();
        let unit = SurfaceArea::new(&strip).element_magnitudes();
        let physical = SurfaceArea::new(&strip)
            .with_params(EstimationParams::with_spacing(GradientSpacing::Parameter))
            .element_magnitudes();
        let steps = params.angle_step() * params.shift_step();
        assert_relative_eq!(unit[(100, 100)], physical[(100, 100)] * steps, max_relative = 1e-9);
    }

    #[test]
    fn idempotent() {
        let strip = MobiusStrip::new(3.0, 0.8, 60).unwrap();
        let first = SurfaceArea::new(&strip).execute();
        let second = SurfaceArea::new(&strip).execute();
        assert!((first - second).abs() < f64::EPSILON);
    }
}
