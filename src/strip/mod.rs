mod config;
mod coordinates;
mod parameter_grid;

pub use config::StripConfig;
pub use coordinates::CoordinateGrids;
pub use parameter_grid::ParameterGrid;

use tracing::debug;

use crate::error::Result;
use crate::geometry::{MobiusEdge, MobiusSurface};
use crate::operations::query::{BoundaryLength, SurfaceArea};
use crate::tessellation::{TessellateStrip, TriangleMesh};

/// A sampled Möbius strip.
///
/// Holds the validated configuration, the parameter mesh, and the coordinate
/// grids, all computed once on construction. Every query reads these grids
/// and leaves them untouched, so estimates are deterministic and may be
/// requested in any order.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    config: StripConfig,
    surface: MobiusSurface,
    parameters: ParameterGrid,
    coordinates: CoordinateGrids,
}

impl MobiusStrip {
    /// Builds a strip with loop radius `R`, width `W`, and `N` samples per axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `loop_radius` or `strip_width` is not positive or
    /// `mesh_points < 2`.
    pub fn new(loop_radius: f64, strip_width: f64, mesh_points: usize) -> Result<Self> {
        StripConfig::new(loop_radius, strip_width, mesh_points).map(Self::from_config)
    }

    /// Builds a strip from a validated configuration.
    #[must_use]
    pub fn from_config(config: StripConfig) -> Self {
        let surface = MobiusSurface::from_config(&config);
        let parameters = ParameterGrid::new(&config);
        let coordinates = CoordinateGrids::from_parameters(&parameters, &surface);

        debug!(
            loop_radius = config.loop_radius(),
            strip_width = config.strip_width(),
            mesh_points = config.mesh_points(),
            "built Möbius strip grids"
        );

        Self {
            config,
            surface,
            parameters,
            coordinates,
        }
    }

    /// Estimated surface area, using the default estimation parameters.
    ///
    /// The default [`GradientSpacing::Unit`](crate::operations::query::GradientSpacing::Unit)
    /// reproduces the established reference figures; use [`SurfaceArea`] with
    /// parameter spacing for an estimate of the geometric area.
    #[must_use]
    pub fn estimate_area(&self) -> f64 {
        SurfaceArea::new(self).execute()
    }

    /// Estimated boundary length: twice the length of the edge at `v = +W/2`.
    #[must_use]
    pub fn boundary_length(&self) -> f64 {
        BoundaryLength::new(self).execute()
    }

    /// Triangulates the coordinate grids for display.
    #[must_use]
    pub fn tessellate(&self) -> TriangleMesh {
        TessellateStrip::new(&self.coordinates).execute()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Returns the underlying parametric surface.
    #[must_use]
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// Returns the parameter mesh.
    #[must_use]
    pub fn parameters(&self) -> &ParameterGrid {
        &self.parameters
    }

    /// Returns the coordinate grids.
    #[must_use]
    pub fn coordinates(&self) -> &CoordinateGrids {
        &self.coordinates
    }

    /// Returns the edge curve at `v = +W/2` over one loop.
    #[must_use]
    pub fn edge(&self) -> MobiusEdge {
        MobiusEdge::outer(self.surface)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{MeshError, MobiusError};
    use crate::operations::query::{EstimationParams, GradientSpacing};
    use approx::assert_relative_eq;

    #[test]
    fn reference_run() {
        let strip = MobiusStrip::new(5.0, 1.0, 250).unwrap();
        assert_relative_eq!(strip.estimate_area(), 0.003_184_683_874_946_748, max_relative = 1e-6);
        assert_relative_eq!(strip.boundary_length(), 1.587_300_904_401_954_1, max_relative = 1e-6);
    }

    #[test]
    fn reference_run_parameter_spacing() {
        let strip = MobiusStrip::new(5.0, 1.0, 250).unwrap();
        let params = EstimationParams::with_spacing(GradientSpacing::Parameter);
        let area = SurfaceArea::new(&strip).with_params(params).execute();
        let boundary = BoundaryLength::new(&strip).with_params(params).execute();
        assert_relative_eq!(area, 31.425_714_072_916_17, max_relative = 1e-6);
        assert_relative_eq!(boundary, 62.904_069_492_341_96, max_relative = 1e-6);
    }

    #[test]
    fn queries_are_order_independent() {
        let strip = MobiusStrip::new(2.0, 0.7, 40).unwrap();
        let length_first = strip.boundary_length();
        let area = strip.estimate_area();
        let length_again = strip.boundary_length();
        assert!((length_first - length_again).abs() < f64::EPSILON);
        assert!((area - strip.estimate_area()).abs() < f64::EPSILON);
    }

    #[test]
    fn results_are_finite_and_non_negative() {
        for &(r, w, n) in &[
            (5.0, 1.0, 2),
            (0.1, 3.0, 3),
            (1.0, 0.5, 17),
            (100.0, 0.01, 50),
            (1e-3, 1e-3, 10),
        ] {
            let strip = MobiusStrip::new(r, w, n).unwrap();
            let area = strip.estimate_area();
            let length = strip.boundary_length();
            assert!(area.is_finite() && area >= 0.0, "area for ({r}, {w}, {n}) = {area}");
            assert!(length.is_finite() && length >= 0.0, "length for ({r}, {w}, {n}) = {length}");
        }
    }

    #[test]
    fn scale_invariance() {
        let base = MobiusStrip::new(5.0, 1.0, 80).unwrap();
        let k = 2.5;
        let scaled = MobiusStrip::from_config(base.config().scaled(k).unwrap());
        let params = EstimationParams::with_spacing(GradientSpacing::Parameter);
        let area = |s: &MobiusStrip| SurfaceArea::new(s).with_params(params).execute();
        assert_relative_eq!(area(&scaled), k * k * area(&base), max_relative = 1e-9);
        assert_relative_eq!(
            scaled.boundary_length(),
            k * base.boundary_length(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn unit_spacing_area_scales_with_width_weights() {
        // Index-space densities scale by k^2 and the shift-axis weights by k.
        let base = MobiusStrip::new(5.0, 1.0, 80).unwrap();
        let k = 2.5;
        let scaled = MobiusStrip::from_config(base.config().scaled(k).unwrap());
        assert_relative_eq!(
            scaled.estimate_area(),
            k * k * k * base.estimate_area(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn from_config_builds_surface_and_mesh() {
        let config = StripConfig::new(2.0, 0.6, 9).unwrap();
        let strip = MobiusStrip::from_config(config);
        assert_eq!(strip.config(), &config);
        assert_eq!(strip.surface(), &MobiusSurface::from_config(&config));
        assert_eq!(strip.parameters(), &ParameterGrid::new(&config));
        assert_relative_eq!(strip.parameters().width_shift()[8], 0.3);
        assert_eq!(strip.coordinates().shape(), (9, 9));
    }

    #[test]
    fn degenerate_mesh_rejected() {
        let r = MobiusStrip::new(5.0, 1.0, 1);
        assert!(matches!(
            r,
            Err(MobiusError::Mesh(MeshError::TooFewPoints { points: 1, min: 2 }))
        ));
    }

    #[test]
    fn invalid_dimensions_rejected() {
        assert!(MobiusStrip::new(0.0, 1.0, 10).is_err());
        assert!(MobiusStrip::new(5.0, 0.0, 10).is_err());
    }

    #[test]
    fn accessors_share_one_mesh() {
        let strip = MobiusStrip::new(5.0, 1.0, 12).unwrap();
        assert_eq!(strip.parameters().mesh_points(), 12);
        assert_eq!(strip.coordinates().shape(), (12, 12));
        assert!((strip.edge().shift() - 0.5).abs() < f64::EPSILON);
        assert!((strip.surface().loop_radius() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tessellation_covers_grid() {
        let strip = MobiusStrip::new(5.0, 1.0, 10).unwrap();
        let mesh = strip.tessellate();
        assert_eq!(mesh.vertices.len(), 100);
        assert_eq!(mesh.indices.len(), 2 * 9 * 9);
    }
}
