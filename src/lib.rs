//! Discretized model of a Möbius strip.
//!
//! A [`MobiusStrip`] samples the parameter rectangle `[0, 2*pi] x [-W/2, W/2]`
//! on an `N x N` mesh, maps it through the Möbius parametrization, and
//! estimates the surface area and boundary length from the sampled grids with
//! finite-difference gradients and trapezoidal integration.
//!
//! The default estimates differentiate in sample-index space
//! ([`GradientSpacing::Unit`]) and reproduce the established reference
//! figures:
//!
//! ```
//! let strip = mobius::MobiusStrip::new(5.0, 1.0, 250)?;
//! let area = strip.estimate_area();
//! let boundary = strip.boundary_length();
//! assert!((area - 0.003_184_68).abs() < 1e-7);
//! assert!((boundary - 1.587_30).abs() < 1e-4);
//! # Ok::<(), mobius::MobiusError>(())
//! ```
//!
//! [`GradientSpacing::Parameter`] divides by the parameter steps instead,
//! giving estimates of the geometric area and edge length:
//!
//! ```
//! use mobius::operations::query::{BoundaryLength, SurfaceArea};
//! use mobius::{EstimationParams, GradientSpacing, MobiusStrip};
//!
//! let strip = MobiusStrip::new(5.0, 1.0, 250)?;
//! let params = EstimationParams::with_spacing(GradientSpacing::Parameter);
//! let area = SurfaceArea::new(&strip).with_params(params).execute();
//! let boundary = BoundaryLength::new(&strip).with_params(params).execute();
//! assert!((area - 31.4257).abs() < 1e-3);
//! assert!((boundary - 62.9041).abs() < 1e-3);
//! # Ok::<(), mobius::MobiusError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod plot;
pub mod strip;
pub mod tessellation;

pub use error::{MobiusError, Result};
pub use operations::query::{BoundaryMode, EstimationParams, GradientSpacing};
pub use strip::{MobiusStrip, StripConfig};
