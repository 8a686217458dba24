pub mod curve;
pub mod surface;

pub use curve::MobiusEdge;
pub use surface::MobiusSurface;

use crate::error::{GeometryError, Result};

/// Rejects dimensions that are zero, negative, or not finite.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(GeometryError::ParameterOutOfRange {
        parameter,
        value,
        min: 0.0,
        max: f64::INFINITY,
    }
    .into())
}
