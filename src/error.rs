use thiserror::Error;

/// Top-level error type for the Möbius strip model.
#[derive(Debug, Error)]
pub enum MobiusError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to geometric configuration.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the sampling mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("degenerate mesh: {points} points per axis, at least {min} required")]
    TooFewPoints { points: usize, min: usize },
}

/// Convenience type alias for results using [`MobiusError`].
pub type Result<T> = std::result::Result<T, MobiusError>;
