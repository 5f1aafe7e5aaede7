use thiserror::Error;

/// Top-level error type for the curvemark plotting core.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while evaluating user-supplied curves or functions.
///
/// These propagate unchanged to the caller; the core never retries an
/// evaluation (the supplied functions are assumed pure).
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("function evaluation failed at {at}: {reason}")]
    Failed { at: f64, reason: String },

    #[error("function returned a non-finite value at {at}")]
    NonFinite { at: f64 },
}

/// Errors related to rendering-surface interaction.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("drawable not found: {0}")]
    DrawableNotFound(&'static str),
}

/// Convenience type alias for results using [`PlotError`].
pub type Result<T> = std::result::Result<T, PlotError>;
