use thiserror::Error;

/// Errors reported by shape constructors.
///
/// The distance and intersection routines themselves never fail: degenerate
/// configurations are either classified by the fuzzy variants or propagate
/// non-finite values through the exact variants.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("negative radius: {radius}")]
    NegativeRadius { radius: f64 },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
