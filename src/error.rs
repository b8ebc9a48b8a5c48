use thiserror::Error;

/// Errors raised by the checked geometry APIs.
///
/// The core arithmetic and intersection routines never fail; they return
/// documented sentinel values instead. Only the checked accessors and
/// constructors report errors through this type.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("component index {index} is out of range for a {len}-component value")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
