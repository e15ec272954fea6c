//! Error types for agrdoc operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a Grace document.
///
/// Configuration errors (`InvalidStyle`, `ShapeMismatch`, `LengthMismatch`,
/// `InvalidDomain`) are raised synchronously by the call that introduced
/// them; serialization and rasterization errors terminate the export call.
#[derive(Error, Debug)]
pub enum Error {
    /// Explicit style value outside the declared enumeration.
    #[error("invalid {category} value: {value}")]
    InvalidStyle {
        /// Style category ("color", "line style", "symbol").
        category: &'static str,
        /// The rejected value, as supplied by the caller.
        value: String,
    },

    /// Array-length inconsistency within a dataset.
    #[error("shape mismatch: {array} has {got} elements, expected {expected}")]
    ShapeMismatch {
        /// Name of the offending array.
        array: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Tick positions/labels count mismatch.
    #[error("length mismatch: {positions} tick positions but {labels} labels")]
    LengthMismatch {
        /// Number of tick positions.
        positions: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Non-positive value on a logarithmic axis.
    #[error("invalid domain for logarithmic axis: {value}")]
    InvalidDomain {
        /// The non-positive bound or coordinate.
        value: f64,
    },

    /// A panel holds no datasets and the page requires data.
    #[error("panel {panel} has no datasets")]
    EmptyPanel {
        /// Index of the empty panel.
        panel: usize,
    },

    /// I/O error while writing the serialized document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// External rasterizer failed (missing binary or non-zero exit).
    #[error("rasterizer failure: {0}")]
    Rasterizer(String),
}
