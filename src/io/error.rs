//! Error types and context management for painting generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Polygon constructed from too few vertices
    DegeneratePolygon {
        /// Number of vertices supplied
        vertex_count: usize,
    },

    /// Split requested with edge indices that do not describe two distinct
    /// edges in ascending order
    InvalidSplit {
        /// Index of the first intersected edge
        first_edge: usize,
        /// Index of the second intersected edge
        second_edge: usize,
        /// Number of edges of the polygon being split
        edge_count: usize,
    },

    /// Rejection sampling exhausted its attempt budget for one cut
    ///
    /// Occurs when the minimum area constraint cannot be met by any
    /// candidate line drawn within the configured number of attempts
    RejectionLimit {
        /// Index of the cut being generated (zero based)
        cut: usize,
        /// Number of candidates drawn and rejected
        attempts: usize,
    },

    /// Failed to save a rasterised painting to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegeneratePolygon { vertex_count } => {
                write!(
                    f,
                    "Polygon needs at least 3 vertices, got {vertex_count}"
                )
            }
            Self::InvalidSplit {
                first_edge,
                second_edge,
                edge_count,
            } => {
                write!(
                    f,
                    "Cannot split polygon with {edge_count} edges at edges {first_edge} and {second_edge}"
                )
            }
            Self::RejectionLimit { cut, attempts } => {
                write!(
                    f,
                    "Gave up on cut {cut} after {attempts} rejected candidates (minimum area too large?)"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a raw I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> AlgorithmError {
    let path = path.into();
    move |source| AlgorithmError::FileSystem {
        path,
        operation,
        source,
    }
}
