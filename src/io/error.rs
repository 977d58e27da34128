//! Error types and context management for rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all rendering operations
#[derive(Debug)]
pub enum RenderError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Region of interest cannot be rendered
    InvalidRegion {
        /// Description of what's wrong with the region
        reason: String,
    },

    /// Floating point computation produced NaN or infinity
    ///
    /// Indicates a programming or upstream configuration defect; the render
    /// is aborted instead of emitting corrupted pixels.
    NonFinite {
        /// Name of the computation that failed
        operation: &'static str,
        /// Canvas position being evaluated, when known
        position: Option<[f64; 2]>,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the rendered image to disk
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
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidRegion { reason } => {
                write!(f, "Invalid region: {reason}")
            }
            Self::NonFinite {
                operation,
                position: Some([x, y]),
            } => {
                write!(
                    f,
                    "Non-finite value in {operation} at canvas position ({x}, {y})"
                )
            }
            Self::NonFinite {
                operation,
                position: None,
            } => {
                write!(f, "Non-finite value in {operation}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
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
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for render results
pub type Result<T> = std::result::Result<T, RenderError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorContext {
    /// Canvas coordinates where the error occurred
    pub position: Option<[f64; 2]>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with render state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the canvas position
    ///
    /// # Errors
    ///
    /// Propagates the original error with the position applied
    fn with_position(self, x: f64, y: f64) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<RenderError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only numeric failures carry a position; innermost context wins
            match &mut error {
                RenderError::NonFinite {
                    operation,
                    position,
                } => {
                    if position.is_none() {
                        *position = context.position;
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                RenderError::Computation { operation, .. } => {
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_position(self, x: f64, y: f64) -> Result<T> {
        self.with_context(ErrorContext {
            position: Some([x, y]),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RenderError {
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
) -> RenderError {
    RenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid region error
pub fn invalid_region(reason: &impl ToString) -> RenderError {
    RenderError::InvalidRegion {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> RenderError {
    RenderError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a non-finite error without a known position
pub const fn non_finite(operation: &'static str) -> RenderError {
    RenderError::NonFinite {
        operation,
        position: None,
    }
}
