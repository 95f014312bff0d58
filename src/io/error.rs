//! Error types for mosaic assignment and its surrounding I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Image decoded but contains no pixels
    EmptyImage {
        /// Path to the image file
        path: PathBuf,
    },

    /// Reference image width and height differ
    ReferenceNotSquare {
        /// Path to the reference image
        path: PathBuf,
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// Too few tiles to fill every cell without duplicates
    PoolExhausted {
        /// Number of cells that must be filled
        required: usize,
        /// Number of tiles supplied
        available: usize,
    },

    /// No tiles were supplied at all
    EmptyPool,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptyImage { path } => {
                write!(f, "Image '{}' contains no pixels", path.display())
            }
            Self::ReferenceNotSquare {
                path,
                width,
                height,
            } => {
                write!(
                    f,
                    "Reference image '{}' not square ({width}x{height})",
                    path.display()
                )
            }
            Self::PoolExhausted {
                required,
                available,
            } => {
                write!(
                    f,
                    "Tile pool exhausted: {required} cells need distinct tiles but only {available} available"
                )
            }
            Self::EmptyPool => write!(f, "Tile pool is empty"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
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
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
