//! Error types and context management for level generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for generation, parsing and stitching
#[derive(Debug)]
pub enum LevelError {
    /// Section dimensions rejected before any allocation
    InvalidDimensions {
        /// Requested section width
        width: usize,
        /// Requested section height
        height: usize,
        /// Why the dimensions are unusable
        reason: String,
    },

    /// Blueprint text does not describe a rectangular grid of digits
    MalformedBlueprint {
        /// Zero-based line where the problem was found
        line: usize,
        /// Description of the defect
        reason: String,
    },

    /// Byte value outside the known tile enumeration
    ///
    /// Reaching the stitcher with such a value means generation or parsing
    /// produced corrupt data.
    UnknownTileCode {
        /// The offending code
        code: u8,
        /// Grid column of the cell
        column: usize,
        /// Grid row of the cell
        row: usize,
    },

    /// Caller supplied an unusable argument
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a level preview to disk
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

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid section dimensions {width}x{height}: {reason}")
            }
            Self::MalformedBlueprint { line, reason } => {
                write!(f, "Malformed blueprint at line {line}: {reason}")
            }
            Self::UnknownTileCode { code, column, row } => {
                write!(
                    f,
                    "Unknown tile code {code} at column {column}, row {row}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for level results
pub type Result<T> = std::result::Result<T, LevelError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Grid position (column, row) where the error occurred
    pub grid_position: Option<[usize; 2]>,
}

/// Enriches error messages with positional information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<LevelError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only tile code errors carry a grid position
            if let LevelError::UnknownTileCode { column, row, .. } = &mut error {
                if let Some([c, r]) = context.grid_position {
                    *column = c;
                    *row = r;
                }
            }
            error
        })
    }
}

impl From<image::ImageError> for LevelError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(width: usize, height: usize, reason: &impl ToString) -> LevelError {
    LevelError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create a malformed blueprint error
pub fn malformed_blueprint(line: usize, reason: &impl ToString) -> LevelError {
    LevelError::MalformedBlueprint {
        line,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LevelError {
    LevelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
