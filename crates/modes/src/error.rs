//! Result and Error types for podtools-modes

// standard library
use std::path::PathBuf;

/// Type alias for Result<T, modes::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `podtools-modes` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error on a known path
    #[error("failed input/output on {path:?}")]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by the vtkio writer
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Point layout could not be inferred from the file extension
    #[error("unsupported point file extension for {0:?} (expected .dat or .xy)")]
    UnsupportedPointExtension(PathBuf),

    /// Coordinate columns must all be different
    #[error("point columns must be three distinct indices, found {0:?}")]
    InvalidColumns([usize; 3]),

    /// Zero sized dimensions, or a shape too large to address
    #[error(
        "invalid dimensions (modes: {n_modes}, points: {n_points}, components: {components})"
    )]
    InvalidDimensions {
        n_modes: usize,
        n_points: usize,
        components: usize,
    },

    /// Coordinate that is not a number
    #[error("failed to parse {path:?} at line {line}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Row without enough columns for the point layout
    #[error("too few columns in {path:?} at line {line} (expected at least {required}, found {found})")]
    MissingColumns {
        path: PathBuf,
        line: usize,
        required: usize,
        found: usize,
    },

    /// Mode field and point set disagree on the number of points
    #[error("mode field has {field} points but the point set has {points}")]
    PointCountMismatch { points: usize, field: usize },

    /// Point file with no data rows
    #[error("no points found in {0:?}")]
    EmptyPointFile(PathBuf),

    /// Unexpected length of bytes based on file content
    #[error("byte length of {path:?} is not a whole number of f64 values (found {found} bytes)")]
    UnexpectedByteLength { path: PathBuf, found: u64 },

    /// Value count does not match the requested mode shape
    #[error(
        "unable to reshape {path:?} into ({n_modes}, {row_length}) (expected {expected} values, found {found})"
    )]
    ShapeMismatch {
        path: PathBuf,
        n_modes: usize,
        row_length: usize,
        expected: usize,
        found: usize,
    },

    /// Value count is not a whole number of modes when inferring the count
    #[error("{found} values in {path:?} is not a whole number of modes of length {row_length}")]
    IndivisibleModeFile {
        path: PathBuf,
        row_length: usize,
        found: usize,
    },
}

impl Error {
    /// Attach a path to an io error where the path is known
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileError {
            path: path.into(),
            source,
        }
    }
}
