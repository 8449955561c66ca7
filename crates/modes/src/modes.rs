//! Reading and slicing of flat binary POD mode files
//!
//! The mode file is a raw array of native-endian `f64` values with no header.
//! It is the row-major form of a `(n_modes, components * n_points)` matrix.
//! Every row is one mode, laid out as contiguous component blocks.
//!
//! ```text
//! mode 0: <x for points 0..N> <y for points 0..N> <z for points 0..N>
//! mode 1: <x for points 0..N> <y for points 0..N> <z for points 0..N>
//! ... and so on
//! ```
//!
//! Nothing in the file says how many points or modes it holds, so the number
//! of points must come from the matching point file.

// standard library
use std::fs;
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::points::range_summary;

// podtools modules
use podtools_utils::SliceExt;

// external crates
use log::{debug, info, warn};

/// Name of the mode file expected inside a mode directory
pub const MODE_FILE_NAME: &str = "mode.bin";

/// How many modes to expect in a mode file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCount {
    /// Exactly this many modes, anything else is a shape mismatch
    Exact(usize),
    /// Derive the count from the file size
    Infer,
}

/// All modes of a decomposition as a `(n_modes, components * n_points)` matrix
///
/// Values are stored exactly as read. Rows and component blocks are borrowed
/// slices of the same buffer, so nothing is copied until a field is
/// interleaved for writing.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeMatrix {
    values: Vec<f64>,
    n_modes: usize,
    n_points: usize,
    components: usize,
}

impl ModeMatrix {
    /// Wrap a flat row-major buffer
    ///
    /// Returns `None` unless `values.len() == n_modes * components * n_points`
    /// with every dimension non-zero.
    ///
    /// ```rust
    /// # use podtools_modes::ModeMatrix;
    /// // 2 modes over 2 points
    /// let values = (0..12).map(|v| v as f64).collect();
    /// let matrix = ModeMatrix::from_values(values, 2, 2, 3).unwrap();
    /// assert_eq!(matrix.row(1).unwrap(), &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
    /// ```
    pub fn from_values(
        values: Vec<f64>,
        n_modes: usize,
        n_points: usize,
        components: usize,
    ) -> Option<Self> {
        if n_modes == 0 || n_points == 0 || components == 0 {
            return None;
        }

        let expected = n_modes
            .checked_mul(components)
            .and_then(|n| n.checked_mul(n_points))?;

        if values.len() != expected {
            return None;
        }

        Some(Self {
            values,
            n_modes,
            n_points,
            components,
        })
    }

    /// Number of modes (rows)
    pub fn n_modes(&self) -> usize {
        self.n_modes
    }

    /// Number of points each mode is defined over
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of field components per point
    pub fn components(&self) -> usize {
        self.components
    }

    /// Length of a single row, `components * n_points`
    pub fn row_length(&self) -> usize {
        self.components * self.n_points
    }

    /// The full flat buffer
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Flat row for mode `i`
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.n_modes {
            return None;
        }
        let len = self.row_length();
        Some(&self.values[i * len..(i + 1) * len])
    }

    /// Field for mode `i`, split into component blocks
    pub fn field(&self, i: usize) -> Option<ModeField<'_>> {
        Some(ModeField {
            index: i,
            row: self.row(i)?,
            n_points: self.n_points,
        })
    }

    /// Iterate over every mode field in index order
    pub fn fields(&self) -> impl Iterator<Item = ModeField<'_>> {
        self.values
            .chunks_exact(self.row_length())
            .enumerate()
            .map(|(index, row)| ModeField {
                index,
                row,
                n_points: self.n_points,
            })
    }
}

impl std::fmt::Display for ModeMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "ModeMatrix {{")?;
        writeln!(f, "    modes: {}", self.n_modes)?;
        writeln!(f, "    points: {}", self.n_points)?;
        writeln!(f, "    components: {}", self.components)?;
        writeln!(
            f,
            "    shape: ({}, {})",
            self.n_modes,
            self.row_length()
        )?;
        writeln!(f, "    values: {}", range_summary(&self.values))?;
        write!(f, "}}")
    }
}

/// A single mode, viewed as per-point field components
///
/// Component `j` at point `k` is `row[j * n_points + k]`, i.e. the row is split
/// into contiguous blocks `[0, N)`, `[N, 2N)`, `[2N, 3N)` for a vector field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeField<'a> {
    index: usize,
    row: &'a [f64],
    n_points: usize,
}

impl<'a> ModeField<'a> {
    /// Zero-based mode index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of field components per point
    pub fn n_components(&self) -> usize {
        self.row.len() / self.n_points
    }

    /// The flat row this field is sliced from
    pub fn row(&self) -> &'a [f64] {
        self.row
    }

    /// Contiguous block of values for component `j`
    pub fn component(&self, j: usize) -> Option<&'a [f64]> {
        self.row.get(j * self.n_points..(j + 1) * self.n_points)
    }

    /// All component blocks in order
    pub fn components(&self) -> impl Iterator<Item = &'a [f64]> {
        self.row.chunks_exact(self.n_points)
    }

    /// The `(ux, uy, uz)` blocks of a three component vector field
    ///
    /// `None` for fields with any other number of components.
    pub fn xyz(&self) -> Option<(&'a [f64], &'a [f64], &'a [f64])> {
        if self.n_components() != 3 {
            return None;
        }
        Some((self.component(0)?, self.component(1)?, self.component(2)?))
    }

    /// Per-point tuples `c0[k] c1[k] ... c0[k+1] c1[k+1] ...`
    ///
    /// This is the flat layout VTK expects for multi-component point data.
    ///
    /// ```rust
    /// # use podtools_modes::ModeMatrix;
    /// let values = vec![1.0, 2.0, 10.0, 20.0, 100.0, 200.0];
    /// let matrix = ModeMatrix::from_values(values, 1, 2, 3).unwrap();
    /// let field = matrix.field(0).unwrap();
    /// assert_eq!(field.interleaved(), vec![1.0, 10.0, 100.0, 2.0, 20.0, 200.0]);
    /// ```
    pub fn interleaved(&self) -> Vec<f64> {
        let n_components = self.n_components();
        let mut values = Vec::with_capacity(self.row.len());
        for k in 0..self.n_points {
            values.extend((0..n_components).map(|j| self.row[j * self.n_points + k]));
        }
        values
    }
}

/// Reader for raw binary mode files
///
/// The convenience functions [read_modes()] and [read_mode_file()] cover the
/// usual three component case with a known number of modes. The reader is
/// public for anything else.
///
/// ```rust, no_run
/// # use podtools_modes::{ModeCount, ModeReader};
/// // Scalar modes, however many the file holds
/// let reader = ModeReader::new()
///     .components(1)
///     .mode_count(ModeCount::Infer);
///
/// let modes = reader.read("./modes/mode.bin", 5000).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModeReader {
    /// Number of field components per point
    pub components: usize,
    /// How many modes the file is expected to contain
    pub mode_count: ModeCount,
}

impl ModeReader {
    /// Three component fields, mode count inferred from the file
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of field components per point
    pub fn components(mut self, components: usize) -> Self {
        self.components = components;
        self
    }

    /// Set the expected number of modes
    pub fn mode_count(mut self, count: ModeCount) -> Self {
        self.mode_count = count;
        self
    }

    /// Read and reshape the mode file at `path` for `n_points` points
    ///
    /// The file size is checked against the expected shape before any data
    /// are read, so a mismatched file fails without loading it.
    pub fn read<P: AsRef<Path>>(&self, path: P, n_points: usize) -> Result<ModeMatrix> {
        let path = path.as_ref();
        let row_length = match self.components.checked_mul(n_points) {
            Some(row_length) if row_length > 0 => row_length,
            _ => return Err(self.invalid_dimensions(n_points)),
        };

        if self.mode_count == ModeCount::Exact(0) {
            return Err(self.invalid_dimensions(n_points));
        }

        info!("Reading modes from {}", path.display());
        let found = value_count(path)?;
        let n_modes = self.check_shape(path, n_points, row_length, found)?;
        debug!("Reshaping {found} values into ({n_modes}, {row_length})");

        let values = read_f64_values(path)?;

        // the file may have changed since the size check
        let found = values.len();
        let matrix = ModeMatrix::from_values(values, n_modes, n_points, self.components)
            .ok_or_else(|| Error::ShapeMismatch {
                path: path.to_path_buf(),
                n_modes,
                row_length,
                expected: n_modes * row_length,
                found,
            })?;

        let non_finite = matrix.values().count_non_finite();
        if non_finite > 0 {
            warn!(
                "Warning: {non_finite} NaN or infinite values found in {}",
                path.display()
            );
        }

        Ok(matrix)
    }

    /// Resolve the number of modes, or fail with the expected vs actual size
    fn check_shape(
        &self,
        path: &Path,
        n_points: usize,
        row_length: usize,
        found: usize,
    ) -> Result<usize> {
        match self.mode_count {
            ModeCount::Exact(n_modes) => {
                // no file can hold more values than fit in a usize
                let expected = n_modes
                    .checked_mul(row_length)
                    .ok_or_else(|| self.invalid_dimensions(n_points))?;

                if found != expected {
                    return Err(Error::ShapeMismatch {
                        path: path.to_path_buf(),
                        n_modes,
                        row_length,
                        expected,
                        found,
                    });
                }
                Ok(n_modes)
            }
            ModeCount::Infer => {
                if found == 0 || found % row_length != 0 {
                    return Err(Error::IndivisibleModeFile {
                        path: path.to_path_buf(),
                        row_length,
                        found,
                    });
                }
                Ok(found / row_length)
            }
        }
    }

    fn invalid_dimensions(&self, n_points: usize) -> Error {
        Error::InvalidDimensions {
            n_modes: match self.mode_count {
                ModeCount::Exact(n) => n,
                ModeCount::Infer => 0,
            },
            n_points,
            components: self.components,
        }
    }
}

impl Default for ModeReader {
    fn default() -> Self {
        Self {
            components: 3,
            mode_count: ModeCount::Infer,
        }
    }
}

/// Read `<dir>/mode.bin` as `n_modes` three component modes over `n_points`
///
/// ```rust, no_run
/// # use podtools_modes::{read_modes, read_points};
/// let points = read_points("./points.xy").unwrap();
/// let modes = read_modes("./modes", 10, points.len()).unwrap();
/// println!("{modes}");
/// ```
pub fn read_modes<P: AsRef<Path>>(dir: P, n_modes: usize, n_points: usize) -> Result<ModeMatrix> {
    read_mode_file(mode_file_path(dir), n_modes, n_points)
}

/// Read an explicit mode file as `n_modes` three component modes
pub fn read_mode_file<P: AsRef<Path>>(
    path: P,
    n_modes: usize,
    n_points: usize,
) -> Result<ModeMatrix> {
    ModeReader::new()
        .mode_count(ModeCount::Exact(n_modes))
        .read(path, n_points)
}

/// Path of the mode file inside a mode directory
pub fn mode_file_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    dir.as_ref().join(MODE_FILE_NAME)
}

/// Number of whole f64 values in a file, from its metadata
fn value_count(path: &Path) -> Result<usize> {
    let bytes = fs::metadata(path).map_err(|e| Error::file(path, e))?.len();
    let size = std::mem::size_of::<f64>() as u64;

    if bytes % size != 0 {
        return Err(Error::UnexpectedByteLength {
            path: path.to_path_buf(),
            found: bytes,
        });
    }

    Ok((bytes / size) as usize)
}

/// Read a whole file as native-endian f64 values
fn read_f64_values(path: &Path) -> Result<Vec<f64>> {
    let bytes = fs::read(path).map_err(|e| Error::file(path, e))?;
    let size = std::mem::size_of::<f64>();

    if bytes.len() % size != 0 {
        return Err(Error::UnexpectedByteLength {
            path: path.to_path_buf(),
            found: bytes.len() as u64,
        });
    }

    let mut buffer = [0u8; std::mem::size_of::<f64>()];
    Ok(bytes
        .chunks_exact(size)
        .map(|chunk| {
            buffer.copy_from_slice(chunk);
            f64::from_ne_bytes(buffer)
        })
        .collect())
}
