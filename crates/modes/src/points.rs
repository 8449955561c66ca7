//! Point coordinate files and the [PointSet] they describe

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers;

// podtools modules
use podtools_utils::{f, SliceExt, ValueExt};

// external crates
use log::{debug, info};

/// Column layout of a point coordinate file
///
/// Point files are plain whitespace-delimited tables with no header row. The
/// layout decides which three columns hold the x, y, and z coordinates.
///
/// ```rust
/// # use podtools_modes::PointFormat;
/// assert_eq!(PointFormat::Dat.columns(), [1, 2, 3]);
/// assert_eq!(PointFormat::Xy.columns(), [0, 1, 2]);
///
/// // Inferred from the file extension
/// assert_eq!(PointFormat::from_path("points.xy").unwrap(), PointFormat::Xy);
/// assert!(PointFormat::from_path("points.csv").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// `.dat` files, leading index column then x y z (columns 1, 2, 3)
    Dat,
    /// `.xy` files, x y z in the first three columns (columns 0, 1, 2)
    Xy,
    /// Explicit zero-based column indices for x, y, and z
    Columns([usize; 3]),
}

impl PointFormat {
    /// Infer the layout from the file extension
    ///
    /// Only `.dat` and `.xy` are recognised. Anything else is an
    /// [Error::UnsupportedPointExtension].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("dat") => Ok(PointFormat::Dat),
            Some("xy") => Ok(PointFormat::Xy),
            _ => Err(Error::UnsupportedPointExtension(path.to_path_buf())),
        }
    }

    /// Zero-based column indices for x, y, and z
    pub fn columns(&self) -> [usize; 3] {
        match self {
            PointFormat::Dat => [1, 2, 3],
            PointFormat::Xy => [0, 1, 2],
            PointFormat::Columns(columns) => *columns,
        }
    }

    /// Minimum number of columns a row needs for this layout
    fn required_columns(&self) -> usize {
        self.columns().iter().max().map_or(0, |c| c + 1)
    }

    fn validate(&self) -> Result<()> {
        let [ix, iy, iz] = self.columns();
        if ix == iy || iy == iz || ix == iz {
            return Err(Error::InvalidColumns(self.columns()));
        }
        Ok(())
    }
}

/// Ordered set of point coordinates
///
/// The order is significant. Mode data are flattened using exactly this
/// ordering, so point `k` here corresponds to entry `k` in every component
/// block of a mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    /// x coordinates
    pub x: Vec<f64>,
    /// y coordinates
    pub y: Vec<f64>,
    /// z coordinates
    pub z: Vec<f64>,
}

impl PointSet {
    /// Build a point set from three coordinate arrays
    ///
    /// Returns `None` if the arrays differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Option<Self> {
        if x.len() != y.len() || y.len() != z.len() {
            return None;
        }
        Some(Self { x, y, z })
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if there are no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinate of point `k` as `[x, y, z]`
    pub fn point(&self, k: usize) -> Option<[f64; 3]> {
        Some([*self.x.get(k)?, *self.y.get(k)?, *self.z.get(k)?])
    }

    /// Coordinates interleaved as `x0 y0 z0 x1 y1 z1 ...`
    ///
    /// This is the flat layout VTK expects for point positions.
    pub fn interleaved(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(3 * self.len());
        for ((x, y), z) in self.x.iter().zip(&self.y).zip(&self.z) {
            values.extend_from_slice(&[*x, *y, *z]);
        }
        values
    }
}

impl std::fmt::Display for PointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "PointSet {{")?;
        writeln!(f, "    points: {}", self.len())?;
        writeln!(f, "    x: {}", range_summary(&self.x))?;
        writeln!(f, "    y: {}", range_summary(&self.y))?;
        writeln!(f, "    z: {}", range_summary(&self.z))?;
        write!(f, "}}")
    }
}

/// Short `min to max` description of a set of values for summaries
pub(crate) fn range_summary(values: &[f64]) -> String {
    match values.try_range() {
        Ok((lo, hi)) => f!("{} to {}", lo.sci(5, 2), hi.sci(5, 2)),
        Err(e) => f!("{e}"),
    }
}

/// Read a point coordinate file, inferring the layout from the extension
///
/// `.dat` files use columns 1, 2, 3 and `.xy` files use columns 0, 1, 2. See
/// [read_points_with()] for any other layout.
///
/// ```rust, no_run
/// # use podtools_modes::read_points;
/// let points = read_points("./data/points.dat").unwrap();
/// println!("{points}");
/// ```
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PointSet> {
    let format = PointFormat::from_path(&path)?;
    read_points_with(path, format)
}

/// Read a point coordinate file using an explicit column layout
///
/// Blank lines are skipped. Every other line must have at least enough
/// columns for the layout, so x, y, and z always end up the same length.
/// Only the three coordinate columns have to be numbers, so an index or label
/// column in a `.dat` file is never parsed. An empty file is an error.
///
/// ```rust, no_run
/// # use podtools_modes::{read_points_with, PointFormat};
/// // Coordinates in the last three of five columns
/// let points = read_points_with("./points.txt", PointFormat::Columns([2, 3, 4])).unwrap();
/// ```
pub fn read_points_with<P: AsRef<Path>>(path: P, format: PointFormat) -> Result<PointSet> {
    let path = path.as_ref();
    format.validate()?;

    info!("Reading points from {}", path.display());
    let reader = init_reader(path)?;

    let [ix, iy, iz] = format.columns();
    let required = format.required_columns();
    let mut points = PointSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::file(path, e))?;
        if parsers::is_blank(&line) {
            continue;
        }

        let row = parsers::tokens(&line);
        if row.len() < required {
            return Err(Error::MissingColumns {
                path: path.to_path_buf(),
                line: idx + 1,
                required,
                found: row.len(),
            });
        }

        // only the coordinate columns are parsed, the rest may be labels
        let parse = |column: usize| {
            parsers::parse_f64(row[column]).map_err(|message| Error::ParseError {
                path: path.to_path_buf(),
                line: idx + 1,
                message,
            })
        };

        points.x.push(parse(ix)?);
        points.y.push(parse(iy)?);
        points.z.push(parse(iz)?);
    }

    if points.is_empty() {
        return Err(Error::EmptyPointFile(path.to_path_buf()));
    }

    debug!("Found {} points using columns {:?}", points.len(), format.columns());
    Ok(points)
}

/// Initialise a reader, keeping the path for error messages
fn init_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    Ok(BufReader::new(file))
}
