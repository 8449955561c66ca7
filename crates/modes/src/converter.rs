//! Whole-directory conversion of a mode file to per-mode VTK files

// standard library
use std::fs;
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::modes::{mode_file_path, ModeCount, ModeReader};
use crate::points::{read_points_with, PointFormat};
use crate::vtk::{write_vtk, ModesToVtk, VtkFormat};

// podtools modules
use podtools_utils::f;

// external crates
use log::{debug, info};

/// Name of the output directory created inside the mode directory
pub const VTK_DIR_NAME: &str = "VTK";

/// Convert `<mode_dir>/mode.bin` into one VTK file per mode
///
/// Points are read from `point_file` using the layout implied by its
/// extension. Output goes to `<mode_dir>/VTK/mode_<i>.vtu` for every mode
/// index `i` in `0..n_modes`. The written paths are returned in index order.
///
/// Nothing is written unless both inputs load cleanly, so a mode file of the
/// wrong size leaves the mode directory untouched.
///
/// ```rust, no_run
/// # use podtools_modes::convert_modes;
/// let written = convert_modes("./points.dat", "./modes", 10).unwrap();
/// assert_eq!(written.len(), 10);
/// ```
pub fn convert_modes<P, Q>(point_file: P, mode_dir: Q, n_modes: usize) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    ModeConverter::new(ModeCount::Exact(n_modes)).run(point_file, mode_dir)
}

/// Configurable conversion of a mode directory
///
/// Defaults match [convert_modes()], with the mode count left to the caller.
///
/// ```rust, no_run
/// # use podtools_modes::{ModeConverter, ModeCount, PointFormat};
/// # use podtools_modes::vtk::{ModesToVtk, VtkFormat};
/// let converter = ModeConverter::new(ModeCount::Infer)
///     .point_format(PointFormat::Columns([0, 2, 1]))
///     .output_dir("./paraview")
///     .format(VtkFormat::LegacyBinary)
///     .vtk(ModesToVtk::builder().field_name("u").build());
///
/// let written = converter.run("./points.txt", "./modes").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModeConverter {
    /// Column layout of the point file, inferred from the extension if unset
    pub point_format: Option<PointFormat>,
    /// Number of field components per point
    pub components: usize,
    /// Number of modes expected in the mode file
    pub mode_count: ModeCount,
    /// Output directory, `<mode_dir>/VTK` if unset
    pub output_dir: Option<PathBuf>,
    /// Output file format
    pub format: VtkFormat,
    /// Vtk conversion settings
    pub vtk: ModesToVtk,
}

impl ModeConverter {
    /// Three component modes written as XML to `<mode_dir>/VTK`
    pub fn new(mode_count: ModeCount) -> Self {
        Self {
            point_format: None,
            components: 3,
            mode_count,
            output_dir: None,
            format: VtkFormat::default(),
            vtk: ModesToVtk::default(),
        }
    }

    /// Use an explicit point file layout
    pub fn point_format(mut self, format: PointFormat) -> Self {
        self.point_format = Some(format);
        self
    }

    /// Set the number of field components per point
    pub fn components(mut self, components: usize) -> Self {
        self.components = components;
        self
    }

    /// Write into `dir` instead of `<mode_dir>/VTK`
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the output file format
    pub fn format(mut self, format: VtkFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the vtk conversion settings
    pub fn vtk(mut self, vtk: ModesToVtk) -> Self {
        self.vtk = vtk;
        self
    }

    /// Directory files will be written to for a given mode directory
    pub fn output_dir_for(&self, mode_dir: impl AsRef<Path>) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => mode_dir.as_ref().join(VTK_DIR_NAME),
        }
    }

    /// Load the inputs and write every mode in index order
    ///
    /// Any failure aborts the run. Files already written by then are left in
    /// place.
    pub fn run<P, Q>(&self, point_file: P, mode_dir: Q) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let point_file = point_file.as_ref();
        let mode_dir = mode_dir.as_ref();

        // load everything before touching the output directory
        let format = match self.point_format {
            Some(format) => format,
            None => PointFormat::from_path(point_file)?,
        };
        let points = read_points_with(point_file, format)?;

        let modes = ModeReader::new()
            .components(self.components)
            .mode_count(self.mode_count)
            .read(mode_file_path(mode_dir), points.len())?;
        debug!("{modes}");

        let output_dir = self.output_dir_for(mode_dir);
        fs::create_dir_all(&output_dir).map_err(|e| Error::file(&output_dir, e))?;

        info!(
            "Writing {} modes to {}",
            modes.n_modes(),
            output_dir.display()
        );

        let mut written = Vec::with_capacity(modes.n_modes());
        for field in modes.fields() {
            let vtk = self.vtk.convert(&points, &field)?;
            let stem = output_dir.join(f!("mode_{}", field.index()));
            written.push(write_vtk(vtk, stem, self.format)?);
        }

        info!("Finished writing {} files", written.len());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_dir() {
        let converter = ModeConverter::new(ModeCount::Exact(3));
        assert_eq!(
            converter.output_dir_for("run/modes"),
            Path::new("run/modes").join("VTK")
        );
    }

    #[test]
    fn explicit_output_dir() {
        let converter = ModeConverter::new(ModeCount::Infer).output_dir("elsewhere");
        assert_eq!(converter.output_dir_for("run/modes"), PathBuf::from("elsewhere"));
    }

    #[test]
    fn setters() {
        let converter = ModeConverter::new(ModeCount::Infer)
            .components(1)
            .point_format(PointFormat::Xy)
            .format(VtkFormat::LegacyAscii);
        assert_eq!(converter.components, 1);
        assert_eq!(converter.point_format, Some(PointFormat::Xy));
        assert_eq!(converter.format, VtkFormat::LegacyAscii);
        assert_eq!(converter.vtk, ModesToVtk::default());
    }

    #[test]
    fn unsupported_extension_fails_early() {
        let converter = ModeConverter::new(ModeCount::Exact(1));
        assert!(matches!(
            converter.run("points.csv", "does/not/exist"),
            Err(Error::UnsupportedPointExtension(_))
        ));
    }
}
