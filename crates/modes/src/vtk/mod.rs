//! Convert POD modes to VTK point clouds for plotting
//!
//! Every mode becomes an unstructured grid of `Vertex` cells, one per point,
//! carrying a single point data array with the mode field. This is readable
//! by ParaView, VisIt, and anything else built on the VTK readers.
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use podtools_modes::{read_modes, read_points};
//! # use podtools_modes::vtk::{write_vtk, ModesToVtk, VtkFormat};
//! let points = read_points("./points.dat").unwrap();
//! let modes = read_modes("./modes", 4, points.len()).unwrap();
//!
//! // Default configuration, field named "mode"
//! let converter = ModesToVtk::new();
//!
//! for field in modes.fields() {
//!     let vtk = converter.convert(&points, &field).unwrap();
//!     write_vtk(vtk, format!("./mode_{}", field.index()), VtkFormat::Xml).unwrap();
//! }
//! ```
//!
//! The conversion only builds the `vtkio` model. Writing is separate so the
//! same [Vtk] can be written in any [VtkFormat].

mod builder;
mod convert;

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::Result;

// external crates
use log::trace;
use vtkio::model::Vtk;

#[doc(inline)]
pub use builder::ModesToVtkBuilder;

#[doc(inline)]
pub use convert::ModesToVtk;

/// Output file formats supported by [write_vtk()]
///
/// The XML unstructured grid format is the modern default. The legacy formats
/// are kept for older tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VtkFormat {
    /// XML unstructured grid (`.vtu`)
    #[default]
    Xml,
    /// Legacy ASCII text (`.vtk`)
    LegacyAscii,
    /// Legacy binary (`.vtk`), using the byte order set on the [Vtk]
    LegacyBinary,
}

impl VtkFormat {
    /// File extension conventionally used for the format
    pub fn extension(&self) -> &'static str {
        match self {
            VtkFormat::Xml => "vtu",
            VtkFormat::LegacyAscii | VtkFormat::LegacyBinary => "vtk",
        }
    }
}

/// Write a [Vtk] to disk in the requested format
///
/// The extension of `path` is replaced by the one expected for `format`, so
/// `mode_0` becomes `mode_0.vtu` for [VtkFormat::Xml]. The final path is
/// returned. Existing files are overwritten.
///
/// ```rust, no_run
/// # use podtools_modes::vtk::{write_vtk, VtkFormat};
/// # use vtkio::model::Vtk;
/// # let vtk: Vtk = todo!();
/// let path = write_vtk(vtk, "./VTK/mode_0", VtkFormat::LegacyAscii).unwrap();
/// assert_eq!(path.to_str(), Some("./VTK/mode_0.vtk"));
/// ```
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<PathBuf> {
    let path = path.as_ref().with_extension(format.extension());
    trace!("Writing {:?} to {}", format, path.display());

    match format {
        VtkFormat::Xml | VtkFormat::LegacyBinary => vtk.export(&path)?,
        VtkFormat::LegacyAscii => vtk.export_ascii(&path)?,
    }

    Ok(path)
}
