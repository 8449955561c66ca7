//! Tools for turning POD spatial modes into VTK point clouds
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod converter;
mod error;
mod modes;
mod parsers;
mod points;

pub mod vtk;

// inline the important types for a nice public API
#[doc(inline)]
pub use converter::{convert_modes, ModeConverter, VTK_DIR_NAME};

#[doc(inline)]
pub use modes::{
    mode_file_path, read_mode_file, read_modes, ModeCount, ModeField, ModeMatrix, ModeReader,
    MODE_FILE_NAME,
};

#[doc(inline)]
pub use points::{read_points, read_points_with, PointFormat, PointSet};

#[doc(inline)]
pub use vtk::{write_vtk, ModesToVtk, VtkFormat};

#[doc(inline)]
pub use error::{Error, Result};
