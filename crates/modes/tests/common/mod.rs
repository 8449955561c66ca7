//! Helpers for building synthetic decompositions on disk

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use vtkio::model::{Attribute, DataArray, DataSet, Vtk};

/// Coordinates for `n` points that are easy to tell apart
pub fn coordinates(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|k| {
            let k = k as f64;
            [k, 100.0 + 0.5 * k, -0.25 * k]
        })
        .collect()
}

/// Write a `.dat` style file, `index x y z`
pub fn write_dat(path: &Path, points: &[[f64; 3]]) {
    let text = points
        .iter()
        .enumerate()
        .map(|(i, [x, y, z])| format!("{i} {x} {y} {z}\n"))
        .collect::<String>();
    fs::write(path, text).unwrap();
}

/// Write a `.xy` style file, `x y z`
pub fn write_xy(path: &Path, points: &[[f64; 3]]) {
    let text = points
        .iter()
        .map(|[x, y, z]| format!("{x}\t{y}\t{z}\n"))
        .collect::<String>();
    fs::write(path, text).unwrap();
}

/// Known values for mode `i`, component `j`, point `k` of a decomposition
pub fn mode_value(i: usize, j: usize, k: usize) -> f64 {
    1000.0 * i as f64 + 10.0 * j as f64 + 0.125 * k as f64 - 7.5
}

/// Flat row-major `(n_modes, 3 * n_points)` buffer of [mode_value]s
pub fn mode_values(n_modes: usize, n_points: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(n_modes * 3 * n_points);
    for i in 0..n_modes {
        for j in 0..3 {
            for k in 0..n_points {
                values.push(mode_value(i, j, k));
            }
        }
    }
    values
}

/// Write raw native-endian f64 values
pub fn write_mode_bin(dir: &Path, values: &[f64]) -> PathBuf {
    let path = dir.join("mode.bin");
    let bytes = values
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect::<Vec<u8>>();
    fs::write(&path, bytes).unwrap();
    path
}

/// Sorted file names in a directory
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect::<Vec<String>>();
    names.sort();
    names
}

/// Point positions and named point data arrays of a written file
pub struct PointCloud {
    pub points: Vec<f64>,
    pub arrays: Vec<(String, Vec<f64>)>,
}

/// Import a vtk file written by the converter
pub fn read_point_cloud(path: &Path) -> PointCloud {
    let vtk = Vtk::import(path).unwrap();

    let source = vtk.file_path.clone();
    let piece = match vtk.data {
        DataSet::UnstructuredGrid { mut pieces, .. } => pieces
            .remove(0)
            .load_piece_data(source.as_deref())
            .unwrap(),
        _ => panic!("expected an unstructured grid in {path:?}"),
    };

    let arrays = piece
        .data
        .point
        .into_iter()
        .map(|attribute| match attribute {
            Attribute::DataArray(DataArray { name, data, .. }) => {
                (name, data.cast_into::<f64>().unwrap())
            }
            _ => panic!("expected a data array in {path:?}"),
        })
        .collect();

    PointCloud {
        points: piece.points.cast_into::<f64>().unwrap(),
        arrays,
    }
}
