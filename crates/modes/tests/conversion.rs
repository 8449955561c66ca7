//! Integration tests for whole-directory conversion

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use podtools_modes::{convert_modes, Error, ModeConverter, ModeCount, ModesToVtk, VtkFormat};
use rstest::{fixture, rstest};
use tempfile::{tempdir, TempDir};

const N_POINTS: usize = 5;

/// Point file and mode directory for a synthetic decomposition
struct Decomposition {
    _root: TempDir,
    point_file: PathBuf,
    mode_dir: PathBuf,
}

impl Decomposition {
    fn new(extension: &str, n_modes: usize) -> Self {
        let root = tempdir().unwrap();
        let mode_dir = root.path().join("modes");
        fs::create_dir(&mode_dir).unwrap();

        let point_file = root.path().join(format!("points.{extension}"));
        let coordinates = common::coordinates(N_POINTS);
        match extension {
            "dat" => common::write_dat(&point_file, &coordinates),
            _ => common::write_xy(&point_file, &coordinates),
        }

        common::write_mode_bin(&mode_dir, &common::mode_values(n_modes, N_POINTS));

        Self {
            _root: root,
            point_file,
            mode_dir,
        }
    }

    fn vtk_dir(&self) -> PathBuf {
        self.mode_dir.join("VTK")
    }
}

#[fixture]
fn three_modes() -> Decomposition {
    Decomposition::new("dat", 3)
}

/// Every value of every written file matches the synthetic inputs exactly
fn check_written_values(paths: &[PathBuf]) {
    let expected_points = common::coordinates(N_POINTS)
        .into_iter()
        .flatten()
        .collect::<Vec<f64>>();

    for (i, path) in paths.iter().enumerate() {
        let cloud = common::read_point_cloud(path);
        assert_eq!(cloud.points, expected_points);
        assert_eq!(cloud.arrays.len(), 1);

        let (name, data) = &cloud.arrays[0];
        assert_eq!(name, "mode");
        assert_eq!(data.len(), 3 * N_POINTS);

        // component j of point k is mode[i, j*N + k]
        for k in 0..N_POINTS {
            for j in 0..3 {
                assert_eq!(data[3 * k + j], common::mode_value(i, j, k));
            }
        }
    }
}

#[rstest]
#[case("dat")]
#[case("xy")]
fn one_file_per_mode(#[case] extension: &str) {
    let decomposition = Decomposition::new(extension, 3);

    let written = convert_modes(&decomposition.point_file, &decomposition.mode_dir, 3).unwrap();

    assert_eq!(
        common::file_names(&decomposition.vtk_dir()),
        vec!["mode_0.vtu", "mode_1.vtu", "mode_2.vtu"]
    );

    let expected = (0..3)
        .map(|i| decomposition.vtk_dir().join(format!("mode_{i}.vtu")))
        .collect::<Vec<PathBuf>>();
    assert_eq!(written, expected);
}

#[rstest]
fn values_round_trip(three_modes: Decomposition) {
    let written = convert_modes(&three_modes.point_file, &three_modes.mode_dir, 3).unwrap();
    check_written_values(&written);
}

#[rstest]
#[case(VtkFormat::Xml, "vtu")]
#[case(VtkFormat::LegacyAscii, "vtk")]
#[case(VtkFormat::LegacyBinary, "vtk")]
fn every_format_round_trips(
    three_modes: Decomposition,
    #[case] format: VtkFormat,
    #[case] extension: &str,
) {
    let written = ModeConverter::new(ModeCount::Exact(3))
        .format(format)
        .run(&three_modes.point_file, &three_modes.mode_dir)
        .unwrap();

    for path in &written {
        assert_eq!(path.extension().unwrap(), extension);
    }
    check_written_values(&written);
}

#[rstest]
fn shape_mismatch_writes_nothing(three_modes: Decomposition) {
    // one value too many for 3 modes of 5 points
    let mut values = common::mode_values(3, N_POINTS);
    values.push(1.0);
    common::write_mode_bin(&three_modes.mode_dir, &values);

    let result = convert_modes(&three_modes.point_file, &three_modes.mode_dir, 3);
    match result {
        Err(Error::ShapeMismatch {
            expected, found, ..
        }) => {
            assert_eq!(expected, 45);
            assert_eq!(found, 46);
        }
        other => panic!("expected a shape mismatch, found {other:?}"),
    }

    assert!(!three_modes.vtk_dir().exists());
}

#[rstest]
fn wrong_mode_count_writes_nothing(three_modes: Decomposition) {
    let result = convert_modes(&three_modes.point_file, &three_modes.mode_dir, 4);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    assert!(!three_modes.vtk_dir().exists());
}

#[rstest]
fn running_twice_overwrites(three_modes: Decomposition) {
    let first = convert_modes(&three_modes.point_file, &three_modes.mode_dir, 3).unwrap();
    let second = convert_modes(&three_modes.point_file, &three_modes.mode_dir, 3).unwrap();

    assert_eq!(first, second);
    assert_eq!(common::file_names(&three_modes.vtk_dir()).len(), 3);
    check_written_values(&second);
}

#[rstest]
fn existing_output_dir_is_reused(three_modes: Decomposition) {
    fs::create_dir_all(three_modes.vtk_dir()).unwrap();
    fs::write(three_modes.vtk_dir().join("mode_1.vtu"), "stale").unwrap();

    convert_modes(&three_modes.point_file, &three_modes.mode_dir, 3).unwrap();

    let written = (0..3)
        .map(|i| three_modes.vtk_dir().join(format!("mode_{i}.vtu")))
        .collect::<Vec<PathBuf>>();
    check_written_values(&written);
}

#[rstest]
fn nested_output_dir_is_created(three_modes: Decomposition) {
    let output = three_modes.mode_dir.join("deeply").join("nested");

    let written = ModeConverter::new(ModeCount::Infer)
        .output_dir(&output)
        .vtk(ModesToVtk::builder().field_name("mode").build())
        .run(&three_modes.point_file, &three_modes.mode_dir)
        .unwrap();

    assert_eq!(written.len(), 3);
    assert!(written.iter().all(|path| path.parent() == Some(output.as_path())));
    check_written_values(&written);
}

#[rstest]
fn custom_field_name(three_modes: Decomposition) {
    let written = ModeConverter::new(ModeCount::Exact(3))
        .vtk(ModesToVtk::builder().field_name("velocity").build())
        .run(&three_modes.point_file, &three_modes.mode_dir)
        .unwrap();

    let cloud = common::read_point_cloud(&written[0]);
    assert_eq!(cloud.arrays[0].0, "velocity");
}

#[rstest]
fn unsupported_point_file(three_modes: Decomposition) {
    let renamed = three_modes.point_file.with_extension("csv");
    fs::rename(&three_modes.point_file, &renamed).unwrap();

    let result = convert_modes(&renamed, &three_modes.mode_dir, 3);
    assert!(matches!(result, Err(Error::UnsupportedPointExtension(p)) if p == renamed));
    assert!(!three_modes.vtk_dir().exists());
}

#[rstest]
fn missing_mode_dir() {
    let decomposition = Decomposition::new("xy", 2);
    let missing = decomposition.mode_dir.join("nope");

    let result = convert_modes(&decomposition.point_file, &missing, 2);
    assert!(matches!(result, Err(Error::FileError { ref path, .. }) if path == &missing.join("mode.bin")));
    assert!(!Path::new(&missing).exists());
}
