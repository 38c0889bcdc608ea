use std::fs;
use std::io::Cursor;
use std::path::Path;

use approx::assert_relative_eq;
use pixel_resolution::{
    flying_height_for_resolution, ground_sample_distance, plan, CalculationMode, CameraParams,
    FlightParams, Lens, ResolutionError, SensorSize, Session,
};
use rand::Rng;

// Helper function to run a scripted console session in `dir`
fn run_session(script: &str, dir: &Path) -> (Result<std::path::PathBuf, ResolutionError>, String) {
    let mut output = Vec::new();
    let result = Session::new(Cursor::new(script.as_bytes().to_vec()), &mut output).run(dir);
    (result, String::from_utf8(output).unwrap())
}

fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().map(|row| row.unwrap()).collect()
}

fn create_test_camera() -> CameraParams {
    CameraParams::new(
        "Test Camera".to_string(),
        "meters".to_string(),
        6000,
        4000,
        Lens::Focal {
            sensor: SensorSize::new(24.0, 16.0).unwrap(),
            focal_length_mm: 35.0,
        },
    )
}

#[test]
fn test_forward_session_writes_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let script = "Test Camera\nmeters\n1\n6000\n4000\n1\n24\n16\n35\n100\n";

    let (result, text) = run_session(script, dir.path());
    let path = result.unwrap();

    assert!(text.contains("Pixel Resolution Calculator"));
    assert!(text.contains("Pixel Resolution: 0.0114 meters/px"));
    assert!(text.contains("Saved to"));

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), 14);
    assert_eq!(&row[0], "Test Camera");
    assert_eq!(&row[2], "forward");
    assert_eq!(&row[6], "6000");
    assert_eq!(&row[10], "100.0");
    let resolution: f64 = row[11].parse().unwrap();
    assert_relative_eq!(resolution, 0.011428571428571429, epsilon = 1e-12);
}

#[test]
fn test_backward_session_reference_height() {
    let dir = tempfile::tempdir().unwrap();
    let script = "Test Camera\nmeters\n2\n6000\n4000\n1\n24\n16\n35\n0.01\n";

    let (result, _) = run_session(script, dir.path());
    let path = result.unwrap();
    assert_eq!(path.file_name().unwrap(), "AGL_Resolution.csv");

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 1);
    let height: f64 = rows[0][10].parse().unwrap();
    assert_relative_eq!(height, 87.5, epsilon = 1e-9);
    assert_eq!(&rows[0][11], "0.01");
}

#[test]
fn test_session_recovers_from_bad_answers() {
    let dir = tempfile::tempdir().unwrap();
    // Bad option, zero pixels, non-numeric focal length and a negative height in the list
    let script = "Cam\nft\n7\n1\n0\n6000\n4000\n1\n24\n16\nwide\n-35\n35\n100,-50\n50, 100\n";

    let (result, text) = run_session(script, dir.path());
    let path = result.unwrap();

    assert!(text.contains("option must be 1 or 2, got '7'"));
    assert!(text.contains("X pixels must be greater than zero"));
    assert!(text.contains("focal length needs to be a number, got 'wide'"));
    assert!(text.contains("focal length must be a positive number, got -35"));
    assert!(text.contains("AGL value must be a positive number, got -50"));

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][10], "50.0");
    assert_eq!(&rows[1][10], "100.0");
}

#[test]
fn test_wide_angle_lens_warns_but_saves() {
    let dir = tempfile::tempdir().unwrap();
    let script = "Action Cam\nmeters\n1\n4000\n3000\n2\n94.4\n55\n30\n";

    let (result, text) = run_session(script, dir.path());
    let path = result.unwrap();

    assert!(text.contains("WARNING: horizontal field of view is 94.4°"));
    assert_eq!(read_rows(&path).len(), 1);
}

#[test]
fn test_end_of_input_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _) = run_session("Cam\nmeters\n1\n6000\n4000\n1\n24\n", dir.path());

    match result {
        Err(ResolutionError::InputError(message)) => assert!(message.contains("input ended")),
        other => panic!("expected input error, got {:?}", other),
    }
}

#[test]
fn test_unwritable_directory_is_file_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("nested");
    let script = "Cam\nmeters\n1\n6000\n4000\n1\n24\n16\n35\n100\n";

    let (result, _) = run_session(script, &missing);
    assert!(matches!(result, Err(ResolutionError::FileWriteError(_))));
}

#[test]
fn test_plan_round_trip_through_both_modes() {
    let camera = create_test_camera();
    let mut rng = rand::thread_rng();
    let heights: Vec<f64> = (0..20).map(|_| rng.gen_range(10.0..3000.0)).collect();

    let forward = plan(&camera, &FlightParams::FlyingHeights(heights.clone())).unwrap();
    let resolutions: Vec<f64> = forward.records.iter().map(|r| r.resolution).collect();
    let backward = plan(&camera, &FlightParams::TargetResolutions(resolutions)).unwrap();

    assert_eq!(backward.mode, CalculationMode::Backward);
    for (fwd, bwd) in forward.records.iter().zip(&backward.records) {
        assert_relative_eq!(fwd.flying_height, bwd.flying_height, max_relative = 1e-12);
    }
}

#[test]
fn test_pure_formulas_reference_values() {
    assert_relative_eq!(
        ground_sample_distance(100.0, 24.0, 35.0, 6000.0).unwrap(),
        0.011428571428571429,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        flying_height_for_resolution(0.01, 24.0, 35.0, 6000.0).unwrap(),
        87.5,
        epsilon = 1e-12
    );
    assert!(ground_sample_distance(100.0, 24.0, 0.0, 6000.0).is_err());
}

#[test]
fn test_binary_reports_truncated_input_and_fails() {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_pixres"))
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Cam\nmeters\n1\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input ended"));
    assert!(!dir.path().join("PixResolution.csv").exists());
}

#[test]
fn test_binary_writes_csv_in_working_directory() {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_pixres"))
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Cam\nmeters\n2\n6000\n4000\n1\n24\n16\n35\n0.01\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let rows = read_rows(&dir.path().join("AGL_Resolution.csv"));
    assert_eq!(rows.len(), 1);
}
