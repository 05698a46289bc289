use image::{Rgb, RgbImage, Rgba, RgbaImage};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

#[derive(Debug, Deserialize)]
struct Size {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct Removed {
    top: u32,
    bottom: u32,
    left: u32,
    right: u32,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CropReport {
    mode: String,
    sensitivity: u8,
    background: Option<[u8; 4]>,
    original_size: Size,
    cropped_size: Size,
    removed: Removed,
    output: String,
    elapsed_ms: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_border-trim"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run border-trim")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

/// 20x16 white image with a red block at columns 4..=13, rows 3..=9
fn write_logo(dir: &TempDir, name: &str) -> PathBuf {
    let img = RgbaImage::from_fn(20, 16, |x, y| {
        if (4..=13).contains(&x) && (3..=9).contains(&y) {
            Rgba([220, 30, 30, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let path = dir.path().join(name);
    img.save(&path).expect("Failed to write fixture");
    path
}

#[test]
fn test_trim_overwrites_input_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");

    let output = run(&["trim", path_str(&logo)]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Detected background color: (255, 255, 255, 255)"));
    assert!(stdout.contains("Original size: 20x16"));
    assert!(stdout.contains("Cropped size: 10x7"));
    assert!(stdout.contains("Removed border: top=3, bottom=6, left=4, right=6"));
    assert!(stdout.contains(&format!("Saved to: {}", logo.display())));

    let cropped = image::open(&logo).unwrap();
    assert_eq!((cropped.width(), cropped.height()), (10, 7));
}

#[test]
fn test_trim_white_writes_derived_file() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo_padded.png");

    let output = run(&["trim-white", path_str(&logo)]);
    assert!(output.status.success());

    let derived = dir.path().join("logo_padded_no_border.png");
    let cropped = image::open(&derived).expect("derived output missing");
    assert_eq!((cropped.width(), cropped.height()), (10, 7));

    // Input is left as it was
    let original = image::open(&logo).unwrap();
    assert_eq!((original.width(), original.height()), (20, 16));
}

#[test]
fn test_trim_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");
    let out = dir.path().join("out.png");

    let output = run(&["--json", "trim", path_str(&logo), path_str(&out), "10"]);
    assert!(output.status.success());

    let report: CropReport = serde_json::from_slice(&output.stdout).expect("invalid JSON summary");
    assert_eq!(report.mode, "tolerance");
    assert_eq!(report.sensitivity, 10);
    assert_eq!(report.background, Some([255, 255, 255, 255]));
    assert_eq!((report.original_size.width, report.original_size.height), (20, 16));
    assert_eq!((report.cropped_size.width, report.cropped_size.height), (10, 7));
    assert_eq!(
        (report.removed.top, report.removed.bottom, report.removed.left, report.removed.right),
        (3, 6, 4, 6)
    );
    assert!(out.exists());
}

#[test]
fn test_blank_image_is_written_uncropped() {
    let dir = tempfile::tempdir().unwrap();
    let blank = dir.path().join("blank.png");
    RgbImage::from_pixel(9, 5, Rgb([255, 255, 255])).save(&blank).unwrap();
    let out = dir.path().join("blank_out.png");

    let output = run(&["trim-white", path_str(&blank), path_str(&out)]);
    assert!(output.status.success());

    let result = image::open(&out).unwrap();
    assert_eq!((result.width(), result.height()), (9, 5));
}

#[test]
fn test_pad_then_trim_restores_icon() {
    let dir = tempfile::tempdir().unwrap();
    let icon_path = dir.path().join("icon.png");
    let icon = RgbaImage::from_fn(40, 40, |x, y| Rgba([x as u8 * 5, y as u8 * 5, 128, 255]));
    icon.save(&icon_path).unwrap();

    let output = run(&["pad", path_str(&icon_path)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("New size: 52x52"));
    assert!(stdout.contains("Padding: 6px (15%)"));

    let padded_path = dir.path().join("icon_padded.png");
    let padded = image::open(&padded_path).unwrap().to_rgba8();
    assert_eq!(padded.dimensions(), (52, 52));
    assert_eq!(padded.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));

    let restored = dir.path().join("restored.png");
    let output = run(&["trim", path_str(&padded_path), path_str(&restored), "0"]);
    assert!(output.status.success());
    assert_eq!(image::open(&restored).unwrap().to_rgba8(), icon);
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");

    let output = run(&["trim", path_str(&missing)]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"), "stderr: {}", stderr);
}

#[test]
fn test_corrupt_input_fails_with_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("corrupt.png");
    std::fs::write(&corrupt, b"\x89PNG but not really").unwrap();

    let output = run(&["--json", "trim-white", path_str(&corrupt)]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let body_line = stderr
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("no JSON error on stderr");
    let body: ErrorResponse = serde_json::from_str(body_line).unwrap();
    assert_eq!(body.code, "DECODE_ERROR");
    assert!(body.error.contains("corrupt.png"));
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");
    let out = dir.path().join("no-such-dir").join("out.png");

    let output = run(&["trim", path_str(&logo), path_str(&out)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write image"), "stderr: {}", stderr);
}

#[test]
fn test_out_of_range_sensitivity_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");

    let output = run(&["trim", path_str(&logo), path_str(&logo), "256"]);
    assert!(!output.status.success());
}

#[test]
fn test_oversized_pad_percent_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");
    let out = dir.path().join("padded.png");

    let output = run(&["pad", path_str(&logo), path_str(&out), "4294967295"]);
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_logs_have_no_color_codes_when_piped() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");

    let output = Command::new(env!("CARGO_BIN_EXE_border-trim"))
        .args(["--log-level", "info", "trim", path_str(&logo)])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run border-trim");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Detected background color"), "stderr: {}", stderr);
    assert!(!stderr.contains('\x1b'), "stderr: {:?}", stderr);
}

#[test]
fn test_path_through_a_file_is_not_reported_missing() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_logo(&dir, "logo.png");
    let nested = logo.join("inner.png");

    let output = run(&["--json", "trim", path_str(&nested)]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let body_line = stderr
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("no JSON error on stderr");
    let body: ErrorResponse = serde_json::from_str(body_line).unwrap();
    assert_eq!(body.code, "DECODE_ERROR");
}
