//! End-to-end tests for slicing screenshots on disk

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use bandslicer::api::{BandSlicer, SliceRequest};
use bandslicer::batch::{run_batch, BatchManifest};
use bandslicer::utils::logger::Logger;
use bandslicer::utils::naming_utils::NameTemplate;
use bandslicer::utils::progress::ProgressTracker;
use bandslicer::utils::selection_utils::BandSelection;
use bandslicer::utils::write_utils::SaveOutcome;
use bandslicer::SliceError;

const BACKGROUND: Rgb<u8> = Rgb([240, 240, 240]);
const GATE: Rgb<u8> = Rgb([53, 60, 70]);
const START: Rgb<u8> = Rgb([51, 58, 67]);
const BETWEEN: Rgb<u8> = Rgb([44, 52, 64]);
const BETWEEN_DARK: Rgb<u8> = Rgb([34, 38, 44]);
const END: Rgb<u8> = Rgb([39, 46, 54]);

/// A 400x300 page in the `activity-v2` style: gate at row 5, start at 20,
/// separators at 100 and 180 spanning columns 100..300, end at 260.
fn activity_page() -> RgbImage {
    let mut img = RgbImage::from_pixel(400, 300, BACKGROUND);
    for x in 0..400 {
        img.put_pixel(x, 5, GATE);
        img.put_pixel(x, 20, START);
        img.put_pixel(x, 260, END);
    }
    for x in 100..300 {
        img.put_pixel(x, 100, BETWEEN);
        img.put_pixel(x, 180, BETWEEN_DARK);
    }
    // Band content so crops can be told apart
    img.put_pixel(80, 21, Rgb([255, 0, 0]));
    img.put_pixel(80, 181, Rgb([0, 0, 255]));
    img
}

fn write_page(path: &Path, img: &RgbImage) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    img.save(path).unwrap();
}

#[test]
fn test_describe_reports_layout() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("shot.png");
    write_page(&input, &activity_page());

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    let layout = slicer.detect(&input).unwrap();
    assert_eq!(layout.boundaries.rows(), &[20, 100, 180, 260]);
    assert_eq!((layout.extent.left, layout.extent.right), (75, 325));
    assert_eq!(layout.band_count(), 3);

    let text = slicer.describe(&input).unwrap();
    assert!(text.contains("activity-v2"));
    assert!(text.contains("Bands: 3"));

    let log = fs::read_to_string(dir.path().join("ops.log")).unwrap();
    assert!(log.contains("shot.png"));
}

#[test]
fn test_slice_selected_bands() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("shot.png");
    write_page(&input, &activity_page());
    let out = dir.path().join("out");

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    let request = SliceRequest::new(BandSelection::parse("1,3").unwrap(), &out);
    let saved = slicer.slice(&input, &request).unwrap();

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].path, out.join("shot_r1.png"));
    assert_eq!(saved[1].path, out.join("shot_r3.png"));
    assert!(saved.iter().all(|b| b.outcome == SaveOutcome::Written));

    let first = image::open(&saved[0].path).unwrap().to_rgb8();
    assert_eq!(first.dimensions(), (250, 79));
    assert_eq!(*first.get_pixel(5, 0), Rgb([255, 0, 0]));

    let third = image::open(&saved[1].path).unwrap().to_rgb8();
    assert_eq!(third.dimensions(), (250, 79));
    assert_eq!(*third.get_pixel(5, 0), Rgb([0, 0, 255]));
    assert!(!out.join("shot_r2.png").exists());

    // A second run leaves existing files alone
    let again = slicer.slice(&input, &request).unwrap();
    assert!(again.iter().all(|b| b.outcome == SaveOutcome::Skipped));
}

#[test]
fn test_slice_rejects_index_before_writing() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("shot.png");
    write_page(&input, &activity_page());
    let out = dir.path().join("out");

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    let request = SliceRequest::new(BandSelection::parse("1,4").unwrap(), &out);
    match slicer.slice(&input, &request) {
        Err(SliceError::IndexOutOfRange { index, available }) => {
            assert_eq!((index, available), (4, 3));
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }
    assert!(!out.join("shot_r1.png").exists());
}

#[test]
fn test_empty_band_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("shot.png");
    let mut page = activity_page();
    for x in 100..300 {
        page.put_pixel(x, 101, BETWEEN);
    }
    write_page(&input, &page);
    let out = dir.path().join("out");

    let slicer = BandSlicer::with_builtin_profile("activity-v2-fine", &logger).unwrap();
    assert_eq!(slicer.detect(&input).unwrap().boundaries.rows(), &[20, 100, 101, 180, 260]);

    let request = SliceRequest::new(BandSelection::All, &out);
    match slicer.slice(&input, &request) {
        Err(SliceError::EmptyBand { index }) => assert_eq!(index, 2),
        other => panic!("expected EmptyBand, got {:?}", other),
    }
    assert!(!out.join("shot_r1.png").exists());
    assert!(!out.join("shot_r2.png").exists());

    // The non-empty neighbours can still be sliced
    let request = SliceRequest::new(BandSelection::parse("1,3").unwrap(), &out);
    let saved = slicer.slice(&input, &request).unwrap();
    assert_eq!(saved.len(), 2);
    assert!(!out.join("shot_r2.png").exists());
}

#[test]
fn test_slice_with_template_fields() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("shot.png");
    write_page(&input, &activity_page());

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    let mut request = SliceRequest::new(BandSelection::Indices(vec![2]), dir.path());
    request.template = NameTemplate::parse("{movie}/review_{review}_p{page}_r{band}.png").unwrap();
    request.movie = Some("john-wick".to_string());
    request.page = Some(4);
    request.review = Some(3);

    let saved = slicer.slice(&input, &request).unwrap();
    assert_eq!(saved[0].path, dir.path().join("john-wick/review_3_p4_r2.png"));
    assert!(saved[0].path.exists());
}

#[test]
fn test_overlay_draws_layout() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("shot.png");
    write_page(&input, &activity_page());
    let output = dir.path().join("red_lines.png");

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    slicer.overlay(&input, &output).unwrap();

    let drawn = image::open(&output).unwrap().to_rgb8();
    let red = Rgb([255, 0, 0]);
    assert_eq!(*drawn.get_pixel(0, 100), red);
    assert_eq!(*drawn.get_pixel(75, 50), red);
    assert_eq!(*drawn.get_pixel(324, 50), red);
    assert_eq!(*drawn.get_pixel(200, 50), BACKGROUND);
}

#[test]
fn test_missing_boundaries_fail() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    let input = dir.path().join("blank.png");
    write_page(&input, &RgbImage::from_pixel(400, 300, BACKGROUND));

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    assert!(matches!(slicer.detect(&input), Err(SliceError::BoundaryNotFound(_))));
}

#[test]
fn test_batch_run() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(dir.path().join("ops.log")).unwrap();
    write_page(&dir.path().join("pages/john-wick/page1.png"), &activity_page());
    write_page(&dir.path().join("pages/john-wick/page2.png"), &activity_page());

    let manifest = BatchManifest::from_str(
        r#"
        [movies]
        john-wick = ["1:1", "oops", "2:3", "2:9", "7:1"]
        "#,
        dir.path(),
    )
    .unwrap();

    let slicer = BandSlicer::with_builtin_profile("activity-v2", &logger).unwrap();
    let report = run_batch(&slicer, &manifest, &ProgressTracker::hidden());

    assert_eq!(report.written, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.invalid, 1);
    // Band 9 does not exist and page 7 is missing
    assert_eq!(report.failed, 2);
    assert!(!report.is_success());

    let images = dir.path().join("images/john-wick");
    assert!(images.join("review_1_p1_r1.png").exists());
    assert!(images.join("review_2_p2_r3.png").exists());
}
