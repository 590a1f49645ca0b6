// エラーハンドリングの統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::*;
use jpg_converter::{
    converter::BatchConverter,
    core::{ConversionConfig, ConversionError},
    image_loader::{standard::StandardImageLoader, DecoderCapabilities},
    reporting::NoOpReporter,
};
use std::fs;
use tempfile::TempDir;

fn converter(delete: bool) -> BatchConverter<StandardImageLoader, NoOpReporter> {
    BatchConverter::new(
        StandardImageLoader::new(DecoderCapabilities::baseline()),
        NoOpReporter::new(),
        ConversionConfig::new().with_delete_originals(delete),
    )
}

#[test]
fn test_corrupt_file_does_not_stop_the_walk() {
    let temp_dir = TempDir::new().unwrap();
    write_corrupt(&temp_dir.path().join("a_broken.png"));
    write_png(&temp_dir.path().join("b_good.png"));
    write_corrupt(&temp_dir.path().join("c_broken.webp"));

    let summary = converter(false).run(temp_dir.path()).unwrap();

    assert_eq!(summary.failed, 2);
    assert_eq!(summary.converted, 1);
    assert!(is_valid_jpeg(&temp_dir.path().join("b_good.jpg")));
    assert!(!temp_dir.path().join("a_broken.jpg").exists());
    assert!(!temp_dir.path().join("c_broken.jpg").exists());
}

#[test]
fn test_failed_conversion_keeps_original_when_deleting() {
    let temp_dir = TempDir::new().unwrap();
    let broken = temp_dir.path().join("broken.tiff");
    let truncated = temp_dir.path().join("truncated.png");
    write_corrupt(&broken);

    // 正しいPNGの先頭だけを書き込む
    let full = temp_dir.path().join("full.bin");
    write_png(&full);
    let bytes = fs::read(&full).unwrap();
    fs::remove_file(&full).unwrap();
    fs::write(&truncated, &bytes[..bytes.len() / 2]).unwrap();

    let summary = converter(true).run(temp_dir.path()).unwrap();

    assert_eq!(summary.failed, 2);
    assert_eq!(summary.deleted, 0);
    assert!(broken.exists());
    assert!(truncated.exists());
}

#[test]
fn test_truncated_file_reports_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.gif");
    write_corrupt(&path);

    let error = converter(true).convert(&path).unwrap_err();

    assert!(matches!(error, ConversionError::Decode { .. }));
    assert_eq!(error.path(), path.as_path());
    assert!(!error.to_string().is_empty());
}

#[test]
fn test_missing_root_is_a_startup_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = converter(false).run(&temp_dir.path().join("nope"));

    let error = result.unwrap_err();
    assert!(error.to_string().contains("does not exist"));
}

#[test]
fn test_file_as_root_is_a_startup_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a.png");
    write_png(&file);

    assert!(converter(false).run(&file).is_err());
    assert!(!temp_dir.path().join("a.jpg").exists());
}

#[test]
fn test_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let summary = converter(false).run(temp_dir.path()).unwrap();

    assert_eq!(summary.total_files, 0);
    assert!(!summary.has_failures());
}
