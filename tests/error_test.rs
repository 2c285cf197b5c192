//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングと終了コードを検証

use pdf_image_mapper::error::MapperError;
use pdf_image_mapper::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    let err = result.unwrap_err();
    assert!(matches!(err, MapperError::FolderNotFound(_)));
}

/// 画像のないフォルダは空のVec
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("image_catalog.txt"), "hello").unwrap();

    let result = scanner::scan_folder(dir.path());
    assert!(result.unwrap().is_empty());
}

/// 前提条件の欠落ごとに終了コードが異なる
#[test]
fn test_exit_codes_are_distinct() {
    let codes = [
        MapperError::CatalogNotFound("antennas.json".into()).exit_code(),
        MapperError::PageTextNotFound("page_text.json".into()).exit_code(),
        MapperError::FolderNotFound("extracted".into()).exit_code(),
        MapperError::MappingNotFound("image_mapping.json".into()).exit_code(),
    ];
    let unique: std::collections::HashSet<u8> = codes.iter().copied().collect();

    assert_eq!(unique.len(), codes.len());
    assert!(codes.iter().all(|&c| c != 0 && c != 1));
    assert_eq!(MapperError::InvalidCatalog("x".into()).exit_code(), 1);
}

/// エラーメッセージに欠落した入力が含まれる
#[test]
fn test_error_display_names_input() {
    let err = MapperError::PageTextNotFound("./page_text.json".into());
    let display = format!("{}", err);
    assert!(display.contains("ページテキスト"));
    assert!(display.contains("./page_text.json"));

    let err = MapperError::MappingNotFound("image_mapping.json".into());
    assert!(format!("{}", err).contains("image-map map"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MapperError = io_err.into();

    assert!(matches!(err, MapperError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MapperError = json_err.into();

    assert!(matches!(err, MapperError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = pdf_image_mapper_common::Error::Parse("命名規則に一致しません".to_string());
    let err: MapperError = common_err.into();

    assert!(matches!(err, MapperError::Common(_)));
    assert_eq!(format!("{}", err), "Parse error: 命名規則に一致しません");
}
