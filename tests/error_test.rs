//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use jd_tracker::error::TrackerError;
use jd_tracker::session::read_selected_file;
use jd_tracker_common::{NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを選択した場合
#[test]
fn test_read_nonexistent_file() {
    let result = read_selected_file(Path::new("/nonexistent/path/jd-12345.pdf"));
    assert!(matches!(result, Err(TrackerError::FileNotFound(_))));
}

/// フォルダを選択した場合
#[test]
fn test_read_directory_is_not_a_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = read_selected_file(dir.path());
    assert!(matches!(result, Err(TrackerError::FileNotFound(_))));
}

/// 空ファイルも選択は可能（中身の検証はバックエンド側）
#[test]
fn test_read_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, b"").expect("書込失敗");

    let file = read_selected_file(&path).expect("読込失敗");
    assert_eq!(file.file_name, "empty.txt");
    assert!(file.is_empty());
}

/// TrackerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TrackerError::Config("テスト設定エラー".to_string()),
        TrackerError::FileNotFound("jd.pdf".to_string()),
        TrackerError::Prompt("中断".to_string()),
        TrackerError::Status {
            endpoint: "http://localhost:8000/process-jd/".to_string(),
            status: 500,
            body: "boom".to_string(),
        },
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ステータスエラーのメッセージ確認
#[test]
fn test_status_error_message() {
    let err = TrackerError::Status {
        endpoint: "http://localhost:8000/process-jd/".to_string(),
        status: 502,
        body: "bad gateway".to_string(),
    };
    let display = format!("{}", err);

    assert!(display.contains("502"));
    assert!(display.contains("bad gateway"));
}

/// 利用者向けメッセージは2種類のみ
#[test]
fn test_user_message() {
    let no_file: TrackerError = jd_tracker_common::Error::NoFileSelected.into();
    assert_eq!(no_file.user_message(), NO_FILE_MESSAGE);

    let parse: TrackerError = jd_tracker_common::Error::Parse("x".to_string()).into();
    assert_eq!(parse.user_message(), UPLOAD_FAILED_MESSAGE);
    assert_eq!(
        TrackerError::FileNotFound("jd.pdf".to_string()).user_message(),
        UPLOAD_FAILED_MESSAGE
    );
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: TrackerError = io_err.into();

    assert!(matches!(err, TrackerError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: TrackerError = json_err.into();

    assert!(matches!(err, TrackerError::JsonParse(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = jd_tracker_common::Error::Backend("JD parse failed".to_string());
    let err: TrackerError = common_err.into();

    assert!(matches!(err, TrackerError::Common(_)));
    assert!(format!("{}", err).contains("JD parse failed"));
}
