//! アップロードセッション
//!
//! 選択 → 送信（ビジー） → 完了時にストアを置き換え、という制御フローを
//! 1つの状態コンテナにまとめる。

use crate::client::JdBackend;
use crate::error::{Result, TrackerError};
use jd_tracker_common::{AnalysisResult, ResultStore, SelectedFile, UploadControl};
use std::path::Path;

pub struct UploadSession<B> {
    backend: B,
    control: UploadControl,
    store: ResultStore,
}

impl<B: JdBackend> UploadSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            control: UploadControl::new(),
            store: ResultStore::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn select(&mut self, file: SelectedFile) {
        self.control.select(file);
    }

    /// 選択中のファイルを送信
    ///
    /// 未選択・処理中のときはリクエストを発行しない。
    /// 失敗時は前回の結果を保持したままエラーを返す。
    pub async fn upload(&mut self) -> Result<&AnalysisResult> {
        let file = self.control.submission(&self.store)?;
        self.store.begin_upload()?;

        let outcome = self.backend.process_jd(file).await;
        if let Err(e) = &outcome {
            log::error!("upload of {} failed: {}", file.file_name, e);
        }
        self.store.finish_upload(outcome)
    }

    pub async fn send_mail(&self, student_id: &str) -> Result<()> {
        self.backend.send_mail(student_id).await.inspect_err(|e| {
            log::error!("send mail for {} failed: {}", student_id, e);
        })
    }
}

/// ローカルファイルを読み込んで選択ファイルにする
pub fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(TrackerError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    Ok(SelectedFile::new(file_name, bytes))
}
