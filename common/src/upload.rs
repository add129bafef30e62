//! アップロード操作
//!
//! 選択中のファイルを保持し、送信可否を判定する。
//! 拡張子は選択ダイアログへのヒントであり、送信時には検証しない。
//! ブラウザではファイルの中身を送信時に読むため、選択状態はハンドルのまま持つ。

use crate::error::{Error, Result};
use crate::store::ResultStore;

/// 解析エンドポイント（固定）
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/process-jd/";

/// 通知再送エンドポイント
pub const DEFAULT_MAIL_ENDPOINT: &str = "http://localhost:8000/send-mail/";

/// マルチパートのファイルフィールド名
pub const FILE_FIELD_NAME: &str = "file";

/// 選択ダイアログで受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".txt"];

/// ファイル未選択時のアラート
pub const NO_FILE_MESSAGE: &str = "Please select a JD file";

/// 送信失敗時のアラート
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// 通知送信失敗時のアラート
pub const SEND_MAIL_FAILED_MESSAGE: &str = "Send mail failed";

/// `<input accept=...>` 用の文字列
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// ボタン表示
pub fn button_label(busy: bool) -> &'static str {
    if busy {
        "Processing..."
    } else {
        "Upload JD"
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let dot = file_name.rfind('.')?;
    Some(file_name[dot..].to_lowercase())
}

/// 選択ダイアログの拡張子リストに含まれるか
pub fn has_accepted_extension(file_name: &str) -> bool {
    extension_of(file_name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// 選択ダイアログで選ばれたファイル
pub trait PickedFile {
    fn file_name(&self) -> &str;
}

/// メモリ上に保持された選択ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// 小文字の拡張子（ドット付き）
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.file_name)
    }

    pub fn has_accepted_extension(&self) -> bool {
        has_accepted_extension(&self.file_name)
    }

    /// 拡張子から推定したMIMEタイプ
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some(".pdf") => "application/pdf",
            Some(".docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Some(".txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PickedFile for SelectedFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// ファイル選択と送信トリガー
///
/// 選択は常に最新の1件だけを保持する。選択ダイアログを空で閉じたら解除する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadControl<F = SelectedFile> {
    selected: Option<F>,
}

impl<F> Default for UploadControl<F> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<F: PickedFile> UploadControl<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: F) {
        if !has_accepted_extension(file.file_name()) {
            log::debug!("selected file has an unlisted extension: {}", file.file_name());
        }
        self.selected = Some(file);
    }

    /// 選択ダイアログの結果をそのまま反映
    pub fn set_selection(&mut self, file: Option<F>) {
        match file {
            Some(file) => self.select(file),
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// 送信対象のファイル
    ///
    /// 未選択なら`NoFileSelected`、処理中なら`UploadInProgress`。
    /// どちらの場合もリクエストを発行してはならない。
    pub fn submission(&self, store: &ResultStore) -> Result<&F> {
        let file = self.selected.as_ref().ok_or(Error::NoFileSelected)?;
        if store.is_busy() {
            return Err(Error::UploadInProgress);
        }
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.docx,.txt");
    }

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(false), "Upload JD");
        assert_eq!(button_label(true), "Processing...");
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(SelectedFile::new("jd.PDF", vec![]).mime_type(), "application/pdf");
        assert_eq!(SelectedFile::new("jd.txt", vec![]).mime_type(), "text/plain");
        assert!(SelectedFile::new("jd.docx", vec![]).mime_type().contains("wordprocessingml"));
        assert_eq!(SelectedFile::new("jd", vec![]).mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_extension_hint_only() {
        let file = SelectedFile::new("photo.png", vec![1, 2, 3]);
        assert!(!file.has_accepted_extension());

        let mut control = UploadControl::new();
        control.select(file.clone());
        let store = ResultStore::new();
        assert_eq!(control.submission(&store).expect("送信不可"), &file);
    }

    #[test]
    fn test_no_file_selected() {
        let control: UploadControl = UploadControl::new();
        let store = ResultStore::new();
        assert!(matches!(control.submission(&store), Err(Error::NoFileSelected)));
    }

    #[test]
    fn test_busy_blocks_submission() {
        let mut control = UploadControl::new();
        control.select(SelectedFile::new("jd.txt", b"Python".to_vec()));
        let mut store = ResultStore::new();
        store.begin_upload().expect("開始失敗");

        assert!(matches!(control.submission(&store), Err(Error::UploadInProgress)));
    }

    #[test]
    fn test_clear_selection() {
        let mut control = UploadControl::new();
        control.select(SelectedFile::new("jd.txt", vec![]));
        control.clear();
        assert!(control.selected().is_none());
    }

    /// 中身を持たないハンドル（ブラウザのFileに相当）
    #[derive(Debug, Clone, PartialEq)]
    struct Handle(&'static str);

    impl PickedFile for Handle {
        fn file_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_latest_pick_wins() {
        let mut control = UploadControl::new();
        control.set_selection(Some(Handle("a.pdf")));
        control.set_selection(Some(Handle("b.docx")));

        let store = ResultStore::new();
        assert_eq!(control.submission(&store).expect("送信不可"), &Handle("b.docx"));
    }

    #[test]
    fn test_cancelled_pick_clears_selection() {
        let mut control = UploadControl::new();
        control.set_selection(Some(Handle("a.pdf")));
        control.set_selection(None);

        let store = ResultStore::new();
        assert!(control.selected().is_none());
        assert!(matches!(control.submission(&store), Err(Error::NoFileSelected)));
    }

    #[test]
    fn test_busy_comes_from_store_only() {
        let control: UploadControl<Handle> = UploadControl::new();
        let mut store = ResultStore::new();
        store.begin_upload().expect("開始失敗");

        // 未選択でも処理中の判定はストアだけで決まる
        assert!(store.is_busy());
        assert!(control.selected().is_none());
        store.finish_upload::<Error>(Err(Error::Parse("bad".into()))).expect_err("失敗のはず");
        assert!(!store.is_busy());
    }
}
