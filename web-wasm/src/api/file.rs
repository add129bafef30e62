//! ブラウザで選択されたファイル
//!
//! 選択時はハンドルだけを保持し、中身は送信直前に読む。

use futures::channel::oneshot;
use jd_tracker_common::{PickedFile, SelectedFile};
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile {
    file_name: String,
    file: File,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self {
            file_name: file.name(),
            file,
        }
    }

    pub fn size(&self) -> f64 {
        self.file.size()
    }

    /// ファイル全体を読み込み、送信用の選択ファイルにする
    pub async fn read(&self) -> Result<SelectedFile, JsValue> {
        let bytes = read_bytes(&self.file).await?;
        Ok(SelectedFile::new(self.file_name.clone(), bytes))
    }
}

impl PickedFile for BrowserFile {
    fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// FileReaderでファイル全体をバイト列として読む
///
/// `onloadend`は一度だけ呼ばれ、呼ばれた時点でハンドラは解放される。
async fn read_bytes(file: &File) -> Result<Vec<u8>, JsValue> {
    let reader = FileReader::new()?;
    let (tx, rx) = oneshot::channel::<Result<Vec<u8>, JsValue>>();

    let reader_clone = reader.clone();
    let on_load_end = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        let bytes = reader_clone.result().and_then(|buffer| {
            if buffer.is_null() {
                Err(JsValue::from_str("file read failed"))
            } else {
                Ok(js_sys::Uint8Array::new(&buffer).to_vec())
            }
        });
        let _ = tx.send(bytes);
    });
    reader.set_onloadend(Some(on_load_end.unchecked_ref()));

    reader.read_as_array_buffer(file)?;
    rx.await
        .map_err(|_| JsValue::from_str("file read was cancelled"))?
}
