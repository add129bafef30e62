//! 解析バックエンド呼び出し
//!
//! fetch APIでマルチパート送信し、応答本文を共通パーサで正規化する。

use jd_tracker_common::{parse_analysis_response, AnalysisResult, SelectedFile, FILE_FIELD_NAME};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

#[derive(Serialize)]
struct SendMailRequest<'a> {
    student_id: &'a str,
}

/// fetchを実行し、2xx以外はエラーにする
async fn fetch(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "{} responded with status {}",
            request.url(),
            resp.status()
        )));
    }
    Ok(resp)
}

/// 選択ファイルをBlobにしてFormDataへ詰める
fn build_form(file: &SelectedFile) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let props = BlobPropertyBag::new();
    props.set_type(file.mime_type());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD_NAME, &blob, &file.file_name)?;
    Ok(form)
}

/// JDファイルを送信して解析結果を取得
pub async fn process_jd(endpoint: &str, file: &SelectedFile) -> Result<AnalysisResult, JsValue> {
    let form = build_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    let resp = fetch(&request).await?;

    let text = JsFuture::from(resp.text()?).await?;
    let body = text.as_string().unwrap_or_default();
    parse_analysis_response(&body).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// 学生への通知メール送信を依頼
pub async fn send_mail(endpoint: &str, student_id: &str) -> Result<(), JsValue> {
    let body = serde_json::to_string(&SendMailRequest { student_id })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    fetch(&request).await?;
    Ok(())
}
