//! バックエンドHTTPクライアント
//!
//! 固定エンドポイントへのマルチパート送信と通知再送の呼び出しのみ。
//! リトライ、タイムアウト設定、キャンセルは行わない。

use crate::error::{Result, TrackerError};
use jd_tracker_common::{parse_analysis_response, AnalysisResult, SelectedFile, FILE_FIELD_NAME};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// 解析バックエンドの呼び出し口
#[allow(async_fn_in_trait)]
pub trait JdBackend {
    /// JDファイルを送信し、正規化済みの解析結果を返す
    async fn process_jd(&self, file: &SelectedFile) -> Result<AnalysisResult>;

    /// 学生への通知メール送信を依頼
    async fn send_mail(&self, student_id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    endpoint: String,
    mail_endpoint: String,
}

#[derive(Serialize)]
struct SendMailRequest<'a> {
    student_id: &'a str,
}

impl BackendClient {
    pub fn new(endpoint: impl Into<String>, mail_endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            mail_endpoint: mail_endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn mail_endpoint(&self) -> &str {
        &self.mail_endpoint
    }

    async fn check_status(endpoint: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TrackerError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

impl JdBackend for BackendClient {
    async fn process_jd(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type())?;
        let form = Form::new().part(FILE_FIELD_NAME, part);

        log::info!("POST {} ({}, {} bytes)", self.endpoint, file.file_name, file.len());
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let response = Self::check_status(&self.endpoint, response).await?;

        let body = response.text().await?;
        Ok(parse_analysis_response(&body)?)
    }

    async fn send_mail(&self, student_id: &str) -> Result<()> {
        log::info!("POST {} (student_id={})", self.mail_endpoint, student_id);
        let response = self
            .http
            .post(&self.mail_endpoint)
            .json(&SendMailRequest { student_id })
            .send()
            .await?;
        Self::check_status(&self.mail_endpoint, response).await?;
        Ok(())
    }
}
