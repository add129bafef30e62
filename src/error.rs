use jd_tracker_common::{NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} responded with status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] jd_tracker_common::Error),
}

impl TrackerError {
    /// 利用者向けの固定メッセージ
    pub fn user_message(&self) -> &'static str {
        match self {
            TrackerError::Common(jd_tracker_common::Error::NoFileSelected) => NO_FILE_MESSAGE,
            _ => UPLOAD_FAILED_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
