//! JD Tracker CLIクライアント
//!
//! JDファイルをバックエンドへ送信し、解析結果を端末に表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod report;
pub mod session;
