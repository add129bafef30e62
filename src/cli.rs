use clap::{Parser, Subcommand};
use jd_tracker_common::ResultsVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jd-tracker")]
#[command(about = "Eligibility & Training Tracker client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// JDファイルをアップロードして解析結果を表示
    Upload {
        /// JDファイル (.pdf / .docx / .txt)
        file: Option<PathBuf>,

        /// 表示形式 (main/alternate)
        #[arg(long)]
        view: Option<ResultsVariant>,

        /// 解析エンドポイント（設定より優先）
        #[arg(long)]
        endpoint: Option<String>,

        /// 別表示で通知メールの送信先を対話的に選ぶ
        #[arg(short, long)]
        interactive: bool,
    },

    /// 学生への通知メールを送信
    Notify {
        /// 学生ID
        #[arg(required = true)]
        student_id: String,

        /// 通知エンドポイント（設定より優先）
        #[arg(long)]
        mail_endpoint: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 解析エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 通知エンドポイントを設定
        #[arg(long)]
        set_mail_endpoint: Option<String>,

        /// 既定の表示形式を設定 (main/alternate)
        #[arg(long)]
        set_view: Option<ResultsVariant>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
