use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use jd_tracker::{cli, client, config, error, notify, report, session};
use jd_tracker_common::{button_label, ResultsVariant, SEND_MAIL_FAILED_MESSAGE};
use cli::{Cli, Commands};
use client::BackendClient;
use config::Config;
use error::Result;
use session::UploadSession;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const CONFIG_FAILED_MESSAGE: &str = "Config update failed";

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(button_label(true));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Upload { file, view, endpoint, interactive } => {
            run_upload(file, view, endpoint, interactive)
                .await
                .map_err(|e| {
                    let message = e.user_message();
                    (e, message)
                })
        }
        Commands::Notify { student_id, mail_endpoint } => run_notify(student_id, mail_endpoint)
            .await
            .map_err(|e| (e, SEND_MAIL_FAILED_MESSAGE)),
        Commands::Config { set_endpoint, set_mail_endpoint, set_view, show } => {
            run_config(set_endpoint, set_mail_endpoint, set_view, show)
                .map_err(|e| (e, CONFIG_FAILED_MESSAGE))
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err((e, message)) => {
            // 端末には固定メッセージのみ、詳細はログへ
            log::error!("{}", e);
            eprintln!("✗ {}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run_upload(
    file: Option<PathBuf>,
    view: Option<ResultsVariant>,
    endpoint: Option<String>,
    interactive: bool,
) -> Result<()> {
    println!("📄 jd-tracker - JDアップロード\n");

    // フラグで足りるときは設定ファイルを読まない
    let config = if endpoint.is_none() || view.is_none() || interactive {
        Config::load()?
    } else {
        Config::default()
    };

    let endpoint = endpoint.unwrap_or_else(|| config.endpoint.clone());
    let view = view.unwrap_or(config.default_view);
    let backend = BackendClient::new(endpoint, config.mail_endpoint.clone());
    let mut upload = UploadSession::new(backend);

    if let Some(path) = file {
        upload.select(session::read_selected_file(&path)?);
    }

    let pb = spinner();
    let outcome = upload.upload().await;
    pb.finish_and_clear();
    let result = outcome?.clone();

    println!("{}", report::render_report(&result, view));

    if interactive && view.offers_mail_action() {
        for student_id in notify::prompt_recipients(&result)? {
            match upload.send_mail(&student_id).await {
                Ok(()) => println!("✔ 通知を送信: {}", student_id),
                Err(_) => eprintln!("✗ {} ({})", SEND_MAIL_FAILED_MESSAGE, student_id),
            }
        }
    }

    Ok(())
}

async fn run_notify(student_id: String, mail_endpoint: Option<String>) -> Result<()> {
    let config = match mail_endpoint {
        Some(_) => Config::default(),
        None => Config::load()?,
    };
    let mail_endpoint = mail_endpoint.unwrap_or_else(|| config.mail_endpoint.clone());
    let backend = BackendClient::new(config.endpoint.clone(), mail_endpoint);
    let upload = UploadSession::new(backend);

    upload.send_mail(&student_id).await?;
    println!("✔ 通知を送信: {}", student_id);
    Ok(())
}

fn run_config(
    set_endpoint: Option<String>,
    set_mail_endpoint: Option<String>,
    set_view: Option<ResultsVariant>,
    show: bool,
) -> Result<()> {
    // 壊れた設定ファイルもここから上書きして直せる
    let mut config = Config::load_or_default();

    if let Some(endpoint) = set_endpoint {
        config.set_endpoint(endpoint)?;
        println!("✔ 解析エンドポイントを設定しました");
    }

    if let Some(endpoint) = set_mail_endpoint {
        config.set_mail_endpoint(endpoint)?;
        println!("✔ 通知エンドポイントを設定しました");
    }

    if let Some(view) = set_view {
        config.set_default_view(view)?;
        println!("✔ 既定の表示形式を設定しました");
    }

    if show {
        println!("設定:");
        println!("  解析エンドポイント: {}", config.endpoint);
        println!("  通知エンドポイント: {}", config.mail_endpoint);
        println!("  既定の表示形式: {}", config.default_view);
    }

    Ok(())
}
