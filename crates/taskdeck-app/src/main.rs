/*
[INPUT]:  CLI arguments, YAML configuration file, OS shutdown signals
[OUTPUT]: Running task board TUI with graceful shutdown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use taskdeck_adapter::{ClientConfig, TaskdeckClient};
use taskdeck_app::AppConfig;
use taskdeck_app::controller::TaskBoard;
use taskdeck_app::poller::{spawn_health_poller, spawn_reload_poller};
use taskdeck_app::tui::{
    LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log,
};

#[derive(Parser, Debug)]
#[command(name = "taskdeck-app", version, about = "Terminal client for the task tracking API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = load_config(args.config_path.as_ref())?;
    if let Some(api_url) = &args.api_url {
        config.api.base_url = api_url.clone();
    }

    if args.dry_run {
        init_plain_tracing(&args.log_level)?;
        TaskdeckClient::with_config_and_base_url(ClientConfig::default(), &config.api.base_url)
            .context("invalid API base URL")?;
        info!(base_url = %config.api.base_url, "dry-run requested; configuration validated");
        return Ok(());
    }

    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    let _file_guard = init_tracing(&args.log_level, args.log_file.as_deref(), log_buffer.clone())?;

    info!(
        base_url = %config.api.base_url,
        health_interval_secs = config.polling.health_interval_secs,
        reload_interval_secs = config.polling.reload_interval_secs,
        "starting taskdeck"
    );

    let client = Arc::new(
        TaskdeckClient::with_config_and_base_url(ClientConfig::default(), &config.api.base_url)
            .context("create API client")?,
    );

    let board = TaskBoard::new(Arc::clone(&client));

    let (poll_tx, poll_rx) = mpsc::unbounded_channel();
    let health_poller =
        spawn_health_poller(Arc::clone(&client), config.health_interval(), poll_tx.clone());
    let reload_poller =
        spawn_reload_poller(Arc::clone(&client), config.reload_interval(), poll_tx);

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    let result = run_tui_with_log(board, poll_rx, log_buffer, shutdown).await;

    // Stop the interval loops before exiting; nothing may keep polling
    // after the UI is gone.
    health_poller.shutdown_and_wait().await;
    reload_poller.shutdown_and_wait().await;
    info!("pollers shut down");

    result
}

fn init_plain_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_tracing(
    log_level: &str,
    log_file: Option<&Path>,
    buffer: LogBufferHandle,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(LogWriterFactory::new(buffer));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let file_name = path.file_name().context("log file path has no file name")?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            AppConfig::from_file(path_str).context("load config")
        }
        None => Ok(AppConfig::default()),
    }
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown_clone.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
