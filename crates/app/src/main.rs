use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use advisor_core::model::StageSequence;
use advisor_core::{
    DEFAULT_BASE_URL, DEFAULT_STAGE_DURATION, EndpointConfig, EndpointConfigError, LoaderConfig,
    LoaderConfigError,
};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{HttpRequestClient, SubmissionController};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const APP_TITLE: &str = "Duke Grad Student Course Recommender";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidEndpoint { raw: String, source: EndpointConfigError },
    InvalidStageDuration { raw: String },
    InvalidTimeout { raw: String },
    Loader(LoaderConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidEndpoint { raw, source } => {
                write!(f, "invalid --endpoint value {raw}: {source}")
            }
            ArgsError::InvalidStageDuration { raw } => {
                write!(f, "invalid --stage-duration-ms value: {raw}")
            }
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::Loader(err) => write!(f, "invalid loader configuration: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    controller: Arc<SubmissionController>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn controller(&self) -> Arc<SubmissionController> {
        Arc::clone(&self.controller)
    }
}

#[derive(Debug)]
struct Args {
    endpoint: EndpointConfig,
    loader: LoaderConfig,
    timeout: Option<Duration>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--endpoint <url>] [--stage-duration-ms <ms>] [--loop] [--timeout-secs <s>]");
    eprintln!("  cargo run -p app -- ping [--endpoint <url>] [--timeout-secs <s>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --endpoint {DEFAULT_BASE_URL}");
    eprintln!("  --stage-duration-ms {}", DEFAULT_STAGE_DURATION.as_millis());
    eprintln!("  no loop, no request timeout");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ADVISOR_API_BASE_URL, ADVISOR_STAGE_DURATION_MS, ADVISOR_LOADER_LOOP,");
    eprintln!("  ADVISOR_REQUEST_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Ping,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "ping" => Some(Self::Ping),
            _ => None,
        }
    }
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut endpoint_raw =
            env("ADVISOR_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut duration_raw = env("ADVISOR_STAGE_DURATION_MS");
        let mut looping = env("ADVISOR_LOADER_LOOP").is_some_and(|value| is_truthy(&value));
        let mut timeout_raw = env("ADVISOR_REQUEST_TIMEOUT_SECS");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--endpoint" => endpoint_raw = require_value(args, "--endpoint")?,
                "--stage-duration-ms" => {
                    duration_raw = Some(require_value(args, "--stage-duration-ms")?);
                }
                "--loop" => looping = true,
                "--timeout-secs" => timeout_raw = Some(require_value(args, "--timeout-secs")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let endpoint =
            EndpointConfig::parse(&endpoint_raw).map_err(|source| ArgsError::InvalidEndpoint {
                raw: endpoint_raw.clone(),
                source,
            })?;

        let stage_duration = match duration_raw {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ArgsError::InvalidStageDuration { raw: raw.clone() })?,
            None => DEFAULT_STAGE_DURATION,
        };
        let loader = LoaderConfig::new(StageSequence::default(), stage_duration, looping)
            .map_err(ArgsError::Loader)?;

        let timeout = match timeout_raw {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ArgsError::InvalidTimeout { raw: raw.clone() })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            endpoint,
            loader,
            timeout,
        })
    }

    fn build_client(&self) -> Result<HttpRequestClient, services::RequestError> {
        match self.timeout {
            Some(timeout) => HttpRequestClient::with_timeout(self.endpoint.clone(), timeout),
            None => Ok(HttpRequestClient::new(self.endpoint.clone())),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Longest the UI waits on the backend before opening the window.
const STARTUP_PING_LIMIT: Duration = Duration::from_secs(3);

#[derive(Debug, PartialEq, Eq)]
enum StartupHealth {
    Healthy,
    Unhealthy(String),
    TimedOut,
}

async fn startup_health(
    probe: impl Future<Output = Result<(), services::RequestError>>,
    limit: Duration,
) -> StartupHealth {
    match tokio::time::timeout(limit, probe).await {
        Ok(Ok(())) => StartupHealth::Healthy,
        Ok(Err(err)) => StartupHealth::Unhealthy(err.to_string()),
        Err(_) => StartupHealth::TimedOut,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging();
    let client = parsed.build_client()?;

    match cmd {
        Command::Ping => {
            client.ping().await?;
            info!(endpoint = %parsed.endpoint.base_url(), "backend is healthy");
            Ok(())
        }
        Command::Ui => {
            // Unreachable backends are not fatal; every submission reports its own failure.
            let endpoint = parsed.endpoint.base_url();
            match startup_health(client.ping(), STARTUP_PING_LIMIT).await {
                StartupHealth::Healthy => info!(%endpoint, "backend is healthy"),
                StartupHealth::Unhealthy(error) => {
                    warn!(%endpoint, %error, "backend health check failed");
                }
                StartupHealth::TimedOut => {
                    warn!(%endpoint, limit = ?STARTUP_PING_LIMIT, "backend health check timed out");
                }
            }

            let controller = Arc::new(SubmissionController::new(
                Arc::new(client),
                parsed.loader.clone(),
            ));
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { controller });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
