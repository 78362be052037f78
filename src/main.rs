//! hello-web entry point.
//!
//! Initializes tracing, loads configuration from the environment, builds the
//! Axum router and serves it. A bind failure is logged and exits with status 1.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_web::build_info::BuildInfo;
use hello_web::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use hello_web::http::start_server;
use hello_web::routes::create_router;
use hello_web::state::AppState;

/// hello-web: health check and build metadata over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-web", version, about)]
struct Args {
    /// Log level filter (e.g., "hello_web=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "hello-web failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read before tracing init so the log format can come from the environment
    let config = AppConfig::from_env();

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    if let Some(e) = &config.logging.rejected_format {
        tracing::warn!(error = %e, "Ignoring LOG_FORMAT, using text");
    }

    let build = BuildInfo::default();

    tracing::info!(
        port = %config.http.port,
        version = %build.version,
        git_sha = %build.git_sha,
        build_time = %build.build_time,
        "hello-web starting on {}",
        config.http.bind_addr()
    );

    let app = create_router(AppState::new(build));
    start_server(app, &config.http).await?;

    Ok(())
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
