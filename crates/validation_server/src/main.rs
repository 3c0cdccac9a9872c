//! Trade Validator Server
//!
//! REST API server validating batches of FX trades.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validation_server::config::{build_config, CliArgs as ConfigCliArgs};
use validation_server::server::Server;

/// Trade Validator Server - REST API for FX trade batch validation
#[derive(Parser, Debug)]
#[command(name = "validation_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "TRADE_VALIDATOR_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "TRADE_VALIDATOR_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TRADE_VALIDATOR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Date parse policy (lenient, strict)
    #[arg(long, env = "TRADE_VALIDATOR_DATE_POLICY")]
    date_policy: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            date_policy: args.date_policy,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Trade Validator Server v{}", validation_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        max_body_bytes = config.max_body_bytes,
        date_policy = %config.rules.date_policy,
        customers = ?config.rules.allowed_customers,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server
        .run()
        .await
        .context("server terminated with an error")?;

    Ok(())
}
