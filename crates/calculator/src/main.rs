//! Calculator service entry point.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};

use calculator::domain::operators;
use calculator_config::{ConfigLoader, ENV_PREFIX};
use calculator_telemetry::init_logging;

/// Configuration file picked up from the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG_FILE: &str = "calculator.toml";

/// Command-line arguments.
struct Args {
    /// Path to configuration file.
    config: Option<PathBuf>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut config = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    config = args.next().map(PathBuf::from);
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-V" => {
                    println!("calculator {}", calculator::VERSION);
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {other}");
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
            }
        }

        Self { config }
    }
}

fn print_help() {
    println!(
        r"Calculator - integer arithmetic over HTTP

USAGE:
    calculator [OPTIONS]

OPTIONS:
    -c, --config <PATH>    Path to configuration file (TOML or JSON)
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    CALCULATOR__SERVER__HTTP_ADDR              Bind address (default: 0.0.0.0:5000)
    CALCULATOR__SERVER__REQUEST_TIMEOUT_MS     Per-request timeout (default: 30000)
    CALCULATOR__SERVER__MAX_BODY_BYTES         Request body cap (default: 1048576)
    CALCULATOR__SERVER__SHUTDOWN_TIMEOUT_SECS  Drain period on shutdown (default: 30)
    CALCULATOR__LOGGING__LEVEL                 Log filter directive (default: info)
    CALCULATOR__LOGGING__FORMAT                json or pretty (default: json)

Variables are also read from a .env file in the working directory.

EXAMPLES:
    # Run with configuration file
    calculator --config /etc/calculator/calculator.toml

    # Run on another port with debug logs
    CALCULATOR__SERVER__HTTP_ADDR=127.0.0.1:8080 CALCULATOR__LOGGING__LEVEL=debug calculator
"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new().with_dotenv();
    let loader = match &args.config {
        Some(path) => loader
            .with_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => loader.with_optional_file(DEFAULT_CONFIG_FILE)?,
    };
    let config = loader
        .with_env_prefix(ENV_PREFIX)
        .load()
        .context("invalid configuration")?;

    init_logging(&config.logging.to_log_config()).context("failed to initialize logging")?;

    // A broken operator set should stop startup, not the first v2 request.
    operators()
        .collect()
        .context("failed to discover operators")?;

    info!(
        version = calculator::VERSION,
        http_addr = %config.server.http_addr,
        operators = ?operators().names(),
        "starting calculator"
    );

    if let Err(e) = calculator::create_app(&config).run().await {
        error!(error = %e, "server error");
        return Err(e.into());
    }

    info!("calculator stopped");
    Ok(())
}
