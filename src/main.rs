use anyhow::Result;
use clap::Parser;
use shortlinks::config::Config;
use shortlinks::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortening service.
#[derive(Parser)]
#[command(name = "shortlinks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides the LISTEN environment variable
    #[arg(long)]
    listen: Option<String>,

    /// Public prefix for issued links, overrides BASE_URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes priority; otherwise the configured log level is used as
/// the filter directive. `LOG_FORMAT=json` switches to newline-delimited JSON
/// output for log collectors.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
