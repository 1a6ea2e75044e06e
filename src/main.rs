use tracing::warn;

use tunnel_sweep::{resolve_token, run_sweep, ApiClient, SweepConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Credential check happens before any client is built — a usage error
    // must produce zero network activity.
    let token = match resolve_token(std::env::args()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let config = SweepConfig::from_env();
    if config.api_base != tunnel_sweep::core::config::DEFAULT_API_BASE {
        warn!("API base overridden: {}", config.api_base);
    }

    let client = ApiClient::new(config, &token)?;
    run_sweep(&client).await?;

    Ok(())
}
