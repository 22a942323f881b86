use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "accounts=debug,sqlx=warn";

fn env_filter(raw: Option<String>) -> EnvFilter {
    let directives = raw
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn json_logs(raw: Option<String>) -> bool {
    raw.map(|v| v == "json").unwrap_or(false)
}

/// Installs the global subscriber from `RUST_LOG` and `LOG_FORMAT`.
pub fn init() -> anyhow::Result<()> {
    let filter = env_filter(std::env::var("RUST_LOG").ok());

    if json_logs(std::env::var("LOG_FORMAT").ok()) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    }
    Ok(())
}
