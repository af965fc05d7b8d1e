use anyhow::{Context, Result};
use parawis::{Catalog, ParawisConfig, web};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ParawisConfig::load().context("Failed to load configuration")?;
    init_tracing(&config)?;

    let catalog = match &config.catalog.data_file {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Builtin catalog data is invalid")?,
    };
    tracing::info!("Catalog loaded with {} destinations", catalog.len());

    web::run(&config.server, catalog).await
}

fn init_tracing(config: &ParawisConfig) -> Result<()> {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Invalid log level")?;

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    Ok(())
}
