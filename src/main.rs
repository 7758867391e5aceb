use anyhow::Result;
use tracing::info;
use tutor_content_api::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tutor_content_api=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = config::Config::from_env()?;

    info!("Starting content API");
    info!("Content directory: {}", config.content_dir.display());
    info!("Assets directory: {}", config.assets_dir.display());
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    server::serve(config).await
}
