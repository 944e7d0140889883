// Portfolio Site - Web Server
// Serves every page until terminated

use anyhow::{Context, Result};
use portfolio_site::server::{router, AppState};
use portfolio_site::{logging, Site, SiteConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SiteConfig::load().context("Failed to load configuration")?;
    logging::init(&config.log_filter);

    let site = Site::from_config(&config).context("Failed to load profile")?;
    info!(
        name = %site.profile().name,
        profile = ?config.profile,
        variant = ?config.variant,
        "site loaded"
    );

    let app = router(AppState::new(site));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(addr = %config.bind, "server running");
    info!("UI:  http://{}/", config.bind);
    info!("API: http://{}/api/views/home", config.bind);

    axum::serve(listener, app)
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
