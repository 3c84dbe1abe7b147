use std::sync::Arc;

use stlreader::error::{Result, StlError};
use stlreader::loader::ContentLoader;
use stlreader::server;
use stlreader::settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load("stlreader")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let loader = Arc::new(ContentLoader::from_settings(&settings));
    info!(content_dir=%loader.content_dir().display(), listen=%settings.listen, "starting content server");

    let listener = tokio::net::TcpListener::bind(settings.listen.as_str())
        .await
        .map_err(|e| StlError::Server(format!("{}: {e}", settings.listen)))?;
    axum::serve(listener, server::router(loader))
        .await
        .map_err(|e| StlError::Server(format!("{}: {e}", settings.listen)))?;
    Ok(())
}
