use std::path::Path;

use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config;
use crate::errors::PageLensError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), PageLensError> {
    let mut cfg = config::load_config(args.config.as_deref().map(Path::new)).await?;
    if let Some(host) = args.host {
        cfg.server.host = host;
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    info!(addr = %addr, "Starting API server");

    let state = api::AppState::new(cfg);
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| PageLensError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
