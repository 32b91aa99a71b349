use anyhow::Context;
use colored::Colorize;
use tracing::info;

use driftforce_server::api::route::create_router;
use driftforce_server::api::setup::{init_tracing, server_port};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_tracing();

    let port = server_port();
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    info!("{}", "🌊 DriftForce Backend Started! 🌊".bold());
    info!("Server: http://localhost:{}", port);
    info!("API: http://localhost:{}/api/drifts", port);

    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;

    Ok(())
}
