use anyhow::Result;
use axum::Router;
use tracing::{info, warn};
use webserve::{api, config::Config, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = Config::load()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            Bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    let app: Router = api::router(&cfg);
    let addr = cfg.server.socket_addr()?;

    info!(%addr, "starting webserve");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
