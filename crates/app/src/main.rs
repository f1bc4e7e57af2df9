use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_api::{FetchConfig, HttpCatalog};
use catalog_gui::GuiOptions;

fn init_tracing() {
    let env = std::env::var("CATALOG_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn init_metrics() {
    if let Ok(addr) = std::env::var("CATALOG_METRICS_ADDR") {
        if let Ok(sock) = addr.parse::<std::net::SocketAddr>() {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            match builder.with_http_listener(sock).install() {
                Ok(_) => tracing::info!(addr = %addr, "Prometheus metrics exporter listening"),
                Err(e) => tracing::warn!(error = %e, "failed to install metrics exporter"),
            }
        } else {
            tracing::warn!(addr = %addr, "invalid CATALOG_METRICS_ADDR; expected host:port");
        }
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    init_tracing();
    init_metrics();
    let cfg = FetchConfig::from_env();
    tracing::info!(url = %cfg.url, timeout_secs = cfg.timeout.as_secs(), "catalog config");
    let api = HttpCatalog::new(&cfg).context("building catalog client")?;
    catalog_gui::run_native(Arc::new(api), GuiOptions::from_env())
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))?;
    Ok(())
}
