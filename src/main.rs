use lab_insight::api::start_api_server;
use lab_insight::config::{self, ServerConfig};

#[tokio::main]
async fn main() {
    lab_insight::init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let mut server = match start_api_server(server_config).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
    }

    server.shutdown();
    // Let in-flight requests drain before the runtime drops.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
}
