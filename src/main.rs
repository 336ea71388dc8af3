use std::env;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use marcador::api::routes::app_router;
use marcador::api::AppState;
use marcador::ScrapeClient;

const DEFAULT_IMAGES_URL: &str = "https://lordsmobilecartograph.ru/Kingdom?K=959";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let listen = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let images_url = env::var("IMAGES_URL").unwrap_or_else(|_| DEFAULT_IMAGES_URL.to_string());

    let state = AppState {
        client: ScrapeClient::new(),
        images_url,
    };

    let addr: SocketAddr = listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
