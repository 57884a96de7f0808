use retinascan::config::HostConfig;
use retinascan::routes;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env().expect("invalid host configuration");
    if let Err(e) = config.check_bundle() {
        tracing::warn!(error = %e, "bundle not found; every path will return 404 until it is built");
    }

    let app = routes::app(&config.dist_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, dist_dir = %config.dist_dir.display(), "retinascan listening");
    axum::serve(listener, app).await.expect("server failed");
}
