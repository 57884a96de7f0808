//! Boots the host on an ephemeral port against a throwaway bundle.

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::StatusCode;

const INDEX: &str = "<!doctype html><title>RetinaScan</title><div id=\"root\"></div>";
const SCRIPT: &str = "console.log('retinascan');";

fn bundle(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("retinascan-{name}-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    std::fs::write(dir.join("index.html"), INDEX).unwrap();
    std::fs::write(dir.join("assets/app.js"), SCRIPT).unwrap();
    dir
}

async fn spawn_host(name: &str) -> SocketAddr {
    let dir = bundle(name);
    let app = retinascan::routes::app(&dir);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn healthz_reports_ok() {
    let addr = spawn_host("healthz").await;
    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let addr = spawn_host("root").await;
    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), INDEX);
}

#[tokio::test]
async fn bundle_assets_are_served() {
    let addr = spawn_host("assets").await;
    let resp = reqwest::get(format!("http://{addr}/assets/app.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), SCRIPT);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index_with_ok() {
    let addr = spawn_host("fallback").await;
    for path in ["/retina-scan", "/login", "/some/deep/link"] {
        let resp = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        assert_eq!(resp.text().await.unwrap(), INDEX, "{path}");
    }
}
