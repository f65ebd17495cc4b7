//! BDD step definitions for the dashboard server feature

use std::net::SocketAddr;

use beacon::{load_config, Config};
use cucumber::{given, then, when};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::world::BeaconWorld;

#[given(expr = "a catalog file with a service {string} described as {string} at {string}")]
fn catalog_file(world: &mut BeaconWorld, name: String, description: String, url: String) {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "services": [{
            "name": name,
            "description": description,
            "url": url,
            "icon": "fas fa-chart-line",
            "color": "#f9e2af"
        }]
    });
    std::fs::write(&config_path, config.to_string()).unwrap();

    world.config = Some(load_config(&config_path).unwrap());
    world.config_dir = Some(dir);
}

#[given("a built front end")]
fn built_front_end(world: &mut BeaconWorld) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        r#"<html><body><script type="module" src="/app/beacon-app.js"></script></body></html>"#,
    )
    .unwrap();

    let mut config = world.config.take().unwrap_or_default();
    config.server.app_dir = Some(dir.path().to_path_buf());
    world.config = Some(config);
    world.app_dir = Some(dir);
}

#[given("a running dashboard server")]
async fn running_server(world: &mut BeaconWorld) {
    let config = world.config.take().unwrap_or_else(Config::default);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let cancel = CancellationToken::new();

    let cancel_for_server = cancel.clone();
    tokio::spawn(async move {
        beacon::serve(config, listener, cancel_for_server)
            .await
            .expect("server failed");
    });

    world.server_addr = Some(addr);
    world.server_cancel = Some(cancel);
}

#[when(expr = "I request {string}")]
async fn request_path(world: &mut BeaconWorld, path: String) {
    let addr = world.server_addr.expect("server not running");
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let response = client
        .get(format!("http://{}{}", addr, path))
        .send()
        .await
        .unwrap();

    world.response_status = Some(response.status().as_u16());
    world.response_location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    world.response_body = Some(response.text().await.unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut BeaconWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut BeaconWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut BeaconWorld, unexpected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(!body.contains(&unexpected));
}

#[then(expr = "the response should redirect to {string}")]
fn response_redirects(world: &mut BeaconWorld, location: String) {
    assert_eq!(world.response_location.as_deref(), Some(location.as_str()));
}
