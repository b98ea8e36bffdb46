//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use shortener::client::ShortenClient;
use shortener::config::ServiceConfig;
use shortener::submission::SubmissionController;
use shortener::ui::app::App;
use shortener::ui::events::AppEvent;
use shortener::ui::form::FormIntent;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tempfile::TempDir;

pub const LONG_URL: &str = "https://example.com/very/long/path";
pub const SHORT_URL: &str = "https://short.ly/abc123";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn make_controller(base_url: &str) -> SubmissionController {
    let service = ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    SubmissionController::new(ShortenClient::new(&service).expect("client builds"))
}

/// Build an `App` bound to `runtime`, returning the receiving end of its
/// event queue so tests can play the UI thread.
pub fn make_app(base_url: &str, runtime: &tokio::runtime::Runtime) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let app = App::new(make_controller(base_url), runtime.handle().clone(), tx);
    (app, rx)
}

/// Wait for the next settled submission on the event queue.
pub fn wait_settled(rx: &Receiver<AppEvent>, timeout: Duration) -> FormIntent {
    let deadline = std::time::Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(AppEvent::SubmissionSettled(intent)) => return intent,
            Ok(_) => continue,
            Err(err) => panic!("no settled submission: {:?}", err),
        }
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
