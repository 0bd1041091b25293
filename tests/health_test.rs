//! Integration tests for the liveness and readiness endpoints

use async_trait::async_trait;
use catalog::adapters::repository::{ConnectivityProbe, Storage};
use catalog::api::{router, AppState};
use catalog::core::HealthReporter;
use catalog::domain::{CatalogError, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(Arc::new(state))).await.unwrap();
    });
    format!("http://{addr}")
}

struct FailingProbe;

#[async_trait]
impl ConnectivityProbe for FailingProbe {
    fn name(&self) -> &str {
        "cosmosdb"
    }

    async fn test_connection(&self) -> Result<()> {
        Err(CatalogError::Connection("connection refused".to_string()))
    }
}

struct SlowProbe;

#[async_trait]
impl ConnectivityProbe for SlowProbe {
    fn name(&self) -> &str {
        "postgresql"
    }

    async fn test_connection(&self) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }
}

#[derive(Default)]
struct CountingProbe {
    calls: AtomicUsize,
}

#[async_trait]
impl ConnectivityProbe for CountingProbe {
    fn name(&self) -> &str {
        "counting"
    }

    async fn test_connection(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn state_with_probe(probe: Arc<dyn ConnectivityProbe>, timeout: Duration) -> AppState {
    AppState {
        repository: Storage::in_memory().repository,
        health: HealthReporter::new(timeout).with_probe(probe),
    }
}

#[tokio::test]
async fn test_ready_when_storage_reachable() {
    let base = spawn(AppState::from_storage(
        Storage::in_memory(),
        Duration::from_secs(5),
    ))
    .await;

    let response = reqwest::get(format!("{base}/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Healthy");
    assert_eq!(body["checks"][0]["name"], "memory");
    assert_eq!(body["checks"][0]["status"], "Healthy");
    assert_eq!(body["checks"][0]["exception"], "none");
    assert!(body["checks"][0]["duration"]
        .as_str()
        .unwrap()
        .starts_with("00:00:0"));
}

#[tokio::test]
async fn test_not_ready_when_probe_fails() {
    let base = spawn(state_with_probe(Arc::new(FailingProbe), Duration::from_secs(5))).await;

    let response = reqwest::get(format!("{base}/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Unhealthy");
    assert_eq!(body["checks"][0]["name"], "cosmosdb");
    assert!(body["checks"][0]["exception"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_not_ready_when_probe_times_out() {
    let base = spawn(state_with_probe(
        Arc::new(SlowProbe),
        Duration::from_millis(200),
    ))
    .await;

    let started = std::time::Instant::now();
    let response = reqwest::get(format!("{base}/health/ready")).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["checks"][0]["name"], "postgresql");
    assert!(body["checks"][0]["exception"]
        .as_str()
        .unwrap()
        .contains("timed out"));
}

#[tokio::test]
async fn test_live_runs_no_checks() {
    let probe = Arc::new(CountingProbe::default());
    let base = spawn(state_with_probe(probe.clone(), Duration::from_secs(5))).await;

    // Liveness stays healthy regardless of storage
    let response = reqwest::get(format!("{base}/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Healthy");
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);

    reqwest::get(format!("{base}/health/ready")).await.unwrap();
    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_live_healthy_even_when_storage_down() {
    let base = spawn(state_with_probe(Arc::new(FailingProbe), Duration::from_secs(5))).await;

    let response = reqwest::get(format!("{base}/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
