//! HTTP probe against live mock servers.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use fleet_health::config::ProbeConfig;
use fleet_health::health::{HealthProbe, HttpProbe, ProbeErrorKind};

mod common;

fn config() -> ProbeConfig {
    ProbeConfig {
        system_proxy: false,
        ..ProbeConfig::default()
    }
}

fn probe() -> HttpProbe {
    HttpProbe::new(config()).unwrap()
}

#[tokio::test]
async fn test_healthy_server_yields_record() {
    let addr = common::start_mock_backend(200, common::health_body("svc", "1.0", 100, 95)).await;

    let record = probe().probe(&addr.to_string()).await.unwrap();
    assert_eq!(record.application, "svc");
    assert_eq!(record.version, "1.0");
    assert_eq!(record.uptime, 3600);
    assert_eq!(record.request_count, 100);
    assert_eq!(record.error_count, 5);
    assert_eq!(record.success_count, 95);
}

#[tokio::test]
async fn test_non_200_is_failure() {
    let addr = common::start_mock_backend(503, common::health_body("svc", "1.0", 1, 1)).await;

    let err = probe().probe(&addr.to_string()).await.unwrap_err();
    assert_eq!(err.address, addr.to_string());
    assert!(matches!(err.kind, ProbeErrorKind::Status(503)));
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let addr = common::start_mock_backend(200, r#"{"application":"svc"}"#.to_string()).await;

    let err = probe().probe(&addr.to_string()).await.unwrap_err();
    assert!(matches!(err.kind, ProbeErrorKind::Decode(_)));

    let addr = common::start_mock_backend(200, "not json".to_string()).await;
    let err = probe().probe(&addr.to_string()).await.unwrap_err();
    assert!(matches!(err.kind, ProbeErrorKind::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    let addr = common::refused_address().await;

    let err = probe().probe(&addr.to_string()).await.unwrap_err();
    assert!(matches!(err.kind, ProbeErrorKind::Transport(_)));
    assert!(err.to_string().starts_with(&format!("probe of {} failed", addr)));
}

#[tokio::test]
async fn test_configured_timeout_applies() {
    let addr = common::start_hung_backend().await;
    let probe = HttpProbe::new(ProbeConfig {
        timeout_secs: Some(1),
        ..config()
    })
    .unwrap();

    let start = Instant::now();
    let err = probe.probe(&addr.to_string()).await.unwrap_err();
    assert!(matches!(err.kind, ProbeErrorKind::Timeout));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_single_request_no_retry() {
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();
    let addr = common::start_programmable_backend(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (500, "boom".to_string())
        }
    })
    .await;

    assert!(probe().probe(&addr.to_string()).await.is_err());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
