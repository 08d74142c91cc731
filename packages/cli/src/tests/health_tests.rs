use crate::api::health::health_check;
use chrono::DateTime;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let result = health_check().await;
    assert!(result.is_ok());

    let json = result.unwrap();
    let value = json.0;

    assert_eq!(value.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert_eq!(
        value.get("service").and_then(|v| v.as_str()),
        Some("sightline-cli")
    );
    assert!(value.get("timestamp").is_some());
    assert!(value.get("version").is_some());
}

#[tokio::test]
async fn test_health_check_timestamp_is_parseable() {
    let result = health_check().await.unwrap();
    let value = result.0;

    let timestamp = value.get("timestamp").and_then(|v| v.as_str()).unwrap();

    let parsed = DateTime::parse_from_rfc3339(timestamp);
    assert!(parsed.is_ok());
    // Timestamp should be reasonable (after year 2020)
    assert!(parsed.unwrap().timestamp() > 1577836800); // Jan 1, 2020
}

#[tokio::test]
async fn test_concurrent_health_checks() {
    use futures::future::join_all;

    // Make multiple concurrent health check requests
    let handles: Vec<_> = (0..10)
        .map(|_| tokio::spawn(async { health_check().await }))
        .collect();

    let results = join_all(handles).await;

    // All should succeed
    for result in results {
        assert!(result.is_ok());
        let health_result = result.unwrap();
        assert!(health_result.is_ok());
    }
}
