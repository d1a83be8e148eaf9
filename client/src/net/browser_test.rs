#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn build_env_only_answers_browser_keys() {
    assert_eq!(build_env("TOURBOOK_STATE_FILE"), None);
    assert_eq!(build_env("TOURBOOK_HTTP_TIMEOUT_SECS"), None);
}

#[test]
fn build_config_falls_back_to_defaults() {
    let config = build_config().unwrap();
    assert!(!config.api_base_url.is_empty());
    assert!(config.identity_base_url.starts_with("https://"));
}

#[tokio::test]
async fn transport_is_unavailable_without_browser() {
    let err = BrowserTransport
        .send(HttpRequest::get("https://example.com/api/packages"))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Unavailable(msg) if msg.contains("/api/packages")));
}

#[test]
fn local_store_reports_unavailable_without_browser() {
    let store = LocalStore;
    assert!(matches!(store.get("theme"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.set("theme", "dark"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.remove("theme"), Err(StorageError::Unavailable(_))));
}
