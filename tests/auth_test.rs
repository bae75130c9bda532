use std::{sync::Arc, time::Duration};

use chrono::Utc;
use mockito::Matcher;

use artistpulse::spotify::auth::{AuthError, CredentialManager};
use artistpulse::types::Credential;

// Helper to build a manager pointed at a mock token endpoint
fn manager(server_url: &str) -> CredentialManager {
    CredentialManager::new("test-client", "test-secret", &format!("{}/api/token", server_url))
        .unwrap()
}

// Helper to build a token endpoint response body
fn token_body(token: &str, expires_in: i64) -> String {
    format!(
        r#"{{"access_token":"{}","token_type":"Bearer","expires_in":{}}}"#,
        token, expires_in
    )
}

#[test]
fn test_credential_validity_boundaries() {
    let margin = chrono::Duration::seconds(60);
    let cred = Credential {
        access_token: "abc".to_string(),
        expires_at: 1_000,
    };

    // Strictly more than a margin of lifetime left
    assert!(cred.is_valid(margin, 939));

    // Exactly a margin left counts as expired
    assert!(!cred.is_valid(margin, 940));

    // Past expiry
    assert!(!cred.is_valid(margin, 2_000));

    // A zero margin only requires any lifetime at all
    assert!(cred.is_valid(chrono::Duration::seconds(0), 999));
    assert!(!cred.is_valid(chrono::Duration::seconds(0), 1_000));
}

#[tokio::test]
async fn test_first_call_exchanges_then_caches() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
        .match_body("grant_type=client_credentials")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("abc", 3600))
        .expect(1)
        .create_async()
        .await;

    let manager = manager(&server.url());

    // First call performs exactly one exchange
    assert_eq!(manager.get_token().await.unwrap(), "abc");

    // Second call within the validity window is served from cache
    assert_eq!(manager.get_token().await.unwrap(), "abc");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_returned_token_has_margin_of_validity_left() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("abc", 3600))
        .create_async()
        .await;

    let manager = manager(&server.url());
    manager.get_token().await.unwrap();

    let cred = manager.credential().await.unwrap();
    assert_eq!(cred.access_token, "abc");
    assert!(cred.is_valid(chrono::Duration::seconds(60), Utc::now().timestamp()));

    // expires_at is consistent with the advertised lifetime
    let now = Utc::now().timestamp();
    assert!(cred.expires_at > now + 3500 && cred.expires_at <= now + 3700);
}

#[tokio::test]
async fn test_short_lived_token_degrades_to_exchange_per_call() {
    let mut server = mockito::Server::new_async().await;
    // expires_in below the 60s renewal margin: the token is cached but can
    // never satisfy the validity check
    let mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("abc", 30))
        .expect(2)
        .create_async()
        .await;

    let manager = manager(&server.url());

    // Every call still succeeds, at the cost of one exchange each
    assert_eq!(manager.get_token().await.unwrap(), "abc");
    assert_eq!(manager.get_token().await.unwrap(), "abc");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_short_lived_token_is_cached_under_smaller_margin() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("abc", 30))
        .expect(1)
        .create_async()
        .await;

    let manager = CredentialManager::new(
        "test-client",
        "test-secret",
        &format!("{}/api/token", server.url()),
    )
    .unwrap()
    .with_renewal_margin(chrono::Duration::seconds(0));

    assert_eq!(manager.get_token().await.unwrap(), "abc");
    assert_eq!(manager.get_token().await.unwrap(), "abc");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_exchange_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/token")
        .with_status(401)
        .with_body(r#"{"error": "invalid_client"}"#)
        .create_async()
        .await;

    let manager = manager(&server.url());

    match manager.get_token().await {
        Err(AuthError::Exchange { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid_client"));
        }
        other => panic!("expected exchange error, got {:?}", other.map(|_| ())),
    }

    // Nothing was cached from the failed exchange
    assert!(manager.credential().await.is_none());
}

#[tokio::test]
async fn test_malformed_success_response_is_an_exchange_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let manager = manager(&server.url());

    match manager.renew().await {
        Err(AuthError::Exchange { status, .. }) => assert_eq!(status.as_u16(), 200),
        other => panic!("expected exchange error, got {:?}", other.map(|_| ())),
    }
    assert!(manager.credential().await.is_none());

    // Missing expires_in is just as malformed as a missing token
    let _mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(r#"{"access_token": "abc"}"#)
        .create_async()
        .await;

    assert!(matches!(
        manager.renew().await,
        Err(AuthError::Exchange { .. })
    ));
    assert!(manager.credential().await.is_none());
}

#[tokio::test]
async fn test_failed_renewal_leaves_previous_credential_usable() {
    let mut server = mockito::Server::new_async().await;
    let ok_mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("abc", 3600))
        .expect(1)
        .create_async()
        .await;

    let manager = manager(&server.url());
    assert_eq!(manager.get_token().await.unwrap(), "abc");

    // Endpoint starts rejecting; a forced renewal fails...
    ok_mock.remove_async().await;
    let _reject = server
        .mock("POST", "/api/token")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    assert!(matches!(
        manager.renew().await,
        Err(AuthError::Exchange { .. })
    ));

    // ...but the previously cached, still-valid token keeps serving
    assert_eq!(manager.get_token().await.unwrap(), "abc");
}

#[tokio::test]
async fn test_renew_replaces_credential_atomically() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("first", 3600))
        .create_async()
        .await;

    let manager = manager(&server.url());
    assert_eq!(manager.get_token().await.unwrap(), "first");

    first.remove_async().await;
    let _second = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("second", 7200))
        .create_async()
        .await;

    assert_eq!(manager.renew().await.unwrap(), "second");

    // Token and expiry moved together: no mixed credential observable
    let cred = manager.credential().await.unwrap();
    let now = Utc::now().timestamp();
    assert_eq!(cred.access_token, "second");
    assert!(cred.expires_at > now + 7100 && cred.expires_at <= now + 7300);
}

#[test]
fn test_empty_credentials_fail_construction_without_network() {
    // No server exists at this address; construction must fail first
    match CredentialManager::new("", "secret", "http://127.0.0.1:1/api/token") {
        Err(AuthError::Configuration(msg)) => assert!(msg.contains("client_id")),
        _ => panic!("expected configuration error"),
    }

    match CredentialManager::new("client", "   ", "http://127.0.0.1:1/api/token") {
        Err(AuthError::Configuration(msg)) => assert!(msg.contains("client_secret")),
        _ => panic!("expected configuration error"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    // Nothing listens on this port
    let manager =
        CredentialManager::new("test-client", "test-secret", "http://127.0.0.1:9/api/token")
            .unwrap();

    assert!(matches!(
        manager.get_token().await,
        Err(AuthError::Network(_))
    ));
    assert!(manager.credential().await.is_none());
}

#[tokio::test]
async fn test_slow_endpoint_hits_request_timeout() {
    let mut server = mockito::Server::new_async().await;
    let body = token_body("abc", 3600).into_bytes();
    let _mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body_from_request(move |_| {
            std::thread::sleep(Duration::from_millis(500));
            body.clone()
        })
        .create_async()
        .await;

    let manager = CredentialManager::new(
        "test-client",
        "test-secret",
        &format!("{}/api/token", server.url()),
    )
    .unwrap()
    .with_request_timeout(Duration::from_millis(100));

    assert!(matches!(
        manager.get_token().await,
        Err(AuthError::Network(_))
    ));
}

#[tokio::test]
async fn test_concurrent_callers_share_a_single_exchange() {
    let mut server = mockito::Server::new_async().await;
    let body = token_body("racer", 3600).into_bytes();
    // Slow endpoint: widens the race window so all callers pile up on the
    // renewal before it completes
    let mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body_from_request(move |_| {
            std::thread::sleep(Duration::from_millis(200));
            body.clone()
        })
        .expect(1)
        .create_async()
        .await;

    let manager = Arc::new(manager(&server.url()));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let mgr = Arc::clone(&manager);
        handles.push(tokio::spawn(async move { mgr.get_token().await }));
    }

    for handle in handles {
        let token = handle.await.unwrap().unwrap();
        assert_eq!(token, "racer");
    }

    // Exactly one exchange served all ten callers
    mock.assert_async().await;

    // Final cached state is consistent and valid
    let cred = manager.credential().await.unwrap();
    assert_eq!(cred.access_token, "racer");
    assert!(cred.is_valid(chrono::Duration::seconds(60), Utc::now().timestamp()));
}
