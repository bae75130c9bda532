use std::time::Duration;

use mockito::Matcher;

use artistpulse::management::{SnapshotUploader, UploadError};

fn uploader(server_url: &str) -> SnapshotUploader {
    SnapshotUploader::new("test-bucket", server_url, "storage-token")
        .with_retries(3)
        .with_base_delay(Duration::from_millis(10))
}

#[tokio::test]
async fn test_upload_succeeds_first_attempt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/b/test-bucket/o")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("uploadType".to_string(), "media".to_string()),
            Matcher::UrlEncoded(
                "name".to_string(),
                "bronze/artists/2025-12-01/snapshot.json".to_string(),
            ),
        ]))
        .match_header("authorization", "Bearer storage-token")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"name": "bronze/artists/2025-12-01/snapshot.json"}"#)
        .expect(1)
        .create_async()
        .await;

    let result = uploader(&server.url())
        .upload(
            r#"{"snapshot_date":"2025-12-01"}"#,
            "bronze/artists/2025-12-01/snapshot.json",
        )
        .await;

    assert!(result.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_exhausts_retries_and_surfaces_last_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/b/test-bucket/o")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("backend unavailable")
        .expect(3)
        .create_async()
        .await;

    let result = uploader(&server.url())
        .upload("{}", "bronze/artists/2025-12-01/snapshot.json")
        .await;

    match result {
        Err(UploadError::Http { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert!(body.contains("backend unavailable"));
        }
        other => panic!("expected http error, got {:?}", other.map(|_| ())),
    }

    // One attempt per unit of the retry budget, no more
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_transport_failure_is_a_network_error() {
    // Nothing listens on this port
    let result = SnapshotUploader::new("test-bucket", "http://127.0.0.1:9", "storage-token")
        .with_retries(1)
        .with_base_delay(Duration::from_millis(1))
        .upload("{}", "bronze/artists/2025-12-01/snapshot.json")
        .await;

    assert!(matches!(result, Err(UploadError::Network(_))));
}
