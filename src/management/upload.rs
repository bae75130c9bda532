use std::{fmt, time::Duration};

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{info, utils, warning};

#[derive(Debug)]
pub enum UploadError {
    Http { status: StatusCode, body: String },
    Network(reqwest::Error),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Http { status, body } => {
                write!(f, "upload rejected: {} - {}", status, body)
            }
            UploadError::Network(err) => write!(f, "upload transport failure: {}", err),
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UploadError::Network(err) => Some(err),
            UploadError::Http { .. } => None,
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Network(err)
    }
}

/// Uploads JSON snapshots to an object-store bucket via the media-upload
/// API, retrying a fixed number of attempts with exponential backoff and
/// surfacing the last error once the attempt budget is spent.
pub struct SnapshotUploader {
    client: Client,
    bucket: String,
    base_url: String,
    token: String,
    retries: u32,
    base_delay: Duration,
}

impl SnapshotUploader {
    pub fn new(bucket: &str, base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            bucket: bucket.to_string(),
            base_url: base_url.to_string(),
            token: token.to_string(),
            retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }

    /// Overrides the attempt budget (default 3).
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Overrides the first retry delay (default 1 second); it doubles per
    /// attempt.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub async fn upload(&self, data: &str, destination: &str) -> Result<(), UploadError> {
        let url = format!(
            "{base}/b/{bucket}/o",
            base = self.base_url,
            bucket = self.bucket
        );

        let mut attempt = 0;
        loop {
            attempt += 1;

            match self.try_upload(&url, data, destination).await {
                Ok(()) => {
                    info!("Upload successful: gs://{}/{}", self.bucket, destination);
                    return Ok(());
                }
                Err(err) => {
                    warning!("Upload attempt {} failed: {}", attempt, err);
                    if attempt >= self.retries {
                        warning!("Upload failed after {} attempts", attempt);
                        return Err(err);
                    }

                    let delay = utils::backoff_delay(attempt, self.base_delay);
                    info!("Retrying in {} seconds...", delay.as_secs());
                    sleep(delay).await;
                }
            }
        }
    }

    async fn try_upload(&self, url: &str, data: &str, destination: &str) -> Result<(), UploadError> {
        let response = self
            .client
            .post(url)
            .query(&[("uploadType", "media"), ("name", destination)])
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .body(data.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Http { status, body });
        }

        Ok(())
    }
}
