use std::{fmt, time::Duration};

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::types::Credential;

/// Safety margin subtracted from a token's lifetime when deciding whether
/// it is still usable. A token within this margin of its expiry is renewed
/// proactively so it cannot expire mid-request.
pub const DEFAULT_RENEWAL_MARGIN: chrono::Duration = chrono::Duration::seconds(60);

/// Upper bound on a single token-exchange request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by the credential manager.
///
/// Exchange failures are never retried internally and never touch the
/// cached credential; retry policy belongs to the orchestrating job.
#[derive(Debug)]
pub enum AuthError {
    /// Missing or empty client credentials. Fatal to construction; raised
    /// before any network call is attempted.
    Configuration(String),
    /// The token endpoint answered with a non-200 status, or a 200 response
    /// missing the `access_token`/`expires_in` fields.
    Exchange { status: StatusCode, body: String },
    /// Transport failure (connect error, timeout) while reaching the token
    /// endpoint.
    Network(reqwest::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            AuthError::Exchange { status, body } => {
                write!(f, "token exchange failed: {} - {}", status, body)
            }
            AuthError::Network(err) => write!(f, "token endpoint unreachable: {}", err),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network(err)
    }
}

/// Owns acquisition, caching and renewal of the bearer token obtained via
/// the OAuth2 client-credentials flow.
///
/// The manager holds at most one live [`Credential`] behind a mutex. The
/// lock is held across the token exchange, which gives single-flight
/// renewal for free: when several callers race against an unset or expired
/// cache, one performs the exchange while the rest queue on the lock,
/// re-check the freshly replaced credential and return it without any
/// additional network call. Callers waiting on an in-flight renewal are
/// bounded by the same request timeout as the renewal itself.
///
/// Replacement is all-or-nothing: a failed exchange leaves the previous
/// credential (if any) in place, so a still-valid token keeps serving
/// callers even after a renewal attempt fails.
pub struct CredentialManager {
    client: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    renewal_margin: chrono::Duration,
    request_timeout: Duration,
    credential: Mutex<Option<Credential>>,
}

impl CredentialManager {
    /// Creates a manager for the given application credentials and token
    /// endpoint.
    ///
    /// Fails with [`AuthError::Configuration`] when either credential is
    /// empty or blank; no network call is ever attempted with invalid
    /// credentials.
    pub fn new(client_id: &str, client_secret: &str, token_url: &str) -> Result<Self, AuthError> {
        if client_id.trim().is_empty() {
            return Err(AuthError::Configuration(
                "client_id must not be empty".to_string(),
            ));
        }
        if client_secret.trim().is_empty() {
            return Err(AuthError::Configuration(
                "client_secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token_url: token_url.to_string(),
            renewal_margin: DEFAULT_RENEWAL_MARGIN,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            credential: Mutex::new(None),
        })
    }

    /// Overrides the renewal margin (default 60 seconds).
    pub fn with_renewal_margin(mut self, margin: chrono::Duration) -> Self {
        self.renewal_margin = margin;
        self
    }

    /// Overrides the token-exchange request timeout (default 10 seconds).
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns a currently valid bearer token, exchanging credentials with
    /// the token endpoint only when the cached token is absent or within
    /// the renewal margin of its expiry.
    ///
    /// When the endpoint issues tokens with `expires_in` at or below the
    /// renewal margin, the token is still cached and returned (it is the
    /// best available), but every subsequent call re-exchanges. The manager
    /// degrades to one exchange per call instead of failing.
    pub async fn get_token(&self) -> Result<String, AuthError> {
        let mut credential = self.credential.lock().await;

        if let Some(cred) = credential.as_ref() {
            if cred.is_valid(self.renewal_margin, Utc::now().timestamp()) {
                return Ok(cred.access_token.clone());
            }
        }

        let fresh = self.exchange().await?;
        let token = fresh.access_token.clone();
        *credential = Some(fresh);
        Ok(token)
    }

    /// Forces a token exchange regardless of cached state and returns the
    /// new token. The cached credential is replaced only on success.
    pub async fn renew(&self) -> Result<String, AuthError> {
        let mut credential = self.credential.lock().await;

        let fresh = self.exchange().await?;
        let token = fresh.access_token.clone();
        *credential = Some(fresh);
        Ok(token)
    }

    /// A copy of the currently cached credential, if any.
    pub async fn credential(&self) -> Option<Credential> {
        self.credential.lock().await.clone()
    }

    async fn exchange(&self) -> Result<Credential, AuthError> {
        let response = self
            .client
            .post(&self.token_url)
            .timeout(self.request_timeout)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(AuthError::Exchange { status, body });
        }

        let json: Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(_) => return Err(AuthError::Exchange { status, body }),
        };

        let access_token = match json["access_token"].as_str() {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => return Err(AuthError::Exchange { status, body }),
        };
        let expires_in = match json["expires_in"].as_i64() {
            Some(secs) => secs,
            None => return Err(AuthError::Exchange { status, body }),
        };

        Ok(Credential {
            access_token,
            expires_at: Utc::now().timestamp() + expires_in,
        })
    }
}
