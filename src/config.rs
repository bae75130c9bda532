//! Configuration management for the Artist Pulse ingestion job.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file, and owns the fixed roster of
//! monitored artists. It provides a centralized way to manage application
//! configuration including Spotify API credentials, object-store settings
//! and the trigger server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)
//!
//! Spotify credentials deliberately have no default and are returned as-is
//! (possibly empty); validating them is the job of the credential manager,
//! which turns missing values into a typed configuration error before any
//! network call is made.

use std::env;

use crate::types::RosterArtist;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are silently ignored so that deployed environments which
/// configure the process purely through real environment variables work
/// without a `.env` file present.
///
/// # Example
///
/// ```
/// use artistpulse::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address for the HTTP trigger server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the trigger server should bind. Defaults to
/// `0.0.0.0:8080`, the conventional address for containerized jobs.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "0.0.0.0:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform. Returns an empty string when unset; the credential
/// manager rejects empty credentials with a configuration error.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application
/// with Spotify's developer platform. Returns an empty string when unset;
/// the credential manager rejects empty credentials with a configuration
/// error.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let client_secret = spotify_client_secret(); // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. Defaults to the public API
/// host; tests point this at a local mock server.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which
/// contains the URL of the client-credentials token endpoint. Defaults to
/// the public accounts host.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the target object-store bucket for snapshots.
///
/// Retrieves the `GCS_BUCKET` environment variable naming the bucket that
/// receives snapshot uploads.
///
/// # Example
///
/// ```
/// let bucket = storage_bucket(); // e.g., "your-spotify-raw-bucket"
/// ```
pub fn storage_bucket() -> String {
    env::var("GCS_BUCKET").unwrap_or_else(|_| "your-spotify-raw-bucket".to_string())
}

/// Returns the object-store upload API base URL.
///
/// Retrieves the `STORAGE_UPLOAD_URL` environment variable, defaulting to
/// the Google Cloud Storage JSON media-upload endpoint. Tests point this at
/// a local mock server.
///
/// # Example
///
/// ```
/// let url = storage_upload_url(); // e.g., "https://storage.googleapis.com/upload/storage/v1"
/// ```
pub fn storage_upload_url() -> String {
    env::var("STORAGE_UPLOAD_URL")
        .unwrap_or_else(|_| "https://storage.googleapis.com/upload/storage/v1".to_string())
}

/// Returns the bearer token used for object-store uploads.
///
/// Retrieves the `STORAGE_ACCESS_TOKEN` environment variable. The runtime
/// environment is expected to provision this token (service account or
/// workload identity); exchanging ambient credentials for one is outside
/// the scope of this job.
pub fn storage_token() -> String {
    env::var("STORAGE_ACCESS_TOKEN").unwrap_or_default()
}

/// Returns the fixed roster of monitored artists.
///
/// The roster is hard-coded: the job tracks a curated set of artists
/// (Global + BR markets) rather than a user-specific collection. IDs
/// validated against the Spotify catalog on 2025-11-11.
pub fn artist_roster() -> Vec<RosterArtist> {
    vec![
        RosterArtist::new("4iHNK0tOyZPYnBU7nGAgpQ", "Mariah Carey", "GB"),
        RosterArtist::new("5lpH0xAS4fVfLkACg9DAuM", "Wham!", "GB"),
        RosterArtist::new("4cPHsZM98sKzmV26wlwD2W", "Brenda Lee", "GB"),
        RosterArtist::new("1GxkXlMwML1oSg5eLPiAz3", "Michael Bublé", "GB"),
        RosterArtist::new("66CXWjxzNUsdJxJ2JdwvnR", "Ariana Grande", "GB"),
        RosterArtist::new("0sgV4klGs1Y1dgbBi28JlD", "Simone", "BR"),
        RosterArtist::new("7fAKtXSdNInWAIf0jVUz65", "Roberto Carlos", "BR"),
    ]
}
