//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! ingestion job: credential management and the data-retrieval endpoints
//! the extraction pipeline depends on. It handles all HTTP communication,
//! authentication, error handling and rate limiting against Spotify's
//! services.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 Client Credentials)
//!     └── Artist Operations (Metadata, Top Tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials flow:
//! - **Token Exchange**: Basic-authenticated POST against the token endpoint
//! - **In-Memory Caching**: At most one live credential per process
//! - **Proactive Renewal**: Tokens are refreshed before expiry with a safety
//!   margin, so a token never expires mid-request
//! - **Single-Flight Renewal**: Concurrent callers racing an expired cache
//!   share one exchange instead of issuing redundant requests
//!
//! The application authenticates as itself (no end user), so there is no
//! authorization redirect, no refresh token and no persisted token state;
//! the credential lives for the process lifetime at most.
//!
//! ### Artist Operations Module
//!
//! [`artists`] - Handles the data endpoints consumed by the extractor:
//! - **Batch Metadata**: Up to 50 artists per `/artists` request
//! - **Top Tracks**: Per-artist, per-market top-track listings
//! - **Rate Limiting**: Respects `Retry-After` on 429 responses
//! - **Transient Errors**: Retries 502 Bad Gateway with a fixed delay
//!
//! ## Error Handling Philosophy
//!
//! Authentication errors are typed ([`auth::AuthError`]) and never retried
//! inside the credential manager; the orchestrating job decides whether a
//! failed run is retried. Data-endpoint errors propagate as
//! `reqwest::Error` for the caller to classify; only well-understood
//! transient statuses (429 with Retry-After, 502) are retried in place.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /artists` - Batch artist metadata
//! - `GET /artists/{id}/top-tracks` - Top tracks per artist and market
//!
//! ## Configuration Integration
//!
//! Endpoint base URLs come from the configuration module and can be
//! overridden through the environment, which is how the test suite points
//! the client at a local mock server.

pub mod artists;
pub mod auth;
