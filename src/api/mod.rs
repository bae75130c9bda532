//! # API Module
//!
//! This module provides the HTTP endpoints for the ingestion job's trigger
//! server. The job does not run continuously; an external scheduler POSTs
//! to the trigger endpoint, one ingestion runs, and the response status
//! reports the outcome.
//!
//! ## Endpoints
//!
//! ### Trigger
//!
//! - [`trigger`] - Runs one ingestion. Responds with a fixed confirmation
//!   message and `200 OK` on success, or a fixed error message and
//!   `500 Internal Server Error` when any part of the pipeline fails. The
//!   failure detail is logged server-side with full context and never
//!   leaks across the HTTP boundary, and no error propagates out of the
//!   handler unhandled.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information for monitoring systems and schedulers.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! The handlers share a single [`crate::management::JobContext`] assembled
//! at startup, so every trigger reuses the same credential manager and its
//! cached token instead of re-authenticating per request.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use artistpulse::api::{health, trigger};
//!
//! let app = Router::new()
//!     .route("/", post(trigger))
//!     .route("/health", get(health));
//! ```

mod health;
mod trigger;

pub use health::health;
pub use trigger::trigger;
