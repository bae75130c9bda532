//! # CLI Module
//!
//! This module provides the command-line interface layer for the Artist
//! Pulse ingestion job. It implements all user-facing commands and
//! coordinates between the management layer, the Spotify integration and
//! the trigger server.
//!
//! ## Commands
//!
//! ### Job Execution
//!
//! - [`ingest`] - Runs one ingestion locally: extracts the roster snapshot,
//!   uploads it to the object store (or skips the upload with `--dry-run`)
//!   and reports a summary. An optional `--date` overrides the snapshot
//!   date for backfills.
//! - [`serve`] - Starts the HTTP trigger server so an external scheduler
//!   can invoke the job.
//!
//! ### Information Commands
//!
//! - [`roster`] - Displays the fixed roster of monitored artists.
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Extraction, Upload, Orchestration)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command assembles the job context once, delegates to the
//! management layer and handles user interaction, progress feedback and
//! error presentation.
//!
//! ## Error Handling Philosophy
//!
//! CLI commands are entry points: unrecoverable failures terminate the
//! process with a clear message via the `error!` macro. Recoverable
//! conditions (a single artist's top tracks unavailable, a retried upload
//! attempt) surface as warnings and the run continues.
//!
//! ## Progress and User Experience
//!
//! Long-running operations provide feedback through spinners and the
//! structured output macros, with success confirmation and counts when a
//! run completes.

mod ingest;
mod roster;
mod serve;

pub use ingest::ingest;
pub use roster::roster;
pub use serve::serve;
