use std::sync::Arc;

use axum::{Extension, http::StatusCode};

use crate::{management, management::JobContext, success, warning};

pub async fn trigger(
    Extension(ctx): Extension<Arc<JobContext>>,
) -> (StatusCode, &'static str) {
    match management::run(&ctx).await {
        Ok(summary) => {
            success!(
                "Ingested {} artists and {} tracks into {}",
                summary.artist_count,
                summary.track_count,
                summary.destination
            );
            (StatusCode::OK, "Artist Pulse ingested!")
        }
        Err(e) => {
            warning!("Job error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error")
        }
    }
}
