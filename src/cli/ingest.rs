use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    management::{self, JobContext},
    success, utils,
};

pub async fn ingest(date: Option<String>, dry_run: bool) {
    let ctx = match JobContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => error!("Cannot prepare ingestion job. Err: {}", e),
    };

    let snapshot_date = utils::resolve_snapshot_date(date);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Ingesting artist pulse for {}...", snapshot_date));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = management::run_for_date(&ctx, &snapshot_date, dry_run).await;
    pb.finish_and_clear();

    match result {
        Ok(summary) => {
            if dry_run {
                success!(
                    "Dry run complete: {} artists and {} tracks for {} (upload skipped)",
                    summary.artist_count,
                    summary.track_count,
                    summary.snapshot_date
                );
            } else {
                success!(
                    "Artist Pulse ingested! {} artists and {} tracks -> {}",
                    summary.artist_count,
                    summary.track_count,
                    summary.destination
                );
            }
        }
        Err(e) => error!("Ingestion failed. Err: {}", e),
    }
}
