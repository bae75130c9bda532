use std::sync::Arc;

use crate::{
    Res, config, info,
    management::{PulseExtractor, SnapshotUploader},
    spotify::auth::CredentialManager,
    types::{JobSummary, RosterArtist},
    utils,
};

/// Everything one ingestion run needs, assembled once at process startup.
///
/// Configuration is read here and passed into constructors, so a bad
/// environment surfaces as a startup error instead of a mid-run panic in
/// the trigger path.
pub struct JobContext {
    pub roster: Vec<RosterArtist>,
    pub credentials: Arc<CredentialManager>,
    pub uploader: SnapshotUploader,
}

impl JobContext {
    pub fn from_env() -> Res<Self> {
        let credentials = CredentialManager::new(
            &config::spotify_client_id(),
            &config::spotify_client_secret(),
            &config::spotify_apitoken_url(),
        )?;

        let uploader = SnapshotUploader::new(
            &config::storage_bucket(),
            &config::storage_upload_url(),
            &config::storage_token(),
        );

        Ok(Self {
            roster: config::artist_roster(),
            credentials: Arc::new(credentials),
            uploader,
        })
    }
}

/// Runs one ingestion for today's snapshot date and uploads the result.
pub async fn run(ctx: &JobContext) -> Res<JobSummary> {
    run_for_date(ctx, &utils::snapshot_date(), false).await
}

/// Runs one ingestion for an explicit snapshot date. With `dry_run` the
/// snapshot is assembled and summarized but the upload is skipped.
pub async fn run_for_date(ctx: &JobContext, snapshot_date: &str, dry_run: bool) -> Res<JobSummary> {
    let extractor = PulseExtractor::new(ctx.roster.clone(), Arc::clone(&ctx.credentials));
    let snapshot = extractor.extract(snapshot_date).await?;

    info!(
        "Extracted {} artists and {} tracks",
        snapshot.artists.len(),
        snapshot.tracks.len()
    );

    let destination = utils::snapshot_destination("artists", snapshot_date);
    let summary = JobSummary {
        snapshot_date: snapshot_date.to_string(),
        artist_count: snapshot.artists.len(),
        track_count: snapshot.tracks.len(),
        destination: destination.clone(),
    };

    if dry_run {
        info!("Dry run: skipping upload of {}", destination);
        return Ok(summary);
    }

    let data = serde_json::to_string_pretty(&snapshot)?;
    ctx.uploader.upload(&data, &destination).await?;

    Ok(summary)
}
