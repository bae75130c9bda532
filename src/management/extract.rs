use std::sync::Arc;

use crate::{
    Res, info,
    spotify::{self, auth::CredentialManager},
    types::{ArtistRecord, RosterArtist, Snapshot, TrackRecord},
    warning,
};

// Spotify caps /artists lookups at 50 ids per request.
const ARTIST_BATCH_SIZE: usize = 50;

pub struct PulseExtractor {
    roster: Vec<RosterArtist>,
    credentials: Arc<CredentialManager>,
}

impl PulseExtractor {
    pub fn new(roster: Vec<RosterArtist>, credentials: Arc<CredentialManager>) -> Self {
        Self {
            roster,
            credentials,
        }
    }

    /// Runs the full extraction pipeline for one snapshot date: artist
    /// metadata for the whole roster, then top tracks per artist.
    ///
    /// A metadata failure aborts the run; a top-tracks failure for a single
    /// artist is logged and skipped so one flaky artist cannot sink the
    /// snapshot.
    pub async fn extract(&self, snapshot_date: &str) -> Res<Snapshot> {
        info!("Starting extraction for {} artists...", self.roster.len());

        let artists = self.get_artists().await?;

        let mut tracks: Vec<TrackRecord> = Vec::new();
        for entry in &self.roster {
            match self.get_top_tracks(entry).await {
                Ok(mut artist_tracks) => tracks.append(&mut artist_tracks),
                Err(e) => warning!("Error fetching top tracks for artist {}: {}", entry.id, e),
            }
        }

        info!("Extraction completed successfully.");
        Ok(Snapshot {
            snapshot_date: snapshot_date.to_string(),
            artists,
            tracks,
        })
    }

    async fn get_artists(&self) -> Res<Vec<ArtistRecord>> {
        let ids: Vec<String> = self.roster.iter().map(|a| a.id.clone()).collect();

        let mut records: Vec<ArtistRecord> = Vec::new();
        for chunk in ids.chunks(ARTIST_BATCH_SIZE) {
            let token = self.credentials.get_token().await?;
            let batch = spotify::artists::get_several_artists(&token, chunk).await?;

            for artist in batch {
                let market = self
                    .roster
                    .iter()
                    .find(|entry| entry.id == artist.id)
                    .map(|entry| entry.market.clone());

                records.push(ArtistRecord {
                    id: artist.id,
                    name: artist.name,
                    genres: artist.genres,
                    followers: artist.followers.total,
                    popularity: artist.popularity,
                    market,
                });
            }
        }

        Ok(records)
    }

    async fn get_top_tracks(&self, entry: &RosterArtist) -> Res<Vec<TrackRecord>> {
        let token = self.credentials.get_token().await?;
        let tracks = spotify::artists::get_top_tracks(&token, &entry.id, &entry.market).await?;

        Ok(tracks
            .into_iter()
            .map(|track| TrackRecord {
                artist_id: entry.id.clone(),
                track_id: track.id,
                track_name: track.name,
                popularity: track.popularity,
                release_date: track.album.release_date,
            })
            .collect())
    }
}
