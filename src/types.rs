use chrono::Duration;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone)]
pub struct Credential {
    pub access_token: String,
    pub expires_at: i64,
}

impl Credential {
    /// A credential is valid at instant `at` (epoch seconds) when it still
    /// has more than `margin` of lifetime left.
    pub fn is_valid(&self, margin: Duration, at: i64) -> bool {
        at + margin.num_seconds() < self.expires_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterArtist {
    pub id: String,
    pub name: String,
    pub market: String,
}

impl RosterArtist {
    pub fn new(id: &str, name: &str, market: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            market: market.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct RosterTableRow {
    pub name: String,
    pub id: String,
    pub market: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Option<ArtistObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub followers: Followers,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: Option<u32>,
    pub market: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub artist_id: String,
    pub track_id: String,
    pub track_name: String,
    pub popularity: u32,
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub snapshot_date: String,
    pub artists: Vec<ArtistRecord>,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Debug, Clone)]
pub struct JobSummary {
    pub snapshot_date: String,
    pub artist_count: usize,
    pub track_count: usize,
    pub destination: String,
}
