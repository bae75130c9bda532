use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{ArtistObject, SeveralArtistsResponse, TopTracksResponse, TrackObject},
    warning,
};

/// Retrieves metadata for a batch of artists from the Spotify Web API.
///
/// Fetches up to 50 artists in a single request using the `/artists`
/// endpoint. Entries the API returns as `null` (unknown or regionally
/// unavailable IDs) are filtered out rather than failing the batch.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Spotify artist IDs to look up (at most 50 per request)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<ArtistObject>)` - Metadata for every resolvable ID
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Retry Logic
///
/// The function implements automatic retry logic for 502 Bad Gateway errors
/// with a 10-second delay between attempts. Other errors are propagated
/// immediately.
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let ids = vec!["4iHNK0tOyZPYnBU7nGAgpQ".to_string()];
/// let artists = get_several_artists(&token, &ids).await?;
/// ```
pub async fn get_several_artists(
    token: &str,
    ids: &[String],
) -> Result<Vec<ArtistObject>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/artists?ids={ids}",
            uri = &config::spotify_apiurl(),
            ids = ids.join(",")
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<SeveralArtistsResponse>().await?;

        return Ok(res.artists.into_iter().flatten().collect());
    }
}

/// Retrieves an artist's top tracks for a market from the Spotify Web API.
///
/// Fetches the artist's current top tracks using the
/// `/artists/{id}/top-tracks` endpoint. The function handles rate limiting
/// gracefully by respecting the `Retry-After` header when encountering
/// 429 Too Many Requests responses.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify ID of the artist to fetch top tracks for
/// * `market` - ISO 3166-1 alpha-2 market code (e.g. "GB", "BR")
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackObject>)` - The artist's top tracks in the given market
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Rate Limiting
///
/// - Detects 429 Too Many Requests responses
/// - Reads the `Retry-After` header for the recommended delay
/// - Automatically waits and retries for delays ≤ 120 seconds
/// - Issues a warning and propagates the error for excessive delays
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&token, "4iHNK0tOyZPYnBU7nGAgpQ", "GB").await?;
/// println!("Found {} top tracks", tracks.len());
/// ```
pub async fn get_top_tracks(
    token: &str,
    artist_id: &str,
    market: &str,
) -> Result<Vec<TrackObject>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/artists/{id}/top-tracks?market={market}",
            uri = &config::spotify_apiurl(),
            id = artist_id,
            market = market
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);

            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                continue; // retry
            }

            warning!(
                "Retry after has reached an abnormal high of {} seconds for artist {}.",
                retry_after,
                artist_id
            );
        }

        let response = response.error_for_status()?;
        let res = response.json::<TopTracksResponse>().await?;

        return Ok(res.tracks);
    }
}
