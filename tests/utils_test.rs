use std::{collections::HashSet, time::Duration};

use artistpulse::{config, utils::*};

#[test]
fn test_snapshot_date_format() {
    let date = snapshot_date();

    // Should be YYYY-MM-DD
    assert_eq!(date.len(), 10);
    assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
}

#[test]
fn test_resolve_snapshot_date() {
    // Test valid date string passes through unchanged
    let resolved = resolve_snapshot_date(Some("2025-12-01".to_string()));
    assert_eq!(resolved, "2025-12-01");

    // Test None input (should return today's snapshot date)
    let resolved = resolve_snapshot_date(None);
    assert_eq!(resolved, snapshot_date());

    // Test invalid date string (should return today's snapshot date)
    let resolved = resolve_snapshot_date(Some("not-a-date".to_string()));
    assert_eq!(resolved, snapshot_date());
}

#[test]
fn test_snapshot_destination() {
    assert_eq!(
        snapshot_destination("artists", "2025-12-01"),
        "bronze/artists/2025-12-01/snapshot.json"
    );
    assert_eq!(
        snapshot_destination("tracks", "2024-01-31"),
        "bronze/tracks/2024-01-31/snapshot.json"
    );
}

#[test]
fn test_backoff_delay_doubles_per_attempt() {
    let base = Duration::from_secs(1);

    assert_eq!(backoff_delay(1, base), Duration::from_secs(1));
    assert_eq!(backoff_delay(2, base), Duration::from_secs(2));
    assert_eq!(backoff_delay(3, base), Duration::from_secs(4));
    assert_eq!(backoff_delay(4, base), Duration::from_secs(8));

    // Attempt 0 is clamped to the base delay instead of underflowing
    assert_eq!(backoff_delay(0, base), Duration::from_secs(1));

    // Scales with the configured base
    assert_eq!(backoff_delay(3, Duration::from_millis(250)), Duration::from_secs(1));
}

#[test]
fn test_artist_roster_sanity() {
    let roster = config::artist_roster();

    // The monitored roster is fixed and non-empty
    assert_eq!(roster.len(), 7);

    // IDs are unique, 22-char base62 Spotify identifiers
    let ids: HashSet<&String> = roster.iter().map(|a| &a.id).collect();
    assert_eq!(ids.len(), roster.len());
    for artist in &roster {
        assert_eq!(artist.id.len(), 22);
        assert!(artist.id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!artist.name.is_empty());
        assert_eq!(artist.market.len(), 2);
    }

    // Both markets the job monitors are represented
    assert!(roster.iter().any(|a| a.market == "GB"));
    assert!(roster.iter().any(|a| a.market == "BR"));
}
