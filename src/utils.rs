use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, Utc};

// São Paulo has been fixed at UTC-3 since DST was abolished in 2019.
const SAO_PAULO_OFFSET_SECS: i32 = -3 * 3600;

/// Today's snapshot date, formatted `YYYY-MM-DD` in the America/Sao_Paulo
/// timezone. The job is scheduled against Brazilian calendar days, so the
/// date boundary follows that zone rather than UTC.
pub fn snapshot_date() -> String {
    let offset = FixedOffset::east_opt(SAO_PAULO_OFFSET_SECS).unwrap();
    Utc::now()
        .with_timezone(&offset)
        .format("%Y-%m-%d")
        .to_string()
}

/// Resolves an optional `YYYY-MM-DD` override into a snapshot date string,
/// falling back to today's snapshot date when absent or unparseable.
pub fn resolve_snapshot_date(date: Option<String>) -> String {
    match date {
        Some(date_str) => match NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
            Err(_) => snapshot_date(),
        },
        None => snapshot_date(),
    }
}

/// Builds the object-store destination path for a snapshot, e.g.
/// `bronze/artists/2025-11-06/snapshot.json`.
pub fn snapshot_destination(category: &str, date: &str) -> String {
    format!("bronze/{category}/{date}/snapshot.json")
}

/// Delay before retry `attempt` (1-based): the base delay doubled per
/// completed attempt.
pub fn backoff_delay(attempt: u32, base: Duration) -> Duration {
    base * 2u32.saturating_pow(attempt.saturating_sub(1))
}
