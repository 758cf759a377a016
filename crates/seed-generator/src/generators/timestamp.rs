//! Timestamp value generators.
//!
//! Every generator takes the reference instant `now` explicitly so a
//! synthesizer seeded with a fixed RNG and clock produces identical dates.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_YEAR: i64 = 365;

/// Widest offset from `now` a relative date may span.
pub const MAX_OFFSET_DAYS: i64 = 10_000 * DAYS_PER_YEAR;

/// Convert a configured day count to a bounded offset; non-finite values use `fallback`.
pub fn days_from_config(max: Option<f64>, fallback: i64) -> i64 {
    match max {
        Some(m) if m.is_finite() => (m.clamp(0.0, MAX_OFFSET_DAYS as f64)) as i64,
        _ => fallback,
    }
}

fn offset(days: i64) -> Duration {
    Duration::seconds(days.clamp(0, MAX_OFFSET_DAYS).saturating_mul(SECONDS_PER_DAY))
}

/// Random instant in `[start, end]`, or `start` for an empty range.
pub fn generate_timestamp_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
}

/// Random instant within the last `days` days.
pub fn recent<R: Rng>(rng: &mut R, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let start = now.checked_sub_signed(offset(days)).unwrap_or(now);
    generate_timestamp_between(rng, start, now)
}

/// Random instant within the next `days` days.
pub fn soon<R: Rng>(rng: &mut R, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let end = now.checked_add_signed(offset(days)).unwrap_or(now);
    generate_timestamp_between(rng, now, end)
}

/// Birthdate of someone aged 18 to 80.
pub fn birthdate<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let oldest = now - Duration::seconds(80 * DAYS_PER_YEAR * SECONDS_PER_DAY);
    let youngest = now - Duration::seconds(18 * DAYS_PER_YEAR * SECONDS_PER_DAY);
    generate_timestamp_between(rng, oldest, youngest)
}

/// Parse a timestamp string in RFC 3339 or `%Y-%m-%d` form.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
