use crate::compat::ToString;
use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Layouts without an offset, read as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a parameter value into a date-time.
///
/// Tried in order: RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS` (space or `T`
/// separated, optional fraction), `YYYY-MM-DD`, compact `YYYYMMDD`, and Unix
/// seconds written as `@<seconds>`. Values without an offset are taken as UTC.
/// A bare number that is not an eight-digit date is rejected.
pub fn parse(input: &str) -> Result<DateTime<FixedOffset>> {
    let text = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt);
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Some(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| compact_date(text))
    {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    if let Some(dt) = text
        .strip_prefix('@')
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    {
        return Ok(dt.fixed_offset());
    }

    Err(Error::InvalidDateTime(input.to_string()))
}

/// `YYYYMMDD`, exactly eight ASCII digits.
fn compact_date(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = text[..4].parse().ok()?;
    let month = text[4..6].parse().ok()?;
    let day = text[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The current moment, computed on every call.
#[cfg(feature = "std")]
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
