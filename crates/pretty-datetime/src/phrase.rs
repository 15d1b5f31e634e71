//! Entry points: instant pairs and RFC 3339 strings to phrases.
//!
//! [`relative_phrase`] reads the clock; every other function takes the
//! reference explicitly so results stay reproducible in tests.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::classify::{classify, classify_with_difference, Bucket};
use crate::error::{PrettyError, Result};
use crate::format::format_bucket;

/// Describe `target` relative to the current instant.
///
/// "Now" is read when the function is called and resolved in the target's
/// timezone, so today/yesterday/tomorrow follow the target's calendar.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use pretty_datetime::{relative_phrase, YEAR};
///
/// let target = Utc::now() - Duration::seconds(YEAR);
/// assert_eq!(relative_phrase(&target).unwrap(), "1 year ago");
/// ```
pub fn relative_phrase<Z: TimeZone>(target: &DateTime<Z>) -> Result<String> {
    let reference = Utc::now().with_timezone(&target.timezone());
    relative_phrase_at(target, &reference)
}

/// Describe `target` relative to an explicit `reference` instant.
///
/// # Errors
///
/// Returns [`PrettyError::InvalidDifference`] if the difference between the
/// instants cannot be computed.
pub fn relative_phrase_at<Z: TimeZone, R: TimeZone>(
    target: &DateTime<Z>,
    reference: &DateTime<R>,
) -> Result<String> {
    let bucket = classify(target, reference)?;
    Ok(format_bucket(&bucket))
}

// ── String API ──────────────────────────────────────────────────────────────

/// A relative phrase together with the data it was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct RelativeTime {
    /// The rendered phrase (e.g., "In 3 weeks").
    pub phrase: String,
    /// The bucket the pair was classified into.
    pub bucket: Bucket,
    /// `reference - target` in seconds. Positive when the target is in the past.
    pub difference_seconds: i64,
    /// The target instant in the zone used for calendar comparison (RFC 3339).
    pub target_local: String,
    /// The reference instant in the same zone (RFC 3339).
    pub reference_local: String,
}

/// Describe an RFC 3339 `target` relative to an RFC 3339 `reference`.
///
/// # Arguments
///
/// * `target` — The instant to describe (e.g., `"1991-05-18T23:36:59Z"`)
/// * `reference` — The anchor instant; `None` means now
/// * `timezone` — An IANA timezone name to reinterpret both instants in before
///   comparing calendar dates. `None` keeps the target's own UTC offset.
///
/// # Errors
///
/// Returns [`PrettyError::InvalidDatetime`] if either datetime cannot be parsed,
/// or [`PrettyError::InvalidTimezone`] if the timezone name is not a valid IANA
/// timezone.
///
/// # Examples
///
/// ```
/// use pretty_datetime::describe;
///
/// let result = describe(
///     "1991-05-17T23:59:59Z",
///     Some("1991-05-18T00:00:00Z"),
///     None,
/// )
/// .unwrap();
/// assert_eq!(result.phrase, "Yesterday");
/// assert_eq!(result.difference_seconds, 1);
/// ```
pub fn describe(
    target: &str,
    reference: Option<&str>,
    timezone: Option<&str>,
) -> Result<RelativeTime> {
    let target_dt = parse_rfc3339(target)?;
    let reference_utc = match reference {
        Some(s) => parse_rfc3339(s)?.with_timezone(&Utc),
        None => Utc::now(),
    };

    match timezone {
        Some(name) => {
            let tz = parse_timezone(name)?;
            build(
                target_dt.with_timezone(&tz),
                reference_utc.with_timezone(&tz),
            )
        }
        None => {
            let offset = target_dt.timezone();
            build(target_dt, reference_utc.with_timezone(&offset))
        }
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn build<Z>(target: DateTime<Z>, reference: DateTime<Z>) -> Result<RelativeTime>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let (difference_seconds, bucket) = classify_with_difference(&target, &reference)?;
    Ok(RelativeTime {
        phrase: format_bucket(&bucket),
        bucket,
        difference_seconds,
        target_local: target.to_rfc3339(),
        reference_local: reference.to_rfc3339(),
    })
}

/// Parse an RFC 3339 datetime string, keeping its UTC offset.
fn parse_rfc3339(s: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| PrettyError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| PrettyError::InvalidTimezone(format!("'{}'", s)))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const BEFORE_MIDNIGHT: &str = "1991-05-18T23:59:59Z";

    // ── relative_phrase / relative_phrase_at ────────────────────────────

    #[test]
    fn test_same_instant_is_moments_ago() {
        let t = Utc.with_ymd_and_hms(1991, 5, 18, 12, 0, 0).unwrap();
        assert_eq!(relative_phrase_at(&t, &t).unwrap(), "Moments ago");
    }

    #[test]
    fn test_now_defaults_reference() {
        let target = Utc::now() - Duration::hours(3 * 24 * 30);
        let phrase = relative_phrase(&target).unwrap();
        assert!(phrase.ends_with(" ago"), "got: {phrase}");
    }

    #[test]
    fn test_now_follows_target_offset() {
        let offset = FixedOffset::west_opt(7 * 3600).unwrap();
        let target = Utc::now().with_timezone(&offset) + Duration::weeks(3) + Duration::hours(1);
        assert_eq!(relative_phrase(&target).unwrap(), "In 3 weeks");
    }

    #[test]
    fn test_mixed_zone_arguments() {
        let tokyo: Tz = "Asia/Tokyo".parse().unwrap();
        let reference = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let target = tokyo.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        // 2026-03-10T00:00:00Z, five days before the reference
        assert_eq!(relative_phrase_at(&target, &reference).unwrap(), "5 days ago");
    }

    // ── describe ────────────────────────────────────────────────────────

    #[test]
    fn test_describe_past_minutes() {
        let result = describe("1991-05-18T23:36:59Z", Some(BEFORE_MIDNIGHT), None).unwrap();
        assert_eq!(result.phrase, "23 minutes ago");
        assert_eq!(result.bucket, Bucket::Minutes(23.0));
        assert_eq!(result.difference_seconds, 23 * 60);
        assert_eq!(result.target_local, "1991-05-18T23:36:59+00:00");
        assert_eq!(result.reference_local, "1991-05-18T23:59:59+00:00");
    }

    #[test]
    fn test_describe_keeps_target_offset() {
        // Reference is rendered in the target's +02:00 offset
        let result = describe(
            "1991-05-19T01:59:59+02:00",
            Some("1991-05-18T22:00:00Z"),
            None,
        )
        .unwrap();
        assert_eq!(result.reference_local, "1991-05-19T00:00:00+02:00");
        assert_eq!(result.phrase, "In 1 hour");
    }

    #[test]
    fn test_describe_with_iana_timezone() {
        // 03:30Z on the 18th is still the 17th in New York (EDT, UTC-4)
        let result = describe(
            "1991-05-18T03:30:00Z",
            Some("1991-05-18T14:00:00Z"),
            Some("America/New_York"),
        )
        .unwrap();
        assert_eq!(result.phrase, "Yesterday");
        assert!(result.target_local.ends_with("-04:00"));

        let utc = describe("1991-05-18T03:30:00Z", Some("1991-05-18T14:00:00Z"), None).unwrap();
        assert_eq!(utc.phrase, "10 hours ago");
    }

    #[test]
    fn test_describe_without_reference_uses_now() {
        let target = (Utc::now() + Duration::days(2 * 365) + Duration::hours(1)).to_rfc3339();
        let result = describe(&target, None, None).unwrap();
        assert_eq!(result.phrase, "In 2 years");
        assert!(result.difference_seconds < 0);
    }

    #[test]
    fn test_describe_invalid_datetime_returns_error() {
        let err = describe("not-a-datetime", None, None).unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");

        let err = describe(BEFORE_MIDNIGHT, Some("yesterday"), None).unwrap_err();
        assert!(matches!(err, PrettyError::InvalidDatetime(_)));
    }

    #[test]
    fn test_describe_invalid_timezone_returns_error() {
        let err = describe(BEFORE_MIDNIGHT, Some(BEFORE_MIDNIGHT), Some("Invalid/Zone"))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }

    #[test]
    fn test_describe_across_dst_gap() {
        let result = describe(
            "2026-03-07T23:59:59-05:00",
            Some("2026-03-09T00:00:00-04:00"),
            Some("America/New_York"),
        )
        .unwrap();
        assert_eq!(result.phrase, "1 day ago");
        assert_eq!(result.difference_seconds, 23 * 3600 + 1);

        let result = describe(
            "2011-12-29T23:59:59-10:00",
            Some("2011-12-31T00:00:00+14:00"),
            Some("Pacific/Apia"),
        )
        .unwrap();
        assert_eq!(result.phrase, "1 day ago");
        assert_eq!(result.difference_seconds, 1);
    }

    #[test]
    fn test_relative_time_serializes() {
        let result = describe("1991-05-17T23:59:59Z", Some("1991-05-18T00:00:00Z"), None).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["phrase"], "Yesterday");
        assert_eq!(json["bucket"]["kind"], "yesterday");
        assert_eq!(json["difference_seconds"], 1);
    }
}
