//! Rendering a [`Bucket`] as a phrase.

use std::fmt;

use crate::classify::Bucket;
use crate::units::Unit;

/// Render a bucket as a human-readable phrase.
///
/// Terminal buckets map to fixed literals. Magnitude buckets render as
/// `"<n> <unit>s ago"` for the past and `"In <n> <unit>s"` for the future,
/// where `n` is the magnitude's absolute value floored. The unit is singular
/// when `n <= 1`.
///
/// # Examples
///
/// ```
/// use pretty_datetime::{format_bucket, Bucket};
///
/// assert_eq!(format_bucket(&Bucket::Weeks(-3.4)), "In 3 weeks");
/// assert_eq!(format_bucket(&Bucket::Hours(1.9)), "1 hour ago");
/// assert_eq!(format_bucket(&Bucket::Yesterday), "Yesterday");
/// ```
pub fn format_bucket(bucket: &Bucket) -> String {
    match *bucket {
        Bucket::Moments => "Moments ago".to_string(),
        Bucket::SecondsFromNow => "Seconds from now".to_string(),
        Bucket::Yesterday => "Yesterday".to_string(),
        Bucket::Tomorrow => "Tomorrow".to_string(),
        Bucket::Minutes(m) => format_magnitude(m, Unit::Minute),
        Bucket::Hours(m) => format_magnitude(m, Unit::Hour),
        Bucket::Days(m) => format_magnitude(m, Unit::Day),
        Bucket::Weeks(m) => format_magnitude(m, Unit::Week),
        Bucket::Months(m) => format_magnitude(m, Unit::Month),
        Bucket::Years(m) => format_magnitude(m, Unit::Year),
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bucket(self))
    }
}

fn format_magnitude(magnitude: f64, unit: Unit) -> String {
    let prepend = if magnitude < 0.0 { "In " } else { "" };
    let append = if magnitude > 0.0 { " ago" } else { "" };

    let count = magnitude.abs().floor() as u64;
    debug_assert!(count > 0, "classifier produced a zero {unit:?} magnitude");

    let plural = if count > 1 { "s" } else { "" };
    format!("{prepend}{count} {}{plural}{append}", unit.name())
}

// ── Tests ───────────────────────────────────────────────────────────────────
