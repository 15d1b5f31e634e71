//! Classification of a target instant relative to a reference instant.
//!
//! The classifier composes two tests. Calendar-day comparison (in the
//! target's timezone) decides between "same day", "yesterday", "tomorrow"
//! and "further away"; magnitude thresholds then pick the unit. First match
//! wins:
//!
//! | condition | bucket |
//! |---|---|
//! | same day, `0 <= diff < 1 min` | [`Bucket::Moments`] |
//! | same day, `-1 min < diff < 0` | [`Bucket::SecondsFromNow`] |
//! | same day, `|diff| < 1 h` | [`Bucket::Minutes`] |
//! | same day | [`Bucket::Hours`] |
//! | target on reference's previous day | [`Bucket::Yesterday`] |
//! | target on reference's next day | [`Bucket::Tomorrow`] |
//! | `|diff| / DAY <= 7` | [`Bucket::Days`], never below one day |
//! | `|diff| / WEEK <= 5` | [`Bucket::Weeks`] |
//! | `|diff| / MONTH < 12` | [`Bucket::Months`] |
//! | otherwise | [`Bucket::Years`] |
//!
//! `diff` is `reference - target` in whole seconds, so positive values are in
//! the past.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::error::{PrettyError, Result};
use crate::units::Unit;

/// The relative-time category chosen for a pair of instants.
///
/// Magnitude variants carry the signed, real-valued count of units between
/// target and reference. It is truncated only when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "magnitude", rename_all = "snake_case")]
pub enum Bucket {
    /// Same day, less than a minute in the past (or identical).
    Moments,
    /// Same day, less than a minute in the future.
    SecondsFromNow,
    Minutes(f64),
    Hours(f64),
    Yesterday,
    Tomorrow,
    Days(f64),
    Weeks(f64),
    Months(f64),
    Years(f64),
}

impl Bucket {
    /// Build the magnitude bucket for `unit` from a signed difference in seconds.
    pub fn measured(unit: Unit, difference: i64) -> Self {
        let magnitude = unit.ratio(difference);
        match unit {
            Unit::Minute => Bucket::Minutes(magnitude),
            Unit::Hour => Bucket::Hours(magnitude),
            Unit::Day => Bucket::Days(magnitude),
            Unit::Week => Bucket::Weeks(magnitude),
            Unit::Month => Bucket::Months(magnitude),
            Unit::Year => Bucket::Years(magnitude),
        }
    }
}

/// Classify `target` relative to `reference`.
///
/// Calendar dates of both instants are taken in the *target's* timezone, so a
/// reference expressed in UTC and a target expressed in `+10:00` are compared
/// by the target's wall-clock date.
///
/// # Errors
///
/// Returns [`PrettyError::InvalidDifference`] if the signed difference between
/// the two instants cannot be represented. This does not happen for instants
/// inside chrono's supported range.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pretty_datetime::{classify, Bucket};
///
/// let midnight = Utc.with_ymd_and_hms(1991, 5, 18, 0, 0, 0).unwrap();
/// let before = Utc.with_ymd_and_hms(1991, 5, 17, 23, 59, 59).unwrap();
/// assert_eq!(classify(&before, &midnight).unwrap(), Bucket::Yesterday);
/// ```
pub fn classify<Tz: TimeZone, R: TimeZone>(
    target: &DateTime<Tz>,
    reference: &DateTime<R>,
) -> Result<Bucket> {
    classify_with_difference(target, reference).map(|(_, bucket)| bucket)
}

/// Like [`classify`], also returning `reference - target` in seconds.
pub(crate) fn classify_with_difference<Tz: TimeZone, R: TimeZone>(
    target: &DateTime<Tz>,
    reference: &DateTime<R>,
) -> Result<(i64, Bucket)> {
    let difference = signed_difference(target.timestamp(), reference.timestamp())?;
    let abs_diff = difference.checked_abs().ok_or_else(|| {
        PrettyError::InvalidDifference(format!("|{difference}| is not representable"))
    })?;

    let target_date = target.date_naive();
    let reference_date = reference.with_timezone(&target.timezone()).date_naive();

    let bucket = if target_date == reference_date {
        classify_same_day(difference, abs_diff)
    } else if reference_date.pred_opt() == Some(target_date) {
        Bucket::Yesterday
    } else if reference_date.succ_opt() == Some(target_date) {
        Bucket::Tomorrow
    } else if Unit::Day.ratio(abs_diff) <= 7.0 {
        // Two or more dates apart can be under 24h when a zone skips local
        // time (DST spring-forward, a skipped date), so count at least one day.
        let days = Unit::Day.ratio(difference);
        Bucket::Days(days.signum() * days.abs().max(1.0))
    } else if Unit::Week.ratio(abs_diff) <= 5.0 {
        Bucket::measured(Unit::Week, difference)
    } else if Unit::Month.ratio(abs_diff) < 12.0 {
        Bucket::measured(Unit::Month, difference)
    } else {
        Bucket::measured(Unit::Year, difference)
    };

    tracing::trace!(difference, ?bucket, "classified relative time");
    Ok((difference, bucket))
}

/// `reference - target` in seconds.
fn signed_difference(target: i64, reference: i64) -> Result<i64> {
    reference.checked_sub(target).ok_or_else(|| {
        PrettyError::InvalidDifference(format!(
            "cannot subtract {target} from {reference} seconds"
        ))
    })
}

fn classify_same_day(difference: i64, abs_diff: i64) -> Bucket {
    let minute = Unit::Minute.seconds();
    if difference >= 0 && abs_diff < minute {
        Bucket::Moments
    } else if difference < 0 && abs_diff < minute {
        Bucket::SecondsFromNow
    } else if abs_diff < Unit::Hour.seconds() {
        Bucket::measured(Unit::Minute, difference)
    } else {
        Bucket::measured(Unit::Hour, difference)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
