//! Fixed unit lengths in seconds.
//!
//! Month and year are approximations: a month is 2,628,000 seconds (roughly
//! 30.42 days) and a year is 365 days with no leap adjustment. Durations are
//! divided by these constants as-is; there is no calendar-aware month or year
//! arithmetic anywhere in the crate.

use serde::Serialize;

pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 3_600;
pub const DAY: i64 = 86_400;
pub const WEEK: i64 = 604_800;
/// Average month. A difference of exactly one `MONTH` is still under five
/// weeks, so it renders in weeks.
pub const MONTH: i64 = 2_628_000;
pub const YEAR: i64 = 31_536_000;

/// A unit a magnitude bucket is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Every unit, shortest first.
    pub const ALL: [Unit; 6] = [
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Length of one unit in seconds.
    pub const fn seconds(self) -> i64 {
        match self {
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Month => MONTH,
            Unit::Year => YEAR,
        }
    }

    /// Singular English name, e.g. `"week"`.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Signed number of units in `seconds`, not truncated.
    pub fn ratio(self, seconds: i64) -> f64 {
        seconds as f64 / self.seconds() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MINUTE, 60);
        assert_eq!(HOUR, 60 * MINUTE);
        assert_eq!(DAY, 24 * HOUR);
        assert_eq!(WEEK, 7 * DAY);
        assert_eq!(MONTH, 2_628_000);
        assert_eq!(YEAR, 365 * DAY);
    }

    #[test]
    fn test_twelve_months_make_a_year() {
        assert_eq!(12 * MONTH, YEAR);
    }

    #[test]
    fn test_units_are_ascending() {
        let lengths: Vec<i64> = Unit::ALL.iter().map(|u| u.seconds()).collect();
        assert!(lengths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ratio_keeps_sign_and_fraction() {
        assert_eq!(Unit::Minute.ratio(90), 1.5);
        assert_eq!(Unit::Hour.ratio(-5_400), -1.5);
        assert_eq!(Unit::Day.ratio(0), 0.0);
    }

    #[test]
    fn test_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Week).unwrap(), "\"week\"");
    }
}
