//! # pretty-datetime
//!
//! Human-readable relative phrases for timestamps.
//!
//! Given a target instant and a reference instant (defaulting to now), the
//! crate picks one of a fixed set of buckets (same minute, minutes, hours,
//! yesterday/tomorrow, days, weeks, months, years) and renders it as a short
//! phrase such as `"Moments ago"`, `"Yesterday"` or `"In 3 weeks"`.
//!
//! ## Modules
//!
//! - [`units`] — Fixed unit lengths in seconds (minute through year)
//! - [`classify`] — Signed difference + calendar day comparison → [`Bucket`]
//! - [`format`] — [`Bucket`] → phrase
//! - [`phrase`] — Entry points, including an RFC 3339 string API
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pretty_datetime::relative_phrase_at;
//!
//! let reference = Utc.with_ymd_and_hms(1991, 5, 18, 23, 59, 59).unwrap();
//! let target = Utc.with_ymd_and_hms(1991, 5, 18, 23, 36, 59).unwrap();
//! assert_eq!(relative_phrase_at(&target, &reference).unwrap(), "23 minutes ago");
//! ```

pub mod classify;
pub mod error;
pub mod format;
pub mod phrase;
pub mod units;

pub use classify::{classify, Bucket};
pub use error::PrettyError;
pub use format::format_bucket;
pub use phrase::{describe, relative_phrase, relative_phrase_at, RelativeTime};
pub use units::{Unit, DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};
