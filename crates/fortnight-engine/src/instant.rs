//! The host date/time capability behind fortnight computation.
//!
//! Boundary determination needs only four operations from a point-in-time
//! type: truncation to the Monday 00:00:00 starting its week, signed
//! subtraction in whole seconds, shifting by whole days, and truncation to
//! the last second of its calendar day. [`FortnightInstant`] captures those
//! operations; implementations are provided for [`NaiveDateTime`],
//! [`DateTime<Utc>`], and, at day granularity, [`NaiveDate`].

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in one calendar week.
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// The last representable second of a calendar day.
const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(t) => t,
    None => panic!("23:59:59 is a valid time"),
};

/// A point in time that fortnight boundaries can be computed over.
///
/// The week convention is fixed: weeks run Monday 00:00:00 inclusive through
/// the following Monday 00:00:00 exclusive.
pub trait FortnightInstant: Copy + PartialOrd {
    /// The Monday 00:00:00 instant beginning the week containing `self`.
    fn beginning_of_week(self) -> Self;

    /// Signed whole seconds elapsed from `earlier` to `self`
    /// (negative when `self` precedes `earlier`).
    fn seconds_since(self, earlier: Self) -> i64;

    /// `self` shifted by a whole number of days (may be negative).
    fn plus_days(self, days: i64) -> Self;

    /// The last representable second of the calendar day containing `self`.
    ///
    /// For date-only types this is the identity: a date already denotes its
    /// whole day.
    fn end_of_day(self) -> Self;

    /// Interpret a configured reference instant in this type's domain.
    fn from_reference(reference: NaiveDateTime) -> Self;
}

impl FortnightInstant for NaiveDateTime {
    fn beginning_of_week(self) -> Self {
        self.date().beginning_of_week().and_time(NaiveTime::MIN)
    }

    fn seconds_since(self, earlier: Self) -> i64 {
        self.signed_duration_since(earlier).num_seconds()
    }

    fn plus_days(self, days: i64) -> Self {
        self + Duration::days(days)
    }

    fn end_of_day(self) -> Self {
        self.date().and_time(END_OF_DAY)
    }

    fn from_reference(reference: NaiveDateTime) -> Self {
        reference
    }
}

impl FortnightInstant for DateTime<Utc> {
    fn beginning_of_week(self) -> Self {
        Utc.from_utc_datetime(&self.naive_utc().beginning_of_week())
    }

    fn seconds_since(self, earlier: Self) -> i64 {
        self.signed_duration_since(earlier).num_seconds()
    }

    fn plus_days(self, days: i64) -> Self {
        self + Duration::days(days)
    }

    fn end_of_day(self) -> Self {
        Utc.from_utc_datetime(&self.naive_utc().end_of_day())
    }

    fn from_reference(reference: NaiveDateTime) -> Self {
        Utc.from_utc_datetime(&reference)
    }
}

/// Day-granular instants. Equivalent to running the datetime algorithm on
/// the date's midnight and dropping the time-of-day from the result; the
/// conversion is exact in both directions.
impl FortnightInstant for NaiveDate {
    fn beginning_of_week(self) -> Self {
        self - Duration::days(i64::from(self.weekday().num_days_from_monday()))
    }

    fn seconds_since(self, earlier: Self) -> i64 {
        self.signed_duration_since(earlier).num_days() * SECONDS_PER_DAY
    }

    fn plus_days(self, days: i64) -> Self {
        self + Duration::days(days)
    }

    fn end_of_day(self) -> Self {
        self
    }

    fn from_reference(reference: NaiveDateTime) -> Self {
        reference.date()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
