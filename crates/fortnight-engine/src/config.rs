//! Reference-date configuration.
//!
//! The reference date defines where fortnight boundaries fall: the week
//! containing it is, by definition, the first week of its fortnight, and
//! every other boundary follows from that parity. Calculations only ever
//! consume the reference through its week start, so any two references in
//! the same Monday-anchored week are interchangeable.
//!
//! [`Reference`] is the explicit configuration value; the boundary functions
//! in [`crate::fortnight`] accept it per call via their `_with_reference`
//! forms. A process-wide store with an epoch default backs the no-argument
//! forms:
//!
//! ```
//! use chrono::NaiveDate;
//! use fortnight_engine::config;
//!
//! config::set_reference_date(NaiveDate::from_ymd_opt(2010, 10, 13).unwrap());
//! assert_eq!(
//!     config::reference_date().date(),
//!     NaiveDate::from_ymd_opt(2010, 10, 13).unwrap()
//! );
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FortnightError;

/// A reference instant anchoring fortnight parity.
///
/// Construct it from any chrono instant, a date (normalized to midnight), or
/// a string; unparseable strings fail here, at assignment, not at first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(NaiveDateTime);

impl Reference {
    /// The default reference: the Unix epoch. A fairly arbitrary choice,
    /// kept because every boundary it produces is a stable, documented
    /// Monday.
    pub const DEFAULT: Reference = Reference(NaiveDateTime::UNIX_EPOCH);

    /// The full reference instant, with time-of-day.
    pub fn instant(self) -> NaiveDateTime {
        self.0
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NaiveDateTime> for Reference {
    fn from(instant: NaiveDateTime) -> Self {
        Reference(instant)
    }
}

impl From<DateTime<Utc>> for Reference {
    fn from(instant: DateTime<Utc>) -> Self {
        Reference(instant.naive_utc())
    }
}

impl From<NaiveDate> for Reference {
    fn from(date: NaiveDate) -> Self {
        Reference(date.and_time(NaiveTime::MIN))
    }
}

impl FromStr for Reference {
    type Err = FortnightError;

    /// Accepts RFC 3339 (`2010-10-13T00:00:00Z`), a plain datetime
    /// (`2010-10-13T00:00:00`), or a calendar date (`2010-10-13`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Reference(dt.naive_utc()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Reference(dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Reference::from(date));
        }

        Err(FortnightError::InvalidConfiguration(format!(
            "'{s}' is not an RFC 3339 datetime or ISO 8601 date"
        )))
    }
}

impl TryFrom<String> for Reference {
    type Error = FortnightError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.to_string()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

// ── Process-wide store ──────────────────────────────────────────────────────

static REFERENCE: RwLock<Option<Reference>> = RwLock::new(None);

fn read_store() -> Option<Reference> {
    *REFERENCE.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_store(value: Option<Reference>) {
    *REFERENCE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
}

/// The configured reference instant, or the epoch default if unset.
///
/// Always a full instant, even when the reference was set from a
/// date-only value.
pub fn reference_date() -> NaiveDateTime {
    read_store().unwrap_or_default().instant()
}

/// Set the process-wide reference date.
///
/// Subsequent calculations reflect the new value immediately. Takes anything
/// convertible to [`Reference`]; date-only values are normalized to
/// midnight. To set from a string, parse a [`Reference`] first; parsing is
/// where invalid input is rejected.
pub fn set_reference_date(reference: impl Into<Reference>) {
    write_store(Some(reference.into()));
}

/// Unset the reference date; the next read resolves the epoch default.
pub fn clear_reference_date() {
    write_store(None);
}

/// Shift the stored reference forward by exactly one week.
///
/// Only the reference week's parity matters, so this swaps which of the two
/// possible week-pairings counts as the first half of a fortnight, for every
/// subsequent calculation. Applying it twice restores the original
/// boundaries.
pub fn flip_boundaries() {
    let mut guard = REFERENCE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let current = guard.unwrap_or_default();
    *guard = Some(Reference(current.instant() + chrono::Duration::days(7)));
}

#[cfg(test)]
pub(crate) fn lock_for_test() -> std::sync::MutexGuard<'static, ()> {
    // Tests that touch the process-wide store serialize on this mutex and
    // restore the unset state when done.
    static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    TEST_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ── Tests ───────────────────────────────────────────────────────────────────
