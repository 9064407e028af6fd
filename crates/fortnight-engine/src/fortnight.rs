//! Fortnight boundary determination.
//!
//! A fortnight is a Monday-anchored pair of calendar weeks. Which weeks pair
//! up is decided by the configured reference date: the week containing the
//! reference falls in the first half of its fortnight, and every boundary
//! before and after follows from that parity.
//!
//! [`Fortnight`] is blanket-implemented for every [`FortnightInstant`], so
//! the methods are available directly on `NaiveDateTime`, `DateTime<Utc>`,
//! and `NaiveDate`. The no-argument forms read the process-wide reference
//! from [`crate::config`]; the `_with_reference` forms take an explicit
//! reference and never touch shared state.

use crate::config;
use crate::instant::{FortnightInstant, SECONDS_PER_WEEK};

/// Fortnight boundary queries over any [`FortnightInstant`].
pub trait Fortnight: FortnightInstant {
    /// The Monday 00:00:00 instant beginning the fortnight containing
    /// `self`, under the process-wide reference date.
    ///
    /// The result is always a week start at or before `self`, strictly less
    /// than two weeks behind it.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fortnight_engine::Fortnight;
    ///
    /// // 2010-12-17 is a Friday. Under the default epoch reference it falls
    /// // in the second week of its fortnight, so the boundary is the Monday
    /// // of the week before.
    /// let friday = NaiveDate::from_ymd_opt(2010, 12, 17).unwrap();
    /// assert_eq!(
    ///     friday.beginning_of_fortnight(),
    ///     NaiveDate::from_ymd_opt(2010, 12, 6).unwrap()
    /// );
    /// ```
    fn beginning_of_fortnight(self) -> Self {
        self.beginning_of_fortnight_with_reference(Self::from_reference(config::reference_date()))
    }

    /// Like [`beginning_of_fortnight`](Self::beginning_of_fortnight), with
    /// an explicit reference instead of the configured one.
    ///
    /// Only the reference's week matters: any two references in the same
    /// Monday-anchored week produce identical boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fortnight_engine::Fortnight;
    ///
    /// let friday = NaiveDate::from_ymd_opt(2010, 12, 17).unwrap();
    ///
    /// // Making the friday itself the reference puts its week in the first
    /// // half, so the fortnight starts on the Monday of that same week.
    /// assert_eq!(
    ///     friday.beginning_of_fortnight_with_reference(friday),
    ///     NaiveDate::from_ymd_opt(2010, 12, 13).unwrap()
    /// );
    /// ```
    fn beginning_of_fortnight_with_reference(self, reference: Self) -> Self {
        beginning_with_reference(self, reference)
    }

    /// The last representable second of the fortnight containing `self`:
    /// the end of the 14th calendar day, 23:59:59.
    fn end_of_fortnight(self) -> Self {
        self.beginning_of_fortnight().plus_days(13).end_of_day()
    }

    /// Like [`end_of_fortnight`](Self::end_of_fortnight), with an explicit
    /// reference.
    fn end_of_fortnight_with_reference(self, reference: Self) -> Self {
        self.beginning_of_fortnight_with_reference(reference)
            .plus_days(13)
            .end_of_day()
    }

    /// The Monday 00:00:00 instant beginning the fortnight after the one
    /// containing `self`: exactly 14 days past the current boundary,
    /// wherever `self` falls within its fortnight.
    fn next_fortnight(self) -> Self {
        self.beginning_of_fortnight().plus_days(14)
    }

    /// Like [`next_fortnight`](Self::next_fortnight), with an explicit
    /// reference.
    fn next_fortnight_with_reference(self, reference: Self) -> Self {
        self.beginning_of_fortnight_with_reference(reference)
            .plus_days(14)
    }
}

impl<T: FortnightInstant> Fortnight for T {}

fn beginning_with_reference<T: FortnightInstant>(instant: T, reference: T) -> T {
    let reference_week = reference.beginning_of_week();

    // Week offsets are counted with Euclidean (floor) division so the count
    // is uniform on both sides of the reference week:
    //
    //   |  a  +  b  |R c  +  d  |
    //
    // '|' is a fortnight boundary, '+' an interior week boundary, R the
    // reference week. weeks_since_reference for a, b, c, d is -2, -1, 0, 1;
    // even offsets are first-half weeks. Truncating division would collapse
    // all of b onto 0 and force a flipped parity test for instants before
    // the reference week, which misclassifies instants sitting exactly on a
    // pre-reference week boundary.
    let weeks_since_reference = instant
        .seconds_since(reference_week)
        .div_euclid(SECONDS_PER_WEEK);
    let in_first_half = weeks_since_reference % 2 == 0;

    // A second-half instant shares its boundary with the week before it.
    let anchor = if in_first_half {
        instant
    } else {
        instant.plus_days(-7)
    };
    anchor.beginning_of_week()
}

// ── Tests ───────────────────────────────────────────────────────────────────
