//! # fortnight-engine
//!
//! Deterministic fortnight boundary computation.
//!
//! A fortnight here is a Monday-anchored pair of calendar weeks. Which weeks
//! pair up is controlled by a reference date: the week containing the
//! reference is defined to fall in the first half of its fortnight, and
//! every other boundary follows from that parity. Three queries cover the
//! whole surface: the beginning, end, and next-start of the fortnight
//! containing a given instant.
//!
//! All computation is pure: no system clock access, no I/O. The only shared
//! state is the process-wide reference date, which defaults to the Unix
//! epoch and can be replaced or passed explicitly per call.
//!
//! ```
//! use chrono::NaiveDate;
//! use fortnight_engine::Fortnight;
//!
//! let friday = NaiveDate::from_ymd_opt(2010, 12, 17).unwrap();
//! assert_eq!(
//!     friday.beginning_of_fortnight(),
//!     NaiveDate::from_ymd_opt(2010, 12, 6).unwrap()
//! );
//! assert_eq!(
//!     friday.next_fortnight(),
//!     NaiveDate::from_ymd_opt(2010, 12, 20).unwrap()
//! );
//! ```
//!
//! ## Modules
//!
//! - [`fortnight`] — Boundary determination (the [`Fortnight`] extension trait)
//! - [`instant`] — The host date/time capability ([`FortnightInstant`] and its chrono impls)
//! - [`config`] — Reference-date configuration (explicit values and the process-wide store)
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod fortnight;
pub mod instant;

pub use config::{
    clear_reference_date, flip_boundaries, reference_date, set_reference_date, Reference,
};
pub use error::FortnightError;
pub use fortnight::Fortnight;
pub use instant::{FortnightInstant, SECONDS_PER_DAY, SECONDS_PER_WEEK};
