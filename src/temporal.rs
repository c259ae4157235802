//! Clock-time values and the arithmetic the vaktija queries are built on.
//!
//! The upstream API hands out prayer times as bare `H:MM`/`HH:MM` strings
//! with no date or timezone attached. [`TimeOfDay`] is the canonical parsed
//! form of such a string, and this module provides the three operations the
//! schedule logic needs on top of ordering: wrapping subtraction on a
//! 24-hour wheel (for the sunset-to-dawn night span) and division of a span
//! by a small integer (for the midpoint and last third of the night).
//!
//! `TimeOfDay` is deliberately not `chrono::NaiveTime`: the original
//! vaktija semantics are looser (an hour of 99 parses fine, subtraction
//! wraps without tracking days, division carries a seconds remainder) and
//! the queries depend on exactly those semantics.

use std::fmt;
use std::str::FromStr;

use crate::error::VaktijaError;

/// A wall-clock time of day, minute resolution.
///
/// Ordering is hour-first, then minute — a plain total order over the pair,
/// not a modular one. 23:59 compares greater than 00:01 even though the two
/// may be two minutes apart on a real clock; the wraparound cases are the
/// business of [`Vaktija::next_vakat`](crate::vaktija::Vaktija::next_vakat),
/// not of the comparison.
///
/// Invariant: values are only ever constructed by parsing or by the
/// arithmetic below, both of which keep the fields in range (with the one
/// documented looseness that parsing performs no range check on the hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub const fn new(hour: u32, minute: u32) -> Self {
        TimeOfDay { hour, minute }
    }

    /// Subtract `other` from `self` on a 24-hour wheel.
    ///
    /// If the minuend minute is smaller, one hour is borrowed (and an hour
    /// of 0 wraps to 23, treating the value as belonging to the previous
    /// day without tracking any day count). A negative hour result wraps by
    /// adding 24.
    ///
    /// This exists to compute the night span between sunset and the next
    /// day's dawn. It is not a general signed-duration subtraction: it
    /// returns no sign, and inputs outside the borrow logic described above
    /// are not given any further meaning.
    pub fn wrapping_sub(self, other: TimeOfDay) -> TimeOfDay {
        let mut hour = self.hour as i32;

        let minute = if self.minute < other.minute {
            // Borrow one hour into the minuend's minutes.
            hour -= 1;
            self.minute + 60 - other.minute
        } else {
            self.minute - other.minute
        };

        if hour < 0 {
            hour = 23;
        }

        let mut hour = hour - other.hour as i32;
        if hour < 0 {
            hour += 24;
        }

        TimeOfDay {
            hour: hour as u32,
            minute,
        }
    }

    /// Divide an hour:minute span by a small integer, keeping a seconds
    /// remainder.
    ///
    /// The hour is divided as a real number; its integer part becomes the
    /// result hour and its fractional part, converted to minutes and
    /// truncated, is added to the integer part of the divided minutes. The
    /// leftover fractional minute is rounded into seconds. Carrying the
    /// seconds instead of rounding the minutes keeps the halves and thirds
    /// of the night span exact enough to re-subtract from dawn without
    /// accumulating error.
    pub fn div(self, divisor: u32) -> TimeSpan {
        let hours = self.hour as f64 / divisor as f64;
        let hours_int = hours.trunc();
        let hours_frac = hours - hours_int;

        let minutes = self.minute as f64 / divisor as f64;
        let minutes_int = minutes.trunc();
        let minutes_frac = minutes - minutes_int;

        let minute = (hours_frac * 60.0).trunc() + minutes_int;
        let second = (minutes_frac * 60.0).round();

        TimeSpan {
            hour: hours_int as u32,
            minute: minute as u32,
            second: second as u32,
        }
    }
}

/// Parse a `H:MM` or `HH:MM` string.
///
/// The colon must sit at byte position 1 or 2 and the total length must
/// match (4 characters for a one-digit hour, 5 for a two-digit hour).
/// Leading sign characters are tolerated and magnitudes taken as absolute
/// values. Beyond the shape check there is no range validation — "99:30"
/// parses to hour 99. Both quirks come from the upstream lineage and are
/// kept as-is.
impl FromStr for TimeOfDay {
    type Err = VaktijaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VaktijaError::InvalidTimeFormat(s.to_string());

        let colon = match s.find(':') {
            Some(i @ (1 | 2)) => i,
            _ => return Err(invalid()),
        };

        // Exactly two minute digits follow the colon.
        if s.len() != colon + 3 {
            return Err(invalid());
        }

        let hour: i32 = s[..colon].parse().map_err(|_| invalid())?;
        let minute: i32 = s[colon + 1..].parse().map_err(|_| invalid())?;

        Ok(TimeOfDay {
            hour: hour.unsigned_abs(),
            minute: minute.unsigned_abs(),
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The result of dividing a span: hour, minute and a seconds remainder.
///
/// Only division produces these. When a span is fed back into
/// [`TimeOfDay::wrapping_sub`] the seconds are dropped — subtraction works
/// at minute resolution, and the seconds only matter for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeSpan {
    /// The span truncated to minute resolution, for re-subtraction.
    pub fn whole_minutes(self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
        }
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
