//! Field coercion for the raw month/day/time cells.
//!
//! The federation's tables carry hand-edited values, so the production
//! policy ([`Lenient`]) clamps anything malformed to a safe default instead
//! of failing.  [`Strict`] rejects the same inputs and exists so tests can
//! prove the normalizer works with either policy.

use thiserror::Error;

#[derive(PartialEq, Eq, Debug, Error)]
#[error("Not a valid {field} value: {raw:?}")]
pub struct CoercionError {
    pub field: &'static str,
    pub raw: String,
}

/// Converts raw string cells into numeric date/time fields.
pub trait CoercionPolicy {
    fn month(&self, raw: &str) -> Result<u32, CoercionError>;
    fn day(&self, raw: &str) -> Result<u32, CoercionError>;
    fn time(&self, raw: &str) -> Result<(u32, u32), CoercionError>;
}

/// Clamp-to-default policy: month/day fall back to 1, time fields to 0.
///
/// An hour of exactly 24 is passed through untouched.  The source data has
/// carried that value and downstream timestamp construction is where it
/// surfaces; see the normalizer.
pub struct Lenient;

impl CoercionPolicy for Lenient {
    fn month(&self, raw: &str) -> Result<u32, CoercionError> {
        Ok(match parse_two_digits(raw) {
            Some(month) if (1..=12).contains(&month) => month,
            _ => 1,
        })
    }

    fn day(&self, raw: &str) -> Result<u32, CoercionError> {
        Ok(match parse_two_digits(raw) {
            Some(day) if (1..=31).contains(&day) => day,
            _ => 1,
        })
    }

    fn time(&self, raw: &str) -> Result<(u32, u32), CoercionError> {
        let Some((hour, minute)) = split_time(raw) else {
            return Ok((0, 0));
        };
        let hour = if hour <= 24 { hour } else { 0 };
        let minute = if minute <= 59 { minute } else { 0 };
        Ok((hour, minute))
    }
}

/// Reject-instead-of-clamp policy.  Unlike [`Lenient`] it also refuses an
/// hour of 24.
pub struct Strict;

impl CoercionPolicy for Strict {
    fn month(&self, raw: &str) -> Result<u32, CoercionError> {
        parse_two_digits(raw)
            .filter(|month| (1..=12).contains(month))
            .ok_or_else(|| invalid("month", raw))
    }

    fn day(&self, raw: &str) -> Result<u32, CoercionError> {
        parse_two_digits(raw)
            .filter(|day| (1..=31).contains(day))
            .ok_or_else(|| invalid("day", raw))
    }

    fn time(&self, raw: &str) -> Result<(u32, u32), CoercionError> {
        split_time(raw)
            .filter(|&(hour, minute)| hour <= 23 && minute <= 59)
            .ok_or_else(|| invalid("time", raw))
    }
}

fn invalid(field: &'static str, raw: &str) -> CoercionError {
    CoercionError {
        field,
        raw: raw.to_owned(),
    }
}

fn parse_two_digits(raw: &str) -> Option<u32> {
    if regex!(r"^[0-9]{1,2}$").is_match(raw) {
        raw.parse().ok()
    } else {
        None
    }
}

// Anchored at the start only: workbook cells carry a trailing seconds part
// ("15:30:00") that must still parse as 15:30.
fn split_time(raw: &str) -> Option<(u32, u32)> {
    let captures = regex!(r"^([0-9]{1,2}):([0-9]{2})").captures(raw)?;
    Some((captures[1].parse().ok()?, captures[2].parse().ok()?))
}

/// Infers which calendar year a month/day pair belongs to.
///
/// The season spans April of `configured_year` through March of the next
/// calendar year, and the source never states the year explicitly, so
/// January through March land in `configured_year + 1`.
pub fn resolve_fiscal_year(month: u32, configured_year: i32) -> i32 {
    if month < 4 {
        configured_year + 1
    } else {
        configured_year
    }
}
