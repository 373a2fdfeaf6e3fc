//! Proleptic Gregorian calendar arithmetic over plain `(year, month, day)`
//! triples.
//!
//! The checked functions validate their arguments and are what callers
//! outside the crate use. The `pub(crate)` unchecked variants assume a valid
//! triple and back the [`Date`](crate::Date) hot paths.

use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MARCH_MONTH, DAYS_IN_MONTH, DAYS_PER_CENTURY,
    DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_LEAP_CYCLE, DAYS_PER_WEEK, DAYS_PER_YEAR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MARCH_EPOCH_OFFSET, MAX_DAY_NUMBER,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::error::DateError;
use crate::types::Weekday;

/// Gregorian leap year test.
///
/// A century year is a leap year only when divisible by 400; since 400 is
/// the least common multiple of 100 and 16, that reduces to a mask test.
pub const fn is_leap_year(year: u16) -> bool {
    let mask = if year.is_multiple_of(CENTURY_CYCLE) {
        GREGORIAN_CYCLE / CENTURY_CYCLE * LEAP_YEAR_CYCLE - 1
    } else {
        LEAP_YEAR_CYCLE - 1
    };
    year & mask == 0
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the year or month is invalid.
pub fn days_in_month(year: u16, month: u8) -> Result<u8, DateError> {
    check_year(year)?;
    check_month(month)?;
    Ok(month_length(year, month))
}

/// Day of the week of a valid date.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the triple is not a valid date.
pub fn day_of_week(year: u16, month: u8, day: u8) -> Result<Weekday, DateError> {
    validate(year, month, day)?;
    Ok(weekday_unchecked(year, month, day))
}

/// Days elapsed since 0001-01-01 (day number 0).
///
/// # Errors
/// Returns `DateError::OutOfRange` if the triple is not a valid date.
pub fn day_number(year: u16, month: u8, day: u8) -> Result<u32, DateError> {
    validate(year, month, day)?;
    Ok(day_number_unchecked(year, month, day))
}

/// Inverse of [`day_number`].
///
/// # Errors
/// Returns `DateError::OutOfRange` if `day_number` exceeds `MAX_DAY_NUMBER`.
pub fn from_day_number(day_number: u32) -> Result<(u16, u8, u8), DateError> {
    if day_number > MAX_DAY_NUMBER {
        return Err(DateError::out_of_range(
            "day number",
            day_number,
            0,
            MAX_DAY_NUMBER,
        ));
    }
    Ok(from_day_number_unchecked(day_number))
}

/// Checks that `(year, month, day)` names a real date in `0001-01-01..=9999-12-31`.
///
/// # Errors
/// Returns `DateError::OutOfRange` naming the first offending component.
pub fn validate(year: u16, month: u8, day: u8) -> Result<(), DateError> {
    check_year(year)?;
    check_month(month)?;
    let max_day = month_length(year, month);
    if !(MIN_DAY..=max_day).contains(&day) {
        return Err(DateError::out_of_range("day", day, MIN_DAY, max_day));
    }
    Ok(())
}

pub(crate) fn check_year(year: u16) -> Result<(), DateError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(DateError::out_of_range("year", year, MIN_YEAR, MAX_YEAR))
    }
}

pub(crate) fn check_month(month: u8) -> Result<(), DateError> {
    if (1..=MAX_MONTH).contains(&month) {
        Ok(())
    } else {
        Err(DateError::out_of_range("month", month, 1, MAX_MONTH))
    }
}

pub(crate) const fn month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Shortest length `month` can have in any year.
pub(crate) const fn min_month_length(month: u8) -> u8 {
    DAYS_IN_MONTH[month as usize]
}

/// Zeller's congruence with January and February counted as months 13 and
/// 14 of the previous year. Zeller numbers Saturday 0; shifting by six maps
/// that onto Sunday 0.
pub(crate) const fn weekday_unchecked(year: u16, month: u8, day: u8) -> Weekday {
    let (y, m) = march_based(year, month);
    // `m` is 0 for March; Zeller's month term wants March as 3.
    let zeller_month = m + 3;
    let h = day as u32 + (13 * (zeller_month + 1)) / 5 + y + y / 4 - y / 100 + y / 400;
    Weekday::from_index(h + DAYS_PER_WEEK as u32 - 1)
}

pub(crate) const fn day_number_unchecked(year: u16, month: u8, day: u8) -> u32 {
    let (y, m) = march_based(year, month);
    let days_before_year = y * DAYS_PER_YEAR + y / 4 - y / 100 + y / 400;
    let day_of_year = DAYS_BEFORE_MARCH_MONTH[m as usize] as u32 + day as u32 - 1;
    days_before_year + day_of_year - MARCH_EPOCH_OFFSET
}

/// Splits off whole 400-, 100-, 4- and 1-year blocks counted from
/// 0000-03-01, then whole months. The final century of a 400-year cycle and
/// the final year of a 4-year block are one day longer, hence the caps.
pub(crate) const fn from_day_number_unchecked(day_number: u32) -> (u16, u8, u8) {
    let days = day_number + MARCH_EPOCH_OFFSET;

    let cycles = days / DAYS_PER_GREGORIAN_CYCLE;
    let mut rem = days % DAYS_PER_GREGORIAN_CYCLE;

    let mut centuries = rem / DAYS_PER_CENTURY;
    if centuries > 3 {
        centuries = 3;
    }
    rem -= centuries * DAYS_PER_CENTURY;

    let leap_cycles = rem / DAYS_PER_LEAP_CYCLE;
    rem %= DAYS_PER_LEAP_CYCLE;

    let mut years = rem / DAYS_PER_YEAR;
    if years > 3 {
        years = 3;
    }
    rem -= years * DAYS_PER_YEAR;

    let mut m = 11;
    while DAYS_BEFORE_MARCH_MONTH[m] as u32 > rem {
        m -= 1;
    }
    let day = (rem - DAYS_BEFORE_MARCH_MONTH[m] as u32 + 1) as u8;

    let y = cycles * GREGORIAN_CYCLE as u32 + centuries * 100 + leap_cycles * 4 + years;
    if m < 10 {
        (y as u16, m as u8 + 3, day)
    } else {
        ((y + 1) as u16, m as u8 - 9, day)
    }
}

/// Reframes a date onto a year that starts on March 1: returns the internal
/// year and a zero-based month where March is 0 and February is 11.
const fn march_based(year: u16, month: u8) -> (u32, u32) {
    if month <= FEBRUARY {
        (year as u32 - 1, month as u32 + 9)
    } else {
        (year as u32, month as u32 - 3)
    }
}
