use crate::calendar::{
    check_month, check_year, day_number_unchecked, from_day_number_unchecked, is_leap_year,
    month_length, validate, weekday_unchecked,
};
use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_WEEK, DECEMBER, JANUARY, MAX_DAY_NUMBER, MAX_MONTH,
    MAX_YEAR, MIN_DAY, MIN_YEAR, SMALL_DAY_DELTA,
};
use crate::error::{DateError, ParseError};
use crate::types::{Ordinal, Weekday};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

const YEAR_SHIFT: u32 = 16;
const MONTH_SHIFT: u32 = 8;
const FIELD_MASK: u32 = 0xFF;

/// A calendar date in `0001-01-01..=9999-12-31`, or the empty date.
///
/// Packed into one `u32`: year in the high 16 bits, month in the next 8,
/// day in the low 8. Comparing the packed integers orders dates
/// chronologically. The all-zero pattern is the empty date, which sorts
/// before every real date.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(u32);

impl Date {
    /// The empty date: no year, month or day.
    pub const EMPTY: Self = Self(0);
    /// 0001-01-01
    pub const MIN: Self = Self::pack(MIN_YEAR, JANUARY, MIN_DAY);
    /// 9999-12-31
    pub const MAX: Self = Self::pack(MAX_YEAR, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]);

    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year, month or day is invalid.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        validate(year, month, day)?;
        Ok(Self::pack(year, month, day))
    }

    /// Converts a day number (days since 0001-01-01) to a date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `day_number` exceeds `MAX_DAY_NUMBER`.
    pub fn from_day_number(day_number: u32) -> Result<Self, DateError> {
        let (year, month, day) = crate::calendar::from_day_number(day_number)?;
        Ok(Self::pack(year, month, day))
    }

    /// The `ordinal`-th `weekday` of `month` in `year`.
    ///
    /// For a positive ordinal the latest possible day is `ordinal * 7`; for a
    /// negative one it is the month length minus `(|ordinal| - 1) * 7`. The
    /// result is the matching weekday in the seven days ending at that anchor.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year or month is invalid.
    pub fn from_weekday_of_month(
        year: u16,
        month: u8,
        weekday: Weekday,
        ordinal: Ordinal,
    ) -> Result<Self, DateError> {
        check_year(year)?;
        check_month(month)?;
        let anchor = weekday_anchor(year, month, ordinal);
        let back = weekday_unchecked(year, month, anchor).days_since(weekday);
        Ok(Self::pack(year, month, anchor - back))
    }

    pub(crate) const fn pack(year: u16, month: u8, day: u8) -> Self {
        Self(((year as u32) << YEAR_SHIFT) | ((month as u32) << MONTH_SHIFT) | day as u32)
    }

    /// Whether this is the empty date.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the year, or 0 for the empty date
    #[inline]
    pub const fn year(self) -> u16 {
        (self.0 >> YEAR_SHIFT) as u16
    }

    /// Returns the month, or 0 for the empty date
    #[inline]
    pub const fn month(self) -> u8 {
        ((self.0 >> MONTH_SHIFT) & FIELD_MASK) as u8
    }

    /// Returns the day of the month, or 0 for the empty date
    #[inline]
    pub const fn day(self) -> u8 {
        (self.0 & FIELD_MASK) as u8
    }

    fn require(self, op: &'static str) -> Result<Self, DateError> {
        if self.is_empty() {
            Err(DateError::InvalidState(op))
        } else {
            Ok(self)
        }
    }

    /// Day of the week.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date.
    pub fn weekday(self) -> Result<Weekday, DateError> {
        self.require("weekday")?;
        Ok(weekday_unchecked(self.year(), self.month(), self.day()))
    }

    /// Days since 0001-01-01.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date.
    pub fn day_number(self) -> Result<u32, DateError> {
        self.require("day_number")?;
        Ok(self.day_number_unchecked())
    }

    /// One-based day of the year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date.
    pub fn day_of_year(self) -> Result<u16, DateError> {
        self.require("day_of_year")?;
        let jan_first = day_number_unchecked(self.year(), JANUARY, MIN_DAY);
        // A year has at most 366 days, so the difference always fits.
        Ok((self.day_number_unchecked() - jan_first + 1) as u16)
    }

    /// Whether the date falls in a leap year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date.
    pub fn is_leap_year(self) -> Result<bool, DateError> {
        self.require("is_leap_year")?;
        Ok(is_leap_year(self.year()))
    }

    /// Length of the date's month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date.
    pub fn days_in_month(self) -> Result<u8, DateError> {
        self.require("days_in_month")?;
        Ok(month_length(self.year(), self.month()))
    }

    #[inline]
    pub(crate) const fn day_number_unchecked(self) -> u32 {
        day_number_unchecked(self.year(), self.month(), self.day())
    }

    /// Shifts the year by `years`. February 29 becomes February 28 when the
    /// target year is not a leap year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date and
    /// `DateError::Overflow` if the year leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_years(self, years: i32) -> Result<Self, DateError> {
        self.require("add_years")?;
        let year = i32::from(self.year())
            .checked_add(years)
            .ok_or(DateError::Overflow)?;
        let year = in_year_range(year)?;
        Ok(Self::clamped(year, self.month(), self.day()))
    }

    /// Shifts the month by `months`, carrying into the year. The day is
    /// clamped to the last day of the resulting month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date and
    /// `DateError::Overflow` if the year leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        self.require("add_months")?;
        let total = i64::from(self.year()) * i64::from(MAX_MONTH)
            + i64::from(self.month() - 1)
            + i64::from(months);
        let year = total.div_euclid(i64::from(MAX_MONTH));
        let month = total.rem_euclid(i64::from(MAX_MONTH)) + 1;
        let year = i32::try_from(year).map_err(|_| DateError::Overflow)?;
        let year = in_year_range(year)?;
        // rem_euclid keeps the month within 1..=12
        Ok(Self::clamped(year, month as u8, self.day()))
    }

    fn clamped(year: u16, month: u8, day: u8) -> Self {
        Self::pack(year, month, day.min(month_length(year, month)))
    }

    /// The date `days` days away.
    ///
    /// Small shifts adjust the packed fields directly, crossing at most one
    /// month boundary; larger ones go through the day number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date and
    /// `DateError::Overflow` if the result leaves `Date::MIN..=Date::MAX`.
    pub fn add_days(self, days: i32) -> Result<Self, DateError> {
        self.require("add_days")?;
        if (-SMALL_DAY_DELTA..=SMALL_DAY_DELTA).contains(&days) {
            self.add_days_small(days)
        } else {
            self.add_days_large(days)
        }
    }

    fn add_days_small(self, days: i32) -> Result<Self, DateError> {
        let (year, month) = (self.year(), self.month());
        let day = i32::from(self.day()) + days;
        let length = i32::from(month_length(year, month));

        if day > length {
            let (year, month) = if month == DECEMBER {
                if year == MAX_YEAR {
                    return Err(DateError::Overflow);
                }
                (year + 1, JANUARY)
            } else {
                (year, month + 1)
            };
            // |days| <= 28 <= any month length, so the carry lands inside the month.
            Ok(Self::pack(year, month, (day - length) as u8))
        } else if day < i32::from(MIN_DAY) {
            let (year, month) = if month == JANUARY {
                if year == MIN_YEAR {
                    return Err(DateError::Overflow);
                }
                (year - 1, DECEMBER)
            } else {
                (year, month - 1)
            };
            let day = day + i32::from(month_length(year, month));
            Ok(Self::pack(year, month, day as u8))
        } else {
            Ok(Self::pack(year, month, day as u8))
        }
    }

    fn add_days_large(self, days: i32) -> Result<Self, DateError> {
        let target = i64::from(self.day_number_unchecked()) + i64::from(days);
        if !(0..=i64::from(MAX_DAY_NUMBER)).contains(&target) {
            return Err(DateError::Overflow);
        }
        let (year, month, day) = from_day_number_unchecked(target as u32);
        Ok(Self::pack(year, month, day))
    }

    /// The following day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date and
    /// `DateError::Overflow` for `Date::MAX`.
    pub fn next_day(self) -> Result<Self, DateError> {
        self.add_days(1)
    }

    /// The preceding day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidState` for the empty date and
    /// `DateError::Overflow` for `Date::MIN`.
    pub fn previous_day(self) -> Result<Self, DateError> {
        self.add_days(-1)
    }

    /// Signed number of days from `other` to `self`.
    ///
    /// Dates in the same or adjacent months are subtracted field-wise;
    /// anything further apart goes through day numbers.
    ///
    /// # Errors
    /// Returns `DateError::EmptyArgument` if either date is empty.
    pub fn subtract(self, other: Self) -> Result<i32, DateError> {
        if self.is_empty() {
            return Err(DateError::EmptyArgument("self"));
        }
        if other.is_empty() {
            return Err(DateError::EmptyArgument("other"));
        }
        match self.cmp(&other) {
            Ordering::Equal => Ok(0),
            Ordering::Greater => Ok(days_between(other, self)),
            Ordering::Less => Ok(-days_between(self, other)),
        }
    }
}

/// Days from `earlier` to `later`, `earlier <= later`.
fn days_between(earlier: Date, later: Date) -> i32 {
    let same_year = earlier.year() == later.year();
    if same_year && earlier.month() == later.month() {
        return i32::from(later.day()) - i32::from(earlier.day());
    }
    let adjacent = (same_year && earlier.month() + 1 == later.month())
        || (earlier.year() + 1 == later.year()
            && earlier.month() == DECEMBER
            && later.month() == JANUARY);
    if adjacent {
        let rest_of_month =
            i32::from(month_length(earlier.year(), earlier.month())) - i32::from(earlier.day());
        return rest_of_month + i32::from(later.day());
    }
    // Both day numbers are at most MAX_DAY_NUMBER, well inside i32.
    (later.day_number_unchecked() - earlier.day_number_unchecked()) as i32
}

fn in_year_range(year: i32) -> Result<u16, DateError> {
    u16::try_from(year)
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
        .ok_or(DateError::Overflow)
}

/// Latest day of the month that can hold the `ordinal`-th occurrence of a
/// weekday.
pub(crate) const fn weekday_anchor(year: u16, month: u8, ordinal: Ordinal) -> u8 {
    let n = ordinal.get();
    if n > 0 {
        n as u8 * DAYS_PER_WEEK
    } else {
        month_length(year, month) - (-n - 1) as u8 * DAYS_PER_WEEK
    }
}

impl Sub for Date {
    type Output = Result<i32, DateError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Date(empty)")
        } else {
            write!(f, "Date({self})")
        }
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses a strict ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let year = parse_component::<u16>(year)?;
        let month = parse_component::<u8>(month)?;
        let day = parse_component::<u8>(day)?;
        Ok(Self::new(year, month, day)?)
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::EMPTY);
        }
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_and_accessors() {
        let d = date(1991, 8, 15);
        assert_eq!(d.year(), 1991);
        assert_eq!(d.month(), 8);
        assert_eq!(d.day(), 15);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(
            Date::new(0, 1, 1),
            Err(DateError::OutOfRange { what: "year", .. })
        ));
        assert!(matches!(
            Date::new(10_000, 1, 1),
            Err(DateError::OutOfRange { what: "year", .. })
        ));
        assert!(matches!(
            Date::new(2024, 13, 1),
            Err(DateError::OutOfRange { what: "month", .. })
        ));
        assert!(matches!(
            Date::new(2023, 2, 29),
            Err(DateError::OutOfRange { what: "day", .. })
        ));
        assert!(Date::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_empty_accessors() {
        let empty = Date::EMPTY;
        assert!(empty.is_empty());
        assert_eq!((empty.year(), empty.month(), empty.day()), (0, 0, 0));
        assert_eq!(Date::default(), Date::EMPTY);
    }

    #[test]
    fn test_empty_operations_fail() {
        let empty = Date::EMPTY;
        assert!(matches!(empty.weekday(), Err(DateError::InvalidState(_))));
        assert!(matches!(empty.day_number(), Err(DateError::InvalidState(_))));
        assert!(matches!(empty.add_days(1), Err(DateError::InvalidState(_))));
        assert!(matches!(empty.add_months(1), Err(DateError::InvalidState(_))));
        assert!(matches!(empty.add_years(1), Err(DateError::InvalidState(_))));
        assert!(matches!(empty.next_day(), Err(DateError::InvalidState(_))));
        assert!(matches!(
            empty.subtract(Date::MIN),
            Err(DateError::EmptyArgument("self"))
        ));
        assert!(matches!(
            Date::MIN - empty,
            Err(DateError::EmptyArgument("other"))
        ));
    }

    #[test]
    fn test_empty_ordering() {
        assert!(Date::EMPTY < Date::MIN);
        assert_eq!(Date::EMPTY, Date::EMPTY);
        assert_ne!(Date::EMPTY, Date::MIN);
        // An absent date sorts before the empty one.
        assert!(None < Some(Date::EMPTY));

        let mut dates = vec![Date::MAX, Date::EMPTY, date(2000, 1, 1), Date::MIN];
        dates.sort();
        assert_eq!(dates, vec![Date::EMPTY, Date::MIN, date(2000, 1, 1), Date::MAX]);
    }

    #[test]
    fn test_packed_order_matches_day_number() {
        let samples = [
            date(1, 1, 1),
            date(1, 1, 2),
            date(1, 2, 1),
            date(1999, 12, 31),
            date(2000, 1, 1),
            date(2000, 2, 29),
            date(2000, 3, 1),
            date(9999, 12, 31),
        ];
        for a in samples {
            for b in samples {
                let by_number = a.day_number().unwrap().cmp(&b.day_number().unwrap());
                assert_eq!(a.cmp(&b), by_number, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_min_max() {
        assert_eq!(Date::MIN.day_number().unwrap(), 0);
        assert_eq!(Date::MAX.day_number().unwrap(), MAX_DAY_NUMBER);
        assert_eq!(Date::from_day_number(0).unwrap(), Date::MIN);
        assert_eq!(Date::from_day_number(MAX_DAY_NUMBER).unwrap(), Date::MAX);
        assert!(Date::from_day_number(MAX_DAY_NUMBER + 1).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 5, 27).weekday().unwrap(), Weekday::Monday);
        assert_eq!(Date::MIN.weekday().unwrap(), Weekday::Monday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2023, 1, 1).day_of_year().unwrap(), 1);
        assert_eq!(date(2023, 12, 31).day_of_year().unwrap(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year().unwrap(), 366);
        assert_eq!(date(2024, 3, 1).day_of_year().unwrap(), 61);
    }

    #[test]
    fn test_leap_helpers() {
        assert!(date(2024, 7, 1).is_leap_year().unwrap());
        assert!(!date(1900, 7, 1).is_leap_year().unwrap());
        assert_eq!(date(2024, 2, 10).days_in_month().unwrap(), 29);
        assert_eq!(date(2023, 2, 10).days_in_month().unwrap(), 28);
    }

    #[test]
    fn test_add_years_leap_clamp() {
        assert_eq!(date(2000, 2, 29).add_years(1).unwrap(), date(2001, 2, 28));
        assert_eq!(date(2000, 2, 29).add_years(4).unwrap(), date(2004, 2, 29));
        assert_eq!(date(2000, 2, 29).add_years(100).unwrap(), date(2100, 2, 28));
        assert_eq!(date(2004, 2, 29).add_years(-4).unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn test_add_years_overflow() {
        assert!(matches!(Date::MAX.add_years(1), Err(DateError::Overflow)));
        assert!(matches!(Date::MIN.add_years(-1), Err(DateError::Overflow)));
        assert!(matches!(Date::MIN.add_years(i32::MAX), Err(DateError::Overflow)));
        assert_eq!(Date::MIN.add_years(9998).unwrap(), date(9999, 1, 1));
    }

    #[test]
    fn test_add_months() {
        assert_eq!(date(2023, 1, 31).add_months(1).unwrap(), date(2023, 2, 28));
        assert_eq!(date(2024, 1, 31).add_months(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2023, 3, 31).add_months(-1).unwrap(), date(2023, 2, 28));
        assert_eq!(date(2023, 11, 15).add_months(2).unwrap(), date(2024, 1, 15));
        assert_eq!(date(2023, 1, 15).add_months(-1).unwrap(), date(2022, 12, 15));
        assert_eq!(date(2023, 5, 31).add_months(-24).unwrap(), date(2021, 5, 31));
        assert_eq!(date(2023, 5, 31).add_months(0).unwrap(), date(2023, 5, 31));
    }

    #[test]
    fn test_add_months_overflow() {
        assert!(matches!(Date::MAX.add_months(1), Err(DateError::Overflow)));
        assert!(matches!(Date::MIN.add_months(-1), Err(DateError::Overflow)));
        assert!(matches!(Date::MIN.add_months(i32::MIN), Err(DateError::Overflow)));
        assert!(matches!(Date::MAX.add_months(i32::MAX), Err(DateError::Overflow)));
    }

    #[test]
    fn test_add_days_small_crosses_boundaries() {
        assert_eq!(date(2023, 12, 31).add_days(1).unwrap(), date(2024, 1, 1));
        assert_eq!(date(2024, 1, 1).add_days(-1).unwrap(), date(2023, 12, 31));
        assert_eq!(date(2024, 2, 28).add_days(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 28).add_days(1).unwrap(), date(2023, 3, 1));
        assert_eq!(date(2023, 3, 1).add_days(-1).unwrap(), date(2023, 2, 28));
        assert_eq!(date(2023, 1, 31).add_days(28).unwrap(), date(2023, 2, 28));
        assert_eq!(date(2023, 3, 1).add_days(-28).unwrap(), date(2023, 2, 1));
    }

    #[test]
    fn test_add_days_large() {
        assert_eq!(date(2000, 1, 1).add_days(366).unwrap(), date(2001, 1, 1));
        assert_eq!(date(2001, 1, 1).add_days(-366).unwrap(), date(2000, 1, 1));
        assert_eq!(Date::MIN.add_days(MAX_DAY_NUMBER as i32).unwrap(), Date::MAX);
        assert_eq!(Date::MAX.add_days(-(MAX_DAY_NUMBER as i32)).unwrap(), Date::MIN);
    }

    #[test]
    fn test_add_days_overflow() {
        assert!(matches!(Date::MAX.add_days(1), Err(DateError::Overflow)));
        assert!(matches!(Date::MIN.add_days(-1), Err(DateError::Overflow)));
        assert!(matches!(Date::MAX.add_days(100), Err(DateError::Overflow)));
        assert!(matches!(Date::MIN.add_days(i32::MIN), Err(DateError::Overflow)));
        assert!(matches!(Date::MAX.add_days(i32::MAX), Err(DateError::Overflow)));
    }

    #[test]
    fn test_add_days_paths_agree() {
        let starts = [
            date(2023, 1, 31),
            date(2024, 2, 29),
            date(2023, 12, 20),
            date(1900, 2, 28),
            date(2, 1, 5),
            date(9999, 12, 1),
        ];
        for start in starts {
            for days in -SMALL_DAY_DELTA..=SMALL_DAY_DELTA {
                assert_eq!(
                    start.add_days_small(days).ok(),
                    start.add_days_large(days).ok(),
                    "{start} + {days}"
                );
            }
        }
    }

    #[test]
    fn test_add_days_inverse() {
        let start = date(1987, 6, 5);
        for days in [-100_000, -400, -29, -1, 0, 1, 27, 31, 365, 1_000_000] {
            let moved = start.add_days(days).unwrap();
            assert_eq!(moved.add_days(-days).unwrap(), start, "{days}");
        }
    }

    #[test]
    fn test_next_and_previous_day() {
        assert_eq!(date(2024, 2, 29).next_day().unwrap(), date(2024, 3, 1));
        assert_eq!(date(2024, 3, 1).previous_day().unwrap(), date(2024, 2, 29));
        assert!(Date::MAX.next_day().is_err());
        assert!(Date::MIN.previous_day().is_err());
    }

    #[test]
    fn test_subtract() {
        assert_eq!(date(2024, 3, 1) - date(2024, 2, 28), Ok(2));
        assert_eq!(date(2024, 2, 28) - date(2024, 3, 1), Ok(-2));
        assert_eq!(date(2024, 1, 1) - date(2023, 12, 31), Ok(1));
        assert_eq!(date(2024, 5, 20) - date(2024, 5, 1), Ok(19));
        assert_eq!(date(2025, 1, 1) - date(2024, 1, 1), Ok(366));
        assert_eq!(Date::MAX - Date::MIN, Ok(MAX_DAY_NUMBER as i32));
        assert_eq!(Date::MIN - Date::MIN, Ok(0));
    }

    #[test]
    fn test_subtract_agrees_with_day_numbers() {
        let samples = [
            date(2023, 11, 30),
            date(2023, 12, 1),
            date(2023, 12, 31),
            date(2024, 1, 1),
            date(2024, 1, 31),
            date(2024, 2, 1),
            date(2024, 2, 29),
            date(2024, 3, 31),
        ];
        for a in samples {
            for b in samples {
                let expected =
                    a.day_number().unwrap() as i32 - b.day_number().unwrap() as i32;
                assert_eq!(a - b, Ok(expected), "{a} - {b}");
            }
        }
    }

    #[test]
    fn test_from_weekday_of_month() {
        let last = Ordinal::LAST;
        assert_eq!(
            Date::from_weekday_of_month(2024, 5, Weekday::Monday, last).unwrap(),
            date(2024, 5, 27)
        );
        let fourth = Ordinal::new(4).unwrap();
        assert_eq!(
            Date::from_weekday_of_month(2024, 11, Weekday::Thursday, fourth).unwrap(),
            date(2024, 11, 28)
        );
        assert_eq!(
            Date::from_weekday_of_month(2024, 9, Weekday::Monday, Ordinal::FIRST).unwrap(),
            date(2024, 9, 2)
        );
        // Leap February: the last Thursday of 2024 is the 29th.
        assert_eq!(
            Date::from_weekday_of_month(2024, 2, Weekday::Thursday, last).unwrap(),
            date(2024, 2, 29)
        );
        assert_eq!(
            Date::from_weekday_of_month(2023, 2, Weekday::Tuesday, last).unwrap(),
            date(2023, 2, 28)
        );
        assert!(Date::from_weekday_of_month(2024, 0, Weekday::Monday, last).is_err());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(date(7, 3, 9).to_string(), "0007-03-09");
        assert_eq!(Date::EMPTY.to_string(), "");
        assert_eq!(format!("{:?}", date(2024, 5, 27)), "Date(2024-05-27)");
        assert_eq!(format!("{:?}", Date::EMPTY), "Date(empty)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2024-05-27".parse::<Date>().unwrap(), date(2024, 5, 27));
        assert_eq!(" 0001-01-01 ".parse::<Date>().unwrap(), Date::MIN);
        assert!(matches!("".parse::<Date>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2024-05".parse::<Date>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-05-2x".parse::<Date>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-+5-01".parse::<Date>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<Date>(),
            Err(ParseError::OutOfRange(DateError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_serde() {
        let d = date(1991, 8, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), d);

        let json = serde_json::to_string(&Date::EMPTY).unwrap();
        assert_eq!(json, r#""""#);
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), Date::EMPTY);

        assert!(serde_json::from_str::<Date>(r#""2024-02-30""#).is_err());
    }
}
