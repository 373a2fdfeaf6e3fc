use crate::consts::{DAYS_PER_WEEK, MAX_ORDINAL, MAX_WEEKDAY_ADJUSTMENT, MAX_YEAR, MIN_YEAR};
use crate::error::DateError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroI8;

/// A day of the week. The discriminant is the wire value: 0 is Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Creates a weekday from its number (0 = Sunday .. 6 = Saturday)
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is greater than 6.
    pub fn new(value: u8) -> Result<Self, DateError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| DateError::out_of_range("weekday", value, 0, DAYS_PER_WEEK - 1))
    }

    /// Returns the weekday number (0 = Sunday)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Number of days from `other` forward to `self`, in `0..7`.
    #[inline]
    pub const fn days_since(self, other: Self) -> u8 {
        (self as u8 + DAYS_PER_WEEK - other as u8) % DAYS_PER_WEEK
    }

    pub(crate) const fn from_index(index: u32) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK as u32) as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.get()
    }
}

/// Signed weekday-of-month occurrence in `-4..=4`, never 0.
/// Positive values count from the first of the month, negative from the end.
/// Uses `NonZeroI8` internally, so 0 is not a valid ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct Ordinal(NonZeroI8);

impl Ordinal {
    /// The first occurrence in the month.
    pub const FIRST: Self = Self::from_const(1);
    /// The last occurrence in the month.
    pub const LAST: Self = Self::from_const(-1);

    const fn from_const(value: i8) -> Self {
        match NonZeroI8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("ordinal constant must be non-zero"),
        }
    }

    /// Creates a new ordinal, validating that it's non-zero and within `±MAX_ORDINAL`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or its magnitude exceeds `MAX_ORDINAL`.
    pub fn new(value: i8) -> Result<Self, DateError> {
        let out_of_range = || DateError::out_of_range("ordinal", value, -MAX_ORDINAL, MAX_ORDINAL);
        let non_zero = NonZeroI8::new(value).ok_or_else(out_of_range)?;
        if !(-MAX_ORDINAL..=MAX_ORDINAL).contains(&value) {
            return Err(out_of_range());
        }
        Ok(Self(non_zero))
    }

    /// Returns the ordinal value as i8
    #[inline]
    pub const fn get(self) -> i8 {
        self.0.get()
    }

    /// Whether the ordinal counts back from the end of the month.
    #[inline]
    pub const fn is_from_end(self) -> bool {
        self.0.get() < 0
    }
}

impl TryFrom<i8> for Ordinal {
    type Error = DateError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ordinal> for i8 {
    fn from(ordinal: Ordinal) -> Self {
        ordinal.0.get()
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-weekday day offsets applied to a day-of-month occurrence.
///
/// The table is a plain value: a recurrence built from it keeps its own copy,
/// and later changes to the caller's table are never visible through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i8; 7]", into = "[i8; 7]")]
pub struct WeekdayAdjustments([i8; 7]);

impl WeekdayAdjustments {
    /// A table that moves no weekday.
    pub const NONE: Self = Self([0; 7]);

    /// Creates a table from offsets indexed by weekday number (Sunday first)
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if any offset's magnitude exceeds `MAX_WEEKDAY_ADJUSTMENT`.
    pub fn new(offsets: [i8; 7]) -> Result<Self, DateError> {
        for offset in offsets {
            check_offset(offset)?;
        }
        Ok(Self(offsets))
    }

    /// Offset applied when the occurrence lands on `weekday`.
    #[inline]
    pub const fn get(&self, weekday: Weekday) -> i8 {
        self.0[weekday as usize]
    }

    /// Sets the offset for `weekday`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the offset's magnitude exceeds `MAX_WEEKDAY_ADJUSTMENT`.
    pub fn set(&mut self, weekday: Weekday, offset: i8) -> Result<(), DateError> {
        check_offset(offset)?;
        self.0[weekday as usize] = offset;
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the offset's magnitude exceeds `MAX_WEEKDAY_ADJUSTMENT`.
    pub fn with(mut self, weekday: Weekday, offset: i8) -> Result<Self, DateError> {
        self.set(weekday, offset)?;
        Ok(self)
    }

    /// True when every offset is zero.
    pub fn is_none(&self) -> bool {
        self.0.iter().all(|&offset| offset == 0)
    }

    /// Most negative offset in the table (0 if none is negative).
    pub fn min_offset(&self) -> i8 {
        self.0.iter().copied().min().unwrap_or(0).min(0)
    }

    /// Most positive offset in the table (0 if none is positive).
    pub fn max_offset(&self) -> i8 {
        self.0.iter().copied().max().unwrap_or(0).max(0)
    }

    /// Returns a copy of the offsets, indexed by weekday number.
    pub const fn to_array(&self) -> [i8; 7] {
        self.0
    }
}

fn check_offset(offset: i8) -> Result<(), DateError> {
    if (-MAX_WEEKDAY_ADJUSTMENT..=MAX_WEEKDAY_ADJUSTMENT).contains(&offset) {
        Ok(())
    } else {
        Err(DateError::out_of_range(
            "weekday adjustment",
            offset,
            -MAX_WEEKDAY_ADJUSTMENT,
            MAX_WEEKDAY_ADJUSTMENT,
        ))
    }
}

impl TryFrom<[i8; 7]> for WeekdayAdjustments {
    type Error = DateError;

    fn try_from(value: [i8; 7]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayAdjustments> for [i8; 7] {
    fn from(table: WeekdayAdjustments) -> Self {
        table.0
    }
}

/// Inclusive range of years in which an annual recurrence is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}..={end}")]
#[serde(try_from = "(u16, u16)", into = "(u16, u16)")]
pub struct YearRange {
    start: u16,
    end:   u16,
}

impl YearRange {
    /// Every representable year.
    pub const ALL: Self = Self {
        start: MIN_YEAR,
        end:   MAX_YEAR,
    };

    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if either bound is outside `MIN_YEAR..=MAX_YEAR`
    /// or start > end.
    pub fn new(start: u16, end: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&end) {
            return Err(DateError::out_of_range("end year", end, MIN_YEAR, MAX_YEAR));
        }
        if !(MIN_YEAR..=end).contains(&start) {
            return Err(DateError::out_of_range("start year", start, MIN_YEAR, end));
        }
        Ok(Self { start, end })
    }

    /// Returns the first active year
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// Returns the last active year (inclusive)
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Checks if the range contains a given year
    pub const fn contains(&self, year: u16) -> bool {
        self.start <= year && year <= self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::ALL
    }
}

impl TryFrom<(u16, u16)> for YearRange {
    type Error = DateError;

    fn try_from((start, end): (u16, u16)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<YearRange> for (u16, u16) {
    fn from(range: YearRange) -> Self {
        (range.start, range.end)
    }
}
