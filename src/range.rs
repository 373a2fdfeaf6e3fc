use std::{cmp::Ordering, iter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::schedule::{Dates, Direction, Schedule, require_start};
use crate::{Date, DateError, RANGE_SEPARATOR, RangeError, prelude::*};

/// Represents a contiguous range of dates (inclusive).
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::Date` if either bound is the empty date and
    /// `RangeError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, RangeError> {
        if start.is_empty() {
            return Err(DateError::EmptyArgument("start").into());
        }
        if end.is_empty() {
            return Err(DateError::EmptyArgument("end").into());
        }
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    ///
    /// # Errors
    /// Returns `RangeError::Date` if `date` is the empty date.
    pub fn day(date: Date) -> Result<Self, RangeError> {
        Self::new(date, date)
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Number of days in the range, counting both ends.
    pub fn len(&self) -> u32 {
        self.end.day_number_unchecked() - self.start.day_number_unchecked() + 1
    }

    /// Always `false`: a range holds at least one day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: Date) -> bool {
        !date.is_empty() && self.start <= date && date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    fn walk(&self, date: Date, direction: Direction) -> Result<Dates<'_>, DateError> {
        let date = require_start(date)?;
        let (first, last) = match direction {
            Direction::Forward => (date.max(self.start), self.end),
            Direction::Backward => (date.min(self.end), self.start),
        };
        if direction.is_before_start(last, first) {
            return Ok(Box::new(iter::empty()));
        }
        Ok(Box::new(iter::successors(Some(first), move |&day| {
            (day != last).then(|| direction.step(day)).flatten()
        })))
    }
}

impl Schedule for DateRange {
    fn contains(&self, date: Date) -> bool {
        Self::contains(self, date)
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        self.walk(date, Direction::Backward)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        self.walk(date, Direction::Forward)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found: {s}"
                    ))
                })?;

                let start = start.trim().parse::<Date>()?;
                let end = end.trim().parse::<Date>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
