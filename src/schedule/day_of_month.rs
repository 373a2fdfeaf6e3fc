use super::annual::{AnnualRecurrence, occurrences};
use super::{Dates, Direction, Schedule};
use crate::calendar::{check_month, min_month_length, weekday_unchecked};
use crate::consts::{DECEMBER, DAYS_IN_MONTH, JANUARY, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::prelude::*;
use crate::types::{WeekdayAdjustments, YearRange};
use crate::{Date, DateError};
use serde::{Deserialize, Serialize};

/// Configuration of a [`DayOfMonthRecurrence`].
///
/// A recurrence copies these options when it is built; changing them
/// afterwards has no effect on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayOfMonthOptions {
    #[serde(default)]
    pub years:       YearRange,
    pub month:       u8,
    pub day:         u8,
    #[serde(default)]
    pub adjustments: WeekdayAdjustments,
}

impl DayOfMonthOptions {
    /// Every year, no weekday adjustments.
    pub const fn new(month: u8, day: u8) -> Self {
        Self {
            years: YearRange::ALL,
            month,
            day,
            adjustments: WeekdayAdjustments::NONE,
        }
    }
}

/// The same calendar day every year, optionally moved by a few days
/// depending on which weekday it falls on (e.g. a holiday observed on the
/// Friday before when it lands on a Saturday).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DayOfMonthOptions", into = "DayOfMonthOptions")]
pub struct DayOfMonthRecurrence {
    options: DayOfMonthOptions,
    // A January date moved backwards can land in the previous year; a
    // December date moved forwards can land in the next one.
    may_occur_in_previous_year: bool,
    may_occur_in_next_year: bool,
}

impl DayOfMonthRecurrence {
    /// `day` of `month` in every year, without adjustments.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the month is invalid or the day
    /// does not exist in every year (so February 29 is rejected).
    pub fn new(month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_options(&DayOfMonthOptions::new(month, day))
    }

    /// Builds a recurrence from a snapshot of `options`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the month is invalid or the day
    /// does not exist in every year.
    pub fn from_options(options: &DayOfMonthOptions) -> Result<Self, DateError> {
        let options = *options;
        check_month(options.month)?;
        let max_day = min_month_length(options.month);
        if !(MIN_DAY..=max_day).contains(&options.day) {
            return Err(DateError::out_of_range("day", options.day, MIN_DAY, max_day));
        }

        let earliest = i16::from(options.day) + i16::from(options.adjustments.min_offset());
        let latest = i16::from(options.day) + i16::from(options.adjustments.max_offset());
        let may_occur_in_previous_year = options.month == JANUARY && earliest < i16::from(MIN_DAY);
        let may_occur_in_next_year = options.month == DECEMBER
            && latest > i16::from(DAYS_IN_MONTH[usize::from(DECEMBER)]);

        debug!(
            month = options.month,
            day = options.day,
            years = %options.years,
            adjusted = !options.adjustments.is_none(),
            "built day-of-month recurrence"
        );

        Ok(Self {
            options,
            may_occur_in_previous_year,
            may_occur_in_next_year,
        })
    }

    /// Same rule restricted to `years`.
    #[must_use]
    pub fn with_years(mut self, years: YearRange) -> Self {
        self.options.years = years;
        self
    }

    /// Same rule with a new adjustment table.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` under the same conditions as
    /// [`from_options`](Self::from_options).
    pub fn with_adjustments(self, adjustments: WeekdayAdjustments) -> Result<Self, DateError> {
        Self::from_options(&DayOfMonthOptions {
            adjustments,
            ..self.options
        })
    }

    /// A copy of the options this recurrence was built from.
    pub const fn options(&self) -> DayOfMonthOptions {
        self.options
    }

    /// Returns the month of the nominal date
    pub const fn month(&self) -> u8 {
        self.options.month
    }

    /// Returns the day of the nominal date
    pub const fn day(&self) -> u8 {
        self.options.day
    }

    /// A copy of the adjustment table.
    pub const fn adjustments(&self) -> WeekdayAdjustments {
        self.options.adjustments
    }
}

impl AnnualRecurrence for DayOfMonthRecurrence {
    fn years(&self) -> YearRange {
        self.options.years
    }

    fn occurrence(&self, year: u16) -> Date {
        let DayOfMonthOptions {
            years,
            month,
            day,
            adjustments,
        } = self.options;
        if !years.contains(year) {
            return Date::EMPTY;
        }
        // The day fits every year's month, so the triple is valid.
        let base = Date::pack(year, month, day);
        match adjustments.get(weekday_unchecked(year, month, day)) {
            0 => base,
            // Moving 0001-01-01 back or 9999-12-31 forward leaves the
            // representable range: no occurrence that year.
            offset => base.add_days(i32::from(offset)).unwrap_or(Date::EMPTY),
        }
    }
}

impl Schedule for DayOfMonthRecurrence {
    fn contains(&self, date: Date) -> bool {
        if date.is_empty() {
            return false;
        }
        let year = date.year();
        if self.options.adjustments.is_none() {
            return self.options.years.contains(year)
                && date.month() == self.options.month
                && date.day() == self.options.day;
        }
        self.occurrence(year) == date
            || (self.may_occur_in_previous_year
                && year < MAX_YEAR
                && self.occurrence(year + 1) == date)
            || (self.may_occur_in_next_year && year > MIN_YEAR && self.occurrence(year - 1) == date)
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        occurrences(self, date, Direction::Backward)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        occurrences(self, date, Direction::Forward)
    }
}

impl TryFrom<DayOfMonthOptions> for DayOfMonthRecurrence {
    type Error = DateError;

    fn try_from(options: DayOfMonthOptions) -> Result<Self, Self::Error> {
        Self::from_options(&options)
    }
}

impl From<DayOfMonthRecurrence> for DayOfMonthOptions {
    fn from(recurrence: DayOfMonthRecurrence) -> Self {
        recurrence.options
    }
}
