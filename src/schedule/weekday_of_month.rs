use super::annual::{AnnualRecurrence, occurrences};
use super::{Dates, Direction, Schedule};
use crate::calendar::{check_month, weekday_unchecked};
use crate::consts::DAYS_PER_WEEK;
use crate::date::weekday_anchor;
use crate::prelude::*;
use crate::types::{Ordinal, Weekday, YearRange};
use crate::{Date, DateError};
use serde::{Deserialize, Serialize};

/// Configuration of a [`WeekdayOfMonthRecurrence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayOfMonthOptions {
    #[serde(default)]
    pub years:   YearRange,
    pub month:   u8,
    pub weekday: Weekday,
    pub ordinal: Ordinal,
}

impl WeekdayOfMonthOptions {
    /// Every year.
    pub const fn new(month: u8, weekday: Weekday, ordinal: Ordinal) -> Self {
        Self {
            years: YearRange::ALL,
            month,
            weekday,
            ordinal,
        }
    }
}

/// The n-th (or n-th from last) given weekday of a month, every year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WeekdayOfMonthOptions", into = "WeekdayOfMonthOptions")]
pub struct WeekdayOfMonthRecurrence {
    options: WeekdayOfMonthOptions,
}

impl WeekdayOfMonthRecurrence {
    /// The `ordinal`-th `weekday` of `month` in every year.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the month is invalid.
    pub fn new(month: u8, weekday: Weekday, ordinal: Ordinal) -> Result<Self, DateError> {
        Self::from_options(&WeekdayOfMonthOptions::new(month, weekday, ordinal))
    }

    /// Builds a recurrence from a snapshot of `options`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the month is invalid.
    pub fn from_options(options: &WeekdayOfMonthOptions) -> Result<Self, DateError> {
        check_month(options.month)?;
        debug!(
            month = options.month,
            weekday = %options.weekday,
            ordinal = options.ordinal.get(),
            years = %options.years,
            "built weekday-of-month recurrence"
        );
        Ok(Self { options: *options })
    }

    /// Same rule restricted to `years`.
    #[must_use]
    pub const fn with_years(mut self, years: YearRange) -> Self {
        self.options.years = years;
        self
    }

    /// A copy of the options this recurrence was built from.
    pub const fn options(&self) -> WeekdayOfMonthOptions {
        self.options
    }

    /// Returns the month the weekday falls in
    pub const fn month(&self) -> u8 {
        self.options.month
    }

    /// Returns the weekday being counted
    pub const fn weekday(&self) -> Weekday {
        self.options.weekday
    }

    /// Returns which occurrence of the weekday is taken
    pub const fn ordinal(&self) -> Ordinal {
        self.options.ordinal
    }
}

impl AnnualRecurrence for WeekdayOfMonthRecurrence {
    fn years(&self) -> YearRange {
        self.options.years
    }

    fn occurrence(&self, year: u16) -> Date {
        let WeekdayOfMonthOptions {
            years,
            month,
            weekday,
            ordinal,
        } = self.options;
        if !years.contains(year) {
            return Date::EMPTY;
        }
        let anchor = weekday_anchor(year, month, ordinal);
        let back = weekday_unchecked(year, month, anchor).days_since(weekday);
        Date::pack(year, month, anchor - back)
    }
}

impl Schedule for WeekdayOfMonthRecurrence {
    /// A member is the one matching weekday in the week ending at the
    /// year's anchor day.
    fn contains(&self, date: Date) -> bool {
        let WeekdayOfMonthOptions {
            years,
            month,
            weekday,
            ordinal,
        } = self.options;
        if date.is_empty() || date.month() != month || !years.contains(date.year()) {
            return false;
        }
        let anchor = weekday_anchor(date.year(), month, ordinal);
        let day = date.day();
        day <= anchor
            && day + DAYS_PER_WEEK > anchor
            && weekday_unchecked(date.year(), month, day) == weekday
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        occurrences(self, date, Direction::Backward)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        occurrences(self, date, Direction::Forward)
    }
}

impl TryFrom<WeekdayOfMonthOptions> for WeekdayOfMonthRecurrence {
    type Error = DateError;

    fn try_from(options: WeekdayOfMonthOptions) -> Result<Self, Self::Error> {
        Self::from_options(&options)
    }
}

impl From<WeekdayOfMonthRecurrence> for WeekdayOfMonthOptions {
    fn from(recurrence: WeekdayOfMonthRecurrence) -> Self {
        recurrence.options
    }
}
