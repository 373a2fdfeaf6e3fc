//! Compact Gregorian dates and annual recurrence schedules.
//!
//! [`Date`] packs a proleptic Gregorian date in `0001-01-01..=9999-12-31`
//! into a single `u32` whose integer order is chronological order. The
//! [`schedule`] module builds sets of dates on top of it: annual rules such
//! as "July 4, observed on the nearest weekday" or "last Monday of May",
//! unions of schedules and complements of schedules, all enumerated lazily
//! in either direction.
//!
//! ```
//! use annual_date::{Date, Ordinal, Schedule, Weekday, WeekdayOfMonthRecurrence};
//!
//! let memorial_day = WeekdayOfMonthRecurrence::new(5, Weekday::Monday, Ordinal::LAST)?;
//! let from = Date::new(2024, 1, 1)?;
//! let next = memorial_day.dates_forward_from(from)?.next();
//! assert_eq!(next, Some(Date::new(2024, 5, 27)?));
//! # Ok::<(), annual_date::DateError>(())
//! ```

pub mod calendar;
mod consts;
mod date;
mod error;
mod prelude;
mod range;
pub mod schedule;
mod types;

pub use consts::*;
pub use date::Date;
pub use error::{DateError, ParseError, RangeError};
pub use range::DateRange;
pub use schedule::{
    AnnualRecurrence, CompositeSchedule, Dates, DayOfMonthOptions, DayOfMonthRecurrence, Direction,
    InverseSchedule, Schedule, WeekdayOfMonthOptions, WeekdayOfMonthRecurrence,
};
pub use types::{Ordinal, Weekday, WeekdayAdjustments, YearRange};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_holiday_calendar() {
        let years = YearRange::new(2024, 2025).unwrap();
        let observed = WeekdayAdjustments::new([1, 0, 0, 0, 0, 0, -1]).unwrap();
        let independence_day = DayOfMonthRecurrence::new(7, 4)
            .unwrap()
            .with_years(years)
            .with_adjustments(observed)
            .unwrap();
        let memorial_day = WeekdayOfMonthRecurrence::new(5, Weekday::Monday, Ordinal::LAST)
            .unwrap()
            .with_years(years);
        let holidays: Arc<dyn Schedule> = Arc::new(
            CompositeSchedule::default()
                .with(independence_day)
                .with(memorial_day),
        );

        let dates: Vec<String> = holidays
            .dates_forward_from(Date::MIN)
            .unwrap()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(dates, ["2024-05-27", "2024-07-04", "2025-05-26", "2025-07-04"]);

        let workdays = InverseSchedule::from_shared(Arc::clone(&holidays));
        let around: Vec<Date> = workdays
            .dates_forward_from("2024-05-26".parse::<Date>().unwrap())
            .unwrap()
            .take(2)
            .collect();
        assert_eq!(
            around,
            ["2024-05-26".parse::<Date>().unwrap(), "2024-05-28".parse::<Date>().unwrap()]
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(Date::MAX.day_number(), Ok(MAX_DAY_NUMBER));
    }
}
