use super::{Dates, Direction, Schedule, require_start};
use crate::types::YearRange;
use crate::{Date, DateError};

/// A schedule with at most one date per year, active over a bounded range
/// of years.
pub trait AnnualRecurrence: Schedule {
    /// The years in which the recurrence is active.
    fn years(&self) -> YearRange;

    /// The recurrence's date for `year`, or `Date::EMPTY` when `year` is
    /// outside [`years`](Self::years) or has no occurrence.
    ///
    /// The date normally falls inside `year` but may spill into an adjacent
    /// year when the rule moves it across a year boundary.
    fn occurrence(&self, year: u16) -> Date;

    /// First active year.
    fn start_year(&self) -> u16 {
        self.years().start()
    }

    /// Last active year (inclusive).
    fn end_year(&self) -> u16 {
        self.years().end()
    }
}

/// Walks the occurrences of `recurrence` year by year from `from`.
///
/// Starts one year before (forward) or after (backward) the year of `from`
/// so that an occurrence spilling across the year boundary is not missed.
/// Consecutive occurrences are about a year apart, so the walk is strictly
/// monotonic.
pub(super) fn occurrences<R>(
    recurrence: &R,
    from: Date,
    direction: Direction,
) -> Result<Dates<'_>, DateError>
where
    R: AnnualRecurrence + ?Sized,
{
    let from = require_start(from)?;
    let years = recurrence.years();
    let dates = move |year: u16| {
        let date = recurrence.occurrence(year);
        (!date.is_empty() && !direction.is_before_start(date, from)).then_some(date)
    };

    match direction {
        Direction::Forward => {
            let first = from.year().saturating_sub(1).max(years.start());
            Ok(Box::new((first..=years.end()).filter_map(dates)))
        }
        Direction::Backward => {
            let last = from.year().saturating_add(1).min(years.end());
            Ok(Box::new((years.start()..=last).rev().filter_map(dates)))
        }
    }
}
