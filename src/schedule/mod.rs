//! Sets of calendar dates that can be tested for membership and walked in
//! either direction.
//!
//! Every schedule answers three questions: whether a date is a member, which
//! members lie at or before a date (newest first), and which lie at or after
//! it (oldest first). Annual recurrences produce one date per year; the
//! composite and inverse combinators build unions and complements out of
//! other schedules without materializing any dates.

mod annual;
mod composite;
mod day_of_month;
mod inverse;
mod weekday_of_month;

pub use annual::AnnualRecurrence;
pub use composite::CompositeSchedule;
pub use day_of_month::{DayOfMonthOptions, DayOfMonthRecurrence};
pub use inverse::InverseSchedule;
pub use weekday_of_month::{WeekdayOfMonthOptions, WeekdayOfMonthRecurrence};

use crate::{Date, DateError};
use std::sync::Arc;

/// A lazily produced run of schedule dates.
///
/// Strictly monotonic in the direction it was requested and free of
/// duplicates. Dropping it early releases everything it holds.
pub type Dates<'a> = Box<dyn Iterator<Item = Date> + 'a>;

/// Direction of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Oldest first.
    Forward,
    /// Newest first.
    Backward,
}

impl Direction {
    /// The adjacent date in this direction, or `None` past `Date::MIN`/`Date::MAX`.
    pub fn step(self, date: Date) -> Option<Date> {
        match self {
            Self::Forward => date.next_day().ok(),
            Self::Backward => date.previous_day().ok(),
        }
    }

    /// Whether `date` has not yet been reached when walking from `from`.
    pub(crate) fn is_before_start(self, date: Date, from: Date) -> bool {
        match self {
            Self::Forward => date < from,
            Self::Backward => date > from,
        }
    }
}

/// A set of calendar dates.
///
/// Implementations are immutable once built, so they can be shared freely
/// across threads.
pub trait Schedule: Send + Sync {
    /// Whether `date` belongs to the schedule. Always `false` for the empty date.
    fn contains(&self, date: Date) -> bool;

    /// Every member at or before `date`, newest first.
    ///
    /// # Errors
    /// Returns `DateError::EmptyArgument` if `date` is the empty date.
    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError>;

    /// Every member at or after `date`, oldest first.
    ///
    /// # Errors
    /// Returns `DateError::EmptyArgument` if `date` is the empty date.
    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError>;

    /// Dispatches to the forward or backward enumeration.
    ///
    /// # Errors
    /// Returns `DateError::EmptyArgument` if `date` is the empty date.
    fn dates_from(&self, date: Date, direction: Direction) -> Result<Dates<'_>, DateError> {
        match direction {
            Direction::Forward => self.dates_forward_from(date),
            Direction::Backward => self.dates_backward_from(date),
        }
    }
}

pub(crate) fn require_start(date: Date) -> Result<Date, DateError> {
    if date.is_empty() {
        Err(DateError::EmptyArgument("date"))
    } else {
        Ok(date)
    }
}

impl<S: Schedule + ?Sized> Schedule for &S {
    fn contains(&self, date: Date) -> bool {
        (**self).contains(date)
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        (**self).dates_backward_from(date)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        (**self).dates_forward_from(date)
    }
}

impl<S: Schedule + ?Sized> Schedule for Box<S> {
    fn contains(&self, date: Date) -> bool {
        (**self).contains(date)
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        (**self).dates_backward_from(date)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        (**self).dates_forward_from(date)
    }
}

impl<S: Schedule + ?Sized> Schedule for Arc<S> {
    fn contains(&self, date: Date) -> bool {
        (**self).contains(date)
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        (**self).dates_backward_from(date)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        (**self).dates_forward_from(date)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Fixed, date};
    use super::*;

    #[test]
    fn test_direction_step() {
        let d = date(2024, 2, 28);
        assert_eq!(Direction::Forward.step(d), Some(date(2024, 2, 29)));
        assert_eq!(Direction::Backward.step(d), Some(date(2024, 2, 27)));
        assert_eq!(Direction::Forward.step(Date::MAX), None);
        assert_eq!(Direction::Backward.step(Date::MIN), None);
    }

    #[test]
    fn test_dates_from_dispatches() {
        let fixed = Fixed::of(&[(2000, 1, 1), (2000, 6, 1), (2001, 1, 1)]);
        let from = date(2000, 3, 1);
        let forward: Vec<Date> = fixed.dates_from(from, Direction::Forward).unwrap().collect();
        let backward: Vec<Date> = fixed.dates_from(from, Direction::Backward).unwrap().collect();
        assert_eq!(forward, vec![date(2000, 6, 1), date(2001, 1, 1)]);
        assert_eq!(backward, vec![date(2000, 1, 1)]);
    }

    fn holds(schedule: impl Schedule, date: Date) -> bool {
        schedule.contains(date)
    }

    #[test]
    fn test_smart_pointer_impls() {
        let fixed = Fixed::of(&[(2000, 1, 1)]);
        let boxed: Box<dyn Schedule> = Box::new(Fixed::of(&[(2000, 1, 1)]));
        let shared: Arc<dyn Schedule> = Arc::new(Fixed::of(&[(2000, 1, 1)]));
        let target = date(2000, 1, 1);
        assert!(holds(&fixed, target));
        assert!(holds(&boxed, target));
        assert!(shared.contains(target));
        assert_eq!(shared.dates_forward_from(Date::MIN).unwrap().count(), 1);
    }
}
