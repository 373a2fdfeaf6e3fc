use super::{Dates, Direction, Schedule, require_start};
use crate::prelude::*;
use crate::{Date, DateError};
use std::fmt;
use std::sync::Arc;

/// Every valid date that is not in the base schedule.
#[derive(Clone)]
pub struct InverseSchedule {
    base: Arc<dyn Schedule>,
}

impl InverseSchedule {
    /// Creates the complement of `base`
    pub fn new(base: impl Schedule + 'static) -> Self {
        Self::from_shared(Arc::new(base))
    }

    /// Complement of a schedule that may also be used elsewhere.
    pub fn from_shared(base: Arc<dyn Schedule>) -> Self {
        debug!("built inverse schedule");
        Self { base }
    }

    /// Returns the schedule being inverted
    pub fn base(&self) -> &Arc<dyn Schedule> {
        &self.base
    }

    fn walk(&self, date: Date, direction: Direction) -> Result<Dates<'_>, DateError> {
        let date = require_start(date)?;
        let mut excluded = self.base.dates_from(date, direction)?;
        let next_excluded = excluded.next();
        Ok(Box::new(Gaps {
            cursor: Some(date),
            excluded,
            next_excluded,
            direction,
        }))
    }
}

impl Schedule for InverseSchedule {
    fn contains(&self, date: Date) -> bool {
        !date.is_empty() && !self.base.contains(date)
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        self.walk(date, Direction::Backward)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        self.walk(date, Direction::Forward)
    }
}

impl fmt::Debug for InverseSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InverseSchedule").finish_non_exhaustive()
    }
}

/// Day-by-day walk that skips the base schedule's dates.
///
/// The base enumeration runs in the same direction as the walk, so its next
/// date is never behind the cursor.
struct Gaps<'a> {
    cursor:        Option<Date>,
    excluded:      Dates<'a>,
    next_excluded: Option<Date>,
    direction:     Direction,
}

impl Iterator for Gaps<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        loop {
            let date = self.cursor?;
            self.cursor = self.direction.step(date);
            if self.next_excluded == Some(date) {
                self.next_excluded = self.excluded.next();
                trace!(%date, "skipped excluded date");
                continue;
            }
            return Some(date);
        }
    }
}
