use super::{Dates, Direction, Schedule, require_start};
use crate::prelude::*;
use crate::{Date, DateError};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::binary_heap::PeekMut;
use std::fmt;
use std::sync::Arc;

/// The union of several schedules.
///
/// Enumeration merges the members' own enumerations, so a date shared by
/// several members is produced once.
#[derive(Clone, Default)]
pub struct CompositeSchedule {
    schedules: Vec<Arc<dyn Schedule>>,
}

impl CompositeSchedule {
    /// Creates a union of the given schedules
    pub fn new<I>(schedules: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Schedule>>,
    {
        let schedules: Vec<_> = schedules.into_iter().collect();
        debug!(schedules = schedules.len(), "built composite schedule");
        Self { schedules }
    }

    /// Adds a member.
    #[must_use]
    pub fn with(self, schedule: impl Schedule + 'static) -> Self {
        self.with_shared(Arc::new(schedule))
    }

    /// Adds a member that may also be part of other combinators.
    #[must_use]
    pub fn with_shared(mut self, schedule: Arc<dyn Schedule>) -> Self {
        self.schedules.push(schedule);
        self
    }

    /// Returns the member schedules
    pub fn schedules(&self) -> &[Arc<dyn Schedule>] {
        &self.schedules
    }

    /// Returns the number of member schedules
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Checks if the union has no members
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    fn merge(&self, date: Date, direction: Direction) -> Result<Dates<'_>, DateError> {
        let date = require_start(date)?;
        let mut cursors = Vec::with_capacity(self.schedules.len());
        for schedule in &self.schedules {
            let mut rest = schedule.dates_from(date, direction)?;
            if let Some(head) = rest.next() {
                cursors.push(Cursor {
                    head,
                    rest,
                    direction,
                });
            }
        }
        Ok(Box::new(Merge {
            heap: BinaryHeap::from(cursors),
        }))
    }
}

impl Schedule for CompositeSchedule {
    fn contains(&self, date: Date) -> bool {
        self.schedules.iter().any(|schedule| schedule.contains(date))
    }

    fn dates_backward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        self.merge(date, Direction::Backward)
    }

    fn dates_forward_from(&self, date: Date) -> Result<Dates<'_>, DateError> {
        self.merge(date, Direction::Forward)
    }
}

impl FromIterator<Arc<dyn Schedule>> for CompositeSchedule {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Schedule>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Debug for CompositeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSchedule")
            .field("schedules", &self.schedules.len())
            .finish()
    }
}

/// One member's enumeration, keyed by the date it will produce next.
struct Cursor<'a> {
    head:      Date,
    rest:      Dates<'a>,
    direction: Direction,
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor<'_> {
    /// The heap's root is the cursor whose head comes first in the walk:
    /// the latest date going backward, the earliest going forward.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.direction {
            Direction::Backward => self.head.cmp(&other.head),
            Direction::Forward => other.head.cmp(&self.head),
        }
    }
}

/// k-way merge over the members' enumerations.
struct Merge<'a> {
    heap: BinaryHeap<Cursor<'a>>,
}

impl Iterator for Merge<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let date = self.heap.peek()?.head;
        // Advance every cursor sitting on `date`. Each member's sequence is
        // strictly monotonic, so an advanced cursor never repeats it.
        while let Some(mut top) = self.heap.peek_mut() {
            if top.head != date {
                break;
            }
            match top.rest.next() {
                Some(head) => top.head = head,
                None => {
                    PeekMut::pop(top);
                }
            }
        }
        trace!(%date, open = self.heap.len(), "merged schedule date");
        Some(date)
    }
}
