//! Per-date lookup of a task list

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::task::{StatusCounts, Task};

/// Tasks of a synced list, grouped by due date for fast per-cell lookup.
///
/// The index borrows from the task list it was built from; rebuild it whenever that
/// list changes. Tasks whose due date does not parse are left out (with a warning)
/// rather than taking the whole grid down.
#[derive(Debug)]
pub struct TaskIndex<'t> {
    by_date: HashMap<NaiveDate, Vec<&'t Task>>,
    indexed: usize,
}

impl<'t> TaskIndex<'t> {
    pub fn build(tasks: &'t [Task]) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<&'t Task>> = HashMap::new();
        let mut indexed = 0;
        for task in tasks {
            match task.due_date() {
                Some(date) => {
                    by_date.entry(date).or_default().push(task);
                    indexed += 1;
                }
                None => {
                    log::warn!(
                        "Task {} has an unparseable due date {:?}, leaving it out of the calendar",
                        task.id(),
                        task.raw_due_date()
                    );
                }
            }
        }
        Self { by_date, indexed }
    }

    /// The tasks due on `date` (compared by calendar date only)
    pub fn tasks_on(&self, date: NaiveDate) -> &[&'t Task] {
        self.by_date
            .get(&date)
            .map(|tasks| tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Per-status counts for `date`, e.g. for month-overview badges
    pub fn counts_on(&self, date: NaiveDate) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for task in self.tasks_on(date) {
            counts.record(task.status());
        }
        counts
    }

    /// How many tasks made it into the index (excluded ones do not count)
    pub fn len(&self) -> usize {
        self.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }
}
