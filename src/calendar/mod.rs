//! Turning a date and a task list into something a month view can render

pub mod grid;
pub mod index;

pub use grid::{month_grid, DateCell};
pub use index::TaskIndex;

use chrono::NaiveDate;

use crate::task::Task;

/// One grid cell together with the tasks due on it
#[derive(Clone, Debug)]
pub struct PopulatedCell<'t> {
    pub cell: DateCell,
    pub tasks: Vec<&'t Task>,
}

/// Build the month grid for `reference` and attach each cell's tasks from `index`.
///
/// This is a pure derivation: rebuild it (rather than patching it) whenever the task
/// list or the focal month changes.
pub fn grid_with_tasks<'t>(reference: NaiveDate, index: &TaskIndex<'t>) -> Vec<PopulatedCell<'t>> {
    month_grid(reference)
        .into_iter()
        .map(|cell| PopulatedCell {
            tasks: index.tasks_on(cell.date).to_vec(),
            cell,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;

    #[test]
    fn populated_cells_carry_their_days_tasks() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let tasks = vec![
            Task::new("1", "a", date, TaskStatus::Pending),
            Task::new("2", "b", NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(), TaskStatus::Paused),
        ];
        let index = TaskIndex::build(&tasks);
        let cells = grid_with_tasks(date, &index);

        let cell = cells.iter().find(|c| c.cell.date == date).unwrap();
        assert_eq!(cell.tasks.len(), 1);
        assert_eq!(cell.tasks[0].id(), "1");

        let empty = cells.iter().find(|c| c.cell.date == NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()).unwrap();
        assert!(empty.tasks.is_empty());
    }
}
