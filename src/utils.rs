///! Some utility functions

use chrono::{Datelike, NaiveDate};

use crate::calendar::{grid_with_tasks, TaskIndex};
use crate::task::{Task, TaskStatus};

/// A debug utility that pretty-prints one task
pub fn print_task(task: &Task, today: NaiveDate) {
    let status = match task.status() {
        TaskStatus::Completed => "✓",
        TaskStatus::Paused => "=",
        TaskStatus::Pending => {
            if task.is_overdue(today) { "!" } else { " " }
        }
    };
    println!(
        "    {} {}\t{} ({})",
        status,
        task.description(),
        task.raw_due_date(),
        task.responsible_person_name().unwrap_or("unassigned"),
    );
}

/// A debug utility that pretty-prints a month of tasks, one line per non-empty day
pub fn print_month(reference: NaiveDate, tasks: &[Task], today: NaiveDate) {
    let index = TaskIndex::build(tasks);
    println!("{}-{:02}", reference.year(), reference.month());
    for populated in grid_with_tasks(reference, &index) {
        if !populated.cell.in_focal_month || populated.tasks.is_empty() {
            continue;
        }
        println!("  {}", populated.cell.date);
        for task in &populated.tasks {
            print_task(task, today);
        }
    }
}
