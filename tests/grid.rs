//! Month-grid oracles on fixed calendar dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use taskgrid::calendar::grid_with_tasks;
use taskgrid::{month_grid, Task, TaskIndex, TaskStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn february_2024_spans_jan_28_to_mar_2() {
    // Feb 2024: starts on a Thursday, leap year, 29 days
    let grid = month_grid(date(2024, 2, 1));
    assert_eq!(grid.len(), 35);
    assert_eq!(grid.first().unwrap().date, date(2024, 1, 28));
    assert_eq!(grid.last().unwrap().date, date(2024, 3, 2));

    assert!(!grid[0].in_focal_month);
    assert!(grid[4].in_focal_month); // Feb 1
    assert!(!grid[34].in_focal_month); // Mar 2
}

#[test]
fn grids_always_hold_whole_sunday_first_weeks() {
    let mut month_start = date(2023, 1, 1);
    for _ in 0..36 {
        let grid = month_grid(month_start);
        assert_eq!(grid.len() % 7, 0, "ragged grid for {}", month_start);
        assert!(grid.len() >= 28 && grid.len() <= 42);
        assert_eq!(grid.first().unwrap().date.weekday(), Weekday::Sun);
        assert_eq!(grid.last().unwrap().date.weekday(), Weekday::Sat);

        // contiguous dates, each focal day exactly once
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
        let focal = grid.iter().filter(|cell| cell.in_focal_month).count() as u32;
        assert_eq!(focal, days_in(month_start));

        month_start = if month_start.month() == 12 {
            date(month_start.year() + 1, 1, 1)
        } else {
            date(month_start.year(), month_start.month() + 1, 1)
        };
    }
}

fn days_in(month_start: NaiveDate) -> u32 {
    let next = if month_start.month() == 12 {
        date(month_start.year() + 1, 1, 1)
    } else {
        date(month_start.year(), month_start.month() + 1, 1)
    };
    (next - month_start).num_days() as u32
}

#[test]
fn any_reference_day_yields_the_same_grid() {
    let from_first = month_grid(date(2024, 2, 1));
    let from_middle = month_grid(date(2024, 2, 15));
    let from_last = month_grid(date(2024, 2, 29));
    assert_eq!(from_first, from_middle);
    assert_eq!(from_first, from_last);
}

#[test]
fn adjacent_month_tasks_still_land_on_their_padding_cells() {
    // A January task that is visible on February's grid
    let tasks = vec![
        Task::new("jan", "late handover", date(2024, 1, 30), TaskStatus::Pending),
        Task::new("feb", "kickoff", date(2024, 2, 1), TaskStatus::Pending),
    ];
    let index = TaskIndex::build(&tasks);
    let cells = grid_with_tasks(date(2024, 2, 15), &index);

    let padding = cells.iter().find(|c| c.cell.date == date(2024, 1, 30)).unwrap();
    assert!(!padding.cell.in_focal_month);
    assert_eq!(padding.tasks.len(), 1);
    assert_eq!(padding.tasks[0].id(), "jan");
}

#[test]
fn overdue_only_applies_to_pending_tasks_in_the_past() {
    let today = date(2024, 2, 15);
    let tasks = vec![
        Task::new("1", "a", date(2024, 2, 10), TaskStatus::Pending),
        Task::new("2", "b", date(2024, 2, 10), TaskStatus::Completed),
        Task::new("3", "c", date(2024, 2, 15), TaskStatus::Pending),
        Task::new("4", "d", date(2024, 2, 20), TaskStatus::Pending),
    ];
    let overdue: Vec<&str> = tasks
        .iter()
        .filter(|task| task.is_overdue(today))
        .map(|task| task.id())
        .collect();
    assert_eq!(overdue, vec!["1"]);
}
