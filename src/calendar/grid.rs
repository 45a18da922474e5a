//! The month date grid

use chrono::{Datelike, Duration, NaiveDate};

/// One day square of the month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateCell {
    pub date: NaiveDate,
    /// Whether this day belongs to the focal month (as opposed to the
    /// leading/trailing padding from adjacent months)
    pub in_focal_month: bool,
}

/// Build the ordered day cells of the month view containing `reference`.
///
/// Weeks start on Sunday. The grid covers full display weeks: it begins on the Sunday
/// on/before the 1st of the month, ends on the Saturday on/after its last day, and
/// padding days from the adjacent months are flagged `in_focal_month = false`.
///
/// Every day of the reference month appears exactly once and the total length is a
/// multiple of 7. Leap years fall out of chrono's date arithmetic, nothing here
/// special-cases February.
pub fn month_grid(reference: NaiveDate) -> Vec<DateCell> {
    let first = reference.with_day(1).expect("every month has a day 1");
    let last = last_day_of_month(reference);

    let leading = first.weekday().num_days_from_sunday() as i64;
    let trailing = 6 - last.weekday().num_days_from_sunday() as i64;

    let start = first - Duration::days(leading);
    let end = last + Duration::days(trailing);

    let mut cells = Vec::with_capacity(((end - start).num_days() + 1) as usize);
    let mut day = start;
    while day <= end {
        cells.push(DateCell {
            date: day,
            in_focal_month: day >= first && day <= last,
        });
        day += Duration::days(1);
    }
    cells
}

fn last_day_of_month(reference: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = match reference.month() {
        12 => (reference.year() + 1, 1),
        m => (reference.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("every month has a day 1")
        - Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn february_2024_matches_a_fixed_oracle() {
        // Feb 1st 2024 is a Thursday
        let grid = month_grid(date(2024, 2, 1));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.first().unwrap().date, date(2024, 1, 28));
        assert_eq!(grid.last().unwrap().date, date(2024, 3, 2));
        assert!(!grid.first().unwrap().in_focal_month);
        assert!(!grid.last().unwrap().in_focal_month);
        // leap day is in there, unremarkably
        assert!(grid.iter().any(|c| c.date == date(2024, 2, 29) && c.in_focal_month));
    }

    #[test]
    fn every_grid_is_whole_weeks() {
        for &(y, m) in &[(2023, 12), (2024, 1), (2024, 2), (2024, 6), (2025, 2), (2100, 2)] {
            let grid = month_grid(date(y, m, 1));
            assert_eq!(grid.len() % 7, 0, "{}-{} is not whole weeks", y, m);
            assert!(!grid.is_empty());
        }
    }

    #[test]
    fn focal_days_appear_exactly_once() {
        let grid = month_grid(date(2024, 2, 10));
        let focal: Vec<u32> = grid
            .iter()
            .filter(|c| c.in_focal_month)
            .map(|c| c.date.day())
            .collect();
        assert_eq!(focal, (1..=29).collect::<Vec<u32>>());
    }

    #[test]
    fn padding_days_are_contiguous_and_adjacent() {
        let grid = month_grid(date(2024, 1, 15));
        // January 2024 starts on a Monday: one leading day, Dec 31st 2023
        assert_eq!(grid[0].date, date(2023, 12, 31));
        assert!(!grid[0].in_focal_month);
        assert!(grid[1].in_focal_month);
        // consecutive dates all the way through
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn any_reference_day_yields_the_same_grid() {
        assert_eq!(month_grid(date(2024, 2, 1)), month_grid(date(2024, 2, 29)));
        assert_eq!(month_grid(date(2024, 2, 14)), month_grid(date(2024, 2, 14)));
    }

    #[test]
    fn year_boundary_pads_from_both_years() {
        let grid = month_grid(date(2024, 1, 1));
        assert!(grid.iter().any(|c| c.date.year() == 2023));
        let grid = month_grid(date(2023, 12, 25));
        assert!(grid.iter().any(|c| c.date.year() == 2024));
    }
}
