//! Caches keyed by the displayed period
//!
//! The original kept these as loosely-typed query-string keys inside its fetch cache;
//! here the key is a structured [`Period`] and invalidation is explicit and per-key.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

/// A period a view can display: one month (the desktop grid and the mobile month
/// overview) or one day (the mobile day view)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    Month { year: i32, month: u32 },
    Day(NaiveDate),
}

impl Period {
    /// The month period containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Period::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn day(date: NaiveDate) -> Self {
        Period::Day(date)
    }

    /// The month period this period belongs to (identity for month periods)
    pub fn enclosing_month(&self) -> Period {
        match *self {
            month @ Period::Month { .. } => month,
            Period::Day(date) => Period::month_of(date),
        }
    }
}

/// A simple per-period cache. Invalidation removes exactly one key; everything else
/// stays warm
#[derive(Debug)]
pub struct PeriodCache<T> {
    entries: HashMap<Period, T>,
}

impl<T> Default for PeriodCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PeriodCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &Period) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: Period, value: T) {
        self.entries.insert(key, value);
    }

    /// Drop one key. Returns whether anything was cached under it
    pub fn invalidate(&mut self, key: &Period) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
