//! This module glues a remote source, the period caches and the notifier together
//!
//! The provider serves the currently displayed period from its caches, re-fetches it
//! on a fixed polling interval, and refreshes it immediately after any write. There
//! is no push channel to the server: polling is the only background mechanism.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::cache::{Period, PeriodCache};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::notify::Notice;
use crate::task::{StatusCounts, Task};
use crate::traits::{NotificationSink, RemoteSource};

/// A data source that caches task lists per displayed [`Period`] and keeps them fresh
/// by polling.
///
/// `S` is usually a [`Client`](crate::client::Client); tests plug in an in-memory
/// mock behind the same [`RemoteSource`] seam.
pub struct Provider<S: RemoteSource> {
    source: S,
    notifier: Arc<dyn NotificationSink>,
    tasks: PeriodCache<Vec<Task>>,
    counts: PeriodCache<HashMap<NaiveDate, StatusCounts>>,
    displayed: Period,
    refresh_interval: Duration,
    /// When the displayed period was last fetched, manually or by polling
    last_refresh: Option<Instant>,
}

impl<S: RemoteSource> Provider<S> {
    pub fn new(source: S, notifier: Arc<dyn NotificationSink>, config: &Config, displayed: Period) -> Self {
        Self {
            source,
            notifier,
            tasks: PeriodCache::new(),
            counts: PeriodCache::new(),
            displayed,
            refresh_interval: config.refresh_interval,
            last_refresh: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn displayed(&self) -> Period {
        self.displayed
    }

    /// Switch the displayed period. Only the newly displayed key is invalidated
    /// (so it is fetched fresh); other periods stay cached
    pub fn set_displayed(&mut self, period: Period) {
        if self.displayed != period {
            log::debug!("Displayed period changed to {:?}", period);
            self.displayed = period;
            self.tasks.invalidate(&period);
        }
    }

    /// The task list for `period`, from the cache when warm
    pub async fn tasks_for(&mut self, period: Period) -> Result<Vec<Task>> {
        if let Some(tasks) = self.tasks.get(&period) {
            return Ok(tasks.clone());
        }
        self.fetch_and_store(period).await
    }

    /// Per-date status counts for the month overview, from the cache when warm
    pub async fn counts_for(&mut self, year: i32, month: u32) -> Result<HashMap<NaiveDate, StatusCounts>> {
        let key = Period::Month { year, month };
        if let Some(counts) = self.counts.get(&key) {
            return Ok(counts.clone());
        }
        match self.source.task_counts(year, month).await {
            Ok(counts) => {
                self.counts.insert(key, counts.clone());
                Ok(counts)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Force a re-fetch of `period`, replacing its cache entry.
    ///
    /// Also restarts the polling timer, so a manual refresh and the next poll do not
    /// fire redundantly back-to-back. On failure the previous cache entry is kept.
    pub async fn refresh(&mut self, period: Period) -> Result<Vec<Task>> {
        self.fetch_and_store(period).await
    }

    /// Whether the polling interval has elapsed for the displayed period
    pub fn poll_due(&self, now: Instant) -> bool {
        match self.last_refresh {
            Some(at) => now.duration_since(at) >= self.refresh_interval,
            None => true,
        }
    }

    /// Drive the polling cycle: re-fetch the displayed period if it is due.
    /// Returns the fresh list when a fetch happened
    pub async fn tick(&mut self) -> Result<Option<Vec<Task>>> {
        if !self.poll_due(Instant::now()) {
            return Ok(None);
        }
        self.refresh(self.displayed).await.map(Some)
    }

    /// Refresh after a settled create/update: the affected period is re-fetched and
    /// the month-overview counts covering it are invalidated
    pub async fn after_write(&mut self, period: Period) -> Result<Vec<Task>> {
        self.counts.invalidate(&period.enclosing_month());
        self.refresh(period).await
    }

    async fn fetch_and_store(&mut self, period: Period) -> Result<Vec<Task>> {
        let fetched = match period {
            Period::Month { year, month } => self.source.tasks_for_month(year, month).await,
            Period::Day(date) => self.source.tasks_for_day(date).await,
        };
        match fetched {
            Ok(tasks) => {
                self.tasks.insert(period, tasks.clone());
                self.last_refresh = Some(Instant::now());
                Ok(tasks)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Surface a fetch failure to the user, except for auth failures: the session
    /// guard already notified for those
    fn report(&self, err: Error) -> Error {
        if !matches!(err, Error::Unauthorized) {
            self.notifier
                .notify(Notice::error("Failed to load tasks. Please try again."));
        }
        err
    }
}
