use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::comment::Comment;
use crate::editor::{CreateTask, UpdateTask};
use crate::error::Result;
use crate::notify::Notice;
use crate::person::Person;
use crate::task::{StatusCounts, Task};

/// The remote task service, seen from the client side.
///
/// [`Client`](crate::client::Client) implements this over HTTP; tests implement it
/// in memory to mock the server behind the same seam.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Tasks due in the given month (`month` is 1-12, chrono-style)
    async fn tasks_for_month(&self, year: i32, month: u32) -> Result<Vec<Task>>;
    /// Per-date status counts for the given month, for the month-overview badges
    async fn task_counts(&self, year: i32, month: u32) -> Result<HashMap<NaiveDate, StatusCounts>>;
    /// Tasks due on a single day
    async fn tasks_for_day(&self, date: NaiveDate) -> Result<Vec<Task>>;

    async fn create_task(&self, body: &CreateTask) -> Result<Task>;
    async fn update_task(&self, task_id: &str, body: &UpdateTask) -> Result<Task>;

    /// Fuzzy lookup of people by name or email
    async fn search_users(&self, query: &str) -> Result<Vec<Person>>;

    async fn comments(&self, task_id: &str) -> Result<Vec<Comment>>;
    async fn add_comment(&self, task_id: &str, description: &str) -> Result<Comment>;
}

/// Where the bearer credential lives (the browser-localStorage analog).
///
/// Read-mostly; written only by login/logout/expiry handling.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    /// Remove and return the stored token. Idempotent: the second caller gets `None`,
    /// which is how the session guard keeps expiry handling exactly-once
    fn take(&self) -> Option<String>;
}

/// Somewhere to surface transient, dismissible notices to the user
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}
