//! This crate provides the client-side engine of a task-calendar app.
//!
//! Users authenticate with an emailed one-time password (see [`login`]), view their
//! tasks on a month grid (see [`calendar`]), and create/edit/comment on tasks assigned
//! to people looked up or registered through the remote service. All persistence lives
//! in that service; this crate owns what a front end needs around it:
//!
//! * the pure date-grid and task-index computations of the month view,
//! * the view-model state machines ([`editor`], [`assignee`], [`login`]),
//! * the authenticated HTTP [`client`] with its [`session`] guard,
//! * and a [`Provider`](provider::Provider) that caches task lists per displayed
//!   period and keeps them fresh by polling.

pub mod traits;

pub mod calendar;
pub use calendar::{month_grid, DateCell, TaskIndex};
mod task;
pub use task::{parse_due_date, StatusCounts, Task, TaskStatus};
mod person;
pub use person::Person;
pub mod comment;
pub use comment::Comment;
pub mod assignee;
pub use assignee::{Assignee, AssigneeResolver};
pub mod editor;
pub use editor::TaskEditor;
pub mod login;
pub mod provider;
pub use provider::Provider;

pub mod client;
pub mod session;
pub mod cache;
pub mod notify;

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod utils;
