//! Tasks, as the server hands them out

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The lifecycle state of a task.
///
/// "Overdue" is deliberately not a variant: it is a view-time derivation
/// (see [`Task::is_overdue`]) and is never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Paused,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Paused => "paused",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// A task assigned to a person, due on a calendar date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier
    id: String,

    /// What has to be done. Non-empty after a successful write
    description: String,

    /// The due date exactly as received from the wire.
    ///
    /// The server is not consistent about the format (`2024-02-15` vs a full ISO
    /// timestamp), and a malformed value must not make a whole task list fail to
    /// deserialize. Parsing happens lazily in [`Task::due_date`]; items whose date
    /// does not parse are excluded from derived views instead.
    due_date: String,

    status: TaskStatus,

    /// Email of the creator, if the server sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_by: Option<String>,

    /// The assignee, flattened the way the wire format has it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responsible_person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responsible_person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responsible_person_email: Option<String>,
}

impl Task {
    /// Create a task record. Mostly useful for tests and mock servers; real tasks
    /// come out of the [`RemoteSource`](crate::traits::RemoteSource) deserializer.
    pub fn new<S: ToString, D: ToString>(id: S, description: D, due_date: NaiveDate, status: TaskStatus) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            due_date: due_date.format("%Y-%m-%d").to_string(),
            status,
            created_by: None,
            responsible_person_id: None,
            responsible_person_name: None,
            responsible_person_email: None,
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn description(&self) -> &str { &self.description }
    pub fn status(&self) -> TaskStatus { self.status }
    pub fn created_by(&self) -> Option<&str> { self.created_by.as_deref() }
    pub fn responsible_person_id(&self) -> Option<&str> { self.responsible_person_id.as_deref() }
    pub fn responsible_person_name(&self) -> Option<&str> { self.responsible_person_name.as_deref() }
    pub fn responsible_person_email(&self) -> Option<&str> { self.responsible_person_email.as_deref() }

    /// The due date string as received, unparsed
    pub fn raw_due_date(&self) -> &str { &self.due_date }

    /// The due calendar date, or `None` if the stored value does not parse
    pub fn due_date(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }

    /// A task is overdue when it is still pending past its due date.
    /// Tasks without a parseable due date are never considered overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == TaskStatus::Pending
            && self.due_date().map(|due| due < today).unwrap_or(false)
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }
    pub fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = due_date.format("%Y-%m-%d").to_string();
    }
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
    pub fn set_created_by(&mut self, email: String) {
        self.created_by = Some(email);
    }
    pub fn set_assignee(&mut self, id: String, name: String, email: String) {
        self.responsible_person_id = Some(id);
        self.responsible_person_name = Some(name);
        self.responsible_person_email = Some(email);
    }
}

/// Parse a wire due date, accepting both `2024-02-15` and full ISO timestamps
/// (only the leading date part matters, the time-of-day is ignored)
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    raw.get(..10)
        .and_then(|date_part| NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok())
}

/// Per-date task counts, as returned by the month-overview endpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub paused: u32,
}

impl StatusCounts {
    pub fn total(&self) -> u32 {
        self.pending + self.completed + self.paused
    }

    pub fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::Completed => self.completed += 1,
            TaskStatus::Paused => self.paused += 1,
        }
    }

    /// The badges a month-overview cell should show: a deterministic order
    /// (pending, then completed, then paused), zero counts suppressed
    pub fn badges(&self) -> Vec<(TaskStatus, u32)> {
        let all = [
            (TaskStatus::Pending, self.pending),
            (TaskStatus::Completed, self.completed),
            (TaskStatus::Paused, self.paused),
        ];
        all.iter().copied().filter(|(_, count)| *count > 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overdue_is_derived_from_status_and_date() {
        let task = Task::new("t1", "water the plants", date(2024, 2, 15), TaskStatus::Pending);
        assert!(task.is_overdue(date(2024, 3, 1)));
        assert!(!task.is_overdue(date(2024, 2, 15)));
        assert!(!task.is_overdue(date(2024, 2, 1)));

        let done = Task::new("t2", "water the plants", date(2024, 2, 15), TaskStatus::Completed);
        assert!(!done.is_overdue(date(2024, 3, 1)));
    }

    #[test]
    fn due_dates_parse_with_or_without_time() {
        assert_eq!(parse_due_date("2024-02-15"), Some(date(2024, 2, 15)));
        assert_eq!(parse_due_date("2024-02-15T00:00:00.000Z"), Some(date(2024, 2, 15)));
        assert_eq!(parse_due_date("not a date"), None);
        assert_eq!(parse_due_date(""), None);
    }

    #[test]
    fn unparseable_due_date_is_not_overdue() {
        let mut task = Task::new("t1", "x", date(2024, 2, 15), TaskStatus::Pending);
        task.due_date = "garbage".to_string();
        assert_eq!(task.due_date(), None);
        assert!(!task.is_overdue(date(2024, 3, 1)));
    }

    #[test]
    fn badges_are_ordered_and_suppress_zeros() {
        let counts = StatusCounts { pending: 2, completed: 0, paused: 1 };
        assert_eq!(
            counts.badges(),
            vec![(TaskStatus::Pending, 2), (TaskStatus::Paused, 1)]
        );
        assert_eq!(StatusCounts::default().badges(), vec![]);
    }

    #[test]
    fn task_list_tolerates_extra_and_missing_fields() {
        let json = r#"[
            {"id":"1","description":"a","dueDate":"2024-02-15","status":"pending",
             "createdBy":"who@x.com","responsiblePersonId":"7",
             "responsiblePersonName":"Ada","responsiblePersonEmail":"ada@x.com"},
            {"id":"2","description":"b","dueDate":"oops","status":"paused"}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].responsible_person_name(), Some("Ada"));
        assert_eq!(tasks[1].due_date(), None);
    }
}
