//! The task create/edit view model
//!
//! A [`TaskEditor`] owns a [`TaskDraft`]: a shadow copy of a task's editable fields,
//! never aliasing the synced list. Its lifecycle is
//! `Open -> Submitting -> closed (dropped)` on success, or back to `Open` with an
//! inline error (and the draft intact) on failure. Cancelling is simply dropping the
//! editor.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::assignee::{Assignee, AssigneeResolver};
use crate::error::Error as RemoteError;
use crate::person::Person;
use crate::task::{Task, TaskStatus};

/// Client-side validation failures. These block submission and never reach the network
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("A responsible person must be selected or created")]
    MissingAssignee,
}

/// Why a submission attempt did not start
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// A previous submission of this draft has not settled yet
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The editable fields of a task, plus the assignee picker state
#[derive(Clone, Debug)]
pub struct TaskDraft {
    pub description: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub assignee: AssigneeResolver,
}

/// Wire payload of an inline new person
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// `POST /tasks` body. Exactly one of `user_id` / `new_user` is present,
/// guaranteed by construction from the [`Assignee`] variant
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub description: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_user: Option<NewUser>,
}

/// `PATCH /tasks/:id` body. An absent assignee means "keep the current one"
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub description: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_user_email: Option<String>,
}

/// The write a validated draft turned into
#[derive(Clone, Debug)]
pub enum WriteRequest {
    Create(CreateTask),
    Update { task_id: String, body: UpdateTask },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum EditorKind {
    Create,
    Edit { task_id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Open,
    Submitting,
}

/// Whether the caller should re-fetch the displayed task list.
///
/// Requested after *every* settled submission, success or failure: after a failed
/// write the client cannot know how much the server applied, so re-fetching is the
/// only way to converge. (The original create and edit flows disagreed on this;
/// see DESIGN.md.)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    Requested,
}

/// What a settled submission left behind
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The server accepted the write; the editor should be closed (dropped)
    Saved(Task, Refresh),
    /// The write failed; the draft and an inline error are retained for retry
    Failed(Refresh),
}

#[derive(Debug)]
pub struct TaskEditor {
    kind: EditorKind,
    phase: Phase,
    draft: TaskDraft,
    error: Option<String>,
}

impl TaskEditor {
    /// Open a "create" editor, the due date pre-filled from the clicked cell
    pub fn create(due_date: NaiveDate) -> Self {
        Self {
            kind: EditorKind::Create,
            phase: Phase::Open,
            draft: TaskDraft {
                description: String::new(),
                due_date,
                status: TaskStatus::Pending,
                assignee: AssigneeResolver::new(),
            },
            error: None,
        }
    }

    /// Open an "edit" editor seeded from the last-known server copy of `task`.
    ///
    /// The current assignee (if any) starts out as a locked selection. A task whose
    /// stored due date does not parse is seeded with `today` so it can be repaired.
    pub fn edit(task: &Task, today: NaiveDate) -> Self {
        let assignee = match task.responsible_person_id() {
            Some(id) => AssigneeResolver::with_selection(Person::new(
                id,
                task.responsible_person_name().unwrap_or_default(),
                task.responsible_person_email().unwrap_or_default(),
            )),
            None => AssigneeResolver::new(),
        };
        Self {
            kind: EditorKind::Edit { task_id: task.id().to_string() },
            phase: Phase::Open,
            draft: TaskDraft {
                description: task.description().to_string(),
                due_date: task.due_date().unwrap_or(today),
                status: task.status(),
                assignee,
            },
            error: None,
        }
    }

    pub fn is_create(&self) -> bool {
        self.kind == EditorKind::Create
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The inline error to display, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Mutable access to the draft. Denied while a submission is in flight,
    /// mirroring the disabled form fields of the UI
    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match self.phase {
            Phase::Open => Some(&mut self.draft),
            Phase::Submitting => None,
        }
    }

    /// The validation gate run before any submission
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.draft.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.is_create() && !self.draft.assignee.resolved().is_set() {
            return Err(ValidationError::MissingAssignee);
        }
        Ok(())
    }

    /// Start a submission: validate, move to `Submitting`, and emit the wire request.
    ///
    /// Refused while a previous submission is in flight, so the same draft can never
    /// be written twice concurrently. Validation failures are also surfaced through
    /// [`Self::error`].
    pub fn begin_submit(&mut self) -> Result<WriteRequest, SubmitError> {
        if self.phase == Phase::Submitting {
            return Err(SubmitError::InFlight);
        }
        if let Err(invalid) = self.validate() {
            self.error = Some(invalid.to_string());
            return Err(SubmitError::Invalid(invalid));
        }

        self.error = None;
        self.phase = Phase::Submitting;

        let description = self.draft.description.trim().to_string();
        let assignee = self.draft.assignee.resolved();
        let request = match &self.kind {
            EditorKind::Create => {
                let (user_id, new_user) = match assignee {
                    Assignee::Existing(id) => (Some(id), None),
                    Assignee::New { name, email } => (None, Some(NewUser { name, email })),
                    // validate() above made sure this cannot happen for a create
                    Assignee::Unset => (None, None),
                };
                WriteRequest::Create(CreateTask {
                    description,
                    due_date: self.draft.due_date,
                    status: self.draft.status,
                    user_id,
                    new_user,
                })
            }
            EditorKind::Edit { task_id } => {
                let (assigned_to, new_user_name, new_user_email) = match assignee {
                    Assignee::Existing(id) => (Some(id), None, None),
                    Assignee::New { name, email } => (None, Some(name), Some(email)),
                    Assignee::Unset => (None, None, None),
                };
                WriteRequest::Update {
                    task_id: task_id.clone(),
                    body: UpdateTask {
                        description,
                        due_date: self.draft.due_date,
                        status: self.draft.status,
                        assigned_to,
                        new_user_name,
                        new_user_email,
                    },
                }
            }
        };
        Ok(request)
    }

    /// Settle the submission started by [`Self::begin_submit`].
    ///
    /// On success the caller should drop the editor; on failure it stays open with
    /// the draft intact and the error attached. Either way a refresh is requested.
    pub fn finish_submit(&mut self, result: Result<Task, RemoteError>) -> SubmitOutcome {
        self.phase = Phase::Open;
        match result {
            Ok(task) => {
                self.error = None;
                SubmitOutcome::Saved(task, Refresh::Requested)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                SubmitOutcome::Failed(Refresh::Requested)
            }
        }
    }
}
