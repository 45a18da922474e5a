//! Comments attached to a task
//!
//! From the client's point of view comments are append-only: they can be listed and
//! added, never edited or removed, and are displayed in creation order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Who wrote it, if the server sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// The body of a "add a comment" request
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub description: String,
    pub task_id: String,
}

/// Sort comments by creation time, oldest first
pub fn sorted_by_creation(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by_key(|comment| comment.date);
    comments
}
