//! People that tasks can be assigned to

use serde::{Deserialize, Serialize};

/// Someone from the user directory.
///
/// People are looked up by fuzzy text match through
/// [`RemoteSource::search_users`](crate::traits::RemoteSource::search_users), or created
/// implicitly as a side effect of writing a task with a [`Assignee::New`](crate::Assignee::New)
/// payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn new<I: ToString, N: ToString, E: ToString>(id: I, name: N, email: E) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}
