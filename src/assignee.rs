//! Figuring out who a task belongs to
//!
//! A task write must carry exactly one assignee identity: either a person that already
//! exists in the directory, or a brand new name/email pair the server will register on
//! the fly. The original UI tracked this with independent nullable fields, which allowed
//! "both set" and "neither set"; this enum makes those states unrepresentable.

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// A query shorter than this does not hit the directory at all
pub const MIN_QUERY_LEN: usize = 2;

/// The assignee identity a draft resolves to at submission time
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignee {
    /// Nobody picked yet. Valid in a draft, rejected at create-submission time
    Unset,
    /// An existing person, by directory id
    Existing(String),
    /// A person that does not exist yet; the server creates them during the task write
    New { name: String, email: String },
}

impl Assignee {
    pub fn is_set(&self) -> bool {
        !matches!(self, Assignee::Unset)
    }
}

/// Which input surface the user is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverMode {
    /// Free-text lookup against the user directory
    Search,
    /// Inline creation of a not-yet-persisted person
    Create,
}

/// A directory lookup the resolver wants issued.
///
/// The sequence number makes out-of-order network responses harmless: only the response
/// carrying the most recently issued sequence may update the candidate list, anything
/// else is dropped by [`AssigneeResolver::apply_results`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// State machine behind the "responsible person" picker.
///
/// Two mutually exclusive modes, toggled explicitly: searching for an existing person,
/// or typing a new one. Selecting a candidate locks in that person and clears the
/// transient search state; switching modes discards the other mode's inputs.
#[derive(Clone, Debug)]
pub struct AssigneeResolver {
    mode: ResolverMode,
    query: String,
    candidates: Vec<Person>,
    selected: Option<Person>,
    new_name: String,
    new_email: String,
    next_seq: u64,
    /// The only search whose response is still welcome
    issued_seq: Option<u64>,
}

impl Default for AssigneeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AssigneeResolver {
    pub fn new() -> Self {
        Self {
            mode: ResolverMode::Search,
            query: String::new(),
            candidates: Vec::new(),
            selected: None,
            new_name: String::new(),
            new_email: String::new(),
            next_seq: 0,
            issued_seq: None,
        }
    }

    /// A resolver that starts out locked on `person` (used when editing a task that
    /// already has an assignee)
    pub fn with_selection(person: Person) -> Self {
        let mut resolver = Self::new();
        resolver.selected = Some(person);
        resolver
    }

    pub fn mode(&self) -> ResolverMode { self.mode }
    pub fn query(&self) -> &str { &self.query }
    pub fn candidates(&self) -> &[Person] { &self.candidates }
    pub fn selected(&self) -> Option<&Person> { self.selected.as_ref() }
    pub fn new_name(&self) -> &str { &self.new_name }
    pub fn new_email(&self) -> &str { &self.new_email }

    /// Record what the user typed in the search box.
    ///
    /// Returns the lookup to issue, if any: only in search mode, with no locked
    /// selection, and once the query is at least [`MIN_QUERY_LEN`] characters.
    /// Shorter queries clear the candidate list instead.
    pub fn set_query(&mut self, query: &str) -> Option<SearchRequest> {
        if self.mode != ResolverMode::Search || self.selected.is_some() {
            return None;
        }
        self.query = query.to_string();

        if self.query.chars().count() >= MIN_QUERY_LEN {
            self.next_seq += 1;
            self.issued_seq = Some(self.next_seq);
            Some(SearchRequest {
                seq: self.next_seq,
                query: self.query.clone(),
            })
        } else {
            self.candidates.clear();
            self.issued_seq = None;
            None
        }
    }

    /// Feed back the response of an issued lookup.
    ///
    /// Responses for superseded queries are discarded; returns whether the
    /// candidate list was updated.
    pub fn apply_results(&mut self, seq: u64, results: Vec<Person>) -> bool {
        if self.mode != ResolverMode::Search || self.issued_seq != Some(seq) {
            log::debug!("Dropping stale search response (seq {})", seq);
            return false;
        }
        self.candidates = results;
        true
    }

    /// Lock in a candidate. Clears the query and the candidate list
    pub fn select(&mut self, person: Person) {
        self.selected = Some(person);
        self.query.clear();
        self.candidates.clear();
        self.issued_seq = None;
        self.new_name.clear();
        self.new_email.clear();
    }

    /// Unlock the current selection and reset both modes' transient state.
    /// The mode itself is kept
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.query.clear();
        self.candidates.clear();
        self.issued_seq = None;
        self.new_name.clear();
        self.new_email.clear();
    }

    /// Switch between "search existing" and "create new".
    /// The other mode's inputs are discarded
    pub fn set_mode(&mut self, mode: ResolverMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            ResolverMode::Create => {
                self.selected = None;
            }
            ResolverMode::Search => {
                self.new_name.clear();
                self.new_email.clear();
            }
        }
        self.query.clear();
        self.candidates.clear();
        self.issued_seq = None;
    }

    pub fn set_new_name(&mut self, name: &str) {
        self.new_name = name.to_string();
    }

    pub fn set_new_email(&mut self, email: &str) {
        self.new_email = email.to_string();
    }

    /// What this resolver stands for at submission time.
    ///
    /// At most one of the identities can come out: a locked selection wins, otherwise a
    /// fully filled-in new person, otherwise [`Assignee::Unset`].
    pub fn resolved(&self) -> Assignee {
        if let Some(person) = &self.selected {
            return Assignee::Existing(person.id.clone());
        }
        if self.mode == ResolverMode::Create {
            let name = self.new_name.trim();
            let email = self.new_email.trim();
            if !name.is_empty() && !email.is_empty() {
                return Assignee::New {
                    name: name.to_string(),
                    email: email.to_string(),
                };
            }
        }
        Assignee::Unset
    }
}
