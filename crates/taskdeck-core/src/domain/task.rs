//! Task entity and creation draft.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a Task.
///
/// Assigned by the store at creation time as `max(existing ids) + 1`
/// (1 on an empty collection) and stable for the task's lifetime.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The sole business entity: a named, dated, coded record with an
/// editability flag.
///
/// Design:
/// - The store is the single source of truth for the collection.
/// - Field mutation goes through [`Task::apply_update`], never by reaching
///   into a stored task directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub code: String,
    pub assign_date: NaiveDate,
    pub editable: bool,
}

impl Task {
    /// Materialize a validated draft under the id the store allocated.
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            name: draft.name,
            code: draft.code,
            assign_date: draft.assign_date,
            editable: draft.editable,
        }
    }

    /// Replace the mutable fields from `update`, keeping the id.
    pub fn apply_update(&mut self, update: &Task) {
        self.name = update.name.clone();
        self.code = update.code.clone();
        self.assign_date = update.assign_date;
        self.editable = update.editable;
    }

    /// View this task's fields as a draft (used to re-run field rules on
    /// update candidates).
    pub fn as_draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            code: self.code.clone(),
            assign_date: self.assign_date,
            editable: self.editable,
        }
    }
}

/// Unvalidated input proposed for creating a Task (the "candidate").
///
/// `editable` defaults to `false` and is fixed at creation; no later
/// operation toggles it on the grid's edit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    pub code: String,
    pub assign_date: NaiveDate,
    #[serde(default)]
    pub editable: bool,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>, code: impl Into<String>, assign_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            assign_date,
            editable: false,
        }
    }

    /// Builder-style toggle for the editability flag.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}
