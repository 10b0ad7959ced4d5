//! Task store: the port, mutation outcomes, and the in-memory implementation.

mod memory;

pub use memory::InMemoryTaskStore;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::{Task, TaskDraft, TaskId};
use crate::error::TaskDeckError;

/// Outcome of an update/delete aimed at an existing id.
///
/// An unknown id leaves the collection untouched. The miss is surfaced here
/// at the interface boundary instead of being swallowed, without promoting
/// it to an error: callers that want the historical silent no-op can ignore
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The mutation was applied and one new snapshot was published.
    Applied,
    /// No task carries the requested id; nothing changed, nothing published.
    NotFound,
}

impl Applied {
    pub fn is_applied(self) -> bool {
        matches!(self, Applied::Applied)
    }
}

/// TaskStore port (interface).
///
/// v1 is in-memory, but this trait is the seam for swapping implementations
/// later. Contract:
/// - mutations are atomic relative to the publish step; subscribers never
///   observe a partially applied mutation
/// - insertion order is preserved and is the display order
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Validate a candidate; on success assign `max(existing ids) + 1`
    /// (1 when empty), append, publish, and return the created task.
    /// On validation failure nothing mutates and nothing is published.
    async fn create(&self, draft: TaskDraft) -> Result<Task, TaskDeckError>;

    /// Replace the name/code/assign date/editable fields of the task with
    /// `task.id`, in place (position unchanged), then publish. The update
    /// candidate passes the same field rules as a create.
    async fn update(&self, task: Task) -> Result<Applied, TaskDeckError>;

    /// Remove the first task whose id matches, then publish.
    async fn delete(&self, id: TaskId) -> Result<Applied, TaskDeckError>;

    /// Read-only snapshot of the collection, in insertion order.
    async fn list(&self) -> Vec<Task>;

    /// Subscribe to collection snapshots: exactly one per applied mutation.
    fn subscribe(&self) -> watch::Receiver<Vec<Task>>;
}
