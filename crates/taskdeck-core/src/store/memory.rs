//! In-memory task store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};
use tracing::debug;

use crate::domain::{StoreEvent, Task, TaskDraft, TaskId};
use crate::error::TaskDeckError;
use crate::store::{Applied, TaskStore};
use crate::validate::{DraftValidator, Validate};

/// In-memory store state.
///
/// Design:
/// - This is the single source of truth for the collection.
/// - `tasks` is a Vec on purpose: insertion order is the display order, and
///   id lookup over a list this size does not justify an index.
struct StoreState {
    tasks: Vec<Task>,

    /// Applied mutations, oldest first (observability).
    events: Vec<StoreEvent>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Next id to assign: `max(existing ids) + 1`, or 1 when empty.
    ///
    /// Deleting the highest task makes its id reusable; earlier gaps are
    /// never refilled.
    fn next_id(&self) -> TaskId {
        let max = self.tasks.iter().map(|t| t.id.value()).max().unwrap_or(0);
        TaskId::new(max + 1)
    }

    fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task::from_draft(self.next_id(), draft);
        self.tasks.push(task.clone());
        self.events.push(StoreEvent::Created { id: task.id });
        task
    }

    fn update(&mut self, incoming: &Task) -> Applied {
        match self.tasks.iter_mut().find(|t| t.id == incoming.id) {
            Some(existing) => {
                existing.apply_update(incoming);
                self.events.push(StoreEvent::Updated { id: incoming.id });
                Applied::Applied
            }
            None => Applied::NotFound,
        }
    }

    fn delete(&mut self, id: TaskId) -> Applied {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                self.events.push(StoreEvent::Deleted { id });
                Applied::Applied
            }
            None => Applied::NotFound,
        }
    }
}

/// In-memory task store.
///
/// Design:
/// - `StoreState` lives behind a tokio `Mutex`; each mutation runs to
///   completion under one lock acquisition.
/// - Publication goes through a `watch` channel carrying the full collection.
///   The snapshot is cloned while the lock is held and sent after it is
///   released, so subscribers always receive a fully applied collection.
pub struct InMemoryTaskStore {
    state: Arc<Mutex<StoreState>>,
    validator: Arc<dyn Validate>,
    snapshot_tx: watch::Sender<Vec<Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::with_validator(Arc::new(DraftValidator))
    }

    /// Swap the validator seam (tests, alternate rule sets).
    pub fn with_validator(validator: Arc<dyn Validate>) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Self {
            state: Arc::new(Mutex::new(StoreState::new())),
            validator,
            snapshot_tx,
        }
    }

    /// Applied mutations so far, oldest first.
    pub async fn events(&self) -> Vec<StoreEvent> {
        self.state.lock().await.events.clone()
    }

    fn publish(&self, snapshot: Vec<Task>) {
        // send_replace never fails: the store publishes even before the
        // first subscriber shows up.
        self.snapshot_tx.send_replace(snapshot);
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, draft: TaskDraft) -> Result<Task, TaskDeckError> {
        // Reject before touching state: a failed create publishes nothing.
        self.validator.validate(&draft)?;

        let (task, snapshot) = {
            let mut state = self.state.lock().await;
            let task = state.create(draft);
            (task, state.tasks.clone())
        };

        debug!(id = %task.id, name = %task.name, "task created");
        self.publish(snapshot);
        Ok(task)
    }

    async fn update(&self, task: Task) -> Result<Applied, TaskDeckError> {
        // Edit cells enforce the same patterns as the create form.
        self.validator.validate(&task.as_draft())?;

        let (applied, snapshot) = {
            let mut state = self.state.lock().await;
            let applied = state.update(&task);
            (applied, state.tasks.clone())
        };

        match applied {
            Applied::Applied => {
                debug!(id = %task.id, "task updated");
                self.publish(snapshot);
            }
            Applied::NotFound => debug!(id = %task.id, "update target not found"),
        }
        Ok(applied)
    }

    async fn delete(&self, id: TaskId) -> Result<Applied, TaskDeckError> {
        let (applied, snapshot) = {
            let mut state = self.state.lock().await;
            let applied = state.delete(id);
            (applied, state.tasks.clone())
        };

        match applied {
            Applied::Applied => {
                debug!(id = %id, "task deleted");
                self.publish(snapshot);
            }
            Applied::NotFound => debug!(id = %id, "delete target not found"),
        }
        Ok(applied)
    }

    async fn list(&self) -> Vec<Task> {
        self.state.lock().await.tasks.clone()
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.snapshot_tx.subscribe()
    }
}
