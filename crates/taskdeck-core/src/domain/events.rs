//! Store events: one per applied mutation.

use super::TaskId;

/// A mutation the store actually applied.
///
/// Rejected creates and not-found updates/deletes emit nothing; the event
/// log only ever contains mutations that changed the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Created { id: TaskId },
    Updated { id: TaskId },
    Deleted { id: TaskId },
}

impl StoreEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreEvent::Created { .. } => "created",
            StoreEvent::Updated { .. } => "updated",
            StoreEvent::Deleted { .. } => "deleted",
        }
    }

    pub fn task_id(&self) -> TaskId {
        match self {
            StoreEvent::Created { id }
            | StoreEvent::Updated { id }
            | StoreEvent::Deleted { id } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_task_id_accessors() {
        let event = StoreEvent::Deleted { id: TaskId::new(3) };
        assert_eq!(event.kind(), "deleted");
        assert_eq!(event.task_id(), TaskId::new(3));
    }
}
