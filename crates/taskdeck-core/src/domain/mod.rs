//! Domain model (task entity, drafts, store events).

pub mod events;
pub mod task;

pub use events::StoreEvent;
pub use task::{Task, TaskDraft, TaskId};
