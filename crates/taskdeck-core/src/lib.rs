//! taskdeck-core
//!
//! Core building blocks for the taskdeck task-list manager.
//!
//! # Module layout
//! - **domain**: the Task entity, creation drafts, and store events
//! - **validate**: field rules for candidates (the validator seam)
//! - **store**: the TaskStore port and the in-memory implementation
//! - **error**: crate-wide error types

pub mod domain;
pub mod error;
pub mod store;
pub mod validate;

pub use domain::{StoreEvent, Task, TaskDraft, TaskId};
pub use error::{Field, FieldError, TaskDeckError, ValidationError};
pub use store::{Applied, InMemoryTaskStore, TaskStore};
pub use validate::{DraftValidator, Validate};
