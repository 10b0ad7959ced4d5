//! Grid collaborator: table rendering and ephemeral row edit state.
//!
//! Edit mode is view state, keyed by task id and discarded on save or
//! cancel. It never reaches the Task Store; the store only sees the final
//! `update` when a row is saved.

use std::collections::HashMap;

use chrono::NaiveDate;
use taskdeck_core::{Task, TaskId};

use crate::form::DATE_FORMAT;

/// Render the collection as an aligned table, insertion order preserved.
pub fn render(tasks: &[Task]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<12}  {:<6}  {:<10}  {}\n",
        "id", "name", "code", "date", "editable"
    ));
    for task in tasks {
        let date = task.assign_date.format(DATE_FORMAT).to_string();
        out.push_str(&format!(
            "{:>4}  {:<12}  {:<6}  {:<10}  {}\n",
            task.id,
            task.name,
            task.code,
            date,
            if task.editable { "yes" } else { "no" }
        ));
    }
    if tasks.is_empty() {
        out.push_str("  (no tasks)\n");
    }
    out
}

/// Transient per-row edit state.
///
/// Rows with `editable = false` never enter edit mode, matching the grid
/// contract: edit and delete actions are restricted to editable rows.
#[derive(Default)]
pub struct GridView {
    edits: HashMap<TaskId, Task>,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a row into edit mode, starting from its current stored fields.
    pub fn begin(&mut self, task: Task) -> Result<(), String> {
        if !task.editable {
            return Err(format!("row {} is not editable", task.id));
        }
        self.edits.insert(task.id, task);
        Ok(())
    }

    /// Patch one field of a row in edit mode.
    ///
    /// `editable` is not patchable here: the flag is set at creation and the
    /// edit path never toggles it.
    pub fn set(&mut self, id: TaskId, field: &str, value: &str) -> Result<(), String> {
        let row = self
            .edits
            .get_mut(&id)
            .ok_or_else(|| format!("row {id} is not in edit mode"))?;

        match field {
            "name" => row.name = value.to_string(),
            "code" => row.code = value.to_string(),
            "date" => {
                row.assign_date = NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map_err(|_| format!("bad date {value:?}, expected dd/mm/yyyy"))?;
            }
            other => return Err(format!("unknown field {other:?} (name, code, date)")),
        }
        Ok(())
    }

    /// Leave edit mode and hand back the patched row for a store update.
    pub fn save(&mut self, id: TaskId) -> Option<Task> {
        self.edits.remove(&id)
    }

    /// Leave edit mode, discarding any patched fields.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.edits.remove(&id).is_some()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edits.contains_key(&id)
    }
}
