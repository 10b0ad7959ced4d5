//! Form collaborator: turn an `add` command line into a creation draft and
//! display returned field errors inline.
//!
//! Parsing here is shape only (token count, date format). Field rules live
//! behind the store's validator seam; this module just relays its messages.

use chrono::{Local, NaiveDate};
use taskdeck_core::{TaskDraft, ValidationError};

/// Date entry format, day first.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse `add <name> <code> <dd/mm/yyyy|today> [editable]`.
///
/// `input` is the argument part, without the leading `add`.
pub fn parse_add(input: &str) -> Result<TaskDraft, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (name, code, date_token, rest) = match tokens.as_slice() {
        [name, code, date, rest @ ..] => (*name, *code, *date, rest),
        _ => return Err("usage: add <name> <code> <dd/mm/yyyy|today> [editable]".to_string()),
    };

    let assign_date = parse_date(date_token)?;

    let editable = match rest {
        [] => false,
        ["editable"] => true,
        _ => return Err(format!("unexpected trailing input: {}", rest.join(" "))),
    };

    Ok(TaskDraft::new(name, code, assign_date).editable(editable))
}

fn parse_date(token: &str) -> Result<NaiveDate, String> {
    if token == "today" {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(token, DATE_FORMAT)
        .map_err(|_| format!("bad date {token:?}, expected dd/mm/yyyy or today"))
}

/// One line per violated rule, ready for terminal display next to the
/// offending field name.
pub fn render_errors(err: &ValidationError) -> String {
    err.errors
        .iter()
        .map(|e| format!("  {}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}
