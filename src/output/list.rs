#![forbid(unsafe_code)]

use std::fmt::Write as _;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::task::model::Task;

const DIVIDER: &str = "---------------------------";

/// Renders tasks as divider-separated record blocks, one block per
/// task, in the order given.
#[must_use]
pub fn render(tasks: &[Task]) -> String {
    let mut out = String::from("Task List:\n");
    for task in tasks {
        let _ = writeln!(out, "ID: {}", task.id);
        let _ = writeln!(out, "Description: {}", task.description);
        let _ = writeln!(out, "Status: {}", task.status);
        let _ = writeln!(out, "CreatedAt: {}", format_timestamp(task.created_at));
        let _ = writeln!(out, "UpdatedAt: {}", format_timestamp(task.updated_at));
        out.push_str(DIVIDER);
        out.push('\n');
    }
    out
}

#[must_use]
pub fn format_timestamp(t: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    t.format(&format).unwrap_or_else(|_| t.to_string())
}
