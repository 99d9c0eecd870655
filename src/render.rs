//! Text rendering of item listings
//!
//! Pure formatting: functions here take items and return strings. They never
//! mutate anything and never print; callers decide where the text goes.

use crate::domain::TodoItem;

/// Message shown in place of a listing when there are no items
const EMPTY_MESSAGE: &str = "No tasks yet.";

/// Renders the items as a listing, one line per item in the given order
///
/// An empty slice renders as a single "no tasks" line.
pub fn render(items: &[&TodoItem]) -> String {
    if items.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = String::new();
    out.push_str(&format!("Tasks ({}):\n", items.len()));
    out.push_str(&format!("{}\n", "-".repeat(40)));
    for item in items {
        out.push_str(&render_line(item));
    }
    out
}

/// Renders one item line: completion indicator, priority tag, text
pub fn render_line(item: &TodoItem) -> String {
    let indicator = if item.completed { "[x]" } else { "[ ]" };
    format!("{} [{}] {}\n", indicator, item.priority.tag(), item.text)
}
