//! Status filters over the item list

use std::fmt;

use super::item::TodoItem;

/// View selector over the item collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Parses a filter keyword
    ///
    /// Unrecognized keywords select `All`. Matching is case-insensitive.
    pub fn from_keyword(s: &str) -> Filter {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Returns true if the item belongs in this view
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => item.is_active(),
            Filter::Completed => item.completed,
        }
    }

    /// Returns the keyword for this filter
    pub fn keyword(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
