//! To-do item domain model
//!
//! Items are created by the store and only ever mutated through it. The one
//! legal state change is active -> completed; there is no way back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::id::ItemId;

#[derive(Debug, Error, PartialEq)]
pub enum PriorityError {
    #[error("Unknown priority '{0}': expected high, medium, or low")]
    Unknown(String),
}

/// Priority of a to-do item
///
/// Informational only: priorities never affect ordering or behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Returns the lowercase display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Returns the uppercase tag used in rendered listings
    pub fn tag(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = PriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(PriorityError::Unknown(s.to_string())),
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned by the store
    pub id: ItemId,

    /// Task description, immutable after creation
    pub text: String,

    /// Informational priority
    pub priority: Priority,

    /// Whether the item has been completed
    pub completed: bool,

    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new active item, stamped with the current time
    pub(crate) fn new(id: ItemId, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            priority,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the item complete
    ///
    /// Re-completing an already complete item is a no-op on state.
    pub(crate) fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns true if the item has not been completed yet
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
