//! Integer item IDs
//!
//! IDs are assigned by the store: the first item gets 1, and every later
//! item gets a strictly larger value. IDs are never reused, so an ID refers
//! to the same item for the lifetime of the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid item ID: expected a positive integer, got '{0}'")]
    Invalid(String),
}

/// Identifier of a single to-do item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The ID a fresh store assigns first
    pub const FIRST: ItemId = ItemId(1);

    /// Creates an ID from its numeric value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the ID the store assigns after this one
    pub(crate) fn next(&self) -> ItemId {
        ItemId(self.0 + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(IdError::Invalid(s.to_string())),
        }
    }
}
