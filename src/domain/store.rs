//! In-memory to-do store
//!
//! Owns the ordered item sequence and the next-id counter. Insertion order
//! is significant and preserved; items are never removed.

use super::event::{EventSink, NullSink, StoreEvent};
use super::filter::Filter;
use super::id::ItemId;
use super::item::{Priority, TodoItem};

/// Outcome of a [`TodoStore::complete`] call
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The item exists and is complete now, whether or not it already was
    Completed,
    /// No item has the given ID; nothing changed
    NotFound,
}

impl CompleteOutcome {
    /// Returns true if the item was found and completed
    pub fn is_completed(&self) -> bool {
        matches!(self, CompleteOutcome::Completed)
    }

    /// Returns true if no item matched the ID
    pub fn is_not_found(&self) -> bool {
        matches!(self, CompleteOutcome::NotFound)
    }
}

/// Holds the to-do items and assigns their IDs
///
/// Invariants:
/// - IDs are unique and strictly increasing in insertion order.
/// - The next ID to assign is greater than every existing item's ID.
/// - Non-filtering reads preserve insertion order.
pub struct TodoStore {
    items: Vec<TodoItem>,
    next_id: ItemId,
    sink: Box<dyn EventSink>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Creates an empty store that reports events to nobody
    pub fn new() -> Self {
        Self::with_sink(Box::new(NullSink))
    }

    /// Creates an empty store reporting events to the given sink
    pub fn with_sink(sink: Box<dyn EventSink>) -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::FIRST,
            sink,
        }
    }

    /// Adds an item and returns it
    ///
    /// The text is treated as opaque; the store does not validate it.
    /// Cannot fail.
    pub fn add(&mut self, text: impl Into<String>, priority: Priority) -> &TodoItem {
        let id = self.next_id;
        self.next_id = id.next();

        let item = TodoItem::new(id, text, priority);
        self.sink.record(&StoreEvent::Added {
            id,
            text: item.text.clone(),
            priority,
        });

        self.items.push(item);
        self.items.last().expect("push made the list non-empty")
    }

    /// Marks the item with the given ID complete
    ///
    /// Scans the sequence in order and completes the first match. Completing
    /// an already complete item reports `Completed` again; there is no way
    /// to observe "already completed" as a distinct outcome.
    pub fn complete(&mut self, id: ItemId) -> CompleteOutcome {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.complete();
                self.sink.record(&StoreEvent::Completed {
                    id,
                    text: item.text.clone(),
                });
                CompleteOutcome::Completed
            }
            None => {
                self.sink.record(&StoreEvent::NotFound { id });
                CompleteOutcome::NotFound
            }
        }
    }

    /// Returns the items selected by the filter, in insertion order
    pub fn list(&self, filter: Filter) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Returns every item, in insertion order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the number of items ever added
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
