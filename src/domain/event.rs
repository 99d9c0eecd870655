//! Store events and the sink that receives them
//!
//! The store never prints. It reports what happened through [`EventSink`],
//! and callers decide whether events reach a console, a log, or nothing at
//! all. This keeps the data operations silent and testable.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::id::ItemId;
use super::item::Priority;

/// A notification emitted by the store after an operation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// An item was created
    Added {
        id: ItemId,
        text: String,
        priority: Priority,
    },
    /// An item was marked complete (also emitted when it already was)
    Completed { id: ItemId, text: String },
    /// A complete call referenced an ID no item has
    NotFound { id: ItemId },
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::Added { id, text, priority } => {
                write!(f, "Added \"{}\" with priority {} (id {})", text, priority, id)
            }
            StoreEvent::Completed { id, text } => {
                write!(f, "Completed \"{}\" (id {})", text, id)
            }
            StoreEvent::NotFound { id } => {
                write!(f, "No item with id {}", id)
            }
        }
    }
}

/// Receives store events
pub trait EventSink {
    /// Records a single event
    fn record(&self, event: &StoreEvent);
}

// Lets a shared sink be handed to the store while the caller keeps a handle.
impl<S: EventSink + ?Sized> EventSink for Rc<S> {
    fn record(&self, event: &StoreEvent) {
        (**self).record(event);
    }
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &StoreEvent) {}
}

/// Sink that keeps every event in memory, for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<StoreEvent>>,
}

impl RecordingSink {
    /// Creates an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events, in emission order
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of recorded events
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &StoreEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
