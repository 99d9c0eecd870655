//! Tick - a minimal in-memory to-do list
//!
//! Tick keeps an ordered list of to-do items in memory: add items with a
//! priority, mark them complete by ID, list them by status, and render them
//! as text. Nothing is persisted; a store lives and dies with its process.
//!
//! The store reports what it does through an injected [`EventSink`] instead
//! of printing, and `complete` returns a [`CompleteOutcome`] callers can
//! branch on.

pub mod domain;
pub mod render;
pub mod cli;

pub use domain::{
    CompleteOutcome, EventSink, Filter, ItemId, Priority, StoreEvent, TodoItem, TodoStore,
};
