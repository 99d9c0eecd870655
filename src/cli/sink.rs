//! Console event sink

use crate::domain::{EventSink, StoreEvent};

/// Prints each store event to stdout as it happens
///
/// Disabled in JSON mode so machine-parseable output stays clean.
pub struct ConsoleSink {
    enabled: bool,
}

impl ConsoleSink {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl EventSink for ConsoleSink {
    fn record(&self, event: &StoreEvent) {
        if self.enabled {
            println!("{}", event);
        }
    }
}
