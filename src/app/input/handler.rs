//! Host touch callback trait

use crate::gesture::{ContactBatch, GestureManager};

/// Receiver of the host's four touch callbacks
///
/// Each callback carries the batch of contacts that changed phase at one
/// instant.
pub trait ContactHandler {
    /// Name of this handler for debugging
    fn name(&self) -> &str;

    fn touches_began(&mut self, batch: &ContactBatch);

    fn touches_moved(&mut self, _batch: &ContactBatch) {
        // Default: no-op
    }

    fn touches_ended(&mut self, batch: &ContactBatch);

    fn touches_cancelled(&mut self, _batch: &ContactBatch) {
        // Default: no-op
    }
}

impl ContactHandler for GestureManager {
    fn name(&self) -> &str {
        "gesture"
    }

    fn touches_began(&mut self, batch: &ContactBatch) {
        GestureManager::touches_began(self, batch);
    }

    fn touches_moved(&mut self, batch: &ContactBatch) {
        GestureManager::touches_moved(self, batch);
    }

    fn touches_ended(&mut self, batch: &ContactBatch) {
        GestureManager::touches_ended(self, batch);
    }

    fn touches_cancelled(&mut self, batch: &ContactBatch) {
        GestureManager::touches_cancelled(self, batch);
    }
}
