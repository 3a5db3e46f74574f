//! Touch gesture classification
//!
//! Converts raw per-instant contact batches into one normalized
//! single-touch gesture stream.
//!
//! ```text
//! Host callbacks (began/moved/ended/cancelled)
//!         ↓ ContactBatch
//!   GestureManager (TouchMode state)
//!         ↓ SingleTouchEvent
//!   SingleTouchListeners (registration order)
//! ```
//!
//! | Mode              | Callback | Batch size | Emits     | Next mode         |
//! |-------------------|----------|------------|-----------|-------------------|
//! | None              | began    | 1          | Start     | SingleTouchActive |
//! | SingleTouchActive | began    | 1          | Cancelled | SingleTouchActive |
//! | SingleTouchActive | ended    | 1          | End       | SingleTouchActive |
//! | any               | moved    | any        | nothing   | unchanged         |
//! | any               | cancelled| any        | nothing   | unchanged         |
//!
//! Batches with a size other than one never emit and never change the mode.

mod contact;
mod event;
mod listener;
mod manager;

pub use contact::{Contact, ContactBatch};
pub use event::{GesturePhase, SingleTouchEvent};
pub use listener::{ListenerId, ListenerRegistry, SingleTouchListener};
pub use manager::{GestureManager, TouchMode};
