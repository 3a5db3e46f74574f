//! Touch input adapter
//!
//! Turns winit window events into the four contact-batch callbacks consumed
//! by the gesture classifier.
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → TouchCollector → ContactBatch per phase
//!                                          ↓
//!                                   ContactHandler
//!                                   (GestureManager)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! // In window_event()
//! collector.handle_window_event(&event);
//!
//! // Once per event-loop iteration
//! collector.dispatch(&mut gestures);
//! ```

mod collector;
mod handler;

pub use collector::{ContactPhase, MOUSE_CONTACT_ID, TouchCollector};
pub use handler::ContactHandler;
