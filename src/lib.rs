//! AR Runner touch front end
//!
//! Touch gesture classification and the overlay model for an
//! augmented-reality car/runner demo, with a winit desktop host.

/// Desktop host - windowing, touch input collection, demo flow
pub mod app;

/// Build-time information (git SHA, timestamp, target, etc.)
pub mod build_info;

/// Scripted replay of gesture scenarios
pub mod diagnostics;

/// Single-touch gesture classification
pub mod gesture;

/// Passive overlay scene description
pub mod overlay;
