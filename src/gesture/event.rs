//! Normalized single-touch gesture events

/// Lifecycle phase of a single-touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// A tracked touch began
    Start,
    /// The tracked touch was invalidated by another began report
    Cancelled,
    /// The tracked touch was lifted
    End,
}

/// Event emitted to single-touch listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleTouchEvent {
    /// Synthetic touch index; always 0 since only one touch is tracked
    pub slot: usize,
    /// Position in the reference view's local space
    pub position: [f32; 2],
    pub phase: GesturePhase,
}

impl SingleTouchEvent {
    pub fn new(slot: usize, position: [f32; 2], phase: GesturePhase) -> Self {
        Self {
            slot,
            position,
            phase,
        }
    }
}
