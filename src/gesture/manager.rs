//! Touch gesture classifier

use tracing::{debug, trace};

use super::contact::ContactBatch;
use super::event::{GesturePhase, SingleTouchEvent};
use super::listener::{ListenerId, ListenerRegistry, SingleTouchListener};

/// Slot index assigned to every emitted event
const SINGLE_TOUCH_SLOT: usize = 0;

/// Current touch tracking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchMode {
    /// No single-touch gesture in progress
    #[default]
    None,
    /// Exactly one contact is being tracked
    SingleTouchActive,
    /// Declared for completeness; the classifier never enters it
    DoubleTouch,
}

/// Classifies contact batches into a single-touch gesture stream
///
/// The mode leaves `None` on the first single-contact began batch and is
/// never reset by the classifier itself: an ended batch emits
/// [`GesturePhase::End`] but keeps the mode at
/// [`TouchMode::SingleTouchActive`], so every later single-contact began
/// batch is reported as [`GesturePhase::Cancelled`]. Construct a new
/// manager to start a fresh tracking session.
#[derive(Debug, Default)]
pub struct GestureManager {
    mode: TouchMode,
    listeners: ListenerRegistry,
}

impl GestureManager {
    /// Creates a classifier in [`TouchMode::None`] with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tracking mode
    pub fn mode(&self) -> TouchMode {
        self.mode
    }

    /// Registers a listener; listeners are notified in registration order
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: SingleTouchListener + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener, returning false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Handles contacts that began touching the surface
    ///
    /// Returns the emitted event, if any.
    pub fn touches_began(&mut self, batch: &ContactBatch) -> Option<SingleTouchEvent> {
        debug!(count = batch.len(), mode = ?self.mode, "Touches began");

        let contact = batch.sole()?;
        let phase = match self.mode {
            TouchMode::None => {
                self.mode = TouchMode::SingleTouchActive;
                GesturePhase::Start
            }
            TouchMode::SingleTouchActive => GesturePhase::Cancelled,
            TouchMode::DoubleTouch => return None,
        };

        Some(self.emit(contact.position, phase))
    }

    /// Handles contacts that moved; never emits
    pub fn touches_moved(&mut self, batch: &ContactBatch) -> Option<SingleTouchEvent> {
        trace!(count = batch.len(), "Touches moved");
        None
    }

    /// Handles contacts lifted from the surface
    ///
    /// The mode is left unchanged. Returns the emitted event, if any.
    pub fn touches_ended(&mut self, batch: &ContactBatch) -> Option<SingleTouchEvent> {
        debug!(count = batch.len(), mode = ?self.mode, "Touches ended");

        let contact = batch.sole()?;
        if self.mode != TouchMode::SingleTouchActive {
            return None;
        }

        Some(self.emit(contact.position, GesturePhase::End))
    }

    /// Handles contacts cancelled by the host; logged only
    pub fn touches_cancelled(&mut self, batch: &ContactBatch) -> Option<SingleTouchEvent> {
        debug!(count = batch.len(), "Touches cancelled");
        None
    }

    fn emit(&mut self, position: [f32; 2], phase: GesturePhase) -> SingleTouchEvent {
        let event = SingleTouchEvent::new(SINGLE_TOUCH_SLOT, position, phase);
        trace!(?event, listeners = self.listeners.len(), "Emitting single touch");
        self.listeners.notify(&event);
        event
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording(manager: &mut GestureManager) -> Rc<RefCell<Vec<SingleTouchEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        manager.subscribe(move |event: &SingleTouchEvent| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_first_began_starts_gesture() {
        let mut manager = GestureManager::new();
        let events = recording(&mut manager);

        let emitted = manager.touches_began(&ContactBatch::single([10.0, 20.0]));

        let expected = SingleTouchEvent::new(0, [10.0, 20.0], GesturePhase::Start);
        assert_eq!(emitted, Some(expected));
        assert_eq!(*events.borrow(), vec![expected]);
        assert_eq!(manager.mode(), TouchMode::SingleTouchActive);
    }

    #[test]
    fn test_second_began_cancels_without_changing_mode() {
        let mut manager = GestureManager::new();
        manager.touches_began(&ContactBatch::single([0.0, 0.0]));

        let emitted = manager.touches_began(&ContactBatch::single([5.0, 6.0]));

        assert_eq!(
            emitted,
            Some(SingleTouchEvent::new(0, [5.0, 6.0], GesturePhase::Cancelled))
        );
        assert_eq!(manager.mode(), TouchMode::SingleTouchActive);
    }

    #[test]
    fn test_end_keeps_mode_active() {
        let mut manager = GestureManager::new();
        manager.touches_began(&ContactBatch::single([0.0, 0.0]));

        let emitted = manager.touches_ended(&ContactBatch::single([7.0, 8.0]));

        assert_eq!(
            emitted,
            Some(SingleTouchEvent::new(0, [7.0, 8.0], GesturePhase::End))
        );
        assert_eq!(manager.mode(), TouchMode::SingleTouchActive);

        // Mode was not reset, so the next tap is reported as a cancellation
        let next = manager.touches_began(&ContactBatch::single([1.0, 1.0]));
        assert_eq!(next.map(|e| e.phase), Some(GesturePhase::Cancelled));
    }

    #[test]
    fn test_ended_without_active_gesture_is_ignored() {
        let mut manager = GestureManager::new();
        let events = recording(&mut manager);

        assert!(
            manager
                .touches_ended(&ContactBatch::single([1.0, 1.0]))
                .is_none()
        );
        assert!(events.borrow().is_empty());
        assert_eq!(manager.mode(), TouchMode::None);
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let mut manager = GestureManager::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = manager.subscribe(move |event: &SingleTouchEvent| sink.borrow_mut().push(*event));

        manager.touches_began(&ContactBatch::single([0.0, 0.0]));
        assert!(manager.unsubscribe(id));
        manager.touches_ended(&ContactBatch::single([0.0, 0.0]));

        assert_eq!(events.borrow().len(), 1);
        assert_eq!(manager.listener_count(), 0);
    }
}
