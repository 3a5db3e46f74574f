//! Listener registry for single-touch events

use super::event::SingleTouchEvent;

/// Receives single-touch events from a [`GestureManager`](super::GestureManager)
///
/// Listeners are called synchronously from inside the classifier's input
/// callbacks and must not feed contacts back into the classifier while
/// handling an event. The classifier is borrowed mutably for the whole
/// dispatch, so this cannot happen without interior mutability tricks.
pub trait SingleTouchListener {
    fn on_single_touch(&mut self, event: &SingleTouchEvent);
}

impl<F> SingleTouchListener for F
where
    F: FnMut(&SingleTouchEvent),
{
    fn on_single_touch(&mut self, event: &SingleTouchEvent) {
        self(event)
    }
}

/// Handle returned by [`ListenerRegistry::add`], used to remove the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered collection of listeners
///
/// Listeners are notified in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Box<dyn SingleTouchListener>)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener at the end of the notification order
    pub fn add(&mut self, listener: Box<dyn SingleTouchListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener, returning false if the handle is unknown
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Delivers an event to every listener
    pub fn notify(&mut self, event: &SingleTouchEvent) {
        for (_, listener) in &mut self.listeners {
            listener.on_single_touch(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
