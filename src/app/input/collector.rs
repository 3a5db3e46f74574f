//! Contact collection from winit events

use tracing::trace;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use super::handler::ContactHandler;
use crate::app::config::InputConfig;
use crate::gesture::{Contact, ContactBatch};

/// Phase of a host contact report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl From<TouchPhase> for ContactPhase {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Started => Self::Began,
            TouchPhase::Moved => Self::Moved,
            TouchPhase::Ended => Self::Ended,
            TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

/// Contact id used for the mouse-emulated touch
pub const MOUSE_CONTACT_ID: u64 = u64::MAX;

/// A contact report waiting for dispatch
#[derive(Debug, Clone, Copy)]
struct PendingContact {
    phase: ContactPhase,
    /// Host touch id, stable while the finger stays down
    id: u64,
    contact: Contact,
}

/// Collects touch contacts from winit events and hands them to a
/// [`ContactHandler`] as batches
pub struct TouchCollector {
    scale_factor: f32,
    emulate_touch_with_mouse: bool,
    coalesce_contacts: bool,
    /// Last cursor position in logical pixels
    cursor_pos: Option<[f32; 2]>,
    /// Whether the emulated contact is currently down
    mouse_contact_down: bool,
    /// Contacts received since the last dispatch, in arrival order
    pending: Vec<PendingContact>,
}

impl TouchCollector {
    /// Creates a collector from input configuration
    pub fn new(config: &InputConfig) -> Self {
        Self {
            scale_factor: 1.0,
            emulate_touch_with_mouse: config.emulate_touch_with_mouse,
            coalesce_contacts: config.coalesce_contacts,
            cursor_pos: None,
            mouse_contact_down: false,
            pending: Vec::new(),
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Touch(touch) => {
                let pos = self.to_logical(touch.location.x, touch.location.y);
                self.push(touch.phase.into(), touch.id, pos);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_logical(position.x, position.y);
                self.cursor_moved(pos);
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.mouse_pressed(),
                ElementState::Released => self.mouse_released(),
            },

            WindowEvent::CursorLeft { .. } => self.cursor_left(),

            _ => {}
        }
    }

    /// Track the cursor; moves the emulated contact while it is down
    pub fn cursor_moved(&mut self, pos: [f32; 2]) {
        self.cursor_pos = Some(pos);
        if self.emulate_touch_with_mouse && self.mouse_contact_down {
            self.push(ContactPhase::Moved, MOUSE_CONTACT_ID, pos);
        }
    }

    /// Left button pressed; begins the emulated contact
    pub fn mouse_pressed(&mut self) {
        if !self.emulate_touch_with_mouse || self.mouse_contact_down {
            return;
        }
        if let Some(pos) = self.cursor_pos {
            self.mouse_contact_down = true;
            self.push(ContactPhase::Began, MOUSE_CONTACT_ID, pos);
        }
    }

    /// Left button released; ends the emulated contact
    pub fn mouse_released(&mut self) {
        if !self.mouse_contact_down {
            return;
        }
        self.mouse_contact_down = false;
        if let Some(pos) = self.cursor_pos {
            self.push(ContactPhase::Ended, MOUSE_CONTACT_ID, pos);
        }
    }

    /// Cursor left the window; cancels the emulated contact
    pub fn cursor_left(&mut self) {
        if self.mouse_contact_down {
            self.mouse_contact_down = false;
            if let Some(pos) = self.cursor_pos {
                self.push(ContactPhase::Cancelled, MOUSE_CONTACT_ID, pos);
            }
        }
        self.cursor_pos = None;
    }

    /// Record a contact report directly
    pub fn push(&mut self, phase: ContactPhase, id: u64, position: [f32; 2]) {
        trace!(?phase, id, x = position[0], y = position[1], "Contact received");
        self.pending.push(PendingContact {
            phase,
            id,
            contact: Contact::new(position),
        });
    }

    /// Number of contacts waiting for dispatch
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Flush buffered contacts to the handler in arrival order
    ///
    /// With coalescing, consecutive reports of the same phase from distinct
    /// contacts form one batch; a phase change or a repeated id starts a new
    /// batch. Without it, each report is its own batch.
    pub fn dispatch(&mut self, handler: &mut dyn ContactHandler) {
        if self.pending.is_empty() {
            return;
        }

        let mut current: Option<(ContactPhase, Vec<u64>, ContactBatch)> = None;

        for pending in std::mem::take(&mut self.pending) {
            let extends = self.coalesce_contacts
                && matches!(
                    &current,
                    Some((phase, ids, _)) if *phase == pending.phase && !ids.contains(&pending.id)
                );

            if !extends && let Some((phase, _, batch)) = current.take() {
                deliver(handler, phase, &batch);
            }

            let (_, ids, batch) =
                current.get_or_insert_with(|| (pending.phase, Vec::new(), ContactBatch::new()));
            ids.push(pending.id);
            batch.push(pending.contact);
        }

        if let Some((phase, _, batch)) = current {
            deliver(handler, phase, &batch);
        }
    }

    fn to_logical(&self, x: f64, y: f64) -> [f32; 2] {
        [x as f32 / self.scale_factor, y as f32 / self.scale_factor]
    }
}

fn deliver(handler: &mut dyn ContactHandler, phase: ContactPhase, batch: &ContactBatch) {
    trace!(handler = handler.name(), ?phase, count = batch.len(), "Dispatching batch");
    match phase {
        ContactPhase::Began => handler.touches_began(batch),
        ContactPhase::Moved => handler.touches_moved(batch),
        ContactPhase::Ended => handler.touches_ended(batch),
        ContactPhase::Cancelled => handler.touches_cancelled(batch),
    }
}
