//! Integration tests for the single-touch gesture classifier

use std::cell::RefCell;
use std::rc::Rc;

use ar_runner::app::input::ContactHandler;
use ar_runner::gesture::{ContactBatch, GestureManager, GesturePhase, SingleTouchEvent, TouchMode};

fn recording_manager() -> (GestureManager, Rc<RefCell<Vec<SingleTouchEvent>>>) {
    let mut manager = GestureManager::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    manager.subscribe(move |event: &SingleTouchEvent| sink.borrow_mut().push(*event));
    (manager, events)
}

fn phases(events: &Rc<RefCell<Vec<SingleTouchEvent>>>) -> Vec<GesturePhase> {
    events.borrow().iter().map(|e| e.phase).collect()
}

fn active_manager() -> (GestureManager, Rc<RefCell<Vec<SingleTouchEvent>>>) {
    let (mut manager, events) = recording_manager();
    manager.touches_began(&ContactBatch::single([0.0, 0.0]));
    events.borrow_mut().clear();
    (manager, events)
}

#[test]
fn test_single_began_from_none_starts() {
    let (mut manager, events) = recording_manager();

    manager.touches_began(&ContactBatch::single([10.0, 20.0]));

    assert_eq!(
        *events.borrow(),
        vec![SingleTouchEvent::new(0, [10.0, 20.0], GesturePhase::Start)]
    );
    assert_eq!(manager.mode(), TouchMode::SingleTouchActive);
}

#[test]
fn test_began_twice_yields_start_then_cancelled() {
    let (mut manager, events) = recording_manager();

    manager.touches_began(&ContactBatch::single([10.0, 20.0]));
    manager.touches_began(&ContactBatch::single([11.0, 21.0]));

    assert_eq!(
        phases(&events),
        vec![GesturePhase::Start, GesturePhase::Cancelled]
    );
    assert_eq!(events.borrow()[1].position, [11.0, 21.0]);
    assert_eq!(manager.mode(), TouchMode::SingleTouchActive);
}

#[test]
fn test_began_then_ended_does_not_reset_mode() {
    let (mut manager, events) = recording_manager();

    manager.touches_began(&ContactBatch::single([10.0, 20.0]));
    manager.touches_ended(&ContactBatch::single([15.0, 25.0]));

    assert_eq!(phases(&events), vec![GesturePhase::Start, GesturePhase::End]);
    assert_eq!(events.borrow()[1].position, [15.0, 25.0]);
    assert_eq!(manager.mode(), TouchMode::SingleTouchActive);
}

#[test]
fn test_multi_contact_began_from_none_is_ignored() {
    let (mut manager, events) = recording_manager();

    let emitted = manager.touches_began(&ContactBatch::from_positions([[0.0, 0.0], [5.0, 5.0]]));

    assert!(emitted.is_none());
    assert!(events.borrow().is_empty());
    assert_eq!(manager.mode(), TouchMode::None);
}

#[test]
fn test_non_single_batches_never_emit_from_any_mode() {
    let sizes: [&[[f32; 2]]; 3] = [&[], &[[0.0, 0.0], [1.0, 1.0]], &[[0.0; 2]; 3]];

    for positions in sizes {
        let batch = ContactBatch::from_positions(positions.iter().copied());

        let (mut idle, idle_events) = recording_manager();
        idle.touches_began(&batch);
        idle.touches_ended(&batch);
        assert!(idle_events.borrow().is_empty());
        assert_eq!(idle.mode(), TouchMode::None);

        let (mut active, active_events) = active_manager();
        active.touches_began(&batch);
        active.touches_ended(&batch);
        assert!(active_events.borrow().is_empty());
        assert_eq!(active.mode(), TouchMode::SingleTouchActive);
    }
}

#[test]
fn test_moved_and_cancelled_are_silent_in_every_mode() {
    let batches = [
        ContactBatch::new(),
        ContactBatch::single([1.0, 1.0]),
        ContactBatch::from_positions([[1.0, 1.0], [2.0, 2.0]]),
    ];

    for batch in &batches {
        let (mut idle, idle_events) = recording_manager();
        assert!(idle.touches_moved(batch).is_none());
        assert!(idle.touches_cancelled(batch).is_none());
        assert!(idle_events.borrow().is_empty());
        assert_eq!(idle.mode(), TouchMode::None);

        let (mut active, active_events) = active_manager();
        assert!(active.touches_moved(batch).is_none());
        assert!(active.touches_cancelled(batch).is_none());
        assert!(active_events.borrow().is_empty());
        assert_eq!(active.mode(), TouchMode::SingleTouchActive);
    }
}

#[test]
fn test_transitions_without_listeners() {
    let mut manager = GestureManager::new();
    assert_eq!(manager.listener_count(), 0);

    let start = manager.touches_began(&ContactBatch::single([1.0, 2.0]));
    assert_eq!(start.map(|e| e.phase), Some(GesturePhase::Start));
    assert_eq!(manager.mode(), TouchMode::SingleTouchActive);

    let cancelled = manager.touches_began(&ContactBatch::single([1.0, 2.0]));
    assert_eq!(cancelled.map(|e| e.phase), Some(GesturePhase::Cancelled));

    let end = manager.touches_ended(&ContactBatch::single([1.0, 2.0]));
    assert_eq!(end.map(|e| e.phase), Some(GesturePhase::End));
    assert_eq!(manager.mode(), TouchMode::SingleTouchActive);
}

#[test]
fn test_every_event_uses_slot_zero() {
    let (mut manager, events) = recording_manager();
    manager.touches_began(&ContactBatch::single([1.0, 1.0]));
    manager.touches_began(&ContactBatch::single([2.0, 2.0]));
    manager.touches_ended(&ContactBatch::single([3.0, 3.0]));

    assert!(events.borrow().iter().all(|e| e.slot == 0));
}

#[test]
fn test_listeners_called_in_registration_order() {
    let mut manager = GestureManager::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in 0..3 {
        let order = Rc::clone(&order);
        manager.subscribe(move |_: &SingleTouchEvent| order.borrow_mut().push(tag));
    }

    manager.touches_began(&ContactBatch::single([0.0, 0.0]));
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_driven_through_contact_handler_trait() {
    let (mut manager, events) = recording_manager();
    let handler: &mut dyn ContactHandler = &mut manager;

    handler.touches_began(&ContactBatch::single([4.0, 4.0]));
    handler.touches_moved(&ContactBatch::single([5.0, 5.0]));
    handler.touches_ended(&ContactBatch::single([6.0, 6.0]));
    assert_eq!(handler.name(), "gesture");

    assert_eq!(phases(&events), vec![GesturePhase::Start, GesturePhase::End]);
}
