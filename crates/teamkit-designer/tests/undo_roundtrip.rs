//! Timed undo of deleted text elements, including the replacement race.

mod common;

use std::time::{Duration, Instant};
use teamkit_core::ViewSide;
use teamkit_designer::{DesignSession, UNDO_WINDOW};

fn session() -> DesignSession {
    DesignSession::new(common::catalog(), "basketball", "standard").unwrap()
}

#[test]
fn delete_then_undo_restores_order_and_content() {
    let mut session = session();
    let id = session.add_text_element("SPONSOR", ViewSide::Front);
    let before = session.state().text_elements.clone();
    let index = before.iter().position(|e| e.id == id).unwrap();

    let now = Instant::now();
    session.delete_text_element(&id, now);
    assert!(session.state().text_element(&id).is_none());

    assert!(session.undo_delete(now + Duration::from_millis(500)));
    assert_eq!(session.state().text_elements, before);
    assert_eq!(
        session.state().text_elements.iter().position(|e| e.id == id),
        Some(index)
    );
}

#[test]
fn undo_after_the_window_is_a_noop() {
    let mut session = session();
    let id = session.add_text_element("SPONSOR", ViewSide::Front);

    let now = Instant::now();
    session.delete_text_element(&id, now);
    assert!(!session.undo_delete(now + UNDO_WINDOW));
    assert!(session.state().text_element(&id).is_none());
}

#[test]
fn undo_with_empty_buffer_is_a_noop() {
    let mut session = session();
    assert!(!session.undo_delete(Instant::now()));
}

#[test]
fn second_delete_replaces_the_pending_capture() {
    let mut session = session();
    let first = session.add_text_element("FIRST", ViewSide::Front);
    let second = session.add_text_element("SECOND", ViewSide::Back);

    let now = Instant::now();
    session.delete_text_element(&first, now);
    session.delete_text_element(&second, now + Duration::from_millis(100));

    // Only the most recent deletion is recoverable.
    assert!(session.undo_delete(now + Duration::from_millis(200)));
    assert!(session.state().text_element(&second).is_some());
    assert!(session.state().text_element(&first).is_none());
    assert!(!session.undo_delete(now + Duration::from_millis(300)));
}

#[test]
fn reserved_elements_cannot_be_deleted() {
    let mut session = session();
    session.delete_text_element(teamkit_core::ids::FRONT_NUMBER, Instant::now());
    assert_eq!(session.state().text_elements.len(), 4);
}

#[test]
fn host_tick_expires_the_capture() {
    let mut session = session();
    let id = session.add_text_element("SPONSOR", ViewSide::Front);

    let now = Instant::now();
    session.delete_text_element(&id, now);
    assert!(!session.expire_undo(now + Duration::from_millis(2999)));
    assert!(session.expire_undo(now + UNDO_WINDOW));
    assert!(!session.undo_delete(now + Duration::from_millis(1)));
}
