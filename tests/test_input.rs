use crossterm::event::{KeyCode, KeyEventKind};

use dodge_blocks::input::*;

#[test]
fn controls_snapshot() {
    assert!(Controls::LEFT.left() && !Controls::LEFT.right());
    assert!(Controls::RIGHT.right() && !Controls::RIGHT.left());
    assert!(Controls::BOTH.left() && Controls::BOTH.right());
    assert_eq!(Controls::default(), Controls::NONE);
}

#[test]
fn fresh_tracker_holds_nothing() {
    let keys = KeyTracker::new();
    assert!(!keys.left());
    assert!(!keys.right());
}

#[test]
fn press_marks_key_held() {
    let mut keys = KeyTracker::new();
    keys.next_frame();
    keys.record(KeyCode::Left, KeyEventKind::Press);
    assert!(keys.left());
    assert!(!keys.right());
}

#[test]
fn alternate_bindings_count() {
    for code in [KeyCode::Char('a'), KeyCode::Char('A')] {
        let mut keys = KeyTracker::new();
        keys.record(code, KeyEventKind::Press);
        assert!(keys.left());
    }
    for code in [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')] {
        let mut keys = KeyTracker::new();
        keys.record(code, KeyEventKind::Press);
        assert!(keys.right());
    }
}

#[test]
fn held_key_expires_after_hold_window() {
    let mut keys = KeyTracker::new();
    keys.next_frame(); // frame 1
    keys.record(KeyCode::Right, KeyEventKind::Press);

    for _ in 0..4 {
        keys.next_frame();
    }
    assert!(keys.right()); // 4 frames of silence: still held

    keys.next_frame();
    assert!(!keys.right()); // 5 frames: expired
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new();
    keys.record(KeyCode::Left, KeyEventKind::Press);
    for _ in 0..3 {
        keys.next_frame();
    }
    keys.record(KeyCode::Left, KeyEventKind::Repeat);
    for _ in 0..4 {
        keys.next_frame();
    }
    assert!(keys.left());
}

#[test]
fn release_drops_key_immediately() {
    let mut keys = KeyTracker::new();
    keys.record(KeyCode::Left, KeyEventKind::Press);
    keys.record(KeyCode::Left, KeyEventKind::Release);
    assert!(!keys.left());
}

#[test]
fn releasing_one_binding_keeps_the_other() {
    let mut keys = KeyTracker::new();
    keys.record(KeyCode::Left, KeyEventKind::Press);
    keys.record(KeyCode::Char('a'), KeyEventKind::Press);
    keys.record(KeyCode::Left, KeyEventKind::Release);
    assert!(keys.left());
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut keys = KeyTracker::new();
    keys.record(KeyCode::Char(' '), KeyEventKind::Press);
    keys.record(KeyCode::Up, KeyEventKind::Press);
    assert!(keys.is_held(&KeyCode::Char(' ')));
    assert!(!keys.left());
    assert!(!keys.right());
}

#[test]
fn release_aware_tracker_holds_until_release() {
    let mut keys = KeyTracker::with_release_events();
    keys.next_frame();
    keys.record(KeyCode::Left, KeyEventKind::Press);

    let held_frames = (0..30)
        .filter(|_| {
            keys.next_frame();
            keys.left()
        })
        .count();
    assert_eq!(held_frames, 30);

    keys.record(KeyCode::Left, KeyEventKind::Release);
    assert!(!keys.left());
}

#[test]
fn first_release_switches_off_hold_window() {
    let mut keys = KeyTracker::new();
    assert!(!keys.reports_releases());

    keys.record(KeyCode::Char('x'), KeyEventKind::Press);
    keys.record(KeyCode::Char('x'), KeyEventKind::Release);
    assert!(keys.reports_releases());

    // A long initial key-repeat delay no longer drops the key
    keys.record(KeyCode::Right, KeyEventKind::Press);
    for _ in 0..30 {
        keys.next_frame();
    }
    assert!(keys.right());
}

#[test]
fn classic_tracker_still_expires() {
    let mut keys = KeyTracker::new();
    keys.record(KeyCode::Right, KeyEventKind::Press);
    for _ in 0..30 {
        keys.next_frame();
    }
    assert!(!keys.reports_releases());
    assert!(!keys.right());
}
