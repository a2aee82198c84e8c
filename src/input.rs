//! Input-state queries.
//!
//! The simulation only asks "is left held?" / "is right held?" through
//! `InputState`.  `KeyTracker` answers those questions from raw crossterm
//! key events; `Controls` is a plain snapshot for tests and replays.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

use crate::consts::HOLD_WINDOW;

pub trait InputState {
    fn left(&self) -> bool;
    fn right(&self) -> bool;
}

/// A fixed left/right snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

impl Controls {
    pub const NONE: Controls = Controls { left: false, right: false };
    pub const LEFT: Controls = Controls { left: true, right: false };
    pub const RIGHT: Controls = Controls { left: false, right: true };
    pub const BOTH: Controls = Controls { left: true, right: true };
}

impl InputState for Controls {
    fn left(&self) -> bool {
        self.left
    }

    fn right(&self) -> bool {
        self.right
    }
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Tracks which keys are currently held down.
///
/// Records the frame number of the last press/repeat event for every key.
/// Terminals speaking the keyboard-enhancement protocol report releases; once
/// the tracker knows releases arrive, a key stays held until its release.
/// Classic terminals only emit repeated presses while a key is down, so there
/// a key silently expires once no event has refreshed it for `HOLD_WINDOW`
/// frames.
#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    reports_releases: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker for a terminal known to send release events.
    pub fn with_release_events() -> Self {
        Self {
            reports_releases: true,
            ..Self::default()
        }
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    /// Advance to the next frame.  Call once per frame before feeding events.
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                if !self.reports_releases {
                    log::debug!("Terminal reports key releases; hold window disabled");
                    self.reports_releases = true;
                }
                self.key_frame.remove(&code);
            }
        }
    }

    /// Returns true if `key` is down: until its release when the terminal
    /// reports releases, otherwise while it was seen within the last
    /// `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: &KeyCode) -> bool {
        match self.key_frame.get(key) {
            Some(_) if self.reports_releases => true,
            Some(&last) => self.frame.saturating_sub(last) <= HOLD_WINDOW,
            None => false,
        }
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }
}

impl InputState for KeyTracker {
    fn left(&self) -> bool {
        self.any_held(&LEFT_KEYS)
    }

    fn right(&self) -> bool {
        self.any_held(&RIGHT_KEYS)
    }
}
