//! Input snapshot and the key-hold tracker that produces it.
//!
//! Classic terminals only report presses (OS key-repeat shows up as repeated
//! presses), while keyboard-enhancement terminals also report releases.  The
//! tracker records the frame each key was last seen and treats a key as held
//! while that frame is recent enough, so both kinds of terminal give the
//! simulation the same boolean snapshot.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  The OS repeat rate (≥ 15 Hz) refreshes it before it expires.
pub const HOLD_WINDOW: u64 = 4;

/// Movement intents for one tick.  Read-only to the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub run: bool,
}

/// One-shot actions handled by the frame loop rather than the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    TogglePause,
    Restart,
    ToggleDebug,
    Quit,
}

#[derive(Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    shift_frame: Option<u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event seen during `frame`, returning a one-shot command
    /// if the event was a fresh press of a command key.
    pub fn handle(&mut self, event: KeyEvent, frame: u64) -> Option<Command> {
        let KeyEvent {
            code,
            kind,
            modifiers,
            ..
        } = event;

        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(normalize(code), frame);
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.shift_frame = Some(frame);
                }
                command_for(code, modifiers)
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(normalize(code), frame);
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.shift_frame = Some(frame);
                }
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&normalize(code));
                None
            }
        }
    }

    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| fresh(last, frame))
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(*k, frame))
    }

    /// The movement snapshot for `frame`.
    pub fn snapshot(&self, frame: u64) -> InputState {
        InputState {
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a')], frame),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d')], frame),
            jump: self.any_held(
                &[KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('w')],
                frame,
            ),
            run: self.any_held(&[KeyCode::Char('x'), KeyCode::Char('k')], frame)
                || self.shift_frame.map(|f| fresh(f, frame)).unwrap_or(false),
        }
    }

    /// Forget everything, e.g. after a restart so a held jump doesn't carry over.
    pub fn clear(&mut self) {
        self.key_frame.clear();
        self.shift_frame = None;
    }
}

fn fresh(last: u64, frame: u64) -> bool {
    frame.saturating_sub(last) <= HOLD_WINDOW
}

/// Letters are tracked lower-case so Shift+D still means "right".
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match normalize(code) {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::F(3) => Some(Command::ToggleDebug),
        _ => None,
    }
}
