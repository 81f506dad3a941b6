//! Key handling: focus ring and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::CharClass;

/// Focusable widgets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Class(CharClass),
    Generate,
    Reset,
}

impl Focus {
    const RING: [Focus; 7] = [
        Focus::Length,
        Focus::Class(CharClass::Lower),
        Focus::Class(CharClass::Upper),
        Focus::Class(CharClass::Digits),
        Focus::Class(CharClass::Symbols),
        Focus::Generate,
        Focus::Reset,
    ];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::RING.len();
        Self::RING[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Prev,
    Toggle(CharClass),
    Type(char),
    Backspace,
    Submit,
    Reset,
    Copy,
    Dismiss,
    Nothing,
}

pub fn map_key(key: KeyEvent, focus: Focus, notice_open: bool) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Nothing;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    // The notice blocks everything else until dismissed.
    if notice_open {
        return Action::Dismiss;
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('g') => Action::Submit,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('y') => Action::Copy,
            _ => Action::Nothing,
        };
    }

    match (key.code, focus) {
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Tab | KeyCode::Down, _) => Action::Next,
        (KeyCode::BackTab | KeyCode::Up, _) => Action::Prev,

        (KeyCode::Enter, Focus::Length) => Action::Submit,
        (KeyCode::Char(c), Focus::Length) => Action::Type(c),
        (KeyCode::Backspace, Focus::Length) => Action::Backspace,

        (KeyCode::Enter | KeyCode::Char(' '), Focus::Class(class)) => Action::Toggle(class),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Generate) => Action::Submit,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Reset) => Action::Reset,

        _ => Action::Nothing,
    }
}
