//! Maps terminal events to store actions according to the active mode.

use super::render;
use crate::core::{InputEvent, Key};
use crate::kernel::{Action, AppState, EntryKind, InputAction, ListAction, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::layout::Rect;

pub(super) fn action_for(state: &AppState, event: &InputEvent) -> Option<Action> {
    match event {
        InputEvent::Key(key) => key_action(state, key),
        InputEvent::Resize(width, height) => {
            let body = render::screen_layout(Rect::new(0, 0, *width, *height)).body;
            Some(Action::Resize {
                width: body.width,
                height: body.height,
            })
        }
        InputEvent::Paste(text) => match state.mode {
            Mode::EnteringNoteTitle | Mode::EnteringBookmarkUrl if state.error.is_none() => {
                Some(Action::Input(InputAction::Paste(text.clone())))
            }
            _ => None,
        },
        InputEvent::Mouse(mouse) => {
            if state.mode != Mode::Browsing || state.error.is_some() {
                return None;
            }
            match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::List(ListAction::Up)),
                MouseEventKind::ScrollDown => Some(Action::List(ListAction::Down)),
                _ => None,
            }
        }
        InputEvent::FocusGained | InputEvent::FocusLost => None,
    }
}

fn key_action(state: &AppState, event: &KeyEvent) -> Option<Action> {
    let key = Key::from(*event);
    if key == Key::ctrl(KeyCode::Char('c')) {
        return Some(Action::Quit);
    }

    if state.error.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(Action::DismissError),
            _ => None,
        };
    }

    match state.mode {
        Mode::Browsing if state.list.is_filtering() => filter_key(key, event),
        Mode::Browsing => browse_key(state, key),
        Mode::EnteringNoteTitle | Mode::EnteringBookmarkUrl => entry_key(key, event),
    }
}

fn browse_key(state: &AppState, key: Key) -> Option<Action> {
    if key.modifiers == KeyModifiers::SHIFT {
        return match key.code {
            KeyCode::Char('g') => Some(Action::List(ListAction::End)),
            KeyCode::Char('/') => Some(Action::List(ListAction::StartFilter)),
            _ => None,
        };
    }
    if key.modifiers != KeyModifiers::NONE {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('a') => Action::BeginEntry(EntryKind::Note),
        KeyCode::Char('b') => Action::BeginEntry(EntryKind::Bookmark),
        KeyCode::Char('e') => Action::EditSelected,
        KeyCode::Char('v') => Action::ViewSelected,
        KeyCode::Char('/') => Action::List(ListAction::StartFilter),
        KeyCode::Esc if state.list.query().is_empty() => return None,
        KeyCode::Esc => Action::List(ListAction::ClearFilter),
        KeyCode::Up | KeyCode::Char('k') => Action::List(ListAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::List(ListAction::Down),
        KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => Action::List(ListAction::PageUp),
        KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => {
            Action::List(ListAction::PageDown)
        }
        KeyCode::Home | KeyCode::Char('g') => Action::List(ListAction::Home),
        KeyCode::End => Action::List(ListAction::End),
        _ => return None,
    };
    Some(action)
}

fn filter_key(key: Key, event: &KeyEvent) -> Option<Action> {
    let action = match event.code {
        KeyCode::Esc => ListAction::ClearFilter,
        KeyCode::Enter => ListAction::AcceptFilter,
        KeyCode::Backspace => ListAction::FilterBackspace,
        KeyCode::Up => ListAction::Up,
        KeyCode::Down => ListAction::Down,
        KeyCode::Char(ch) if is_text(key) => ListAction::FilterInput(ch),
        _ => return None,
    };
    Some(Action::List(action))
}

fn entry_key(key: Key, event: &KeyEvent) -> Option<Action> {
    if key == Key::ctrl(KeyCode::Char('a')) {
        return Some(Action::Input(InputAction::Home));
    }
    if key == Key::ctrl(KeyCode::Char('e')) {
        return Some(Action::Input(InputAction::End));
    }
    if key == Key::ctrl(KeyCode::Char('u')) {
        return Some(Action::Input(InputAction::ClearToStart));
    }

    let action = match event.code {
        KeyCode::Esc => return Some(Action::CancelEntry),
        KeyCode::Enter => return Some(Action::CommitEntry),
        KeyCode::Backspace => InputAction::Backspace,
        KeyCode::Delete => InputAction::Delete,
        KeyCode::Left => InputAction::Left,
        KeyCode::Right => InputAction::Right,
        KeyCode::Home => InputAction::Home,
        KeyCode::End => InputAction::End,
        // Raw code keeps the typed case.
        KeyCode::Char(ch) if is_text(key) => InputAction::Insert(ch),
        _ => return None,
    };
    Some(Action::Input(action))
}

fn is_text(key: Key) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
