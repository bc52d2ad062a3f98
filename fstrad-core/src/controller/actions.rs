//! src/controller/actions.rs
//! ============================================================================
//! # Actions: what a key press means in the current mode
//!
//! Raw crossterm keys are translated once, here, into [`Action`]s. The state
//! machine only deals in actions and answers with at most one [`Command`] for
//! the dispatcher to run.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tasks::{rename_task::RenameJob, resolution_task::ResolutionJob};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    MoveSelectionUp,
    MoveSelectionDown,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,

    /// Navigate into the selected directory.
    EnterSelected,
    GoToParent,
    ReloadDirectory,

    /// Ask to rename the selected entry to its translation.
    RequestRename,

    StartFilter,
    FilterInput(char),
    FilterBackspace,
    AcceptFilter,
    ClearFilter,

    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
    ConfirmRename,
    CancelRename,

    Resize(u16, u16),
}

/// Side effects requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Resolve(Vec<ResolutionJob>),
    Rename(RenameJob),
}

/// Which key table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Browsing,
    Filtering,
    ConfirmingRename,
}

impl Action {
    pub fn from_key(key: KeyEvent, context: KeyContext) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }

        match context {
            KeyContext::Browsing => Self::browsing_key(key.code),
            KeyContext::Filtering => Self::filtering_key(key.code),
            KeyContext::ConfirmingRename => Self::rename_key(key.code),
        }
    }

    fn browsing_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::Char('q') => Self::Quit,

            KeyCode::Up | KeyCode::Char('k') => Self::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => Self::MoveSelectionDown,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Home | KeyCode::Char('g') => Self::SelectFirst,
            KeyCode::End | KeyCode::Char('G') => Self::SelectLast,

            KeyCode::Right | KeyCode::Char('l') => Self::EnterSelected,
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => Self::GoToParent,
            KeyCode::Char('r') | KeyCode::F(5) => Self::ReloadDirectory,

            KeyCode::Enter => Self::RequestRename,

            KeyCode::Char('/') => Self::StartFilter,
            KeyCode::Esc => Self::ClearFilter,

            _ => return None,
        };
        Some(action)
    }

    fn filtering_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::Char(c) => Self::FilterInput(c),
            KeyCode::Backspace => Self::FilterBackspace,
            KeyCode::Enter => Self::AcceptFilter,
            KeyCode::Esc => Self::ClearFilter,
            KeyCode::Up => Self::MoveSelectionUp,
            KeyCode::Down => Self::MoveSelectionDown,
            _ => return None,
        };
        Some(action)
    }

    fn rename_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::Enter => Self::ConfirmRename,
            KeyCode::Esc => Self::CancelRename,
            KeyCode::Char(c) => Self::InputChar(c),
            KeyCode::Backspace => Self::InputBackspace,
            KeyCode::Delete => Self::InputDelete,
            KeyCode::Left => Self::InputLeft,
            KeyCode::Right => Self::InputRight,
            KeyCode::Home => Self::InputHome,
            KeyCode::End => Self::InputEnd,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_only_while_browsing() {
        let q = press(KeyCode::Char('q'));
        assert_eq!(Action::from_key(q, KeyContext::Browsing), Some(Action::Quit));
        assert_eq!(
            Action::from_key(q, KeyContext::ConfirmingRename),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            Action::from_key(q, KeyContext::Filtering),
            Some(Action::FilterInput('q'))
        );
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for ctx in [
            KeyContext::Browsing,
            KeyContext::Filtering,
            KeyContext::ConfirmingRename,
        ] {
            assert_eq!(Action::from_key(ctrl_c, ctx), Some(Action::Quit));
        }
    }

    #[test]
    fn enter_means_rename_request_or_confirmation() {
        let enter = press(KeyCode::Enter);
        assert_eq!(
            Action::from_key(enter, KeyContext::Browsing),
            Some(Action::RequestRename)
        );
        assert_eq!(
            Action::from_key(enter, KeyContext::ConfirmingRename),
            Some(Action::ConfirmRename)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Down);
        key.kind = KeyEventKind::Release;
        assert_eq!(Action::from_key(key, KeyContext::Browsing), None);
    }
}
