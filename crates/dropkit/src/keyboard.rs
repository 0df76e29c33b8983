//! Keyboard navigation for the selection state machine.
//!
//! Translates [`KeyPressEvent`]s into transitions on a
//! [`SelectionModel`]. Handled keys are accepted on the event so the
//! presentation layer can suppress its platform default (arrow keys
//! scrolling the page, Space scrolling, Enter submitting a form).
//! Unhandled keys are left untouched and fall through.

use dropkit_core::logging::targets;

use crate::event::{Key, KeyPressEvent};
use crate::selection::SelectionModel;

/// What a key press did to the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    /// The list was opened.
    Opened,
    /// The highlighted item was committed (and the list closed).
    Selected,
    /// The highlight moved.
    HighlightMoved,
    /// The list was dismissed without selecting. The caller should
    /// return focus to the trigger element.
    Dismissed,
    /// The key was not handled.
    Ignored,
}

/// Apply a key press to the state machine.
///
/// Accepts the event for every handled key; leaves it untouched
/// otherwise. Key repeats are processed the same as initial presses so
/// holding an arrow key keeps cycling the highlight.
pub(crate) fn process<T: Clone + PartialEq + Send + Sync + 'static>(
    selection: &mut SelectionModel<T>,
    event: &mut KeyPressEvent,
) -> KeyAction {
    // Modified key chords (Ctrl+Enter etc.) belong to the host.
    if event.modifiers.any() {
        return KeyAction::Ignored;
    }

    let action = if selection.is_open() {
        process_open(selection, event.key)
    } else {
        process_closed(selection, event.key)
    };

    if action != KeyAction::Ignored {
        event.accept();
        tracing::trace!(target: targets::KEYBOARD, key = ?event.key, ?action, "key handled");
    }
    action
}

fn process_closed<T: Clone + PartialEq + Send + Sync + 'static>(
    selection: &mut SelectionModel<T>,
    key: Key,
) -> KeyAction {
    match key {
        Key::Enter | Key::Space => {
            selection.open();
            KeyAction::Opened
        }
        _ => KeyAction::Ignored,
    }
}

fn process_open<T: Clone + PartialEq + Send + Sync + 'static>(
    selection: &mut SelectionModel<T>,
    key: Key,
) -> KeyAction {
    match key {
        Key::Enter | Key::Space => {
            selection.select_highlighted();
            KeyAction::Selected
        }
        Key::ArrowDown => {
            selection.highlight_next();
            KeyAction::HighlightMoved
        }
        Key::ArrowUp => {
            selection.highlight_previous();
            KeyAction::HighlightMoved
        }
        Key::Escape => {
            selection.close();
            KeyAction::Dismissed
        }
        _ => KeyAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyboardModifiers;

    fn fruit() -> SelectionModel<String> {
        SelectionModel::with_items(vec![
            "Apple".to_string(),
            "Orange".to_string(),
            "Banana".to_string(),
        ])
    }

    fn press(selection: &mut SelectionModel<String>, key: Key) -> (KeyAction, bool) {
        let mut event = KeyPressEvent::new(key, KeyboardModifiers::NONE);
        let action = process(selection, &mut event);
        (action, event.is_accepted())
    }

    #[test]
    fn test_enter_opens_when_closed() {
        let mut selection = fruit();
        let (action, accepted) = press(&mut selection, Key::Enter);
        assert_eq!(action, KeyAction::Opened);
        assert!(accepted);
        assert!(selection.is_open());
        assert_eq!(selection.highlighted_index(), 0);
    }

    #[test]
    fn test_space_opens_when_closed() {
        let mut selection = fruit();
        let (action, _) = press(&mut selection, Key::Space);
        assert_eq!(action, KeyAction::Opened);
        assert!(selection.is_open());
    }

    #[test]
    fn test_arrows_ignored_when_closed() {
        let mut selection = fruit();
        let (action, accepted) = press(&mut selection, Key::ArrowDown);
        assert_eq!(action, KeyAction::Ignored);
        assert!(!accepted);
        assert!(!selection.is_open());
    }

    #[test]
    fn test_arrow_navigation_when_open() {
        let mut selection = fruit();
        selection.open();

        let (action, accepted) = press(&mut selection, Key::ArrowDown);
        assert_eq!(action, KeyAction::HighlightMoved);
        assert!(accepted);
        assert_eq!(selection.highlighted_index(), 1);

        press(&mut selection, Key::ArrowUp);
        assert_eq!(selection.highlighted_index(), 0);

        // Wraps past the ends.
        press(&mut selection, Key::ArrowUp);
        assert_eq!(selection.highlighted_index(), 2);
    }

    #[test]
    fn test_enter_commits_when_open() {
        let mut selection = fruit();
        press(&mut selection, Key::Enter); // open
        press(&mut selection, Key::ArrowDown);
        let (action, _) = press(&mut selection, Key::Enter);

        assert_eq!(action, KeyAction::Selected);
        assert!(!selection.is_open());
        assert_eq!(selection.selected_item(), Some(&"Orange".to_string()));
    }

    #[test]
    fn test_escape_dismisses_without_selecting() {
        let mut selection = fruit();
        selection.open();
        press(&mut selection, Key::ArrowDown);

        let (action, accepted) = press(&mut selection, Key::Escape);
        assert_eq!(action, KeyAction::Dismissed);
        assert!(accepted);
        assert!(!selection.is_open());
        assert!(selection.selected_item().is_none());
    }

    #[test]
    fn test_escape_ignored_when_closed() {
        let mut selection = fruit();
        let (action, accepted) = press(&mut selection, Key::Escape);
        assert_eq!(action, KeyAction::Ignored);
        assert!(!accepted);
    }

    #[test]
    fn test_unhandled_key_falls_through() {
        let mut selection = fruit();
        selection.open();
        let (action, accepted) = press(&mut selection, Key::Tab);
        assert_eq!(action, KeyAction::Ignored);
        assert!(!accepted);
        assert!(selection.is_open());
    }

    #[test]
    fn test_modified_chords_fall_through() {
        let mut selection = fruit();
        let mut event = KeyPressEvent::new(
            Key::Enter,
            KeyboardModifiers {
                control: true,
                ..KeyboardModifiers::NONE
            },
        );
        let action = process(&mut selection, &mut event);
        assert_eq!(action, KeyAction::Ignored);
        assert!(!event.is_accepted());
        assert!(!selection.is_open());
    }

    #[test]
    fn test_enter_on_empty_open_list() {
        let mut selection: SelectionModel<String> = SelectionModel::new();
        selection.open();
        let (action, _) = press(&mut selection, Key::Enter);
        // Nothing highlighted: the commit is a no-op and the list
        // stays open.
        assert_eq!(action, KeyAction::Selected);
        assert!(selection.is_open());
        assert!(selection.selected_item().is_none());
    }
}
