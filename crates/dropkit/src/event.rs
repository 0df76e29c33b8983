//! Key event types for the controller's keyboard entry point.
//!
//! The presentation layer translates its platform's raw key input into a
//! [`KeyPressEvent`] and forwards it to the controller. After the
//! controller processes the event, [`KeyPressEvent::is_accepted`] tells
//! the presentation layer whether to suppress the platform's default
//! action for that key (e.g. page scroll on arrow keys). Unhandled keys
//! are left unaccepted and pass through untouched.

/// Keyboard modifiers that may be held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Keyboard key codes.
///
/// This enum represents the logical keys the controller can react to,
/// following the structure of web KeyboardEvent.code values. Keys the
/// controller never handles can be forwarded as [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    /// Unknown/unmapped key, carrying the platform scan code.
    Unknown(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }
}

/// Base data shared by events.
#[derive(Debug, Clone, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base (unaccepted).
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Mark the event as accepted (handled).
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as not accepted (pass through).
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event, forwarded to the controller by the presentation layer.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base.is_accepted()
    }

    /// Mark the event as accepted, suppressing the platform default.
    pub fn accept(&mut self) {
        self.base.accept();
    }

    /// Mark the event as not accepted.
    pub fn ignore(&mut self) {
        self.base.ignore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_starts_unaccepted() {
        let event = KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE);
        assert!(!event.is_accepted());
        assert!(!event.is_repeat);
    }

    #[test]
    fn test_accept_and_ignore() {
        let mut event = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_key_is_navigation() {
        assert!(Key::ArrowDown.is_navigation());
        assert!(Key::Home.is_navigation());
        assert!(!Key::Enter.is_navigation());
        assert!(!Key::Unknown(65).is_navigation());
    }

    #[test]
    fn test_modifiers() {
        assert!(KeyboardModifiers::NONE.none());
        let shifted = KeyboardModifiers {
            shift: true,
            ..KeyboardModifiers::NONE
        };
        assert!(shifted.any());
    }
}
