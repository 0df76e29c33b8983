//! Accessibility roles for the controller's surfaces.

use accesskit::Role;

/// The accessibility role of a controller surface.
///
/// A simplified role set covering the three surfaces a selection list
/// exposes. Maps to the more comprehensive AccessKit `Role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic surface with no specific role.
    #[default]
    Unknown,

    /// The trigger element that opens the list.
    ComboBox,

    /// The popup list of options.
    List,

    /// An individual option within the list.
    ListItem,
}

impl AccessibleRole {
    /// Convert to AccessKit's Role enum.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::ComboBox => Role::ComboBox,
            AccessibleRole::List => Role::List,
            AccessibleRole::ListItem => Role::ListItem,
        }
    }
}
