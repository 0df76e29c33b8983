//! Accessibility support for the selection controller.
//!
//! This module derives the information assistive technologies need from
//! selection state, through [AccessKit](https://accesskit.dev/) types so
//! hosts can plug into platform adapters on Windows (UI Automation),
//! macOS (NSAccessibility), and Linux (AT-SPI).
//!
//! # Architecture
//!
//! - [`AccessibilitySnapshot`]: plain attribute derivation, a pure
//!   function of selection state
//! - [`AccessibleRole`]: the roles of the controller's three surfaces
//! - [`AccessibilityIds`]: stable node identifiers for the trigger,
//!   the popup, and each option
//!
//! # Example
//!
//! ```
//! use dropkit::accessibility::AccessibilitySnapshot;
//! use dropkit::selection::SelectionModel;
//!
//! let mut selection = SelectionModel::with_items(vec!["Red", "Green"]);
//! selection.open();
//!
//! let snapshot = AccessibilitySnapshot::derive(&selection, "Pick a color", |c| c.to_string());
//! assert!(snapshot.trigger.expanded);
//! assert_eq!(snapshot.trigger.active_descendant, Some(0));
//! ```

mod role;
mod snapshot;

pub use role::AccessibleRole;
pub use snapshot::{
    AccessibilitySnapshot, OptionAttributes, PopupAttributes, TriggerAttributes,
};

use accesskit::NodeId;

/// Stable AccessKit node identifiers for the controller's surfaces.
///
/// A controller owns three kinds of nodes: the trigger, the popup list,
/// and one node per option. Option ids are allocated contiguously from
/// a base so they stay stable across item resets of the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityIds {
    /// Node id of the trigger element.
    pub trigger: NodeId,
    /// Node id of the popup list.
    pub popup: NodeId,
    /// First option node id; option `i` gets `option_base + i`.
    pub option_base: u64,
}

impl Default for AccessibilityIds {
    fn default() -> Self {
        Self {
            trigger: NodeId(1),
            popup: NodeId(2),
            option_base: 3,
        }
    }
}

impl AccessibilityIds {
    /// Ids rooted at an offset, for hosts embedding several controllers
    /// in one accessibility tree.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            trigger: NodeId(offset + 1),
            popup: NodeId(offset + 2),
            option_base: offset + 3,
        }
    }

    /// Node id for the option at `index`.
    pub fn option(&self, index: usize) -> NodeId {
        NodeId(self.option_base + index as u64)
    }
}
