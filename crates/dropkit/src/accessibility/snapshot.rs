//! Derivation of accessibility attributes from selection state.
//!
//! [`AccessibilitySnapshot::derive`] is a pure function of a
//! [`SelectionModel`]: it computes the attributes assistive technologies
//! need for the trigger, the popup, and each option, without touching
//! any platform API. [`AccessibilitySnapshot::to_node_updates`] then
//! converts a snapshot into AccessKit nodes for hosts that push trees
//! to a platform adapter. Hosts with their own attribute plumbing (e.g.
//! a DOM renderer setting `aria-*`) can read the snapshot directly.

use accesskit::{Action, Node, NodeId};

use dropkit_core::logging::targets;

use crate::selection::SelectionModel;

use super::AccessibilityIds;
use super::role::AccessibleRole;

/// Attributes for the trigger element (the always-visible button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAttributes {
    /// The surface role. Always [`AccessibleRole::ComboBox`].
    pub role: AccessibleRole,
    /// The announced label. The selected item's label, or the
    /// controller's placeholder label when nothing is selected.
    pub label: String,
    /// Whether the popup is currently expanded.
    pub expanded: bool,
    /// Index of the option acting as the active descendant, when the
    /// popup is open and an option is highlighted.
    pub active_descendant: Option<usize>,
}

/// Attributes for the popup list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupAttributes {
    /// The surface role. Always [`AccessibleRole::List`].
    pub role: AccessibleRole,
    /// Whether the popup is visible.
    pub visible: bool,
}

/// Attributes for a single option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAttributes {
    /// The surface role. Always [`AccessibleRole::ListItem`].
    pub role: AccessibleRole,
    /// The option's announced label.
    pub label: String,
    /// Whether this option is the committed selection.
    pub selected: bool,
    /// Whether this option is the keyboard highlight.
    pub highlighted: bool,
    /// 1-based position within the option set.
    pub position_in_set: usize,
    /// Total size of the option set.
    pub set_size: usize,
}

/// A complete accessibility description of the controller's surfaces,
/// derived from selection state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilitySnapshot {
    /// Attributes for the trigger element.
    pub trigger: TriggerAttributes,
    /// Attributes for the popup list.
    pub popup: PopupAttributes,
    /// Attributes for each option, in list order.
    pub options: Vec<OptionAttributes>,
}

impl AccessibilitySnapshot {
    /// Derive a snapshot from the current selection state.
    ///
    /// `placeholder` is announced on the trigger when nothing is
    /// selected. `item_label` renders an item into its announced text.
    pub fn derive<T, F>(selection: &SelectionModel<T>, placeholder: &str, mut item_label: F) -> Self
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: FnMut(&T) -> String,
    {
        let open = selection.is_open();
        let highlighted = usize::try_from(selection.highlighted_index()).ok();

        let trigger_label = selection
            .selected_item()
            .map(&mut item_label)
            .unwrap_or_else(|| placeholder.to_string());

        let set_size = selection.len();
        let options = selection
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| OptionAttributes {
                role: AccessibleRole::ListItem,
                label: item_label(item),
                selected: selection.selected_item() == Some(item),
                highlighted: open && highlighted == Some(index),
                position_in_set: index + 1,
                set_size,
            })
            .collect();

        Self {
            trigger: TriggerAttributes {
                role: AccessibleRole::ComboBox,
                label: trigger_label,
                expanded: open,
                active_descendant: if open { highlighted } else { None },
            },
            popup: PopupAttributes {
                role: AccessibleRole::List,
                visible: open,
            },
            options,
        }
    }

    /// Convert the snapshot into AccessKit node updates.
    ///
    /// Returns `(id, node)` pairs for the trigger and, when the popup
    /// is visible, the popup and its options. The trigger node always
    /// comes first.
    pub fn to_node_updates(&self, ids: &AccessibilityIds) -> Vec<(NodeId, Node)> {
        let mut updates = Vec::with_capacity(2 + self.options.len());

        let mut trigger = Node::new(self.trigger.role.to_accesskit_role());
        trigger.set_label(self.trigger.label.clone());
        trigger.set_expanded(self.trigger.expanded);
        trigger.add_action(Action::Click);
        trigger.add_action(Action::Focus);
        if self.trigger.expanded {
            trigger.add_action(Action::Collapse);
        } else {
            trigger.add_action(Action::Expand);
        }
        if let Some(index) = self.trigger.active_descendant {
            trigger.set_active_descendant(ids.option(index));
        }
        if self.popup.visible {
            trigger.set_children(vec![ids.popup]);
        }
        updates.push((ids.trigger, trigger));

        if self.popup.visible {
            let mut popup = Node::new(self.popup.role.to_accesskit_role());
            popup.set_children(
                (0..self.options.len())
                    .map(|i| ids.option(i))
                    .collect::<Vec<_>>(),
            );
            updates.push((ids.popup, popup));

            for (index, option) in self.options.iter().enumerate() {
                let mut node = Node::new(option.role.to_accesskit_role());
                node.set_label(option.label.clone());
                node.set_selected(option.selected);
                node.set_position_in_set(option.position_in_set);
                node.set_size_of_set(option.set_size);
                node.add_action(Action::Click);
                updates.push((ids.option(index), node));
            }
        }

        tracing::trace!(
            target: targets::ACCESSIBILITY,
            node_count = updates.len(),
            expanded = self.trigger.expanded,
            "built node updates"
        );
        updates
    }
}
