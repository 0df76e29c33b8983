//! Selection state machine for dropdown-style controls.
//!
//! [`SelectionModel`] owns the open/closed state, the committed
//! selection, and the keyboard highlight for a selection list. Every
//! transition is total and synchronous: invalid indices are clamped
//! rather than rejected, so the model can never be driven into an
//! invariant-violating state regardless of call order.
//!
//! Highlight and committed selection are distinct concepts: the
//! highlight is the keyboard-focused candidate, the selection is what
//! the user committed with Enter or a click.
//!
//! # Signals
//!
//! - `opened_changed(bool)`: the list opened or closed
//! - `highlight_changed(i32)`: the highlighted index moved
//! - `selection_changed(Option<T>)`: the committed selection changed
//! - `items_reset(usize)`: the item list was replaced, with its new length
//!
//! Signals emit only on actual change, so repeated no-op transitions
//! (e.g. closing an already-closed list) are silent.
//!
//! # Example
//!
//! ```
//! use dropkit::selection::SelectionModel;
//!
//! let mut selection = SelectionModel::with_items(vec!["Apple", "Orange", "Banana"]);
//! selection.open();
//! selection.highlight_next();
//! selection.select_highlighted();
//!
//! assert_eq!(selection.selected_item(), Some(&"Orange"));
//! assert!(!selection.is_open());
//! ```

use dropkit_core::Signal;
use dropkit_core::logging::targets;

use crate::list_model::{ListModel, VecListModel};

/// Sentinel highlight index meaning "no item is highlighted".
pub const NO_HIGHLIGHT: i32 = -1;

/// Manages open/closed, highlight, and selection state for an item list.
pub struct SelectionModel<T: Clone + PartialEq + Send + Sync + 'static> {
    /// The item source.
    model: Box<dyn ListModel<T>>,

    /// Whether the list is open.
    open: bool,

    /// Highlighted index (`NO_HIGHLIGHT` means no highlight).
    highlighted: i32,

    /// The committed selection.
    selected: Option<T>,

    /// Emitted when the list opens or closes.
    pub opened_changed: Signal<bool>,

    /// Emitted when the highlighted index changes.
    pub highlight_changed: Signal<i32>,

    /// Emitted when the committed selection changes.
    pub selection_changed: Signal<Option<T>>,

    /// Emitted when the item list is replaced. Arg: new item count.
    pub items_reset: Signal<usize>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Default for SelectionModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> SelectionModel<T> {
    /// Create an empty, closed selection model.
    pub fn new() -> Self {
        Self {
            model: Box::new(VecListModel::empty()),
            open: false,
            highlighted: NO_HIGHLIGHT,
            selected: None,
            opened_changed: Signal::new(),
            highlight_changed: Signal::new(),
            selection_changed: Signal::new(),
            items_reset: Signal::new(),
        }
    }

    /// Create a closed selection model with the given items.
    pub fn with_items(items: Vec<T>) -> Self {
        let mut this = Self::new();
        this.model = Box::new(VecListModel::new(items));
        this
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Check if the list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Get the highlighted index (`NO_HIGHLIGHT` if none).
    pub fn highlighted_index(&self) -> i32 {
        self.highlighted
    }

    /// Get the committed selection.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Check whether the item list is empty.
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Get the item at an index.
    pub fn item(&self, index: usize) -> Option<T> {
        self.model.get(index)
    }

    /// Collect all items into a vector.
    pub fn items(&self) -> Vec<T> {
        self.model.items()
    }

    /// Get the currently highlighted item, if any.
    pub fn highlighted_item(&self) -> Option<T> {
        usize::try_from(self.highlighted)
            .ok()
            .and_then(|i| self.model.get(i))
    }

    // =========================================================================
    // Open / Close
    // =========================================================================

    /// Open the list. No-op if already open.
    ///
    /// If nothing is highlighted yet and items exist, the highlight is
    /// initialized to the first item.
    pub fn open(&mut self) {
        if self.open {
            return;
        }

        self.open = true;
        if self.highlighted == NO_HIGHLIGHT && !self.model.is_empty() {
            self.set_highlight(0);
        }

        tracing::debug!(target: targets::SELECTION, "list opened");
        self.opened_changed.emit(true);
    }

    /// Close the list. No-op if already closed.
    ///
    /// The highlight is kept so reopening resumes at the last position,
    /// unless a committed selection exists, in which case the highlight
    /// snaps to the selected item's index.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }

        self.open = false;
        if let Some(selected) = self.selected.clone()
            && let Some(index) = self.model.find(&selected)
        {
            self.set_highlight(index as i32);
        }

        tracing::debug!(target: targets::SELECTION, "list closed");
        self.opened_changed.emit(false);
    }

    /// Open the list if closed, close it if open.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // =========================================================================
    // Highlight Navigation
    // =========================================================================

    /// Advance the highlight by one, wrapping from the last item to the
    /// first. No-op if the item list is empty.
    pub fn highlight_next(&mut self) {
        let len = self.model.len();
        if len == 0 {
            return;
        }

        // From the sentinel, navigation enters the list at the top.
        let next = match usize::try_from(self.highlighted) {
            Ok(current) if current + 1 < len => (current + 1) as i32,
            Ok(_) => 0,
            Err(_) => 0,
        };
        self.set_highlight(next);
    }

    /// Retreat the highlight by one, wrapping from the first item to the
    /// last. No-op if the item list is empty.
    pub fn highlight_previous(&mut self) {
        let len = self.model.len();
        if len == 0 {
            return;
        }

        let previous = if self.highlighted <= 0 {
            (len - 1) as i32
        } else {
            self.highlighted - 1
        };
        self.set_highlight(previous);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Commit the highlighted item as the selection, then close.
    ///
    /// No-op if nothing is highlighted.
    pub fn select_highlighted(&mut self) {
        let Ok(index) = usize::try_from(self.highlighted) else {
            return;
        };

        if let Some(item) = self.model.get(index) {
            self.set_selected(Some(item));
        }
        self.close();
    }

    /// Commit an item as the selection directly (pointer-driven path),
    /// move the highlight to it, then close.
    ///
    /// An item absent from the current list is a contract violation and
    /// is treated as a no-op rather than a fault.
    pub fn select_item(&mut self, item: &T) {
        let Some(index) = self.model.find(item) else {
            tracing::debug!(target: targets::SELECTION, "select_item: item not in list, ignoring");
            return;
        };

        self.set_selected(Some(item.clone()));
        self.set_highlight(index as i32);
        self.close();
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Replace the item list.
    ///
    /// If the committed selection is no longer present it is cleared.
    /// The highlight is re-clamped into the new bounds (to the last item,
    /// or to the sentinel if the list is now empty).
    pub fn set_items(&mut self, items: Vec<T>) {
        self.set_model(Box::new(VecListModel::new(items)));
    }

    /// Replace the item source with a custom model.
    ///
    /// Same revalidation rules as [`set_items`](Self::set_items).
    pub fn set_model(&mut self, model: Box<dyn ListModel<T>>) {
        self.model = model;
        let len = self.model.len();

        if let Some(selected) = self.selected.clone()
            && self.model.find(&selected).is_none()
        {
            self.set_selected(None);
        }

        let clamped = if len == 0 {
            NO_HIGHLIGHT
        } else if self.highlighted >= len as i32 {
            (len - 1) as i32
        } else {
            self.highlighted
        };
        self.set_highlight(clamped);

        tracing::debug!(target: targets::SELECTION, item_count = len, "items reset");
        self.items_reset.emit(len);
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn set_highlight(&mut self, index: i32) {
        if self.highlighted != index {
            self.highlighted = index;
            tracing::trace!(target: targets::SELECTION, index, "highlight moved");
            self.highlight_changed.emit(index);
        }
    }

    fn set_selected(&mut self, item: Option<T>) {
        if self.selected != item {
            self.selected = item;
            self.selection_changed.emit(self.selected.clone());
        }
    }
}
