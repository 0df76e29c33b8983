//! The headless selection controller.
//!
//! [`SelectController`] is the façade a presentation layer talks to. It
//! composes the selection state machine, keyboard handling, async item
//! loading, and accessibility derivation behind one type, so a host
//! only forwards input events and renders from the controller's state
//! and signals.
//!
//! The controller is headless: it owns no rendering, no focus, and no
//! timers. Pointer interactions reach it as direct method calls
//! ([`toggle`](SelectController::toggle) for a trigger click,
//! [`select_item`](SelectController::select_item) for an option click)
//! and keyboard input as [`KeyPressEvent`]s through
//! [`handle_key`](SelectController::handle_key).
//!
//! # Example
//!
//! ```
//! use dropkit::controller::SelectController;
//! use dropkit::event::{Key, KeyPressEvent, KeyboardModifiers};
//!
//! let mut controller = SelectController::with_items(vec!["Apple", "Orange", "Banana"]);
//!
//! // Trigger click opens the list.
//! controller.toggle();
//! assert!(controller.is_open());
//!
//! // Arrow down, then Enter commits the highlighted item.
//! let mut down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
//! controller.handle_key(&mut down);
//! let mut enter = KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE);
//! controller.handle_key(&mut enter);
//!
//! assert_eq!(controller.selected_item(), Some(&"Orange"));
//! assert!(!controller.is_open());
//! ```

use std::fmt;
use std::future::Future;

use accesskit::{Node, NodeId};

use dropkit_core::Signal;
use dropkit_core::logging::targets;

use crate::accessibility::{AccessibilityIds, AccessibilitySnapshot};
use crate::binder::{AsyncState, BindingStatus, ItemsBinder};
use crate::error::FetchResult;
use crate::event::KeyPressEvent;
use crate::keyboard::{self, KeyAction};
use crate::list_model::ListModel;
use crate::selection::SelectionModel;

/// Headless controller for a dropdown-style selection list.
pub struct SelectController<T: Clone + PartialEq + Send + Sync + 'static> {
    selection: SelectionModel<T>,
    binder: ItemsBinder<T>,
    ids: AccessibilityIds,

    /// Emitted when the list is dismissed via Escape. The host should
    /// return keyboard focus to the trigger element.
    pub focus_release_requested: Signal<()>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Default for SelectController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> SelectController<T> {
    /// Create a controller with no items.
    pub fn new() -> Self {
        Self {
            selection: SelectionModel::new(),
            binder: ItemsBinder::new(),
            ids: AccessibilityIds::default(),
            focus_release_requested: Signal::new(),
        }
    }

    /// Create a controller with a static item list.
    pub fn with_items(items: Vec<T>) -> Self {
        let mut this = Self::new();
        this.selection = SelectionModel::with_items(items);
        this
    }

    /// Use custom accessibility node ids, for hosts embedding several
    /// controllers in one tree.
    pub fn with_accessibility_ids(mut self, ids: AccessibilityIds) -> Self {
        self.ids = ids;
        self
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// The selection state machine, for connecting to its signals.
    pub fn selection(&self) -> &SelectionModel<T> {
        &self.selection
    }

    /// The items binder, for connecting to its status signal.
    pub fn binder(&self) -> &ItemsBinder<T> {
        &self.binder
    }

    /// Check if the list is open.
    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    /// Get the highlighted index (negative sentinel if none).
    pub fn highlighted_index(&self) -> i32 {
        self.selection.highlighted_index()
    }

    /// Get the committed selection.
    pub fn selected_item(&self) -> Option<&T> {
        self.selection.selected_item()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Check whether the item list is empty.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Get the item at an index.
    pub fn item(&self, index: usize) -> Option<T> {
        self.selection.item(index)
    }

    /// Collect all items into a vector.
    pub fn items(&self) -> Vec<T> {
        self.selection.items()
    }

    /// Get the binding status of the async item source.
    pub fn binding_status(&self) -> BindingStatus {
        self.binder.status()
    }

    /// Get the full async state of the item source, with its payload.
    pub fn async_state(&self) -> &AsyncState<T> {
        self.binder.state()
    }

    // =========================================================================
    // Pointer Interaction
    // =========================================================================

    /// Toggle the list open or closed (trigger click).
    pub fn toggle(&mut self) {
        self.selection.toggle();
    }

    /// Open the list.
    pub fn open(&mut self) {
        self.selection.open();
    }

    /// Close the list.
    pub fn close(&mut self) {
        self.selection.close();
    }

    /// Commit an item as the selection and close (option click).
    ///
    /// An item not in the current list is ignored.
    pub fn select_item(&mut self, item: &T) {
        self.selection.select_item(item);
    }

    // =========================================================================
    // Keyboard Interaction
    // =========================================================================

    /// Process a key press.
    ///
    /// Returns `true` if the key was handled, in which case the event
    /// has been accepted and the host should suppress its platform
    /// default. When Escape dismisses the list,
    /// [`focus_release_requested`](Self::focus_release_requested) is
    /// emitted so the host can restore focus to the trigger.
    pub fn handle_key(&mut self, event: &mut KeyPressEvent) -> bool {
        let action = keyboard::process(&mut self.selection, event);
        if action == KeyAction::Dismissed {
            tracing::debug!(target: targets::KEYBOARD, "dismissed, requesting focus release");
            self.focus_release_requested.emit(());
        }
        action != KeyAction::Ignored
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Replace the item list synchronously.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.selection.set_items(items);
    }

    /// Replace the item source with a custom model.
    pub fn set_model(&mut self, model: Box<dyn ListModel<T>>) {
        self.selection.set_model(model);
    }

    /// Start an asynchronous item fetch, superseding any in flight.
    ///
    /// The items are installed once the fetch completes and the host
    /// calls [`pump`](Self::pump) or [`settle`](Self::settle). A failed
    /// fetch leaves the current items untouched.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime context.
    pub fn reload<F>(&mut self, fetch: F)
    where
        F: Future<Output = FetchResult<Vec<T>>> + Send + 'static,
    {
        self.binder.reload(fetch);
    }

    /// Apply any buffered fetch completions without blocking.
    ///
    /// Returns `true` if a completion was applied.
    pub fn pump(&mut self) -> bool {
        if self.binder.pump() {
            self.sync_items();
            true
        } else {
            false
        }
    }

    /// Await the in-flight fetch and apply its result.
    pub async fn settle(&mut self) {
        let was_loading = self.binder.is_loading();
        self.binder.settle().await;
        if was_loading {
            self.sync_items();
        }
    }

    fn sync_items(&mut self) {
        if let AsyncState::Success(items) = self.binder.state() {
            self.selection.set_items(items.clone());
        }
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// The node ids this controller uses in AccessKit updates.
    pub fn accessibility_ids(&self) -> AccessibilityIds {
        self.ids
    }

    /// Derive an accessibility snapshot with a custom item renderer.
    pub fn accessibility_snapshot_with<F>(
        &self,
        placeholder: &str,
        item_label: F,
    ) -> AccessibilitySnapshot
    where
        F: FnMut(&T) -> String,
    {
        AccessibilitySnapshot::derive(&self.selection, placeholder, item_label)
    }
}

impl<T: Clone + PartialEq + Send + Sync + fmt::Display + 'static> SelectController<T> {
    /// Derive an accessibility snapshot, rendering items with `Display`.
    pub fn accessibility_snapshot(&self, placeholder: &str) -> AccessibilitySnapshot {
        self.accessibility_snapshot_with(placeholder, |item| item.to_string())
    }

    /// Derive AccessKit node updates for the controller's surfaces.
    pub fn accessibility_updates(&self, placeholder: &str) -> Vec<(NodeId, Node)> {
        self.accessibility_snapshot(placeholder)
            .to_node_updates(&self.ids)
    }
}
