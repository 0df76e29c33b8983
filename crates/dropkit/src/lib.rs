//! dropkit - A headless selection-list controller.
//!
//! The controller owns the behavior of a dropdown/select widget (state,
//! keyboard navigation, accessibility attributes, async item loading)
//! while the host owns all rendering and platform focus. Any UI layer
//! that can forward input events and render from plain state can drive
//! it.
//!
//! # Example
//!
//! ```
//! use dropkit::SelectController;
//! use dropkit::event::{Key, KeyPressEvent, KeyboardModifiers};
//!
//! let mut controller = SelectController::with_items(vec!["Small", "Medium", "Large"]);
//! controller.toggle();
//!
//! let mut down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
//! controller.handle_key(&mut down);
//! let mut enter = KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE);
//! controller.handle_key(&mut enter);
//!
//! assert_eq!(controller.selected_item(), Some(&"Medium"));
//! ```

pub mod accessibility;
pub mod binder;
pub mod controller;
pub mod error;
pub mod event;
pub mod list_model;
pub mod selection;

mod keyboard;

pub use accessibility::{AccessibilityIds, AccessibilitySnapshot, AccessibleRole};
pub use binder::{AsyncState, BindingStatus, ItemsBinder};
pub use controller::SelectController;
pub use error::{FetchError, FetchResult};
pub use event::{Key, KeyPressEvent, KeyboardModifiers};
pub use list_model::{ListModel, VecListModel};
pub use selection::{NO_HIGHLIGHT, SelectionModel};

pub use dropkit_core::{ConnectionId, Signal};
