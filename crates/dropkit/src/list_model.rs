//! Item list models for the selection state machine.
//!
//! The state machine reads its items through the [`ListModel`] trait, so
//! any data source can back a controller. [`VecListModel`] is the default
//! in-memory implementation and is what [`set_items`] installs.
//!
//! [`set_items`]: crate::selection::SelectionModel::set_items

/// Trait for providing items to a selection controller.
///
/// Implement this trait to back a controller with a custom data source.
/// Items are opaque to the controller; the only contract is the caller's
/// `PartialEq` implementation, which is used to locate items by value.
pub trait ListModel<T: Clone + PartialEq>: Send + Sync {
    /// Get the number of items in the model.
    fn len(&self) -> usize;

    /// Check whether the model has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the item at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<T>;

    /// Find the index of an item by equality.
    ///
    /// Returns the first matching index, or `None` if not found.
    fn find(&self, item: &T) -> Option<usize> {
        (0..self.len()).find(|&i| self.get(i).as_ref() == Some(item))
    }

    /// Collect all items into a vector.
    fn items(&self) -> Vec<T> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}

/// A simple list model backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct VecListModel<T> {
    items: Vec<T>,
}

impl<T: Clone + PartialEq> VecListModel<T> {
    /// Create a new model with the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Create an empty model.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Get a reference to the items.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Replace the items.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Add an item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone + PartialEq + Send + Sync> ListModel<T> for VecListModel<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }

    fn find(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    fn items(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone + PartialEq> From<Vec<T>> for VecListModel<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for VecListModel<String> {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for VecListModel<String> {
    fn from(items: [&str; N]) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_model_basics() {
        let model: VecListModel<String> = VecListModel::from(["a", "b", "c"]);
        assert_eq!(model.len(), 3);
        assert!(!model.is_empty());
        assert_eq!(model.get(1), Some("b".to_string()));
        assert_eq!(model.get(3), None);
        assert_eq!(model.find(&"c".to_string()), Some(2));
        assert_eq!(model.find(&"z".to_string()), None);
    }

    #[test]
    fn test_empty_model() {
        let model: VecListModel<i32> = VecListModel::empty();
        assert!(model.is_empty());
        assert_eq!(model.get(0), None);
    }

    #[test]
    fn test_mutation() {
        let mut model = VecListModel::new(vec![1, 2]);
        model.push(3);
        assert_eq!(model.as_slice(), &[1, 2, 3]);
        model.set_items(vec![9]);
        assert_eq!(model.len(), 1);
        model.clear();
        assert!(model.is_empty());
    }

    #[test]
    fn test_default_trait_methods() {
        // Exercise the trait defaults through a minimal custom model.
        struct Doubles(usize);
        impl ListModel<usize> for Doubles {
            fn len(&self) -> usize {
                self.0
            }
            fn get(&self, index: usize) -> Option<usize> {
                (index < self.0).then_some(index * 2)
            }
        }

        let model = Doubles(4);
        assert_eq!(model.items(), vec![0, 2, 4, 6]);
        assert_eq!(model.find(&4), Some(2));
        assert_eq!(model.find(&5), None);
    }
}
