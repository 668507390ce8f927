use crate::error::DataError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a fixed-size collection of samples; the engine treats it
/// purely as an opaque source of leaf-node inputs and target values. `Item`
/// is the type of a single sample, typically a (features, label) pair.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    /// Returns [`DataError::IndexOutOfBounds`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
