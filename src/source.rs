use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::WindowError;

/// Read-only indexed access to an ordered item sequence.
///
/// Implementations must be O(1) per call and must never filter or reorder: the sequence is
/// already filtered and sorted upstream.
///
/// Only `[T]` is implemented among std collections, so a `Vec<T>` is passed as
/// `vec.as_slice()`. That keeps `Vec::get` returning `Option` with this trait in scope.
pub trait ItemSource {
    type Item;

    fn len(&self) -> usize;

    /// Returns the item at `index`, or [`WindowError::IndexOutOfRange`] outside `[0, len)`.
    fn get(&self, index: usize) -> Result<&Self::Item, WindowError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ItemSource for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, WindowError> {
        <[T]>::get(self, index).ok_or(WindowError::IndexOutOfRange {
            index,
            len: <[T]>::len(self),
        })
    }
}

/// Thin wrapper over the sequence handed over by the upstream filter/sort collaborator.
///
/// Replacement is wholesale: [`Self::replace`] swaps the shared sequence in one step, so
/// `len()` always reflects the latest sequence and is never a stale cached value.
#[derive(Debug)]
pub struct ItemSourceAdapter<T> {
    items: Arc<[T]>,
}

impl<T> Clone for ItemSourceAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for ItemSourceAdapter<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::<T>::new()),
        }
    }
}

impl<T> ItemSourceAdapter<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Replaces the underlying sequence and returns its length.
    pub fn replace(&mut self, items: impl Into<Arc<[T]>>) -> usize {
        self.items = items.into();
        vdebug!(len = self.items.len(), "ItemSourceAdapter::replace");
        self.items.len()
    }

    /// The shared sequence, e.g. for handing the same snapshot to another consumer.
    pub fn shared(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> ItemSource for ItemSourceAdapter<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T, WindowError> {
        ItemSource::get(&*self.items, index)
    }
}

impl<T> From<Vec<T>> for ItemSourceAdapter<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
