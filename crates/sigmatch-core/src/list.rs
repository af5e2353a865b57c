//! Growable ordered collection with set-style insertion.
//!
//! Capacity starts at [`INITIAL_CAPACITY`] and doubles whenever an append would
//! overflow it, so appends are amortized O(1). Lookups are linear: the lists built
//! during a compile (closure sets, symbol sets) stay small.
//!
//! `pop_back`, `front` and `back` on an empty list are contract violations and panic.

use std::ops::Index;

/// Capacity of a freshly created list. Never zero.
pub const INITIAL_CAPACITY: usize = 8;

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GenericList<T> {
    items: Vec<T>,
}

impl<T> Default for GenericList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GenericList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends `item`, doubling the capacity first when the list is full.
    pub fn push_back(&mut self, item: T) {
        let len = self.items.len();
        if len == self.items.capacity() {
            let target = (len * 2).max(INITIAL_CAPACITY);
            self.items.reserve_exact(target - len);
        }
        self.items.push(item);
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    /// When the list is empty.
    pub fn pop_back(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop_back on an empty list"),
        }
    }

    /// # Panics
    /// When the list is empty.
    pub fn front(&self) -> &T {
        match self.items.first() {
            Some(item) => item,
            None => panic!("front on an empty list"),
        }
    }

    /// # Panics
    /// When the list is empty.
    pub fn back(&self) -> &T {
        match self.items.last() {
            Some(item) => item,
            None => panic!("back on an empty list"),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// First element satisfying `pred`, scanning from the front.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| pred(item))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Resets the length to zero. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> GenericList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Set insertion: appends `item` unless an equal element is present.
    ///
    /// Returns `true` when the element was newly added.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.push_back(item);
        true
    }
}

impl<T: Clone> GenericList<T> {
    /// Deep copy with the same capacity as the original.
    pub fn duplicate(&self) -> Self {
        let mut items = Vec::with_capacity(self.items.capacity());
        items.extend(self.items.iter().cloned());
        Self { items }
    }
}

impl<T: Clone> Clone for GenericList<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T> Index<usize> for GenericList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> FromIterator<T> for GenericList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a GenericList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for GenericList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
