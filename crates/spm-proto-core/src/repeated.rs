use crate::error::Error;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

///
/// RepeatedField
///
/// Owning, order-preserving storage behind every repeated message field.
/// Growth is append-only; the only ways to shrink or reorder it are `clear`
/// and `swap_elements`. Serializes identically to `Vec<T>`.
///
/// `add` and `mutable` hand out `&mut T` borrows of the underlying storage.
/// Those borrows hold the container mutably, so a second `add` (which may
/// reallocate) or a `clear` cannot happen while one is alive.
///
/// `RepeatedField` derefs to `Vec<T>` for reads but does not expose
/// `DerefMut`; mutation goes through the positional methods below.
///

#[repr(transparent)]
#[derive(Clone, Debug, Deref, Deserialize, Eq, Hash, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref, ref_mut)]
#[serde(transparent)]
pub struct RepeatedField<T>(Vec<T>);

impl<T> RepeatedField<T> {
    /// Empty field, as every message default starts out.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adopt already-built elements, keeping their order.
    #[must_use]
    pub const fn from_vec(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Element count; backs the generated `<field>_size` accessors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Walks elements front to back. A fresh call starts over.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Edits every element in place without changing the count.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Return the element at `index`.
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn at(&self, index: usize) -> &T {
        &self.0[index]
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// Panics if `index >= len`.
    pub fn mutable(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }

    /// Non-panicking read; `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Bounds-checked variant of [`Self::mutable`].
    pub fn try_mutable(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.0.len();

        self.0
            .get_mut(index)
            .ok_or(Error::index_out_of_bounds(index, len))
    }

    /// Exchange the elements at `i` and `j`. A no-op when `i == j`.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_elements(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Bounds-checked variant of [`Self::swap_elements`].
    pub fn try_swap_elements(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let len = self.0.len();
        if let Some(index) = [i, j].into_iter().find(|&index| index >= len) {
            return Err(Error::index_out_of_bounds(index, len));
        }

        self.0.swap(i, j);

        Ok(())
    }

    /// Remove every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Default> RepeatedField<T> {
    /// Append a default-constructed element and return a mutable reference to it.
    pub fn add(&mut self) -> &mut T {
        self.0.push(T::default());
        let last = self.0.len() - 1;

        &mut self.0[last]
    }
}

impl<T> Default for RepeatedField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for RepeatedField<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for RepeatedField<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T> From<Vec<T>> for RepeatedField<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> From<RepeatedField<T>> for Vec<T> {
    fn from(values: RepeatedField<T>) -> Self {
        values.0
    }
}

impl<T> FromIterator<T> for RepeatedField<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for RepeatedField<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

///
/// TESTS
///
