use std::hash::{Hash, Hasher};
use std::slice;

use crate::slots::Slots;
use crate::{List, ListError, Result};

pub use crate::slots::IntoIter;

/// A list that can hold at most a fixed number of elements.
///
/// The capacity is chosen at construction and never changes; inserting into a full
/// `BoundedSequence` fails with [`ListError::CapacityExceeded`]. Elements are stored
/// contiguously, so positional insertions and removals shift at most `capacity` elements.
///
/// # Example
/// ```rust
/// use chunky_list::{BoundedSequence, List, ListError};
///
/// let mut list = BoundedSequence::with_capacity(2);
/// list.push_back(1)?;
/// list.push_back(2)?;
///
/// assert!(list.is_full());
/// assert_eq!(list.push_back(3), Err(ListError::CapacityExceeded { capacity: 2 }));
/// assert_eq!(list.pop_front(), Ok(1));
/// # Ok::<(), ListError>(())
/// ```
pub struct BoundedSequence<T> {
    slots: Slots<T>,
}

impl<T> BoundedSequence<T> {
    /// Creates an empty `BoundedSequence` able to hold `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
        }
    }

    /// Returns the maximum number of elements this list can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns `true` if no more elements can be inserted.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slots.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Appends `value` without reporting capacity errors.
    ///
    /// Callers must have checked [`is_full`](Self::is_full) first; a full list panics.
    pub(crate) fn push_unchecked(&mut self, value: T) {
        self.slots.push(value);
    }

    fn bad_index(&self, index: usize) -> ListError {
        ListError::BadIndex {
            index,
            len: self.len(),
        }
    }
}

impl<T> List<T> for BoundedSequence<T> {
    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.slots.get(index).ok_or(self.bad_index(index))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let error = self.bad_index(index);
        self.slots.get_mut(index).ok_or(error)
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        self.insert(self.len(), value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if self.is_full() {
            return Err(ListError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        if index > self.len() {
            return Err(self.bad_index(index));
        }

        self.slots.insert(index, value);
        Ok(())
    }

    fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.remove(self.len() - 1)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        if index >= self.len() {
            return Err(self.bad_index(index));
        }

        Ok(self.slots.remove(index))
    }
}

impl<T: Clone> Clone for BoundedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for BoundedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for BoundedSequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for BoundedSequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for BoundedSequence<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for BoundedSequence<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for BoundedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BoundedSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for BoundedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_slots(self.slots)
    }
}

impl<'a, T> IntoIterator for &'a BoundedSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
