use std::hash::{Hash, Hasher};
use std::slice;

use tracing::trace;

use crate::slots::Slots;
use crate::{List, ListError, Result};

pub use crate::slots::IntoIter;

/// Number of slots a [`DynamicSequence`] allocates when created with [`DynamicSequence::new`].
pub const START_CAPACITY: usize = 10;

/// A list backed by a single contiguous store that doubles in size whenever it runs out of room.
///
/// Growth moves every element into the larger store and releases the old one; the capacity
/// never shrinks. Appending is amortized `O(1)`, positional insertions and removals shift the
/// elements after the index.
///
/// # Example
/// ```rust
/// use chunky_list::{DynamicSequence, List, ListError};
///
/// let mut list = DynamicSequence::new();
/// for value in 0..11 {
///     list.push_back(value)?;
/// }
///
/// assert_eq!(list.len(), 11);
/// assert_eq!(list.capacity(), 20);
/// assert_eq!(list.back(), Ok(&10));
/// # Ok::<(), ListError>(())
/// ```
pub struct DynamicSequence<T> {
    slots: Slots<T>,
}

impl<T> Default for DynamicSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicSequence<T> {
    /// Creates an empty `DynamicSequence` with room for [`START_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(START_CAPACITY)
    }

    /// Creates an empty `DynamicSequence` with room for `capacity` elements.
    ///
    /// A capacity of zero is raised to one, so that doubling always makes room.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity.max(1)),
        }
    }

    /// Returns the number of elements the current backing store can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Appends `value`, growing the backing store if needed.
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        self.slots.push(value);
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

    fn reserve_one(&mut self) {
        if !self.slots.is_full() {
            return;
        }

        let old_capacity = self.slots.capacity();
        let new_capacity = old_capacity * 2;
        trace!(old_capacity, new_capacity, "growing dynamic sequence");
        self.slots.grow(new_capacity);
    }

    fn bad_index(&self, index: usize) -> ListError {
        ListError::BadIndex {
            index,
            len: self.len(),
        }
    }
}

impl<T> List<T> for DynamicSequence<T> {
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
        self.push(value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(self.bad_index(index));
        }

        self.reserve_one();
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

impl<T> FromIterator<T> for DynamicSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DynamicSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T> Extend<&'a T> for DynamicSequence<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for DynamicSequence<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicSequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicSequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynamicSequence<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for DynamicSequence<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for DynamicSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for DynamicSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_slots(self.slots)
    }
}

impl<'a, T> IntoIterator for &'a DynamicSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicSequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::dynamic::START_CAPACITY;
    use crate::{DynamicSequence, List, ListError};

    #[test]
    fn test_new_creates_empty_dynamic_sequence() {
        let sut: DynamicSequence<i64> = DynamicSequence::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.capacity(), START_CAPACITY);
    }

    #[test]
    fn test_default_creates_empty_dynamic_sequence() {
        let sut: DynamicSequence<i64> = DynamicSequence::default();
        assert!(sut.is_empty());
        assert_eq!(sut.capacity(), START_CAPACITY);
    }

    #[test]
    fn test_push_back_doubles_capacity_when_full() {
        let mut sut = DynamicSequence::new();

        for value in 0..START_CAPACITY {
            sut.push_back(value).unwrap();
        }
        assert_eq!(sut.capacity(), START_CAPACITY);

        sut.push_back(START_CAPACITY).unwrap();
        assert_eq!(sut.capacity(), START_CAPACITY * 2);

        for value in START_CAPACITY + 1..START_CAPACITY * 2 + 1 {
            sut.push_back(value).unwrap();
        }
        assert_eq!(sut.len(), START_CAPACITY * 2 + 1);
        assert_eq!(sut.capacity(), START_CAPACITY * 4);

        assert!(sut.iter().copied().eq(0..START_CAPACITY * 2 + 1));
    }

    #[test]
    fn test_insert_grows_before_shifting() {
        let mut sut: DynamicSequence<_> = (0..START_CAPACITY).collect();
        assert_eq!(sut.capacity(), START_CAPACITY);

        sut.insert(0, 42).unwrap();
        assert_eq!(sut.capacity(), START_CAPACITY * 2);
        assert_eq!(sut.len(), START_CAPACITY + 1);
        assert_eq!(sut.front(), Ok(&42));
        assert_eq!(sut.get(1), Ok(&0));
        assert_eq!(sut.back(), Ok(&(START_CAPACITY - 1)));
    }

    #[test]
    fn test_with_zero_capacity_still_grows() {
        let mut sut = DynamicSequence::with_capacity(0);
        assert_eq!(sut.capacity(), 1);

        sut.push_back('a').unwrap();
        sut.push_back('b').unwrap();
        sut.push_back('c').unwrap();
        assert_eq!(sut.capacity(), 4);
        assert_eq!(sut, ['a', 'b', 'c']);
    }

    #[test]
    fn test_insert_accepts_append_position_only() {
        let mut sut = DynamicSequence::new();
        assert_eq!(sut.insert(1, 1), Err(ListError::BadIndex { index: 1, len: 0 }));

        sut.insert(0, 1).unwrap();
        sut.insert(1, 3).unwrap();
        sut.insert(1, 2).unwrap();
        assert_eq!(sut, [1, 2, 3]);

        assert_eq!(sut.insert(4, 4), Err(ListError::BadIndex { index: 4, len: 3 }));
        assert_eq!(sut, [1, 2, 3]);
    }

    #[test]
    fn test_failed_insert_does_not_grow() {
        let mut sut: DynamicSequence<_> = (0..START_CAPACITY).collect();
        assert_eq!(
            sut.insert(START_CAPACITY + 1, 0),
            Err(ListError::BadIndex {
                index: START_CAPACITY + 1,
                len: START_CAPACITY
            })
        );
        assert_eq!(sut.capacity(), START_CAPACITY);
    }

    #[test]
    fn test_remove_shifts_elements_left() {
        let mut sut: DynamicSequence<_> = [10, 20, 30, 40, 50].into_iter().collect();

        assert_eq!(sut.remove(0), Ok(10));
        assert_eq!(sut, [20, 30, 40, 50]);

        assert_eq!(sut.remove(2), Ok(40));
        assert_eq!(sut, [20, 30, 50]);

        assert_eq!(sut.remove(3), Err(ListError::BadIndex { index: 3, len: 3 }));

        assert_eq!(sut.pop_back(), Ok(50));
        assert_eq!(sut.pop_front(), Ok(20));
        assert_eq!(sut.pop_front(), Ok(30));

        assert_eq!(sut.pop_front(), Err(ListError::Empty));
        assert_eq!(sut.pop_back(), Err(ListError::Empty));
        assert_eq!(sut.remove(0), Err(ListError::Empty));
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut sut: DynamicSequence<_> = (0..25).collect();
        let capacity = sut.capacity();

        while sut.pop_back().is_ok() {}
        assert!(sut.is_empty());
        assert_eq!(sut.capacity(), capacity);

        sut.extend([1, 2]);
        sut.clear();
        assert_eq!(sut.capacity(), capacity);
    }

    #[test]
    fn test_get_and_set_work_correctly() {
        let mut sut: DynamicSequence<_> = ["a", "b", "c"].into_iter().collect();

        assert_eq!(sut.get(2), Ok(&"c"));
        assert_eq!(sut.get(3), Err(ListError::BadIndex { index: 3, len: 3 }));
        assert_eq!(sut.set(0, "z"), Ok("a"));
        assert_eq!(sut, ["z", "b", "c"]);

        *sut.back_mut().unwrap() = "y";
        assert_eq!(sut, ["z", "b", "y"]);
    }

    #[test]
    fn test_clone_and_eq_work_correctly() {
        let sut: DynamicSequence<_> = (0..12).collect();
        let mut clone = sut.clone();
        assert_eq!(sut, clone);

        clone.set(11, 0).unwrap();
        assert_ne!(sut, clone);
        assert_eq!(sut.back(), Ok(&11));
    }

    #[test]
    fn test_into_iter_yields_owned_elements() {
        let sut: DynamicSequence<_> = (0..15).map(|value| value.to_string()).collect();
        let values: Vec<String> = sut.into_iter().collect();
        assert_eq!(values.len(), 15);
        assert_eq!(values.first().map(String::as_str), Some("0"));
        assert_eq!(values.last().map(String::as_str), Some("14"));
    }
}
