use std::mem;

use crate::{ListError, Result};

/// An ordered sequence of elements addressed by a zero based index.
///
/// This is the capability shared by [`BoundedSequence`](crate::BoundedSequence),
/// [`DynamicSequence`](crate::DynamicSequence) and [`ChunkedSequence`](crate::ChunkedSequence).
/// Operations that need an element fail with [`ListError::Empty`] on an empty list before
/// looking at the index; operations addressing a position outside the list fail with
/// [`ListError::BadIndex`]. A failed operation never modifies the list.
///
/// # Example
/// ```rust
/// use chunky_list::{ChunkedSequence, List, ListError};
///
/// let mut list = ChunkedSequence::new(4)?;
/// list.push_back('b')?;
/// list.push_front('a')?;
/// list.insert(2, 'c')?;
///
/// assert_eq!(list.front(), Ok(&'a'));
/// assert_eq!(list.get(1), Ok(&'b'));
/// assert_eq!(list.back(), Ok(&'c'));
/// assert_eq!(list.get(3), Err(ListError::BadIndex { index: 3, len: 3 }));
/// # Ok::<(), ListError>(())
/// ```
pub trait List<T> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty, [`ListError::BadIndex`] if `index >= len`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty, [`ListError::BadIndex`] if `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty, [`ListError::BadIndex`] if `index >= len`.
    fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.get(0)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.get_mut(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.get(self.len() - 1)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let index = self.len() - 1;
        self.get_mut(index)
    }

    /// Inserts `value` at the front of the list, same as `insert(0, value)`.
    ///
    /// # Errors
    /// [`ListError::CapacityExceeded`] if the list is fixed-capacity and full.
    fn push_front(&mut self, value: T) -> Result<()> {
        self.insert(0, value)
    }

    /// Appends `value` at the back of the list.
    ///
    /// # Errors
    /// [`ListError::CapacityExceeded`] if the list is fixed-capacity and full.
    fn push_back(&mut self, value: T) -> Result<()>;

    /// Inserts `value` at `index`, shifting every element from `index` onward one
    /// position to the right. `index == len` appends.
    ///
    /// # Errors
    /// [`ListError::BadIndex`] if `index > len`, [`ListError::CapacityExceeded`] if the
    /// list is fixed-capacity and full.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the first element, same as `remove(0)`.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    fn pop_back(&mut self) -> Result<T>;

    /// Removes and returns the element at `index`, shifting every element after it
    /// one position to the left.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty, [`ListError::BadIndex`] if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T>;
}
