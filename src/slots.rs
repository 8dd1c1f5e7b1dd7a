use core::iter::FusedIterator;
use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// A heap allocated, fixed length run of slots whose first `len` entries are initialized.
///
/// This is the storage shared by `BoundedSequence` and `DynamicSequence`; it performs
/// no bounds reporting of its own and panics if a caller breaks its preconditions.
pub(crate) struct Slots<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Box::new_uninit_slice(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.insert(self.len(), value);
    }

    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len(),
            "Index out of bounds: cannot insert at index {index}"
        );
        assert!(!self.is_full(), "Slots are full: cannot insert more elements");

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len(),
            "Index out of bounds: cannot remove at index {index}"
        );

        let value = unsafe { self.data[index].assume_init_read() };

        unsafe {
            // Shift elements from `index + 1` to fill the gap, the last slot is left vacant
            let data_ptr = self.data.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        value
    }

    /// Moves every live element into a new allocation of `capacity` slots,
    /// releasing the old one.
    pub fn grow(&mut self, capacity: usize) {
        assert!(capacity >= self.len(), "Slots cannot shrink below their length");

        let mut larger = Box::new_uninit_slice(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), larger.as_mut_ptr(), self.len());
        }

        // The old slots only hold bitwise copies now, dropping a `MaybeUninit` never drops `T`.
        self.data = larger;
    }

    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;

        unsafe {
            let live = slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), len);
            ptr::drop_in_place(live);
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            clone.push(value.clone());
        }
        clone
    }
}

/// An owning iterator over the elements of a `BoundedSequence` or a `DynamicSequence`.
///
/// This struct is created by their `into_iter()`.
pub struct IntoIter<T> {
    slots: Slots<T>,
    front: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn from_slots(slots: Slots<T>) -> Self {
        Self { slots, front: 0 }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.slots.len {
            return None;
        }

        let value = unsafe { self.slots.data[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slots.len - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.slots.len {
            return None;
        }

        self.slots.len -= 1;
        Some(unsafe { self.slots.data[self.slots.len].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.slots.len - self.front;
        self.slots.len = 0;

        unsafe {
            let data_ptr = self.slots.data.as_mut_ptr().add(self.front).cast::<T>();
            ptr::drop_in_place(slice::from_raw_parts_mut(data_ptr, remaining));
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let remaining = &self.slots.as_slice()[self.front..];
        f.debug_tuple("IntoIter").field(&remaining).finish()
    }
}
