use core::iter::FusedIterator;
use std::iter::Flatten;
use std::slice;

use crate::bounded::BoundedSequence;
use crate::{ChunkedSequence, List};

/// An iterator over the elements of a [`ChunkedSequence`].
///
/// This struct is created by [`ChunkedSequence::iter`].
pub struct Iter<'a, T> {
    delegate: Flatten<slice::Iter<'a, BoundedSequence<T>>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ChunkedSequence<T>) -> Self {
        Self {
            delegate: list.raw_chunks().iter().flatten(),
            len: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
