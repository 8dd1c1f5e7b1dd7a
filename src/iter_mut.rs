use core::iter::FusedIterator;
use std::iter::Flatten;
use std::slice;

use crate::bounded::BoundedSequence;
use crate::{ChunkedSequence, List};

/// A mutable iterator over the elements of a [`ChunkedSequence`].
///
/// This struct is created by [`ChunkedSequence::iter_mut`].
pub struct IterMut<'a, T> {
    delegate: Flatten<slice::IterMut<'a, BoundedSequence<T>>>,
    len: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ChunkedSequence<T>) -> Self {
        let len = list.len();
        Self {
            delegate: list.raw_chunks_mut().iter_mut().flatten(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

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

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> std::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}
