use core::iter::FusedIterator;
use std::iter::Flatten;

use crate::bounded::BoundedSequence;
use crate::dynamic;
use crate::{ChunkedSequence, List};

/// An owning iterator over the elements of a [`ChunkedSequence`].
///
/// This struct is created by the `into_iter` method of [`ChunkedSequence`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T> {
    delegate: Flatten<dynamic::IntoIter<BoundedSequence<T>>>,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ChunkedSequence<T>) -> Self {
        let len = list.len();
        Self {
            delegate: list.into_raw_chunks().into_iter().flatten(),
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::ChunkedSequence;

    #[test]
    fn test_into_iter_yields_owned_elements_in_order() {
        let mut sut = ChunkedSequence::new(3).unwrap();
        sut.extend((0..8).map(|value| value.to_string()));

        let mut iter = sut.into_iter();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.next().as_deref(), Some("0"));
        assert_eq!(iter.next_back().as_deref(), Some("7"));
        assert_eq!(
            iter.collect::<Vec<_>>(),
            ["1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_dropping_partially_consumed_iterator_releases_elements() {
        let tracker = Rc::new(());

        let mut sut = ChunkedSequence::new(2).unwrap();
        sut.extend((0..5).map(|_| Rc::clone(&tracker)));
        assert_eq!(Rc::strong_count(&tracker), 6);

        let mut iter = sut.into_iter();
        drop(iter.next());
        assert_eq!(Rc::strong_count(&tracker), 5);

        drop(iter);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
