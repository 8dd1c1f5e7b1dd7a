use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::bounded::BoundedSequence;
use crate::dynamic::DynamicSequence;
use crate::into_iter::IntoIter;
use crate::iter::Iter;
use crate::iter_mut::IterMut;
use crate::{List, ListError, Result};

/// A list that stores its elements in a sequence of fixed-capacity chunks.
///
/// # Features
/// - **Chunked Storage**: each chunk is a [`BoundedSequence`] holding up to `chunk_size`
///   elements, and chunks are kept in a [`DynamicSequence`]. Positional insertions and
///   removals only shift elements inside a single chunk.
/// - **No Empty Chunks**: a chunk is dropped as soon as its last element is removed.
///   Chunks are never merged, so removals may leave chunks partially filled.
///
/// Global indices are translated into a chunk and a position inside it by walking the chunks
/// from the front, so random access is linear in the number of chunks.
///
/// # Example
/// ```rust
/// use chunky_list::{ChunkedSequence, List, ListError};
///
/// let mut list = ChunkedSequence::new(4)?;
/// for value in ['A', 'B', 'C', 'D', 'E'] {
///     list.push_back(value)?;
/// }
///
/// assert_eq!(list.chunk_count(), 2);
/// assert_eq!(list.get(4), Ok(&'E'));
///
/// assert_eq!(list.remove(0), Ok('A'));
/// assert_eq!(list.len(), 4);
/// assert_eq!(list, ['B', 'C', 'D', 'E']);
/// # Ok::<(), ListError>(())
/// ```
pub struct ChunkedSequence<T> {
    chunk_size: usize,
    chunks: DynamicSequence<BoundedSequence<T>>,
    len: usize,
}

impl<T> ChunkedSequence<T> {
    /// Creates an empty `ChunkedSequence` whose chunks hold up to `chunk_size` elements.
    ///
    /// No chunk is allocated until the first element is inserted.
    ///
    /// # Errors
    /// [`ListError::InvalidChunkSize`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ListError::InvalidChunkSize);
        }

        Ok(Self {
            chunk_size,
            chunks: DynamicSequence::new(),
            len: 0,
        })
    }

    /// Returns the capacity of every chunk.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of chunks currently allocated.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the chunks in order, exposing how the elements are distributed.
    #[inline]
    pub fn chunks(&self) -> &[BoundedSequence<T>] {
        self.chunks.as_slice()
    }

    /// Appends `value` at the back, allocating a new chunk if the last one is full.
    pub fn push(&mut self, value: T) {
        match self.chunks.as_mut_slice().last_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_unchecked(value),
            _ => {
                let mut chunk = self.make_chunk(self.chunks.len());
                chunk.push_unchecked(value);
                self.chunks.push(chunk);
            }
        }

        self.len += 1;
        self.debug_assert_invariants();
    }

    /// Removes all elements and releases every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }

    /// Provides an iterator over list's elements, front to back.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::{ChunkedSequence, List, ListError};
    ///
    /// let mut list = ChunkedSequence::new(2)?;
    /// list.extend([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// # Ok::<(), ListError>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    pub(crate) fn raw_chunks(&self) -> &DynamicSequence<BoundedSequence<T>> {
        &self.chunks
    }

    pub(crate) fn raw_chunks_mut(&mut self) -> &mut DynamicSequence<BoundedSequence<T>> {
        &mut self.chunks
    }

    pub(crate) fn into_raw_chunks(self) -> DynamicSequence<BoundedSequence<T>> {
        self.chunks
    }

    fn make_chunk(&self, chunk_index: usize) -> BoundedSequence<T> {
        trace!(chunk_index, chunk_size = self.chunk_size, "allocating chunk");
        BoundedSequence::with_capacity(self.chunk_size)
    }

    fn insert_chunk(&mut self, chunk_index: usize) -> Result<()> {
        let chunk = self.make_chunk(chunk_index);
        self.chunks.insert(chunk_index, chunk)
    }

    /// Drops the chunk at `chunk_index` if its last element has been removed.
    fn prune(&mut self, chunk_index: usize) -> Result<()> {
        if self.chunks.get(chunk_index)?.is_empty() {
            trace!(chunk_index, "pruning empty chunk");
            self.chunks.remove(chunk_index)?;
        }

        Ok(())
    }

    /// Finds the chunk holding the element at `index`.
    fn search_target(&self, index: usize) -> Result<SearchTarget> {
        let mut start = 0;
        for (chunk_index, chunk) in self.chunks.iter().enumerate() {
            let end = start + chunk.len();
            if (start..end).contains(&index) {
                return Ok(SearchTarget {
                    chunk_index,
                    target_index: index - start,
                });
            }

            start = end;
        }

        Err(self.bad_index(index))
    }

    /// Finds the chunk an element inserted at `index` goes to.
    ///
    /// Unlike [`search_target`](Self::search_target) the upper bound is inclusive: inserting
    /// right after the last element of a chunk addresses that chunk.
    fn search_insertion_target(&self, index: usize) -> Result<SearchTarget> {
        let mut start = 0;
        for (chunk_index, chunk) in self.chunks.iter().enumerate() {
            let end = start + chunk.len();
            if (start..=end).contains(&index) {
                return Ok(SearchTarget {
                    chunk_index,
                    target_index: index - start,
                });
            }

            start = end;
        }

        Err(self.bad_index(index))
    }

    fn bad_index(&self, index: usize) -> ListError {
        ListError::BadIndex {
            index,
            len: self.len,
        }
    }

    fn debug_assert_invariants(&self) {
        debug_assert_eq!(
            self.len,
            self.chunks.iter().map(|chunk| chunk.len()).sum::<usize>()
        );
        debug_assert!(self.chunks.iter().all(|chunk| !chunk.is_empty()));
        debug_assert!(
            self.chunks
                .iter()
                .all(|chunk| chunk.len() <= self.chunk_size)
        );
    }
}

struct SearchTarget {
    chunk_index: usize,
    target_index: usize,
}

impl<T> List<T> for ChunkedSequence<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index)?;

        self.chunks.get(chunk_index)?.get(target_index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index)?;

        self.chunks.get_mut(chunk_index)?.get_mut(target_index)
    }

    fn front(&self) -> Result<&T> {
        self.chunks.front()?.front()
    }

    fn back(&self) -> Result<&T> {
        self.chunks.back()?.back()
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        self.push(value);
        Ok(())
    }

    /// Inserts `value` at `index`.
    ///
    /// When the addressed chunk is full, room is made in the chunk right after it (a new
    /// chunk is allocated there if there is none or it is full as well): an element inserted
    /// at the very end of the full chunk goes to the front of that next chunk, otherwise the
    /// last element of the full chunk is moved there and `value` takes the freed slot.
    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.bad_index(index));
        }

        if self.chunks.is_empty() {
            self.insert_chunk(0)?;
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_insertion_target(index)?;

        if !self.chunks.get(chunk_index)?.is_full() {
            self.chunks.get_mut(chunk_index)?.insert(target_index, value)?;
        } else {
            let next_index = chunk_index + 1;
            let next_has_room = self
                .chunks
                .get(next_index)
                .is_ok_and(|chunk| !chunk.is_full());
            if !next_has_room {
                self.insert_chunk(next_index)?;
            }

            if target_index == self.chunk_size {
                self.chunks.get_mut(next_index)?.push_front(value)?;
            } else {
                trace!(chunk_index, "rolling last element over to the next chunk");
                let spilled = self.chunks.get_mut(chunk_index)?.pop_back()?;
                self.chunks.get_mut(next_index)?.push_front(spilled)?;
                self.chunks.get_mut(chunk_index)?.insert(target_index, value)?;
            }
        }

        self.len += 1;
        self.debug_assert_invariants();
        Ok(())
    }

    fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let value = self.chunks.back_mut()?.pop_back()?;
        self.len -= 1;
        self.prune(self.chunks.len() - 1)?;
        self.debug_assert_invariants();
        Ok(value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index)?;

        let value = self.chunks.get_mut(chunk_index)?.remove(target_index)?;
        self.len -= 1;
        self.prune(chunk_index)?;
        self.debug_assert_invariants();
        Ok(value)
    }
}

impl<T> Extend<T> for ChunkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T> Extend<&'a T> for ChunkedSequence<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for ChunkedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            chunk_size: self.chunk_size,
            chunks: self.chunks.clone(),
            len: self.len,
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ChunkedSequence<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ChunkedSequence<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ChunkedSequence<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

/// Two lists are equal when they hold equal elements in the same order,
/// regardless of chunk size or how the elements are spread over chunks.
impl<T> PartialEq for ChunkedSequence<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for ChunkedSequence<T> where T: Eq {}

impl<T> Hash for ChunkedSequence<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for ChunkedSequence<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks.iter()).finish()
    }
}

impl<T> IntoIterator for ChunkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ChunkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ChunkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
