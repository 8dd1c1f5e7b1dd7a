//! # chunky_list
//!
//! `chunky_list` implements ordered, index-addressable lists on top of three
//! array based storage strategies sharing a single [`List`] capability:
//!
//! - [`BoundedSequence`]: a fixed-capacity list that refuses insertions once full.
//! - [`DynamicSequence`]: a growable list that doubles its backing store when it runs out of room.
//! - [`ChunkedSequence`]: a list split into fixed-capacity chunks, built out of the other two:
//!   a `DynamicSequence` of `BoundedSequence` chunks.
//!
//! ## Chunked Storage
//! A `ChunkedSequence` translates every global index into a chunk and a position inside it
//! by walking the chunks from the front. Insertions only shift elements inside one chunk:
//! when that chunk is full, its last element moves to the front of the following chunk
//! (allocating one if needed). A chunk is released as soon as it becomes empty, but
//! partially filled chunks are never merged.
//!
//! ## Errors
//! Every operation reports failures through [`ListError`] and leaves the list untouched
//! when it fails.
//!
//! ## Example
//! ```rust
//! use chunky_list::{ChunkedSequence, List, ListError};
//!
//! let mut list = ChunkedSequence::new(6)?;
//! list.push_back(2)?;
//! list.push_front(0)?;
//! list.insert(1, 1)?;
//!
//! assert_eq!(list.front(), Ok(&0));
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.back(), Ok(&2));
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_front(), Err(ListError::Empty));
//! # Ok::<(), ListError>(())
//! ```

pub mod bounded;
mod chunked;
pub mod dynamic;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod list;
mod slots;

pub use bounded::BoundedSequence;
pub use chunked::ChunkedSequence;
pub use dynamic::DynamicSequence;
pub use error::{ListError, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use list::List;

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck_macros::quickcheck;

    use crate::{BoundedSequence, ChunkedSequence, DynamicSequence, List, ListError};

    /// Drives `actual` and a `VecDeque` model through the same random operations,
    /// counting successful additions and removals along the way.
    fn check_against_model<L: List<i32>>(actual: &mut L, rounds: usize) {
        let mut expected = VecDeque::new();
        let mut added = 0;
        let mut removed = 0;

        for _ in 0..rounds {
            let len = expected.len();

            assert_eq!(expected.len(), actual.len());
            assert_eq!(expected.len(), added - removed);
            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.front().ok_or(ListError::Empty), actual.front());
            assert_eq!(expected.back().ok_or(ListError::Empty), actual.back());
            for (index, value) in expected.iter().enumerate() {
                assert_eq!(actual.get(index), Ok(value));
            }

            match rand::random_range(0..=6) {
                0 => {
                    let value = rand::random();
                    expected.push_front(value);
                    actual.push_front(value).unwrap();
                    added += 1;
                }
                1 => {
                    let index = rand::random_range(0..=len);
                    let value = rand::random();
                    expected.insert(index, value);
                    actual.insert(index, value).unwrap();
                    added += 1;
                }
                2 => {
                    let value = rand::random();
                    expected.push_back(value);
                    actual.push_back(value).unwrap();
                    added += 1;
                }
                3 => match expected.pop_front() {
                    Some(value) => {
                        assert_eq!(actual.pop_front(), Ok(value));
                        removed += 1;
                    }
                    None => assert_eq!(actual.pop_front(), Err(ListError::Empty)),
                },
                4 => {
                    let index = rand::random_range(0..=len);
                    match expected.remove(index) {
                        Some(value) => {
                            assert_eq!(actual.remove(index), Ok(value));
                            removed += 1;
                        }
                        None => assert!(actual.remove(index).is_err()),
                    }
                }
                5 => match expected.pop_back() {
                    Some(value) => {
                        assert_eq!(actual.pop_back(), Ok(value));
                        removed += 1;
                    }
                    None => assert_eq!(actual.pop_back(), Err(ListError::Empty)),
                },
                6 => {
                    let index = rand::random_range(0..=len);
                    let value = rand::random();
                    match expected.get_mut(index) {
                        Some(slot) => {
                            let old = std::mem::replace(slot, value);
                            assert_eq!(actual.set(index, value), Ok(old));
                        }
                        None => assert!(actual.set(index, value).is_err()),
                    }
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_every_list_behaves_like_a_flat_sequence() {
        check_against_model(&mut BoundedSequence::with_capacity(256), 128);
        check_against_model(&mut DynamicSequence::new(), 128);

        for chunk_size in [1, 2, 3, 4, 5, 8, 16] {
            check_against_model(&mut ChunkedSequence::new(chunk_size).unwrap(), 128);
        }
    }

    #[quickcheck]
    fn test_insert_then_get_then_remove_round_trips(values: Vec<i32>, index: usize, value: i32) {
        fn _test<L: List<i32>>(mut sut: L, values: &[i32], index: usize, value: i32) {
            for &v in values {
                sut.push_back(v).unwrap();
            }

            let index = index % (values.len() + 1);
            sut.insert(index, value).unwrap();
            assert_eq!(sut.get(index), Ok(&value));
            assert_eq!(sut.len(), values.len() + 1);

            assert_eq!(sut.remove(index), Ok(value));
            assert_eq!(sut.len(), values.len());
            for (i, v) in values.iter().enumerate() {
                assert_eq!(sut.get(i), Ok(v));
            }
        }

        _test(
            BoundedSequence::with_capacity(values.len() + 1),
            &values,
            index,
            value,
        );
        _test(DynamicSequence::new(), &values, index, value);
        for chunk_size in [1, 2, 3, 4, 7] {
            _test(
                ChunkedSequence::new(chunk_size).unwrap(),
                &values,
                index,
                value,
            );
        }
    }

    #[test]
    fn test_out_of_range_access_is_a_bad_index_everywhere() {
        fn _test<L: List<char>>(mut sut: L) {
            sut.push_back('a').unwrap();
            sut.push_back('b').unwrap();

            let bad_index = ListError::BadIndex { index: 2, len: 2 };
            assert_eq!(sut.get(2), Err(bad_index));
            assert_eq!(sut.get_mut(2), Err(bad_index));
            assert_eq!(sut.set(2, 'c'), Err(bad_index));
            assert_eq!(sut.remove(2), Err(bad_index));
            assert_eq!(
                sut.insert(3, 'c'),
                Err(ListError::BadIndex { index: 3, len: 2 })
            );
            assert_eq!(sut.len(), 2);
        }

        _test(BoundedSequence::with_capacity(4));
        _test(DynamicSequence::new());
        _test(ChunkedSequence::new(1).unwrap());
    }
}
