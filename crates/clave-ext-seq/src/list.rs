//! Materializing into an owned list without redundant copies.

use std::collections::VecDeque;

/// Conversion into a `Vec` that reuses the existing buffer when there is one.
///
/// A `Vec` converts to itself, so `into_list` is idempotent and never
/// reallocates a value that is already a list.
pub trait IntoList<T> {
    /// Converts `self` into a `Vec<T>`.
    fn into_list(self) -> Vec<T>;
}

impl<T> IntoList<T> for Vec<T> {
    fn into_list(self) -> Vec<T> {
        self
    }
}

impl<T> IntoList<T> for Box<[T]> {
    fn into_list(self) -> Vec<T> {
        self.into_vec()
    }
}

impl<T> IntoList<T> for VecDeque<T> {
    fn into_list(self) -> Vec<T> {
        Vec::from(self)
    }
}

impl<T> IntoList<T> for std::vec::IntoIter<T> {
    fn into_list(self) -> Vec<T> {
        self.collect()
    }
}

impl<T, const N: usize> IntoList<T> for [T; N] {
    fn into_list(self) -> Vec<T> {
        Vec::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_is_passed_through() {
        let list = vec![1, 2, 3];
        let ptr = list.as_ptr();

        let list = list.into_list().into_list();
        assert_eq!(list.as_ptr(), ptr);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn boxed_slice_keeps_buffer() {
        let boxed: Box<[i32]> = vec![1, 2].into_boxed_slice();
        let ptr = boxed.as_ptr();

        assert_eq!(boxed.into_list().as_ptr(), ptr);
    }

    #[test]
    fn deque_and_array_convert() {
        let deque: VecDeque<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(deque.into_list(), vec![1, 2, 3]);
        assert_eq!([4, 5].into_list(), vec![4, 5]);
    }
}
