//! Implementations of `std::ops` and comparison traits.
//!
//! The arithmetic operators live in `crate::ops`, since they are shared with every other vector
//! expression.

use std::ops::{Index, IndexMut};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for Vector<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.0[..] == *other
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn comparisons() {
        let v = vec3(1, 2, 3);
        assert_eq!(v, [1, 2, 3]);
        assert!(v == vec![1, 2, 3][..]);
        assert_ne!(v, vec3(1, 2, 4));
    }

    #[test]
    fn indexing() {
        let mut v = Vec2::<u8>::ZERO;
        v[1] = 5;
        assert_eq!(v[0], 0);
        assert_eq!(v[1], 5);
    }
}
