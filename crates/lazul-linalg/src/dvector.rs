use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{error::Result, Dyn, ExprTraits, VectorExpr, VectorStorage, Zero};

/// A heap-allocated column vector whose length is only known at run time.
///
/// Expressions involving a [`DVector`] have their lengths checked when they are evaluated, rather
/// than at compile time. A [`DVector`] never changes its length when assigned to: assigning an
/// expression of a different length fails with [`Error::SizeMismatch`][crate::Error::SizeMismatch].
/// Use [`DVector::from_expr`] to create a vector of the right length instead.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DVector<T>(Vec<T>);

impl<T> DVector<T> {
    /// Creates a vector of `len` zeroes.
    pub fn zeros(len: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self(vec![T::ZERO; len])
    }

    /// Creates a vector of `len` elements by invoking a closure with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let v = DVector::from_fn(4, |i| i * i);
    /// assert_eq!(v.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self((0..len).map(cb).collect())
    }

    /// Evaluates a vector expression into a new [`DVector`] of the same length.
    ///
    /// # Errors
    ///
    /// Fails if the extents within `expr` don't match each other.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let a = DVector::from(vec![1.0, 2.0]);
    /// let b = vec2(0.5, 0.5);
    /// let v = DVector::from_expr(&a - &b).unwrap();
    /// assert_eq!(v.as_slice(), &[0.5, 1.5]);
    /// ```
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        E: VectorExpr<Elem = T>,
    {
        expr.validate()?;
        log::trace!("assign: writing {} vector elements", expr.size());

        Ok(Self::from_fn(expr.size(), |i| expr.get(i)))
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Copy> ExprTraits for DVector<T> {
    type Elem = T;
    const RANK: usize = 1;
}

impl<T: Copy> VectorExpr for DVector<T> {
    type Size = Dyn;

    #[inline]
    fn size(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn get(&self, i: usize) -> T {
        self.0[i]
    }
}

impl<T: Copy> VectorStorage for DVector<T> {
    #[inline]
    fn set(&mut self, i: usize, value: T) {
        self.0[i] = value;
    }
}

impl<T> From<Vec<T>> for DVector<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<crate::Vector<T, N>> for DVector<T> {
    fn from(value: crate::Vector<T, N>) -> Self {
        Self(value.into_array().into())
    }
}

impl<T> From<DVector<T>> for Vec<T> {
    #[inline]
    fn from(value: DVector<T>) -> Self {
        value.0
    }
}

impl<T> Index<usize> for DVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for DVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> AsRef<[T]> for DVector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsMut<[T]> for DVector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for DVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display> fmt::Display for DVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construction() {
        let z = DVector::<f32>::zeros(3);
        assert_eq!(z.len(), 3);
        assert_eq!(z.as_slice(), &[0.0; 3]);
        assert!(DVector::<u8>::default().is_empty());

        let v = DVector::from(vec3(1, 2, 3));
        assert_eq!(v.size(), 3);
        assert_eq!(v[2], 3);
        assert_eq!(Vec::from(v), vec![1, 2, 3]);
    }

    #[test]
    fn fmt() {
        let v = DVector::from(vec![1.5, -2.0]);
        assert_eq!(format!("{v}"), "(1.5, -2)");
        assert_eq!(format!("{v:?}"), "(1.5, -2.0)");
    }

    #[test]
    fn from_expr_propagates_errors() {
        let a = DVector::from(vec![1, 2]);
        let b = DVector::from(vec![1, 2, 3]);
        assert!(DVector::from_expr(&a + &b).is_err());
    }
}
