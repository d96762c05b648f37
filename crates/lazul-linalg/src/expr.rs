//! Expression traits.
//!
//! Every type that can take part in an expression, whether it is concrete storage, a lazily
//! evaluated node, or a plain scalar, implements [`ExprTraits`]. Vector- and matrix-shaped
//! expressions additionally implement [`VectorExpr`] or [`MatrixExpr`], which give element access
//! and shape information.

use crate::{error::Result, Dim};

/// Element type and rank of an expression.
///
/// Types that don't implement this trait cannot appear in an expression; there is no run-time
/// fallback.
pub trait ExprTraits {
    /// The element type produced by the expression.
    type Elem: Copy;

    /// 0 for scalars, 1 for vectors, 2 for matrices.
    const RANK: usize;
}

/// Scalar values, treated as rank-0 expressions.
pub trait Scalar: ExprTraits<Elem = Self> + Copy {}

/// A lazily evaluated column vector.
pub trait VectorExpr: ExprTraits {
    /// Static length of the vector.
    type Size: Dim;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Computes the element at index `i`.
    ///
    /// `i` must be less than [`VectorExpr::size`]. Out-of-range indices may panic or produce
    /// meaningless values; they are never checked separately.
    fn get(&self, i: usize) -> Self::Elem;

    /// Checks the run-time extents of the whole expression tree.
    ///
    /// Leaves have nothing to check. Nodes combining operands of [`Dyn`][crate::Dyn] extent
    /// compare them here, and forward to their operands.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A lazily evaluated matrix.
pub trait MatrixExpr: ExprTraits {
    /// Static number of rows.
    type Rows: Dim;
    /// Static number of columns.
    type Cols: Dim;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Computes the element at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> Self::Elem;

    /// Checks the run-time shapes of the whole expression tree.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// The element type of expression `E`.
pub type ElemOf<E> = <E as ExprTraits>::Elem;
/// The static length of vector expression `E`.
pub type SizeOf<E> = <E as VectorExpr>::Size;
/// The static row count of matrix expression `E`.
pub type RowsOf<E> = <E as MatrixExpr>::Rows;
/// The static column count of matrix expression `E`.
pub type ColsOf<E> = <E as MatrixExpr>::Cols;

/// Returns the compile-time length of vector expression `E`, or [`None`] if it is dynamic.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// assert_eq!(fixed_size::<Vec3<f32>>(), Some(3));
/// assert_eq!(fixed_size::<DVector<f32>>(), None);
/// ```
pub fn fixed_size<E: VectorExpr + ?Sized>() -> Option<usize> {
    E::Size::FIXED
}

/// Returns the compile-time `(rows, cols)` of matrix expression `E`.
///
/// Either entry is [`None`] when the corresponding extent is dynamic.
pub fn fixed_shape<E: MatrixExpr + ?Sized>() -> (Option<usize>, Option<usize>) {
    (E::Rows::FIXED, E::Cols::FIXED)
}

macro_rules! scalars {
    ($($types:ty),+) => {
        $(
            impl ExprTraits for $types {
                type Elem = Self;
                const RANK: usize = 0;
            }

            impl Scalar for $types {}
        )+
    };
}
scalars!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<E: ExprTraits + ?Sized> ExprTraits for &E {
    type Elem = E::Elem;
    const RANK: usize = E::RANK;
}

impl<E: VectorExpr + ?Sized> VectorExpr for &E {
    type Size = E::Size;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        (**self).get(i)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        (**self).get(row, col)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}
