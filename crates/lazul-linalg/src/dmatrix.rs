use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{error::Result, Dyn, ExprTraits, MatrixExpr, MatrixStorage, One, Zero};

/// A heap-allocated, column-major matrix whose shape is only known at run time.
///
/// Like [`DVector`][crate::DVector], a [`DMatrix`] keeps its shape when assigned to, and
/// assignments of differently-shaped expressions fail with
/// [`Error::ShapeMismatch`][crate::Error::ShapeMismatch].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> DMatrix<T> {
    /// Creates a `rows` x `cols` matrix filled with zeroes.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            rows,
            cols,
            data: vec![T::ZERO; rows * cols],
        }
    }

    /// Creates an `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(n, n, |row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a matrix by invoking a closure with the position (row and column) of each element.
    ///
    /// The closure is invoked in column-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for col in 0..cols {
            for row in 0..rows {
                data.push(cb(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let m = DMatrix::from_rows(&[
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Self
    where
        T: Copy,
    {
        Self::from_fn(rows.len(), C, |row, col| rows[row][col])
    }

    /// Evaluates a matrix expression into a new [`DMatrix`] of the same shape.
    ///
    /// # Errors
    ///
    /// Fails if the extents within `expr` don't match each other.
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        E: MatrixExpr<Elem = T>,
    {
        expr.validate()?;
        let (rows, cols) = (expr.rows(), expr.cols());
        log::trace!("assign: writing {rows}x{cols} matrix elements");

        Ok(Self::from_fn(rows, cols, |row, col| expr.get(row, col)))
    }

    /// Returns the number of rows and columns, in that order.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the elements of the matrix as a column-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements of the matrix as a mutable column-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Copy> ExprTraits for DMatrix<T> {
    type Elem = T;
    const RANK: usize = 2;
}

impl<T: Copy> MatrixExpr for DMatrix<T> {
    type Rows = Dyn;
    type Cols = Dyn;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

impl<T: Copy> MatrixStorage for DMatrix<T> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }
}

impl<T> Index<(usize, usize)> for DMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[col * self.rows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[col * self.rows + row]
    }
}

impl<T> AsRef<[T]> for DMatrix<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for DMatrix<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for DMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a DMatrix<T>, usize);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries((0..self.0.cols).map(|col| &self.0[(self.1, col)]))
                    .finish()
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}
