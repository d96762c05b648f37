use std::{array, fmt};

use crate::{
    error::{self, Result},
    Const, ExprTraits, MatrixExpr, MatrixStorage, One, SameDim, Vector, Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_expr`] evaluates a matrix expression.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] has the value 1 on its leading diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use lazul_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its leading diagonal and 0 everywhere else. This is also
    /// defined for non-square matrices, where it acts as an identity transform between spaces of
    /// different dimension.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        let rows: [Vector<T, C>; R] = rows.map(Into::into);
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Evaluates a matrix expression into a new [`Matrix`].
    ///
    /// # Errors
    ///
    /// Fails if `expr` has dynamic extents that don't match each other, `R` or `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let a = Mat2::from_rows([[1, 2], [3, 4]]);
    /// let m = Matrix::from_expr(&a + &a * &Mat2::IDENTITY).unwrap();
    /// assert_eq!(m, Matrix::from_rows([[2, 4], [6, 8]]));
    /// ```
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        T: Copy,
        E: MatrixExpr<Elem = T>,
        E::Rows: SameDim<Const<R>>,
        E::Cols: SameDim<Const<C>>,
    {
        expr.validate()?;
        error::check_shape("assign", (R, C), (expr.rows(), expr.cols()))?;
        log::trace!("assign: writing {R}x{C} matrix elements");

        Ok(Self::from_fn(|row, col| expr.get(row, col)))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Returns the elements of the matrix as a column-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements of the matrix as a mutable column-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns column `col` as a [`Vector`].
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }
}

impl<T: Copy, const R: usize, const C: usize> ExprTraits for Matrix<T, R, C> {
    type Elem = T;
    const RANK: usize = 2;
}

impl<T: Copy, const R: usize, const C: usize> MatrixExpr for Matrix<T, R, C> {
    type Rows = Const<R>;
    type Cols = Const<C>;

    #[inline]
    fn rows(&self) -> usize {
        R
    }

    #[inline]
    fn cols(&self) -> usize {
        C
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self.0[col][row]
    }
}

impl<T: Copy, const R: usize, const C: usize> MatrixStorage for Matrix<T, R, C> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        self.0[col][row] = value;
    }
}

impl<T, const R: usize, const C: usize> AsRef<[T]> for Matrix<T, R, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const R: usize, const C: usize> AsMut<[T]> for Matrix<T, R, C> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn constants() {
        assert_eq!(
            Mat3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]])
        );
        assert_eq!(
            Mat2x3::<u8>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(Mat3x2::<u8>::ZERO.as_slice(), &[0; 6]);
    }

    #[test]
    fn layout_is_column_major() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(m.column(1), vec2(2, 5));
        assert_eq!(m.get(1, 0), 4);
    }

    #[test]
    fn fmt() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{m:?}"), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn from_dynamic_expression() {
        let d = DMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let m = Mat2::from_expr(&d * 2.0_f64).unwrap();
        assert_eq!(m, Matrix::from_rows([[2.0, 4.0], [6.0, 8.0]]));

        assert_eq!(
            Mat3::<f64>::from_expr(&d),
            Err(Error::ShapeMismatch {
                op: "assign",
                expected_rows: 3,
                expected_cols: 3,
                found_rows: 2,
                found_cols: 2,
            })
        );
    }
}
