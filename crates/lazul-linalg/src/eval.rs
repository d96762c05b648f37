//! Evaluation of expressions into storage.
//!
//! Assignment is the only point at which an expression is computed. The whole expression tree is
//! validated and its shape is compared against the destination first; only when every check
//! passes are elements written, so a failed assignment leaves the destination untouched.
//!
//! Elements are written in column-major order, but no expression may depend on that: every node
//! computes each element from the corresponding elements of its operands only. With the `rayon`
//! feature enabled, [`VectorStorage::par_assign`] and [`MatrixStorage::par_assign`] make use of
//! this to fill the destination from multiple threads.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use itertools::iproduct;

use crate::{
    error::{self, Result},
    BinaryOp, ColsOf, DMatrix, DVector, ElemOf, MatrixExpr, Matrix, Minus, Number, Plus, RowsOf,
    SameDim, Scalar, SizeOf, Sqrt, Vector, VectorExpr, Zero,
};

/// A vector expression backed by writable element storage.
pub trait VectorStorage: VectorExpr {
    /// Overwrites the element at index `i`.
    fn set(&mut self, i: usize, value: Self::Elem);

    /// Evaluates `src` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` contains mismatched dynamic extents, or if its length differs
    /// from the length of `self`. Mismatched static lengths don't compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let mut out = Vec3::ZERO;
    /// out.assign(&a + &a).unwrap();
    /// assert_eq!(out, vec3(2, 4, 6));
    /// ```
    ///
    /// ```compile_fail
    /// # use lazul_linalg::*;
    /// let mut out = Vec3::<i32>::ZERO;
    /// out.assign(vec2(1, 2)).unwrap();
    /// ```
    fn assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized,
        E: VectorExpr<Elem = Self::Elem>,
        E::Size: SameDim<Self::Size>,
    {
        assign_vector(self, src)
    }

    /// Adds `src` to `self`, element by element.
    fn try_add_assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized,
        Self::Elem: Number,
        E: VectorExpr<Elem = Self::Elem>,
        E::Size: SameDim<Self::Size>,
    {
        update_vector(self, src, Plus)
    }

    /// Subtracts `src` from `self`, element by element.
    fn try_sub_assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized,
        Self::Elem: Number,
        E: VectorExpr<Elem = Self::Elem>,
        E::Size: SameDim<Self::Size>,
    {
        update_vector(self, src, Minus)
    }

    /// Evaluates `src` into `self` on the rayon thread pool.
    ///
    /// Produces the same result as [`VectorStorage::assign`].
    #[cfg(feature = "rayon")]
    fn par_assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized + AsMut<[Self::Elem]>,
        Self::Elem: Send,
        E: VectorExpr<Elem = Self::Elem> + Sync,
        E::Size: SameDim<Self::Size>,
    {
        use rayon::prelude::*;

        src.validate()?;
        error::check_size("assign", self.size(), src.size())?;
        log::trace!("assign: writing {} vector elements in parallel", self.size());

        self.as_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, out)| *out = src.get(i));
        Ok(())
    }
}

/// A matrix expression backed by writable element storage.
pub trait MatrixStorage: MatrixExpr {
    /// Overwrites the element at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, value: Self::Elem);

    /// Evaluates `src` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` contains mismatched dynamic extents, or if its shape differs from
    /// the shape of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lazul_linalg::*;
    /// let a = Mat2::from_rows([[1, 2], [3, 4]]);
    /// let mut out = Mat2::ZERO;
    /// out.assign(&a * &a).unwrap();
    /// assert_eq!(out, Matrix::from_rows([[7, 10], [15, 22]]));
    /// ```
    fn assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized,
        E: MatrixExpr<Elem = Self::Elem>,
        E::Rows: SameDim<Self::Rows>,
        E::Cols: SameDim<Self::Cols>,
    {
        assign_matrix(self, src)
    }

    /// Adds `src` to `self`, element by element.
    fn try_add_assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized,
        Self::Elem: Number,
        E: MatrixExpr<Elem = Self::Elem>,
        E::Rows: SameDim<Self::Rows>,
        E::Cols: SameDim<Self::Cols>,
    {
        update_matrix(self, src, Plus)
    }

    /// Subtracts `src` from `self`, element by element.
    fn try_sub_assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized,
        Self::Elem: Number,
        E: MatrixExpr<Elem = Self::Elem>,
        E::Rows: SameDim<Self::Rows>,
        E::Cols: SameDim<Self::Cols>,
    {
        update_matrix(self, src, Minus)
    }

    /// Evaluates `src` into `self` on the rayon thread pool.
    ///
    /// `self` must expose its elements as a column-major slice.
    #[cfg(feature = "rayon")]
    fn par_assign<E>(&mut self, src: E) -> Result<()>
    where
        Self: Sized + AsMut<[Self::Elem]>,
        Self::Elem: Send,
        E: MatrixExpr<Elem = Self::Elem> + Sync,
        E::Rows: SameDim<Self::Rows>,
        E::Cols: SameDim<Self::Cols>,
    {
        use rayon::prelude::*;

        src.validate()?;
        let rows = self.rows();
        error::check_shape("assign", (rows, self.cols()), (src.rows(), src.cols()))?;
        log::trace!(
            "assign: writing {}x{} matrix elements in parallel",
            rows,
            self.cols()
        );

        self.as_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, out)| *out = src.get(i % rows, i / rows));
        Ok(())
    }
}

/// Validates `src` and writes each of its elements into `dest`.
pub fn assign_vector<D, E>(dest: &mut D, src: E) -> Result<()>
where
    D: VectorStorage + ?Sized,
    E: VectorExpr<Elem = D::Elem>,
    E::Size: SameDim<D::Size>,
{
    src.validate()?;
    error::check_size("assign", dest.size(), src.size())?;
    log::trace!("assign: writing {} vector elements", dest.size());

    for i in 0..dest.size() {
        dest.set(i, src.get(i));
    }
    Ok(())
}

/// Validates `src` and writes each of its elements into `dest`, in column-major order.
pub fn assign_matrix<D, E>(dest: &mut D, src: E) -> Result<()>
where
    D: MatrixStorage + ?Sized,
    E: MatrixExpr<Elem = D::Elem>,
    E::Rows: SameDim<D::Rows>,
    E::Cols: SameDim<D::Cols>,
{
    src.validate()?;
    let (rows, cols) = (dest.rows(), dest.cols());
    error::check_shape("assign", (rows, cols), (src.rows(), src.cols()))?;
    log::trace!("assign: writing {rows}x{cols} matrix elements");

    for (col, row) in iproduct!(0..cols, 0..rows) {
        dest.set(row, col, src.get(row, col));
    }
    Ok(())
}

fn update_vector<D, E, Op>(dest: &mut D, src: E, op: Op) -> Result<()>
where
    D: VectorStorage + ?Sized,
    E: VectorExpr<Elem = D::Elem>,
    E::Size: SameDim<D::Size>,
    Op: BinaryOp<D::Elem>,
{
    src.validate()?;
    error::check_size(Op::NAME, dest.size(), src.size())?;
    log::trace!("{}: updating {} vector elements", Op::NAME, dest.size());

    for i in 0..dest.size() {
        let value = op.apply(dest.get(i), src.get(i));
        dest.set(i, value);
    }
    Ok(())
}

fn update_matrix<D, E, Op>(dest: &mut D, src: E, op: Op) -> Result<()>
where
    D: MatrixStorage + ?Sized,
    E: MatrixExpr<Elem = D::Elem>,
    E::Rows: SameDim<D::Rows>,
    E::Cols: SameDim<D::Cols>,
    Op: BinaryOp<D::Elem>,
{
    src.validate()?;
    let (rows, cols) = (dest.rows(), dest.cols());
    error::check_shape(Op::NAME, (rows, cols), (src.rows(), src.cols()))?;
    log::trace!("{}: updating {rows}x{cols} matrix elements", Op::NAME);

    for (col, row) in iproduct!(0..cols, 0..rows) {
        let value = op.apply(dest.get(row, col), src.get(row, col));
        dest.set(row, col, value);
    }
    Ok(())
}

/// Computes the dot product of two vector expressions.
///
/// # Errors
///
/// Returns an error if either expression fails validation, or if their lengths differ.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// let a = vec3(1, 3, -5);
/// let b = vec3(4, -2, -1);
/// assert_eq!(dot(&a, &b).unwrap(), 3);
/// ```
pub fn dot<A, B>(a: A, b: B) -> Result<A::Elem>
where
    A: VectorExpr,
    B: VectorExpr<Elem = A::Elem>,
    A::Size: SameDim<B::Size>,
    A::Elem: Number,
{
    a.validate()?;
    b.validate()?;
    error::check_size("dot", a.size(), b.size())?;

    Ok((0..a.size()).fold(A::Elem::ZERO, |acc, i| acc + a.get(i) * b.get(i)))
}

/// Computes the Euclidean length of a vector expression.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// assert_eq!(length(vec2(3.0, 4.0)).unwrap(), 5.0);
/// ```
pub fn length<E>(v: E) -> Result<E::Elem>
where
    E: VectorExpr,
    E::Elem: Number + Sqrt,
{
    v.validate()?;
    let sum = (0..v.size()).fold(E::Elem::ZERO, |acc, i| {
        let x = v.get(i);
        acc + x * x
    });
    Ok(sum.sqrt())
}

macro_rules! vector_assign_ops {
    ($( [$($gen:tt)*] $ty:ty; )+) => {
        $(
            /// Element-wise addition.
            ///
            /// # Panics
            ///
            /// Panics if `rhs` fails a run-time shape check. Use
            /// [`VectorStorage::try_add_assign`] to handle that case.
            impl<$($gen)*, E> AddAssign<E> for $ty
            where
                ElemOf<$ty>: Number,
                E: VectorExpr<Elem = ElemOf<$ty>>,
                E::Size: SameDim<SizeOf<$ty>>,
            {
                #[track_caller]
                fn add_assign(&mut self, rhs: E) {
                    if let Err(e) = self.try_add_assign(rhs) {
                        panic!("{e}");
                    }
                }
            }

            /// Element-wise subtraction.
            ///
            /// # Panics
            ///
            /// Panics if `rhs` fails a run-time shape check. Use
            /// [`VectorStorage::try_sub_assign`] to handle that case.
            impl<$($gen)*, E> SubAssign<E> for $ty
            where
                ElemOf<$ty>: Number,
                E: VectorExpr<Elem = ElemOf<$ty>>,
                E::Size: SameDim<SizeOf<$ty>>,
            {
                #[track_caller]
                fn sub_assign(&mut self, rhs: E) {
                    if let Err(e) = self.try_sub_assign(rhs) {
                        panic!("{e}");
                    }
                }
            }

            impl<$($gen)*, Sc> MulAssign<Sc> for $ty
            where
                Sc: Scalar + Number,
                $ty: VectorStorage<Elem = Sc>,
            {
                fn mul_assign(&mut self, rhs: Sc) {
                    for i in 0..self.size() {
                        let value = self.get(i) * rhs;
                        self.set(i, value);
                    }
                }
            }

            impl<$($gen)*, Sc> DivAssign<Sc> for $ty
            where
                Sc: Scalar + Number,
                $ty: VectorStorage<Elem = Sc>,
            {
                fn div_assign(&mut self, rhs: Sc) {
                    for i in 0..self.size() {
                        let value = self.get(i) / rhs;
                        self.set(i, value);
                    }
                }
            }
        )+
    };
}

macro_rules! matrix_assign_ops {
    ($( [$($gen:tt)*] $ty:ty; )+) => {
        $(
            /// Element-wise addition.
            ///
            /// # Panics
            ///
            /// Panics if `rhs` fails a run-time shape check. Use
            /// [`MatrixStorage::try_add_assign`] to handle that case.
            impl<$($gen)*, E> AddAssign<E> for $ty
            where
                ElemOf<$ty>: Number,
                E: MatrixExpr<Elem = ElemOf<$ty>>,
                E::Rows: SameDim<RowsOf<$ty>>,
                E::Cols: SameDim<ColsOf<$ty>>,
            {
                #[track_caller]
                fn add_assign(&mut self, rhs: E) {
                    if let Err(e) = self.try_add_assign(rhs) {
                        panic!("{e}");
                    }
                }
            }

            /// Element-wise subtraction.
            ///
            /// # Panics
            ///
            /// Panics if `rhs` fails a run-time shape check. Use
            /// [`MatrixStorage::try_sub_assign`] to handle that case.
            impl<$($gen)*, E> SubAssign<E> for $ty
            where
                ElemOf<$ty>: Number,
                E: MatrixExpr<Elem = ElemOf<$ty>>,
                E::Rows: SameDim<RowsOf<$ty>>,
                E::Cols: SameDim<ColsOf<$ty>>,
            {
                #[track_caller]
                fn sub_assign(&mut self, rhs: E) {
                    if let Err(e) = self.try_sub_assign(rhs) {
                        panic!("{e}");
                    }
                }
            }

            impl<$($gen)*, Sc> MulAssign<Sc> for $ty
            where
                Sc: Scalar + Number,
                $ty: MatrixStorage<Elem = Sc>,
            {
                fn mul_assign(&mut self, rhs: Sc) {
                    for (col, row) in iproduct!(0..self.cols(), 0..self.rows()) {
                        let value = self.get(row, col) * rhs;
                        self.set(row, col, value);
                    }
                }
            }

            impl<$($gen)*, Sc> DivAssign<Sc> for $ty
            where
                Sc: Scalar + Number,
                $ty: MatrixStorage<Elem = Sc>,
            {
                fn div_assign(&mut self, rhs: Sc) {
                    for (col, row) in iproduct!(0..self.cols(), 0..self.rows()) {
                        let value = self.get(row, col) / rhs;
                        self.set(row, col, value);
                    }
                }
            }
        )+
    };
}

vector_assign_ops! {
    [T: Copy, const N: usize] Vector<T, N>;
    [T: Copy] DVector<T>;
}

matrix_assign_ops! {
    [T: Copy, const R: usize, const C: usize] Matrix<T, R, C>;
    [T: Copy] DMatrix<T>;
}
