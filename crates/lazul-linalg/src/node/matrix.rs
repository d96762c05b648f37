use crate::{
    error::{self, Result},
    BinaryOp, ExprTraits, IntoOperand, MatrixExpr, Number, OperandOf, SameDim, Scalar, UnaryOp,
    VectorExpr, Zero,
};

/// Elementwise unary operation on a matrix expression.
#[derive(Debug, Clone, Copy)]
pub struct MatUnary<E, Op> {
    sub: E,
    op: Op,
}

impl<E, Op> MatUnary<E, Op> {
    #[inline]
    pub fn new(sub: E, op: Op) -> Self {
        Self { sub, op }
    }

    #[inline]
    pub fn sub(&self) -> &E {
        &self.sub
    }
}

impl<E: MatrixExpr, Op> ExprTraits for MatUnary<E, Op> {
    type Elem = E::Elem;
    const RANK: usize = 2;
}

impl<E, Op> MatrixExpr for MatUnary<E, Op>
where
    E: MatrixExpr,
    Op: UnaryOp<E::Elem>,
{
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.sub.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.sub.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        self.op.apply(self.sub.get(row, col))
    }

    fn validate(&self) -> Result<()> {
        self.sub.validate()
    }
}

/// Elementwise binary operation on two matrix expressions of equal shape.
#[derive(Debug, Clone, Copy)]
pub struct MatBinary<L, R, Op> {
    left: L,
    right: R,
    op: Op,
}

impl<L, R, Op> MatBinary<L, R, Op> {
    #[inline]
    pub fn new(left: L, right: R, op: Op) -> Self {
        Self { left, right, op }
    }

    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: MatrixExpr, R, Op> ExprTraits for MatBinary<L, R, Op> {
    type Elem = L::Elem;
    const RANK: usize = 2;
}

impl<L, R, Op> MatrixExpr for MatBinary<L, R, Op>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Rows: SameDim<R::Rows>,
    L::Cols: SameDim<R::Cols>,
    Op: BinaryOp<L::Elem>,
{
    type Rows = <L::Rows as SameDim<R::Rows>>::Output;
    type Cols = <L::Cols as SameDim<R::Cols>>::Output;

    #[inline]
    fn rows(&self) -> usize {
        self.left.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.left.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        self.op.apply(self.left.get(row, col), self.right.get(row, col))
    }

    fn validate(&self) -> Result<()> {
        self.left.validate()?;
        self.right.validate()?;
        error::check_shape(
            Op::NAME,
            (self.left.rows(), self.left.cols()),
            (self.right.rows(), self.right.cols()),
        )
    }
}

/// Elementwise operation between a matrix expression and a scalar.
#[derive(Debug, Clone, Copy)]
pub struct MatScalar<E, S, Op> {
    matrix: E,
    scalar: S,
    op: Op,
}

impl<E, S, Op> MatScalar<E, S, Op> {
    #[inline]
    pub fn new(matrix: E, scalar: S, op: Op) -> Self {
        Self { matrix, scalar, op }
    }

    #[inline]
    pub fn matrix(&self) -> &E {
        &self.matrix
    }

    #[inline]
    pub fn scalar(&self) -> &S {
        &self.scalar
    }
}

impl<E: MatrixExpr, S, Op> ExprTraits for MatScalar<E, S, Op> {
    type Elem = E::Elem;
    const RANK: usize = 2;
}

impl<E, S, Op> MatrixExpr for MatScalar<E, S, Op>
where
    E: MatrixExpr<Elem = S>,
    S: Scalar,
    Op: BinaryOp<S>,
{
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.matrix.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.matrix.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        self.op.apply(self.matrix.get(row, col), self.scalar)
    }

    fn validate(&self) -> Result<()> {
        self.matrix.validate()
    }
}

/// Matrix * Matrix.
///
/// Every element of the product is a dot product of a row of the left operand and a column of the
/// right operand, computed when the element is requested.
///
/// The inner extents of fixed-size operands must agree:
///
/// ```compile_fail
/// # use lazul_linalg::*;
/// let a = Matrix::<i32, 2, 3>::ZERO;
/// let e = &a * &a;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatMul<L, R> {
    left: L,
    right: R,
}

impl<L, R> MatMul<L, R> {
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: MatrixExpr, R> ExprTraits for MatMul<L, R> {
    type Elem = L::Elem;
    const RANK: usize = 2;
}

impl<L, R> MatrixExpr for MatMul<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Cols: SameDim<R::Rows>,
    L::Elem: Number,
{
    type Rows = L::Rows;
    type Cols = R::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.left.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.right.cols()
    }

    fn get(&self, row: usize, col: usize) -> Self::Elem {
        (0..self.left.cols()).fold(L::Elem::ZERO, |acc, k| {
            acc + self.left.get(row, k) * self.right.get(k, col)
        })
    }

    fn validate(&self) -> Result<()> {
        self.left.validate()?;
        self.right.validate()?;
        error::check_size("matrix multiply", self.left.cols(), self.right.rows())
    }
}

/// Matrix * Column Vector.
#[derive(Debug, Clone, Copy)]
pub struct MatVec<M, V> {
    matrix: M,
    vector: V,
}

impl<M, V> MatVec<M, V> {
    #[inline]
    pub fn new(matrix: M, vector: V) -> Self {
        Self { matrix, vector }
    }

    #[inline]
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    #[inline]
    pub fn vector(&self) -> &V {
        &self.vector
    }
}

impl<M: MatrixExpr, V> ExprTraits for MatVec<M, V> {
    type Elem = M::Elem;
    const RANK: usize = 1;
}

impl<M, V> VectorExpr for MatVec<M, V>
where
    M: MatrixExpr,
    V: VectorExpr<Elem = M::Elem>,
    M::Cols: SameDim<V::Size>,
    M::Elem: Number,
{
    type Size = M::Rows;

    #[inline]
    fn size(&self) -> usize {
        self.matrix.rows()
    }

    fn get(&self, i: usize) -> Self::Elem {
        (0..self.matrix.cols()).fold(M::Elem::ZERO, |acc, k| {
            acc + self.matrix.get(i, k) * self.vector.get(k)
        })
    }

    fn validate(&self) -> Result<()> {
        self.matrix.validate()?;
        self.vector.validate()?;
        error::check_size("matrix-vector multiply", self.matrix.cols(), self.vector.size())
    }
}

/// A matrix expression with its rows and columns swapped.
#[derive(Debug, Clone, Copy)]
pub struct Transpose<E> {
    sub: E,
}

impl<E> Transpose<E> {
    #[inline]
    pub fn new(sub: E) -> Self {
        Self { sub }
    }

    #[inline]
    pub fn sub(&self) -> &E {
        &self.sub
    }
}

impl<E: MatrixExpr> ExprTraits for Transpose<E> {
    type Elem = E::Elem;
    const RANK: usize = 2;
}

impl<E: MatrixExpr> MatrixExpr for Transpose<E> {
    type Rows = E::Cols;
    type Cols = E::Rows;

    #[inline]
    fn rows(&self) -> usize {
        self.sub.cols()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.sub.rows()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        self.sub.get(col, row)
    }

    fn validate(&self) -> Result<()> {
        self.sub.validate()
    }
}

/// Lazily swaps the rows and columns of a matrix expression.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// let m = Matrix::from_rows([
///     [0, 1, 2],
///     [3, 4, 5],
/// ]);
/// let t = Matrix::from_expr(transpose(&m)).unwrap();
/// assert_eq!(t, Matrix::from_rows([
///     [0, 3],
///     [1, 4],
///     [2, 5],
/// ]));
/// ```
pub fn transpose<E>(matrix: E) -> Transpose<OperandOf<E>>
where
    E: IntoOperand,
    OperandOf<E>: MatrixExpr,
{
    Transpose::new(matrix.into_operand())
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn product_shapes() {
        let a = Matrix::<i32, 2, 3>::from_fn(|r, c| (r * 3 + c) as i32);
        let b = Matrix::<i32, 3, 4>::from_fn(|r, c| (r + c) as i32);
        let p = &a * &b;
        assert_eq!((p.rows(), p.cols()), (2, 4));
        assert_eq!(
            fixed_shape::<MatMul<Borrowed<Matrix<i32, 2, 3>>, Borrowed<Matrix<i32, 3, 4>>>>(),
            (Some(2), Some(4))
        );

        // row 1 of `a` is (3, 4, 5), column 2 of `b` is (2, 3, 4)
        assert_eq!(p.get(1, 2), 3 * 2 + 4 * 3 + 5 * 4);
    }

    #[test]
    fn matrix_vector() {
        let m = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]);
        let v = vec2(1, -1);
        let mv = &m * &v;
        assert_eq!(mv.size(), 3);
        assert_eq!(Vector::from_expr(mv).unwrap(), vec3(-1, -1, -1));
    }

    #[test]
    fn transposed() {
        let m = DMatrix::from_rows(&[[1, 2, 3]]);
        let t = transpose(&m);
        assert_eq!((t.rows(), t.cols()), (3, 1));
        assert_eq!(t.get(2, 0), 3);
    }

    #[test]
    fn elementwise_and_scalar() {
        let a = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let e = -(&a + &a) / 2.0_f64;
        assert_eq!(e.get(1, 0), -3.0);
        assert_eq!(*e.scalar(), 2.0);
    }

    #[test]
    fn dynamic_inner_dimension_mismatch() {
        let a = DMatrix::<f32>::zeros(2, 3);
        let b = DMatrix::<f32>::zeros(2, 3);
        let p = &a * &b;
        assert_eq!(
            p.validate(),
            Err(Error::SizeMismatch {
                op: "matrix multiply",
                expected: 3,
                found: 2,
            })
        );

        let t = transpose(&b);
        let s = &a - &t;
        assert_eq!(
            s.validate(),
            Err(Error::ShapeMismatch {
                op: "subtract",
                expected_rows: 2,
                expected_cols: 3,
                found_rows: 3,
                found_cols: 2,
            })
        );
    }
}
