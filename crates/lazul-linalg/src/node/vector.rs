use crate::{
    error::{self, Result},
    BinaryOp, ExprTraits, SameDim, Scalar, UnaryOp, VectorExpr,
};

/// Elementwise unary operation on a vector expression.
#[derive(Debug, Clone, Copy)]
pub struct VecUnary<E, Op> {
    sub: E,
    op: Op,
}

impl<E, Op> VecUnary<E, Op> {
    #[inline]
    pub fn new(sub: E, op: Op) -> Self {
        Self { sub, op }
    }

    /// Returns the operand.
    #[inline]
    pub fn sub(&self) -> &E {
        &self.sub
    }
}

impl<E: VectorExpr, Op> ExprTraits for VecUnary<E, Op> {
    type Elem = E::Elem;
    const RANK: usize = 1;
}

impl<E, Op> VectorExpr for VecUnary<E, Op>
where
    E: VectorExpr,
    Op: UnaryOp<E::Elem>,
{
    type Size = E::Size;

    #[inline]
    fn size(&self) -> usize {
        self.sub.size()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        self.op.apply(self.sub.get(i))
    }

    fn validate(&self) -> Result<()> {
        self.sub.validate()
    }
}

/// Elementwise binary operation on two vector expressions of equal length.
#[derive(Debug, Clone, Copy)]
pub struct VecBinary<L, R, Op> {
    left: L,
    right: R,
    op: Op,
}

impl<L, R, Op> VecBinary<L, R, Op> {
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

impl<L: VectorExpr, R, Op> ExprTraits for VecBinary<L, R, Op> {
    type Elem = L::Elem;
    const RANK: usize = 1;
}

impl<L, R, Op> VectorExpr for VecBinary<L, R, Op>
where
    L: VectorExpr,
    R: VectorExpr<Elem = L::Elem>,
    L::Size: SameDim<R::Size>,
    Op: BinaryOp<L::Elem>,
{
    type Size = <L::Size as SameDim<R::Size>>::Output;

    #[inline]
    fn size(&self) -> usize {
        self.left.size()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        self.op.apply(self.left.get(i), self.right.get(i))
    }

    fn validate(&self) -> Result<()> {
        self.left.validate()?;
        self.right.validate()?;
        error::check_size(Op::NAME, self.left.size(), self.right.size())
    }
}

/// Elementwise operation between a vector expression and a scalar.
#[derive(Debug, Clone, Copy)]
pub struct VecScalar<E, S, Op> {
    vector: E,
    scalar: S,
    op: Op,
}

impl<E, S, Op> VecScalar<E, S, Op> {
    #[inline]
    pub fn new(vector: E, scalar: S, op: Op) -> Self {
        Self { vector, scalar, op }
    }

    #[inline]
    pub fn vector(&self) -> &E {
        &self.vector
    }

    #[inline]
    pub fn scalar(&self) -> &S {
        &self.scalar
    }
}

impl<E: VectorExpr, S, Op> ExprTraits for VecScalar<E, S, Op> {
    type Elem = E::Elem;
    const RANK: usize = 1;
}

impl<E, S, Op> VectorExpr for VecScalar<E, S, Op>
where
    E: VectorExpr<Elem = S>,
    S: Scalar,
    Op: BinaryOp<S>,
{
    type Size = E::Size;

    #[inline]
    fn size(&self) -> usize {
        self.vector.size()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        self.op.apply(self.vector.get(i), self.scalar)
    }

    fn validate(&self) -> Result<()> {
        self.vector.validate()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn static_size<E: VectorExpr>(_: &E) -> Option<usize> {
        E::Size::FIXED
    }

    #[test]
    fn elementwise() {
        let a = vec3(1, 2, 3);
        let b = vec3(10, 20, 30);

        let sum = &a + &b;
        assert_eq!(sum.size(), 3);
        assert_eq!(sum.get(0), 11);
        assert_eq!(sum.get(2), 33);

        let neg = -&a;
        assert_eq!(neg.get(1), -2);

        let scaled = &b / 10;
        assert_eq!(scaled.get(2), 3);
        assert_eq!(*scaled.scalar(), 10);
    }

    #[test]
    fn nested() {
        let a = vec2(1.0, 2.0);
        let b = vec2(3.0, 5.0);
        let e = (&a + &b) * 2.0 - -&a;
        assert_eq!(Vector::from_expr(e).unwrap(), vec2(9.0, 16.0));
    }

    #[test]
    fn dynamic_size_mismatch() {
        let a = DVector::from(vec![1, 2, 3]);
        let b = DVector::from(vec![1, 2]);
        let e = &a + &b;
        assert_eq!(
            e.validate(),
            Err(Error::SizeMismatch {
                op: "add",
                expected: 3,
                found: 2
            })
        );

        let f = vec3(1, 1, 1) - &a;
        assert_eq!(static_size(&f), Some(3));
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn mismatch_deep_in_the_tree() {
        let a = DVector::from(vec![1.0, 2.0]);
        let b = DVector::from(vec![1.0, 2.0, 3.0]);
        let e = -(&a - &b) * 4.0;
        assert!(matches!(
            e.validate(),
            Err(Error::SizeMismatch { op: "subtract", .. })
        ));
    }
}
