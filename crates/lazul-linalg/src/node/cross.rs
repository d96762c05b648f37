use crate::{
    coord::permute,
    error::{self, Result},
    Const, DimOf, ExprTraits, IntoOperand, Number, OperandOf, VectorExpr,
};

/// Cross product of two 3D vector expressions.
///
/// Operands of a fixed length other than 3 are rejected at compile time. Operands of dynamic
/// length are checked by [`VectorExpr::validate`], before any element is computed.
#[derive(Debug, Clone, Copy)]
pub struct Cross<L, R> {
    left: L,
    right: R,
}

impl<L, R> Cross<L, R> {
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

impl<L: VectorExpr, R> ExprTraits for Cross<L, R> {
    type Elem = L::Elem;
    const RANK: usize = 1;
}

impl<L, R> VectorExpr for Cross<L, R>
where
    L: VectorExpr,
    R: VectorExpr<Elem = L::Elem>,
    L::Size: DimOf<3>,
    R::Size: DimOf<3>,
    L::Elem: Number,
{
    type Size = Const<3>;

    #[inline]
    fn size(&self) -> usize {
        3
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        let (_, j, k) = permute(i);
        self.left.get(j) * self.right.get(k) - self.left.get(k) * self.right.get(j)
    }

    fn validate(&self) -> Result<()> {
        self.left.validate()?;
        self.right.validate()?;
        error::check_size("cross", 3, self.left.size())?;
        error::check_size("cross", 3, self.right.size())
    }
}

/// Computes the cross product of two 3D vector expressions.
///
/// The result is a vector that is perpendicular to both `left` and `right`. Swapping the
/// arguments inverts its direction.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// let x = Vec3::<i32>::X;
/// let y = Vec3::<i32>::Y;
/// assert_eq!(Vector::from_expr(cross(&x, &y)).unwrap(), Vec3::Z);
/// assert_eq!(Vector::from_expr(cross(&y, &x)).unwrap(), vec3(0, 0, -1));
/// ```
///
/// Fixed-size operands of any other length don't compile:
///
/// ```compile_fail
/// # use lazul_linalg::*;
/// let e = cross(vec2(1, 0), vec3(0, 1, 0));
/// ```
pub fn cross<A, B>(left: A, right: B) -> Cross<OperandOf<A>, OperandOf<B>>
where
    A: IntoOperand,
    B: IntoOperand,
    Cross<OperandOf<A>, OperandOf<B>>: VectorExpr,
{
    Cross::new(left.into_operand(), right.into_operand())
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn unit_axes() {
        let x = Vec3::<f64>::X;
        let y = Vec3::<f64>::Y;
        let z = Vec3::<f64>::Z;
        assert_eq!(Vector::from_expr(cross(&x, &y)).unwrap(), z);
        assert_eq!(Vector::from_expr(cross(&y, &z)).unwrap(), x);
        assert_eq!(Vector::from_expr(cross(&z, &x)).unwrap(), y);
    }

    #[test]
    fn self_cross_vanishes() {
        let v = vec3(2, -7, 5);
        let c = cross(&v, &v);
        assert_eq!((c.get(0), c.get(1), c.get(2)), (0, 0, 0));
    }

    #[test]
    fn dynamic_operands() {
        let a = DVector::from(vec![1, 0, 0]);
        let b = vec3(0, 1, 0);
        let c = cross(&a, &b);
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.get(2), 1);

        let bad = DVector::from(vec![1, 2, 3, 4]);
        assert_eq!(
            cross(&bad, &b).validate(),
            Err(Error::SizeMismatch {
                op: "cross",
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn nested_operands() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        // (a + b) x (a - b) == -2 (a x b)
        let lhs = Vector::from_expr(cross(&a + &b, &a - &b)).unwrap();
        let rhs = Vector::from_expr(cross(&a, &b) * -2).unwrap();
        assert_eq!(lhs, rhs);
    }
}
