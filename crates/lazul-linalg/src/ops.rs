//! Operator overloads building expression nodes.
//!
//! Operators never compute anything: `&a + &b` returns a [`VecBinary`] node borrowing `a` and
//! `b`, `a * b` returns a node owning both. Every storage and node type gets the same set of
//! operators, by value and by reference, through the macros in this module.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{
    operand::capture, Cross, DMatrix, DVector, Divide, IntoOperand, MatBinary, MatMul, MatScalar,
    MatUnary, MatVec, Matrix, MatrixExpr, Minus, Negate, OperandOf, Plus, Scalar, Times,
    Transpose, VecBinary, VecScalar, VecUnary, Vector, VectorExpr,
};

/// Right-hand side of a `*` whose left-hand side is a matrix expression.
///
/// A matrix can be multiplied by another matrix, by a column vector, or by a scalar, and each of
/// those yields a different node. Dispatching on the right-hand side through this trait lets all
/// three share a single [`Mul`] impl per matrix type.
pub trait MatrixMulRhs<Lhs> {
    type Output;

    /// Builds the node for `lhs * self`.
    fn mul_matrix(self, lhs: Lhs) -> Self::Output;
}

macro_rules! vector_ops {
    ($( [$($gen:tt)*] $ty:ty; )+) => {
        capture! {
            $( [$($gen)*] $ty; )+
        }

        $(
            vector_ops!(@impl [$($gen)*] $ty);
            vector_ops!(@impl ['o, $($gen)*] &'o $ty);
        )+
    };
    (@impl [$($gen:tt)*] $ty:ty) => {
        /// Element-wise negation.
        impl<$($gen)*> Neg for $ty
        where
            $ty: IntoOperand,
            VecUnary<OperandOf<$ty>, Negate>: VectorExpr,
        {
            type Output = VecUnary<OperandOf<$ty>, Negate>;

            #[inline]
            fn neg(self) -> Self::Output {
                VecUnary::new(self.into_operand(), Negate)
            }
        }

        /// Element-wise addition.
        impl<$($gen)*, Rhs> Add<Rhs> for $ty
        where
            $ty: IntoOperand,
            Rhs: IntoOperand,
            VecBinary<OperandOf<$ty>, OperandOf<Rhs>, Plus>: VectorExpr,
        {
            type Output = VecBinary<OperandOf<$ty>, OperandOf<Rhs>, Plus>;

            #[inline]
            fn add(self, rhs: Rhs) -> Self::Output {
                VecBinary::new(self.into_operand(), rhs.into_operand(), Plus)
            }
        }

        /// Element-wise subtraction.
        impl<$($gen)*, Rhs> Sub<Rhs> for $ty
        where
            $ty: IntoOperand,
            Rhs: IntoOperand,
            VecBinary<OperandOf<$ty>, OperandOf<Rhs>, Minus>: VectorExpr,
        {
            type Output = VecBinary<OperandOf<$ty>, OperandOf<Rhs>, Minus>;

            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                VecBinary::new(self.into_operand(), rhs.into_operand(), Minus)
            }
        }

        /// Vector * Scalar.
        impl<$($gen)*, Sc> Mul<Sc> for $ty
        where
            $ty: IntoOperand,
            Sc: Scalar,
            VecScalar<OperandOf<$ty>, Sc, Times>: VectorExpr,
        {
            type Output = VecScalar<OperandOf<$ty>, Sc, Times>;

            #[inline]
            fn mul(self, rhs: Sc) -> Self::Output {
                VecScalar::new(self.into_operand(), rhs, Times)
            }
        }

        /// Vector / Scalar.
        impl<$($gen)*, Sc> Div<Sc> for $ty
        where
            $ty: IntoOperand,
            Sc: Scalar,
            VecScalar<OperandOf<$ty>, Sc, Divide>: VectorExpr,
        {
            type Output = VecScalar<OperandOf<$ty>, Sc, Divide>;

            #[inline]
            fn div(self, rhs: Sc) -> Self::Output {
                VecScalar::new(self.into_operand(), rhs, Divide)
            }
        }

        /// Matrix * Column Vector.
        impl<$($gen)*, Lhs> MatrixMulRhs<Lhs> for $ty
        where
            $ty: IntoOperand,
            MatVec<Lhs, OperandOf<$ty>>: VectorExpr,
        {
            type Output = MatVec<Lhs, OperandOf<$ty>>;

            #[inline]
            fn mul_matrix(self, lhs: Lhs) -> Self::Output {
                MatVec::new(lhs, self.into_operand())
            }
        }
    };
}

macro_rules! matrix_ops {
    ($( [$($gen:tt)*] $ty:ty; )+) => {
        capture! {
            $( [$($gen)*] $ty; )+
        }

        $(
            matrix_ops!(@impl [$($gen)*] $ty);
            matrix_ops!(@impl ['o, $($gen)*] &'o $ty);
        )+
    };
    (@impl [$($gen:tt)*] $ty:ty) => {
        /// Element-wise negation.
        impl<$($gen)*> Neg for $ty
        where
            $ty: IntoOperand,
            MatUnary<OperandOf<$ty>, Negate>: MatrixExpr,
        {
            type Output = MatUnary<OperandOf<$ty>, Negate>;

            #[inline]
            fn neg(self) -> Self::Output {
                MatUnary::new(self.into_operand(), Negate)
            }
        }

        /// Element-wise addition.
        impl<$($gen)*, Rhs> Add<Rhs> for $ty
        where
            $ty: IntoOperand,
            Rhs: IntoOperand,
            MatBinary<OperandOf<$ty>, OperandOf<Rhs>, Plus>: MatrixExpr,
        {
            type Output = MatBinary<OperandOf<$ty>, OperandOf<Rhs>, Plus>;

            #[inline]
            fn add(self, rhs: Rhs) -> Self::Output {
                MatBinary::new(self.into_operand(), rhs.into_operand(), Plus)
            }
        }

        /// Element-wise subtraction.
        impl<$($gen)*, Rhs> Sub<Rhs> for $ty
        where
            $ty: IntoOperand,
            Rhs: IntoOperand,
            MatBinary<OperandOf<$ty>, OperandOf<Rhs>, Minus>: MatrixExpr,
        {
            type Output = MatBinary<OperandOf<$ty>, OperandOf<Rhs>, Minus>;

            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                MatBinary::new(self.into_operand(), rhs.into_operand(), Minus)
            }
        }

        /// Matrix * (Matrix | Column Vector | Scalar), see [`MatrixMulRhs`].
        impl<$($gen)*, Rhs> Mul<Rhs> for $ty
        where
            $ty: IntoOperand,
            Rhs: MatrixMulRhs<OperandOf<$ty>>,
        {
            type Output = Rhs::Output;

            #[inline]
            fn mul(self, rhs: Rhs) -> Self::Output {
                rhs.mul_matrix(self.into_operand())
            }
        }

        /// Matrix / Scalar.
        impl<$($gen)*, Sc> Div<Sc> for $ty
        where
            $ty: IntoOperand,
            Sc: Scalar,
            MatScalar<OperandOf<$ty>, Sc, Divide>: MatrixExpr,
        {
            type Output = MatScalar<OperandOf<$ty>, Sc, Divide>;

            #[inline]
            fn div(self, rhs: Sc) -> Self::Output {
                MatScalar::new(self.into_operand(), rhs, Divide)
            }
        }

        /// Matrix * Matrix.
        impl<$($gen)*, Lhs> MatrixMulRhs<Lhs> for $ty
        where
            $ty: IntoOperand,
            MatMul<Lhs, OperandOf<$ty>>: MatrixExpr,
        {
            type Output = MatMul<Lhs, OperandOf<$ty>>;

            #[inline]
            fn mul_matrix(self, lhs: Lhs) -> Self::Output {
                MatMul::new(lhs, self.into_operand())
            }
        }
    };
}

macro_rules! scalar_rhs {
    ($($types:ty),+) => {
        $(
            /// Matrix * Scalar.
            impl<Lhs> MatrixMulRhs<Lhs> for $types
            where
                MatScalar<Lhs, $types, Times>: MatrixExpr,
            {
                type Output = MatScalar<Lhs, $types, Times>;

                #[inline]
                fn mul_matrix(self, lhs: Lhs) -> Self::Output {
                    MatScalar::new(lhs, self, Times)
                }
            }
        )+
    };
}
scalar_rhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

vector_ops! {
    [T, const N: usize] Vector<T, N>;
    [T] DVector<T>;
    [E, Op] VecUnary<E, Op>;
    [L, R, Op] VecBinary<L, R, Op>;
    [E, S, Op] VecScalar<E, S, Op>;
    [M, V] MatVec<M, V>;
    [L, R] Cross<L, R>;
}

matrix_ops! {
    [T, const R: usize, const C: usize] Matrix<T, R, C>;
    [T] DMatrix<T>;
    [E, Op] MatUnary<E, Op>;
    [L, R, Op] MatBinary<L, R, Op>;
    [E, S, Op] MatScalar<E, S, Op>;
    [L, R] MatMul<L, R>;
    [E] Transpose<E>;
}
