//! Operand capture.
//!
//! When an operator builds an expression node, each sub-expression is stored in the node either
//! as an [`Owned`] value or as a [`Borrowed`] reference. Which one is picked depends only on how
//! the operand is passed at the call site:
//!
//! - Values (temporaries, nodes returned by other operators, storage passed by value) are moved
//!   into the node and become [`Owned`].
//! - References (`&v`, `&node`) become [`Borrowed`]. The node then carries the lifetime of the
//!   reference, so it can't outlive the storage it reads from, and reads see the current contents
//!   of that storage when the node is evaluated.
//!
//! ```
//! # use lazul_linalg::*;
//! let a = vec3(1, 2, 3);
//! let b = vec3(4, 5, 6);
//!
//! let borrowed = &a + &b;
//! assert_eq!(borrowed.left().capture(), Capture::Borrowed);
//!
//! let owned = a + b;
//! assert_eq!(owned.left().capture(), Capture::Owned);
//! ```

use std::fmt;

use crate::{error::Result, ExprTraits, MatrixExpr, VectorExpr};

/// How an operand is held by an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The node owns the operand.
    Owned,
    /// The node refers to an operand owned elsewhere.
    Borrowed,
}

/// A sub-expression captured inside an expression node.
pub trait Operand: ExprTraits {
    const CAPTURE: Capture;

    /// Returns how `self` is captured.
    fn capture(&self) -> Capture {
        Self::CAPTURE
    }
}

/// Conversion of an operator argument into the [`Operand`] stored in a node.
///
/// Implemented by every storage and node type, once for values (yielding [`Owned`]) and once for
/// shared references (yielding [`Borrowed`]).
pub trait IntoOperand {
    type Operand: Operand;

    fn into_operand(self) -> Self::Operand;
}

/// The operand that `E` is captured as.
pub type OperandOf<E> = <E as IntoOperand>::Operand;

/// An operand owned by the expression node.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Owned<E>(E);

impl<E> Owned<E> {
    #[inline]
    pub fn new(expr: E) -> Self {
        Self(expr)
    }

    #[inline]
    pub fn get_ref(&self) -> &E {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// An operand borrowed from storage (or a node) that outlives the expression node.
///
/// Copying or moving a node holding a [`Borrowed`] operand copies the reference: both nodes keep
/// reading from the same referent.
pub struct Borrowed<'a, E: ?Sized>(&'a E);

impl<'a, E: ?Sized> Borrowed<'a, E> {
    #[inline]
    pub fn new(expr: &'a E) -> Self {
        Self(expr)
    }

    #[inline]
    pub fn get_ref(&self) -> &'a E {
        self.0
    }
}

impl<'a, E: ?Sized> Clone for Borrowed<'a, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E: ?Sized> Copy for Borrowed<'a, E> {}

impl<E: fmt::Debug> fmt::Debug for Owned<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Owned").field(&self.0).finish()
    }
}

impl<'a, E: fmt::Debug + ?Sized> fmt::Debug for Borrowed<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Borrowed").field(&self.0).finish()
    }
}

impl<E: ExprTraits> ExprTraits for Owned<E> {
    type Elem = E::Elem;
    const RANK: usize = E::RANK;
}

impl<'a, E: ExprTraits + ?Sized> ExprTraits for Borrowed<'a, E> {
    type Elem = E::Elem;
    const RANK: usize = E::RANK;
}

impl<E: ExprTraits> Operand for Owned<E> {
    const CAPTURE: Capture = Capture::Owned;
}

impl<'a, E: ExprTraits + ?Sized> Operand for Borrowed<'a, E> {
    const CAPTURE: Capture = Capture::Borrowed;
}

impl<E: ExprTraits> IntoOperand for Owned<E> {
    type Operand = Self;

    #[inline]
    fn into_operand(self) -> Self {
        self
    }
}

impl<'a, E: ExprTraits + ?Sized> IntoOperand for Borrowed<'a, E> {
    type Operand = Self;

    #[inline]
    fn into_operand(self) -> Self {
        self
    }
}

impl<E: VectorExpr> VectorExpr for Owned<E> {
    type Size = E::Size;

    #[inline]
    fn size(&self) -> usize {
        self.0.size()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        self.0.get(i)
    }

    fn validate(&self) -> Result<()> {
        self.0.validate()
    }
}

impl<'a, E: VectorExpr + ?Sized> VectorExpr for Borrowed<'a, E> {
    type Size = E::Size;

    #[inline]
    fn size(&self) -> usize {
        self.0.size()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        self.0.get(i)
    }

    fn validate(&self) -> Result<()> {
        self.0.validate()
    }
}

impl<E: MatrixExpr> MatrixExpr for Owned<E> {
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.0.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.0.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        self.0.get(row, col)
    }

    fn validate(&self) -> Result<()> {
        self.0.validate()
    }
}

impl<'a, E: MatrixExpr + ?Sized> MatrixExpr for Borrowed<'a, E> {
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.0.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.0.cols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Elem {
        self.0.get(row, col)
    }

    fn validate(&self) -> Result<()> {
        self.0.validate()
    }
}

/// Implements [`IntoOperand`] for a list of expression types, by value and by reference.
///
/// A blanket impl would overlap with the impls for [`Owned`] and [`Borrowed`], so every
/// expression type is listed explicitly.
macro_rules! capture {
    ($( [$($gen:tt)*] $ty:ty; )+) => {
        $(
            impl<$($gen)*> $crate::IntoOperand for $ty
            where
                $ty: $crate::ExprTraits,
            {
                type Operand = $crate::Owned<$ty>;

                #[inline]
                fn into_operand(self) -> Self::Operand {
                    $crate::Owned::new(self)
                }
            }

            impl<'o, $($gen)*> $crate::IntoOperand for &'o $ty
            where
                $ty: $crate::ExprTraits,
            {
                type Operand = $crate::Borrowed<'o, $ty>;

                #[inline]
                fn into_operand(self) -> Self::Operand {
                    $crate::Borrowed::new(self)
                }
            }
        )+
    };
}
pub(crate) use capture;

#[cfg(test)]
mod tests {
    use std::ptr;

    use crate::*;

    #[test]
    fn value_category_decides_capture() {
        let v = vec2(1.0f32, 2.0);
        assert_eq!((&v).into_operand().capture(), Capture::Borrowed);
        assert_eq!(v.into_operand().capture(), Capture::Owned);

        let d = DVector::from(vec![1, 2, 3]);
        let borrowed = (&d).into_operand();
        assert!(ptr::eq(borrowed.get_ref(), &d));
        assert_eq!(d.clone().into_operand().capture(), Capture::Owned);
    }

    #[test]
    fn copies_share_the_referent() {
        let v = vec3(1, 2, 3);
        let a = Borrowed::new(&v);
        let b = a;
        assert!(ptr::eq(a.get_ref(), b.get_ref()));
        assert_eq!(VectorExpr::get(&b, 1), 2);
    }

    #[test]
    fn owned_delegates() {
        let m = Owned::new(Mat2::<i32>::IDENTITY);
        assert_eq!(MatrixExpr::rows(&m), 2);
        assert_eq!(MatrixExpr::get(&m, 1, 1), 1);
        assert_eq!(MatrixExpr::get(&m, 0, 1), 0);
        assert_eq!(m.into_inner(), Mat2::IDENTITY);
    }
}
