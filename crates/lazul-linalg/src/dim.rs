//! Type-level extents.
//!
//! Every vector length and matrix row/column count is described by a [`Dim`]: either
//! [`Const<N>`], known at compile time, or [`Dyn`], only known at run time. Shape requirements of
//! the expression nodes are expressed as trait bounds on these types, so a mismatch between two
//! statically-sized operands is a type error, while anything involving a [`Dyn`] extent is checked
//! when the expression is evaluated.

use std::fmt;

/// An extent of a vector or matrix expression.
pub trait Dim: Copy + fmt::Debug + Send + Sync + 'static {
    /// The extent, if it is known statically.
    const FIXED: Option<usize>;
}

/// An extent of exactly `N`, known at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// An extent that is only known at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dyn;

impl<const N: usize> Dim for Const<N> {
    const FIXED: Option<usize> = Some(N);
}

impl Dim for Dyn {
    const FIXED: Option<usize> = None;
}

/// Extents that may describe the same length.
///
/// This is implemented for every pair of dimensions *except* two [`Const`]s of different values,
/// which is how elementwise operations on mismatched fixed-size operands are rejected. `Output` is
/// the more precise of the two: if either side is a [`Const`], so is the result.
///
/// ```
/// # use lazul_linalg::*;
/// let d = DVector::from(vec![1, 2]);
/// assert_eq!(Vector::from_expr(vec2(1, 2) + &d).unwrap(), vec2(2, 4));
/// ```
///
/// ```compile_fail
/// # use lazul_linalg::*;
/// let e = vec2(1, 2) + vec3(1, 2, 3);
/// ```
pub trait SameDim<D: Dim>: Dim {
    type Output: Dim;
}

impl<const N: usize> SameDim<Const<N>> for Const<N> {
    type Output = Const<N>;
}

impl<const N: usize> SameDim<Dyn> for Const<N> {
    type Output = Const<N>;
}

impl<const N: usize> SameDim<Const<N>> for Dyn {
    type Output = Const<N>;
}

impl SameDim<Dyn> for Dyn {
    type Output = Dyn;
}

/// Extents that may be exactly `N` long.
///
/// Implemented by [`Const<N>`] and [`Dyn`]; used by operations that only make sense for a
/// particular length (cross products, 2D and 3D coordinate conversions).
pub trait DimOf<const N: usize>: Dim {}

impl<const N: usize> DimOf<N> for Const<N> {}

impl<const N: usize> DimOf<N> for Dyn {}

#[cfg(test)]
mod tests {
    use super::*;

    fn unified<A: SameDim<B>, B: Dim>() -> Option<usize> {
        <A::Output as Dim>::FIXED
    }

    fn three<D: DimOf<3>>() -> Option<usize> {
        D::FIXED
    }

    #[test]
    fn fixed() {
        assert_eq!(Const::<4>::FIXED, Some(4));
        assert_eq!(Dyn::FIXED, None);
    }

    #[test]
    fn same_dim_prefers_static_extent() {
        assert_eq!(unified::<Const<3>, Const<3>>(), Some(3));
        assert_eq!(unified::<Const<3>, Dyn>(), Some(3));
        assert_eq!(unified::<Dyn, Const<2>>(), Some(2));
        assert_eq!(unified::<Dyn, Dyn>(), None);
    }

    #[test]
    fn dim_of() {
        assert_eq!(three::<Const<3>>(), Some(3));
        assert_eq!(three::<Dyn>(), None);
    }
}
