//! Approximate comparisons of storage types, via the [`approx`] crate.
//!
//! Dynamically-sized storage only compares equal to storage of the same shape.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{DMatrix, DVector, Matrix, Vector};

trait Elements {
    type Elem;

    fn shape(&self) -> (usize, usize);
    fn elements(&self) -> &[Self::Elem];
}

impl<T, const N: usize> Elements for Vector<T, N> {
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        (N, 1)
    }

    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Elements for DVector<T> {
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        (self.len(), 1)
    }

    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const R: usize, const C: usize> Elements for Matrix<T, R, C> {
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Elements for DMatrix<T> {
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        self.shape()
    }

    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

fn zip_all<S, F>(a: &S, b: &S, mut f: F) -> bool
where
    S: Elements,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    a.shape() == b.shape() && a.elements().iter().zip(b.elements()).all(|(a, b)| f(a, b))
}

macro_rules! approx_impls {
    ( $( [$($generics:tt)*] $ty:ty; )+ ) => {
        $(
            impl<T: AbsDiffEq, $($generics)*> AbsDiffEq for $ty
            where
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    zip_all(self, other, |a, b| a.abs_diff_eq(b, epsilon))
                }
            }

            impl<T: RelativeEq, $($generics)*> RelativeEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    zip_all(self, other, |a, b| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl<T: UlpsEq, $($generics)*> UlpsEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    zip_all(self, other, |a, b| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )+
    };
}

approx_impls! {
    [const N: usize] Vector<T, N>;
    [] DVector<T>;
    [const R: usize, const C: usize] Matrix<T, R, C>;
    [] DMatrix<T>;
}

#[cfg(test)]
mod tests {
    use ::approx::{assert_relative_eq, assert_relative_ne, assert_ulps_eq};

    use crate::*;

    #[test]
    fn vectors() {
        assert_relative_eq!(vec2(0.1_f32 + 0.2, 1.0), vec2(0.3, 1.0));
        assert_relative_ne!(vec2(0.1_f32, 1.0), vec2(0.2, 1.0));
        assert_ulps_eq!(
            DVector::from(vec![1.0_f64 / 3.0 * 3.0]),
            DVector::from(vec![1.0])
        );
    }

    #[test]
    fn shapes_must_agree() {
        let a = DVector::from(vec![0.0_f32; 2]);
        let b = DVector::from(vec![0.0_f32; 3]);
        assert_relative_ne!(a, b);

        let m = DMatrix::<f32>::zeros(2, 3);
        let n = DMatrix::<f32>::zeros(3, 2);
        assert_relative_ne!(m, n);
    }

    #[test]
    fn matrices() {
        let r = Mat2::from_rows([[0.0_f64, -1.0], [1.0, 0.0]]);
        let r4 = Matrix::from_expr(&r * &r * &r * &r).unwrap();
        assert_relative_eq!(r4, Mat2::IDENTITY);
    }
}
