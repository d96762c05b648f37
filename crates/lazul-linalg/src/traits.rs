//! Numeric element traits.

use std::ops;

/// Types that support the trigonometric functions needed by the coordinate conversions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Four-quadrant arctangent of `self` (the *y* coordinate) and `other` (the *x* coordinate).
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the element bound of every node that needs more than a single elementwise operation
/// (matrix products, cross products, reductions).
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// [`Float::EPSILON`] is the tolerance used by the coordinate conversions when the caller does not
/// pass one explicitly.
pub trait Float: Number + Trig + Sqrt + PartialOrd {
    /// Machine epsilon of the type.
    const EPSILON: Self;
    /// A quarter turn (π/2) in radians.
    const FRAC_PI_2: Self;
}

macro_rules! integers {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! floats {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $types {
                const EPSILON: Self = $types::EPSILON;
                const FRAC_PI_2: Self = std::$types::consts::FRAC_PI_2;
            }
        )+
    };
}
floats!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_turn<T: Float>() -> T {
        T::ONE.atan2(T::ZERO)
    }

    #[test]
    fn constants() {
        assert_eq!(i32::ZERO, 0);
        assert_eq!(u8::ONE, 1);
        assert_eq!(<f64 as Float>::EPSILON, f64::EPSILON);
        assert_eq!(quarter_turn::<f32>(), <f32 as Float>::FRAC_PI_2);
        assert_eq!(quarter_turn::<f64>(), <f64 as Float>::FRAC_PI_2);
    }

    #[test]
    fn trig_dispatches_to_inherent_methods() {
        assert_eq!(Trig::sin(0.5f64), 0.5f64.sin());
        assert_eq!(Trig::cos(0.5f32), 0.5f32.cos());
        assert_eq!(Sqrt::sqrt(16.0f64), 4.0);
    }
}
