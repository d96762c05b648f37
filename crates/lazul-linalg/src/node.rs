//! Expression nodes.
//!
//! Nodes are created by the arithmetic operators and by functions like [`cross`] and
//! [`transpose`]. They compute nothing when built: every element is derived on demand from the
//! corresponding elements of their operands, which makes `get` a pure function that may be called
//! in any order, any number of times, from any thread.
//!
//! Elementwise nodes are generic over an *operation tag* (a zero-sized type like [`Plus`]), so a
//! single node type covers every elementwise operation of the same arity.

use std::ops;

mod cross;
mod matrix;
mod vector;

pub use cross::*;
pub use matrix::*;
pub use vector::*;

/// An elementwise operation with one argument.
pub trait UnaryOp<T>: Copy {
    /// Human-readable name of the operation, used in diagnostics.
    const NAME: &'static str;

    fn apply(&self, value: T) -> T;
}

/// An elementwise operation with two arguments.
pub trait BinaryOp<T>: Copy {
    /// Human-readable name of the operation, used in diagnostics.
    const NAME: &'static str;

    fn apply(&self, left: T, right: T) -> T;
}

/// Arithmetic negation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Negate;

/// Addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plus;

/// Subtraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minus;

/// Multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Times;

/// Division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Divide;

impl<T: ops::Neg<Output = T>> UnaryOp<T> for Negate {
    const NAME: &'static str = "negate";

    #[inline]
    fn apply(&self, value: T) -> T {
        -value
    }
}

macro_rules! binary_ops {
    ($($tag:ident: $bound:ident::$method:ident = $name:literal;)+) => {
        $(
            impl<T: ops::$bound<Output = T>> BinaryOp<T> for $tag {
                const NAME: &'static str = $name;

                #[inline]
                fn apply(&self, left: T, right: T) -> T {
                    ops::$bound::$method(left, right)
                }
            }
        )+
    };
}
binary_ops! {
    Plus: Add::add = "add";
    Minus: Sub::sub = "subtract";
    Times: Mul::mul = "multiply";
    Divide: Div::div = "divide";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(Negate.apply(3), -3);
        assert_eq!(Plus.apply(1.5, 2.0), 3.5);
        assert_eq!(Minus.apply(1, 2), -1);
        assert_eq!(Times.apply(3u8, 4), 12);
        assert_eq!(Divide.apply(9.0f32, 2.0), 4.5);
        assert_eq!(<Plus as BinaryOp<i32>>::NAME, "add");
    }
}
