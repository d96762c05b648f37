//! Vector and matrix arithmetic, evaluated lazily through expression nodes.
//!
//! # Overview
//!
//! Arithmetic operators on vectors and matrices don't compute anything. Instead, they build a
//! tree of lightweight expression nodes describing the computation:
//!
//! ```
//! # use lazul_linalg::*;
//! let a = Mat3::<f64>::IDENTITY;
//! let b = vec3(1.0, 2.0, 3.0);
//! let c = vec3(0.5, 0.5, 0.5);
//!
//! // `e` is a `VecBinary<MatVec<..>, VecScalar<..>, Minus>`, no element has been computed yet.
//! let e = &a * &b - &c * 2.0;
//!
//! // Evaluation happens in a single pass over the destination, without temporaries.
//! let mut out = Vec3::ZERO;
//! out.assign(e).unwrap();
//! assert_eq!(out, vec3(0.0, 1.0, 2.0));
//! ```
//!
//! Every node computes each element of its result from the corresponding elements of its
//! operands. Nodes are read-only views, and their element accessors are pure, so an expression
//! can be evaluated in any order (or in parallel, with the `rayon` feature).
//!
//! # Operands
//!
//! Operands passed by value (`a + b`, or a nested node) are moved into the node that uses them.
//! Operands passed by reference (`&a + &b`) are borrowed, and the node cannot outlive them. See
//! [`IntoOperand`] for details.
//!
//! # Shape Checking
//!
//! Vectors and matrices have either a fixed size, known at compile time ([`Vector`], [`Matrix`]),
//! or a dynamic size, known only at run time ([`DVector`], [`DMatrix`]). Expressions mixing
//! fixed-size operands of mismatched shape don't compile. When dynamically-sized operands are
//! involved, the whole expression tree is checked when it is evaluated, and a mismatch results in
//! an [`Error`] before anything has been written to the destination.
//!
//! # Features
//!
//! - `rayon`: enables `par_assign` on [`VectorStorage`] and [`MatrixStorage`], which evaluates
//!   independent elements on the rayon thread pool.

mod approx_eq;
mod builders;
mod coord;
mod dim;
mod dmatrix;
mod dvector;
mod error;
mod eval;
mod expr;
mod matrix;
mod node;
mod operand;
mod ops;
mod traits;
mod vector;

pub use builders::*;
pub use coord::*;
pub use dim::*;
pub use dmatrix::*;
pub use dvector::*;
pub use error::{Error, Result};
pub use eval::*;
pub use expr::*;
pub use matrix::*;
pub use node::*;
pub use operand::*;
pub use ops::*;
pub use traits::*;
pub use vector::*;
