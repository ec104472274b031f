//! Dense linear algebra used internally by the solver.
//!
//! This module provides the [`FloatT`](crate::algebra::FloatT) trait
//! on which the solver is generic, a column major dense
//! [`Matrix`](crate::algebra::Matrix) type for problem data, and
//! vector operations on slices via [`VectorMath`](crate::algebra::VectorMath).

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

// elementwise and matrix implementations
mod dense;
mod scalarmath;
mod vecmath;
pub(crate) use dense::*;
pub use dense::FaerFloatT;
