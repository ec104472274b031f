mod core;
mod gemv;
mod syrk;

mod kernels;
pub use kernels::FaerFloatT;
pub(crate) use kernels::{XgemmScalar, XpotrfScalar};

mod blaslike_traits;
pub(crate) use blaslike_traits::*;
mod cholesky;
pub(crate) use cholesky::*;
