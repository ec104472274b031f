use thiserror::Error;

/// Error type returned by dense matrix construction from raw data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFormatError {
    /// Data length does not agree with the matrix dimensions
    #[error("Data length {len} incompatible with matrix size {m}x{n}")]
    IncompatibleDimension { m: usize, n: usize, len: usize },
    /// Rows supplied to a row-wise constructor have different lengths
    #[error("Rows have inconsistent lengths")]
    RaggedRows,
}

/// Error type returned by dense factorization routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DenseFactorizationError {
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Matrix is not numerically positive definite or holds non-finite values
    #[error("Cholesky factorization failed")]
    Cholesky,
}
