#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// All internal matrix representations in the default
// solver and math implementations are dense and stored
// in column major format, as is the API.

/// Dense matrix in column major format
///
/// __Example usage__ : To construct the 3 x 2 matrix
/// ```text
/// A = [1.  4.]
///     [2.  5.]
///     [3.  6.]
/// ```
///
/// ```
/// use ipqp::algebra::Matrix;
///
/// let A : Matrix<f64> = Matrix::new_from_slice(
///     (3, 2),                      // size
///     &[1., 2., 3., 4., 5., 6.],   // data (column major)
/// );
///
/// // rows can also be given directly as a nested array
/// let B = Matrix::from(&[
///     [1., 4.],
///     [2., 5.],
///     [3., 6.],
/// ]);
///
/// assert_eq!(A, B);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format.
    ///
    /// This field should have length `m*n`.
    pub data: Vec<T>,
}

/// Adjoint of a matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}
