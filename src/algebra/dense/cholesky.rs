#![allow(non_snake_case)]

use crate::algebra::{
    DenseFactorizationError, FactorCholesky, FloatT, Matrix, ShapedMatrix, XpotrfScalar,
};

pub(crate) struct CholeskyEngine<T> {
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        Self { L }
    }
}

impl<T> FactorCholesky for CholeskyEngine<T>
where
    T: FloatT,
{
    type T = T;
    fn factor(&mut self, A: &Matrix<T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() || !A.is_square() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        if !A.is_finite() {
            return Err(DenseFactorizationError::Cholesky);
        }

        // reads triu of A, writes the lower triangular factor
        let n = A.nrows();
        if !T::xpotrf(n, &A.data, self.L.data_mut()) {
            return Err(DenseFactorizationError::Cholesky);
        }

        Ok(())
    }

    fn solve(&self, b: &mut [T]) {
        let n = self.L.nrows();
        assert_eq!(b.len(), n);
        T::xpotrs(n, &self.L.data, b);
    }
}
