#![allow(non_snake_case)]
use crate::algebra::{DenseFactorizationError, DenseMatrix, Matrix};

pub(crate) trait FactorCholesky {
    type T;
    // computes the Cholesky decomposition.  Only the upper
    // part of the input A will be referenced. The Cholesky factor
    // is stored in self.L
    fn factor(&mut self, A: &Matrix<Self::T>) -> Result<(), DenseFactorizationError>;

    // Solve Ax = b using the factor from the most recent call
    // to `factor`.  b is modified in place and stores x after call.
    fn solve(&self, b: &mut [Self::T]);
}

pub(crate) trait MultiplySYRK {
    type T;
    // self = αAA' + βself
    fn syrk<MATA>(&mut self, A: &MATA, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<T = Self::T>;
}
