#![allow(non_snake_case)]

use crate::algebra::{
    Adjoint, FloatT, Matrix, MatrixShape, MatrixVectorMultiply, VectorMath, XgemmScalar,
};

// y = βy, ahead of an accumulating product
fn prescale<T: FloatT>(y: &mut [T], β: T) {
    if β == T::zero() {
        y.set(T::zero());
    } else if β != T::one() {
        y.scale(β);
    }
}

impl<T> MatrixVectorMultiply for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements y = αA*x + βy
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        assert!(self.n == x.len() && self.m == y.len());

        prescale(y, β);
        let (m, k) = (self.m, self.n);
        T::xgemm(MatrixShape::N, MatrixShape::N, m, 1, k, α, &self.data, x, y);
    }
}

impl<'a, T> MatrixVectorMultiply for Adjoint<'a, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    // implements y = αA'*x + βy
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        let A = self.src; //NB: size of A, not A'
        assert!(A.m == x.len() && A.n == y.len());

        prescale(y, β);
        let (m, k) = (A.n, A.m);
        T::xgemm(MatrixShape::T, MatrixShape::N, m, 1, k, α, &A.data, x, y);
    }
}

#[test]
fn test_gemv() {
    let (m, n) = (2, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let A = Matrix::new_from_slice((m, n), &a);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&mut y, &x, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);

    let x = vec![1., 2.];
    let mut y = vec![-1., -2., -3.];
    A.t().gemv(&mut y, &x, 2.0, 3.0);
    assert!(y == [15.0, 18.0, 21.0]);
}

#[test]
fn test_gemv_overwrites_nonfinite() {
    // β = 0 discards whatever y held
    let A = Matrix::from(&[[1., 2.], [3., 4.]]);
    let mut y = vec![f64::NAN, f64::INFINITY];
    A.gemv(&mut y, &[1., 1.], 1.0, 0.0);
    assert_eq!(y, [3., 7.]);
}

#[test]
fn test_gemv_empty() {
    // zero rows: A'x maps an empty vector to zeros
    let A = Matrix::<f64>::zeros((0, 2));
    let mut y = vec![5., 5.];
    A.t().gemv(&mut y, &[], 1.0, 0.0);
    assert_eq!(y, [0., 0.]);

    let mut y: Vec<f64> = vec![];
    A.gemv(&mut y, &[1., 2.], 1.0, 0.0);
    assert!(y.is_empty());
}
