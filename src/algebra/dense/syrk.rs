#![allow(non_snake_case)]

use crate::algebra::{
    DenseMatrix, FloatT, Matrix, MatrixShape, MultiplySYRK, ShapedMatrix, VectorMath,
    XgemmScalar,
};

impl<T> MultiplySYRK for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    // implements self = C = αA*A' + βC
    // The matrix input A can itself be
    // an Adjoint matrix, in which case the
    // result amounts to C = αA'*A + βC
    fn syrk<MATA>(&mut self, A: &MATA, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T = T>,
    {
        assert!(self.nrows() == A.nrows());
        assert!(self.ncols() == A.nrows());

        if β == T::zero() {
            self.data.set(T::zero());
        } else if β != T::one() {
            self.data.scale(β);
        }

        let transA = A.shape();
        let transAt = match transA {
            MatrixShape::N => MatrixShape::T,
            MatrixShape::T => MatrixShape::N,
        };
        let (n, k) = (A.nrows(), A.ncols());

        #[rustfmt::skip]
        T::xgemm(transA, transAt, n, n, k, α, A.data(), A.data(), &mut self.data);
        self
    }
}

#[test]
fn test_syrk() {
    let G = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    let mut GGt = Matrix::<f64>::zeros((2, 2));
    GGt.syrk(&G, 1.0, 0.0);

    assert_eq!(GGt, Matrix::from(&[[14., 32.], [32., 77.]]));
}

#[test]
fn test_syrk_accumulate() {
    // M = P + 2*G'G with P = I
    let G = Matrix::from(&[
        [1., 0., -1.], //
        [2., 1., 0.],  //
    ]);
    let mut M = Matrix::<f64>::identity(3);
    M.syrk(&G.t(), 2.0, 1.0);

    let M_test = Matrix::from(&[
        [11., 4., -2.], //
        [4., 3., 0.],   //
        [-2., 0., 3.],  //
    ]);

    assert_eq!(M, M_test);
}
