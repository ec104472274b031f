#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

use crate::algebra::MatrixShape;
use faer::linalg::matmul::matmul;
use faer::linalg::triangular_solve::{
    solve_lower_triangular_in_place, solve_upper_triangular_in_place,
};
use faer::{Accum, MatMut, MatRef, Par, Side};

/// Dense kernels backed by [`faer`](https://docs.rs/faer).
///
/// Implemented for the native f32 and f64 types only, which
/// restricts [`FloatT`](crate::algebra::FloatT) to those types.
pub trait FaerFloatT: private::FaerFloatSealed + XgemmScalar + XpotrfScalar {}

impl FaerFloatT for f32 {}
impl FaerFloatT for f64 {}

mod private {
    pub trait FaerFloatSealed {}
    impl FaerFloatSealed for f32 {}
    impl FaerFloatSealed for f64 {}
}

// all matrices below are column major with leading
// dimension equal to their number of rows

// --------------------------------------
// gemm : C = α op(A) op(B) + C
// --------------------------------------

pub trait XgemmScalar: Sized {
    /// `op(A)` is `m × k`, `op(B)` is `k × n` and `C` is `m × n`
    fn xgemm(
        transa: MatrixShape, transb: MatrixShape, m: usize, n: usize, k: usize,
        α: Self, a: &[Self], b: &[Self], c: &mut [Self],
    );
}

macro_rules! impl_faer_xgemm {
    ($T:ty) => {
        impl XgemmScalar for $T {
            fn xgemm(
                transa: MatrixShape, transb: MatrixShape, m: usize, n: usize, k: usize,
                α: Self, a: &[Self], b: &[Self], c: &mut [Self],
            ) {
                let A = match transa {
                    MatrixShape::N => MatRef::from_column_major_slice(a, m, k),
                    MatrixShape::T => MatRef::from_column_major_slice(a, k, m).transpose(),
                };
                let B = match transb {
                    MatrixShape::N => MatRef::from_column_major_slice(b, k, n),
                    MatrixShape::T => MatRef::from_column_major_slice(b, n, k).transpose(),
                };
                let C = MatMut::from_column_major_slice_mut(c, m, n);

                matmul(C, Accum::Add, A, B, α, Par::Seq);
            }
        }
    };
}

impl_faer_xgemm!(f32);
impl_faer_xgemm!(f64);

// --------------------------------------
// potrf / potrs : Cholesky factor and solve
// --------------------------------------

pub trait XpotrfScalar: Sized {
    /// Factor the `n × n` matrix whose upper triangle is stored in `a`,
    /// writing the lower triangular factor to `l`.  Returns false if
    /// the matrix is not numerically positive definite.
    fn xpotrf(n: usize, a: &[Self], l: &mut [Self]) -> bool;

    /// Solve `LL'x = b` in place for a factor produced by `xpotrf`.
    fn xpotrs(n: usize, l: &[Self], b: &mut [Self]);
}

macro_rules! impl_faer_xpotrf {
    ($T:ty) => {
        impl XpotrfScalar for $T {
            fn xpotrf(n: usize, a: &[Self], l: &mut [Self]) -> bool {
                let A = MatRef::from_column_major_slice(a, n, n);

                let Ok(llt) = A.llt(Side::Upper) else {
                    return false;
                };
                let L = llt.L();

                l.fill(0.0);
                for j in 0..n {
                    for i in j..n {
                        l[i + j * n] = L[(i, j)];
                    }
                }

                // NaN pivots are not rejected by the factorization
                (0..n).all(|j| {
                    let d = l[j + j * n];
                    d.is_finite() && d > 0.0
                })
            }

            fn xpotrs(n: usize, l: &[Self], b: &mut [Self]) {
                let L = MatRef::from_column_major_slice(l, n, n);

                let rhs = MatMut::from_column_major_slice_mut(b, n, 1);
                solve_lower_triangular_in_place(L, rhs, Par::Seq);

                let rhs = MatMut::from_column_major_slice_mut(b, n, 1);
                solve_upper_triangular_in_place(L.transpose(), rhs, Par::Seq);
            }
        }
    };
}

impl_faer_xpotrf!(f32);
impl_faer_xpotrf!(f64);

#[test]
fn test_xgemm_shapes() {
    // A = [1 2 3; 4 5 6]
    let a = [1., 4., 2., 5., 3., 6.];

    // A*A' = [14 32; 32 77]
    let mut c = [0.; 4];
    f64::xgemm(MatrixShape::N, MatrixShape::T, 2, 2, 3, 1.0, &a, &a, &mut c);
    assert_eq!(c, [14., 32., 32., 77.]);

    // y += 2*A'*[1;1] = y + [10 14 18]
    let mut y = [1., 1., 1.];
    f64::xgemm(MatrixShape::T, MatrixShape::N, 3, 1, 2, 2.0, &a, &[1., 1.], &mut y);
    assert_eq!(y, [11., 15., 19.]);
}
