#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::{traits::ProblemData, SolverError};

// ---------------
// Data type for default problem format
// ---------------

/// Standard-form solver type implementing the [`ProblemData`](crate::solver::core::traits::ProblemData) trait
///
/// Holds private copies of the data for the problem
/// ```text
/// minimize    ½x'Px + c'x
/// subject to  Gx ≤ h
/// ```

#[derive(Debug, Clone)]
pub struct DefaultProblemData<T> {
    pub P: Matrix<T>,
    pub c: Vec<T>,
    pub G: Matrix<T>,
    pub h: Vec<T>,
    pub n: usize,
    pub m: usize,

    pub normc: T,
    pub normh: T,
}

impl<T> DefaultProblemData<T>
where
    T: FloatT,
{
    pub fn new(P: &Matrix<T>, G: &Matrix<T>, c: &[T], h: &[T]) -> Result<Self, SolverError> {
        check_dimensions(P, G, c, h)?;

        if !(P.is_finite() && G.is_finite() && c.is_finite() && h.is_finite()) {
            return Err(SolverError::BadProblemData("problem data must be finite"));
        }

        let (m, n) = G.size();

        // only the symmetric part of P contributes to the
        // objective, and the KKT factorization reads just
        // one triangle, so store P = (P + P')/2
        let mut Psym = P.clone();
        let half: T = (0.5).as_T();
        for col in 0..n {
            for row in 0..col {
                let v = half * (P[(row, col)] + P[(col, row)]);
                Psym[(row, col)] = v;
                Psym[(col, row)] = v;
            }
        }

        let normc = c.norm();
        let normh = h.norm();

        Ok(Self {
            P: Psym,
            c: c.to_vec(),
            G: G.clone(),
            h: h.to_vec(),
            n,
            m,
            normc,
            normh,
        })
    }
}

fn check_dimensions<T: FloatT>(
    P: &Matrix<T>,
    G: &Matrix<T>,
    c: &[T],
    h: &[T],
) -> Result<(), SolverError> {
    let n = c.len();
    let m = h.len();

    let mismatch = |field, expected, found| {
        if expected != found {
            Err(SolverError::DimensionMismatch {
                field,
                expected,
                found,
            })
        } else {
            Ok(())
        }
    };

    if P.data.len() != P.nrows() * P.ncols() || G.data.len() != G.nrows() * G.ncols() {
        return Err(SolverError::BadProblemData(
            "matrix data length incompatible with its size",
        ));
    }

    mismatch("P rows", n, P.nrows())?;
    mismatch("P columns", n, P.ncols())?;
    mismatch("G rows", m, G.nrows())?;
    mismatch("G columns", n, G.ncols())?;
    Ok(())
}

impl<T> ProblemData<T> for DefaultProblemData<T>
where
    T: FloatT,
{
    type V = DefaultVariables<T>;

    fn dims(&self) -> (usize, usize) {
        (self.n, self.m)
    }
}

#[test]
fn test_problemdata_symmetrizes_P() {
    let P = Matrix::from(&[[2., 1.], [3., 4.]]);
    let G = Matrix::<f64>::zeros((0, 2));
    let data = DefaultProblemData::new(&P, &G, &[3., 4.], &[]).unwrap();

    assert_eq!(data.P, Matrix::from(&[[2., 2.], [2., 4.]]));
    assert_eq!(data.normc, 5.);
    assert_eq!(data.normh, 0.);
    assert_eq!(data.dims(), (2, 0));
}

#[test]
fn test_problemdata_rejects_bad_data() {
    let P = Matrix::<f64>::identity(2);
    let G = Matrix::<f64>::identity(2);

    let err = DefaultProblemData::new(&P, &G, &[0.; 2], &[0.; 3]).unwrap_err();
    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            field: "G rows",
            expected: 3,
            found: 2
        }
    ));

    let err = DefaultProblemData::new(&P, &G, &[0., f64::NAN], &[0.; 2]).unwrap_err();
    assert!(matches!(err, SolverError::BadProblemData(_)));
}
