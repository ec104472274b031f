use super::SettingsError;
use crate::algebra::DenseFactorizationError;
use crate::solver::implementations::default::SourceError;
use thiserror::Error;

/// Failure of a linear solve inside an interior point iteration.
///
/// These are recoverable: the main loop responds by falling back
/// to the previous iterate when that iterate is still feasible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KKTSolveError {
    /// The reduced KKT matrix could not be factored
    #[error("KKT factorization failed")]
    Factorization(#[from] DenseFactorizationError),
    /// A solution or update produced Inf or NaN values
    #[error("KKT solve produced non-finite values")]
    NonFinite,
}

/// Error type returned by solver construction and [`solve`](crate::solver::IPSolver::solve).
#[derive(Error, Debug)]
pub enum SolverError {
    /// The final iterate does not satisfy the inequality constraints
    #[error(
        "Constraints violated after {iterations} iterations \
         (gap = {gap:e}, pres = {res_primal:e}, dres = {res_dual:e})"
    )]
    ConstraintViolation {
        iterations: u32,
        gap: f64,
        res_primal: f64,
        res_dual: f64,
    },
    /// A linear solve failed with no usable iterate to fall back on
    #[error("Numerical failure after {iterations} iterations")]
    NumericalFailure {
        iterations: u32,
        #[source]
        source: KKTSolveError,
    },
    /// Problem data is malformed, e.g. contains non-finite values
    #[error("Bad problem data: {0}")]
    BadProblemData(&'static str),
    /// Problem data dimensions are mutually inconsistent
    #[error("Dimension mismatch in {field}: expected {expected}, got {found}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// Solver settings are invalid
    #[error("Invalid settings")]
    Settings(#[from] SettingsError),
    /// A problem source could not supply a problem
    #[error("Problem source failed")]
    Source(#[from] SourceError),
}

#[test]
fn test_error_messages() {
    let e = SolverError::DimensionMismatch {
        field: "h",
        expected: 3,
        found: 2,
    };
    assert_eq!(e.to_string(), "Dimension mismatch in h: expected 3, got 2");

    let e = SolverError::NumericalFailure {
        iterations: 0,
        source: KKTSolveError::from(DenseFactorizationError::Cholesky),
    };
    let source = std::error::Error::source(&e).map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("KKT factorization failed"));
}
