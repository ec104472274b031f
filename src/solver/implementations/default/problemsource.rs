use crate::algebra::*;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// An inequality constrained QP
/// ```text
/// minimize    ½x'Px + c'x
/// subject to  Gx ≤ h
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct QPProblem<T = f64> {
    pub P: Matrix<T>,
    pub G: Matrix<T>,
    pub c: Vec<T>,
    pub h: Vec<T>,
}

impl<T> QPProblem<T>
where
    T: FloatT,
{
    pub fn new(P: Matrix<T>, G: Matrix<T>, c: Vec<T>, h: Vec<T>) -> Self {
        Self { P, G, c, h }
    }
}

/// Error raised by a [`ProblemSource`] that cannot supply its problem
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error reading problem")]
    Io(#[from] std::io::Error),
    #[error("Malformed problem description: {0}")]
    Parse(String),
}

/// Anything that can supply a [`QPProblem`] to
/// [`DefaultSolver::from_source`](crate::solver::DefaultSolver::from_source)
pub trait ProblemSource<T> {
    fn problem(&self) -> Result<QPProblem<T>, SourceError>;
}

impl<T> ProblemSource<T> for QPProblem<T>
where
    T: FloatT,
{
    fn problem(&self) -> Result<QPProblem<T>, SourceError> {
        Ok(self.clone())
    }
}

#[test]
fn test_in_memory_source() {
    let problem = QPProblem::new(
        Matrix::identity(2),
        Matrix::from(&[[1., 1.]]),
        vec![0., -1.],
        vec![1.],
    );
    let supplied = problem.problem().unwrap();
    assert_eq!(supplied, problem);
}
