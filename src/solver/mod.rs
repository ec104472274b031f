//! Interior point solver main module.
//!
//! This module contains the main types and traits for the solver.
//!
//! The solver comes with a [default implementation](crate::solver::implementations::default)
//! of all required traits, for problems in the standard format
//! described on the top level [API page](crate).
//!
//! The solver loop itself is generic over the core
//! [traits](crate::solver::core::traits), so that the problem data,
//! iterate and linear system representations can be replaced together.

// internal module structure
pub(crate) mod core;
pub mod implementations;
pub(crate) mod utils;

//user facing traits required to interact with solver
pub use crate::solver::core::{IPSolver, SolverStatus};

//user facing error types
pub use crate::solver::core::{KKTSolveError, SettingsError, SolverError};

//per-iteration observers
pub use crate::solver::core::callbacks::IterationCallbackFcn;

//user facing traits required to define new implementations
pub use crate::solver::core::traits;
pub use crate::solver::core::CoreSettings;

// Since we only have the default implementation, it is
// also exposed at the top level
pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;
