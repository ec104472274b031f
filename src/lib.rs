//!  __ipqp__ is a dense primal-dual interior point solver for convex
//!  quadratic programs with linear inequality constraints.  It solves
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T P x + c^T x\\\\\[2ex\]
//!  \text{subject to} & Gx \le h
//!  \end{array}
//! $$
//!
//! with decision variables
//! $x \in \mathbb{R}^n$
//! and data
//! $P=P^\top \succeq 0$,
//! $c \in \mathbb{R}^n$,
//! $G \in \mathbb{R}^{m \times n}$ and
//! $h \in \mathbb{R}^m$.
//!
//! Each iteration takes a Mehrotra predictor-corrector step with
//! Nesterov-Todd scaling of the slack and dual variables, solving the
//! reduced KKT system by a dense Cholesky factorization.
//!
//! # Example
//!
//! ```
//! use ipqp::algebra::*;
//! use ipqp::solver::*;
//!
//! // minimize x₁² + x₂²  subject to  x ≤ 1
//! let P = Matrix::from(&[[2., 0.], [0., 2.]]);
//! let G = Matrix::identity(2);
//! let c = [0., 0.];
//! let h = [1., 1.];
//!
//! let settings = DefaultSettingsBuilder::default()
//!     .verbose(false)
//!     .build()
//!     .unwrap();
//!
//! let mut solver = DefaultSolver::new(&P, &G, &c, &h, settings).unwrap();
//! solver.solve().unwrap();
//!
//! assert_eq!(solver.solution.status, SolverStatus::Solved);
//! assert!(solver.solution.x.norm_inf() < 1e-6);
//! ```
//!
//! Failures that leave no usable iterate are reported as a [`SolverError`](crate::solver::SolverError).
//! Runs that stop at the iteration limit, or fall back to an earlier iterate after a
//! numerical failure, still return `Ok` with a warning status.
//!
//! # Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade; no logger is
//! installed by this crate.  The verbose progress table is written separately to a
//! per-solver print target, see [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod timers;
