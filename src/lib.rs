//! Nth roots of non-negative reals via Newton-Raphson.
//!
//! The solver iterates `x <- ((n-1) x + a / x^(n-1)) / n` from the seed `a / n`
//! until successive guesses agree to within a tolerance, with an explicit cap
//! on the number of updates.
//!
//! Inputs outside the supported domain (negative or non-finite radicands, a
//! degree below one) are rejected up front with a typed `RootError`.
//!
//! # Examples
//! With the default tolerance of `1e-10`:
//!
//! ```
//! use nthroot::nth_root;
//!
//! let root = nth_root(16.0, 2).expect("root");
//! assert!((root - 4.0).abs() < 1e-6);
//!
//! assert_eq!(nth_root(0.0, 5), Ok(0.0));
//! assert_eq!(nth_root(1.0, 7), Ok(1.0));
//! ```
//!
//! Rejected inputs:
//!
//! ```
//! use nthroot::{nth_root, RootError};
//!
//! assert_eq!(nth_root(-8.0, 3), Err(RootError::InvalidNumber { number: -8.0 }));
//! assert_eq!(nth_root(5.0, 0), Err(RootError::InvalidDegree { degree: 0 }));
//! ```
//!
//! The helpers the solver is built on are public as well:
//!
//! ```
//! use nthroot::arith::{absolute_value, integer_power};
//!
//! assert_eq!(integer_power(2.0, 10), 1024.0);
//! assert_eq!(integer_power(0.0, 0), 1.0);
//! assert_eq!(absolute_value(-2.5), 2.5);
//! ```

pub mod arith;
pub mod convergence;
pub mod error;
pub mod residual;
pub mod solver;

pub use error::{Result, RootError};
pub use solver::{nth_root, nth_root_with, NthRootOptions, NthRootReport, Termination};
