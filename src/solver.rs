//! Nth root solver.
//!
//! Newton-Raphson on `f(x) = x^n - a`, seeded with `a / n`, iterated until two
//! successive guesses differ by less than the tolerance.
//!
//! # Examples
//! ```
//! use nthroot::solver::{nth_root_with, NthRootOptions, Termination};
//!
//! let opts = NthRootOptions::default()
//!     .with_epsilon(1e-12)
//!     .with_termination(Termination::LatestIterate);
//!
//! let report = nth_root_with(2.0, 2, &opts).expect("root");
//! assert!((report.root - 2f64.sqrt()).abs() < 1e-12);
//! assert!(report.residual.abs() < 1e-12);
//! ```

pub mod driver;

use tracing::debug;

use crate::convergence::{SequenceDelta, DEFAULT_EPSILON};
use crate::error::{Result, RootError};
use crate::residual::{PowerResidual, RealFnEval};
use driver::iterative_root_find;

/// Updates allowed on top of the approach from the seed when no explicit cap
/// is given.
pub const DEFAULT_MAX_ITER: usize = 500;

/// Which iterate is handed back once successive guesses agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Termination {
    /// The guess held before the final update.
    #[default]
    PreviousIterate,

    /// The final update, the one that satisfied the tolerance.
    LatestIterate,
}

/// Options for the nth root solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NthRootOptions {
    /// Tolerance between successive iterates
    pub epsilon: f64,
    /// Maximum number of Newton updates.  `None` sizes the budget per call,
    /// see `iteration_budget`.
    pub max_iter: Option<usize>,
    /// Iterate returned on convergence
    pub termination: Termination,
}

impl Default for NthRootOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iter: None,
            termination: Termination::default(),
        }
    }
}

impl NthRootOptions {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }
}

/// Outcome of a successful solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NthRootReport {
    /// The root found
    pub root: f64,
    /// `root^n - number`
    pub residual: f64,
    /// Newton updates performed, zero for the `0` and `1` shortcuts
    pub iterations: usize,
}

/// Nth root of `number` using the default options.
///
/// ```
/// use nthroot::solver::nth_root;
///
/// let root = nth_root(27.0, 3).expect("root");
/// assert!((root - 3.0).abs() < 1e-6);
/// ```
pub fn nth_root(number: f64, degree: i32) -> Result<f64> {
    nth_root_with(number, degree, &NthRootOptions::default()).map(|r| r.root)
}

/// Nth root of `number` with explicit options.
///
/// # Errors
/// * `InvalidTolerance` if `options.epsilon` is not positive and finite
/// * `InvalidDegree` if `degree < 1`
/// * `InvalidNumber` if `number` is negative, NaN or infinite
/// * `NonFinite` if an iterate overflows or divides by zero
/// * `NonConvergence` if the iteration budget is not enough
pub fn nth_root_with(number: f64, degree: i32, options: &NthRootOptions) -> Result<NthRootReport> {
    if !(options.epsilon > 0.0 && options.epsilon.is_finite()) {
        return Err(RootError::InvalidTolerance {
            epsilon: options.epsilon,
        });
    }
    let n = match u32::try_from(degree) {
        Ok(n) if n >= 1 => n,
        _ => return Err(RootError::InvalidDegree { degree }),
    };
    if number.is_nan() || number.is_infinite() || number < 0.0 {
        return Err(RootError::InvalidNumber { number });
    }

    debug!(number, degree, "solving nth root");

    // shortcuts, no iteration
    if number == 0.0 || number == 1.0 {
        let root = if number == 0.0 { 0.0 } else { 1.0 };
        debug!(root, "trivial root");
        return Ok(NthRootReport {
            root,
            residual: 0.0,
            iterations: 0,
        });
    }

    let f = PowerResidual::new(number, n);
    let conv = SequenceDelta::new(options.epsilon);
    let start = number / f64::from(n);

    let max_iter = options
        .max_iter
        .unwrap_or_else(|| iteration_budget(&f, start));

    let c = iterative_root_find(&|x| f.newton_step(x), start, &conv, max_iter)?;

    let root = match options.termination {
        Termination::PreviousIterate => c.x_pre,
        Termination::LatestIterate => c.x_cur,
    };
    let residual = f.eval_f(root);
    debug!(root, residual, iterations = c.iterations, "converged");

    Ok(NthRootReport {
        root,
        residual,
        iterations: c.iterations,
    })
}

/// Default update budget for solving `f` from `start`.
///
/// Far from the root each update shrinks the guess by about `(n-1)/n`, so
/// descending from the peak guess (the seed, or the first update when that
/// overshoots) down to the root takes `ln(peak / root) / ln(n / (n-1))`
/// updates.  `DEFAULT_MAX_ITER` is granted on top of that.
fn iteration_budget(f: &PowerResidual, start: f64) -> usize {
    let n = f.degree();
    if n < 2 {
        return DEFAULT_MAX_ITER;
    }

    let peak = start.max(f.newton_step(start));
    let root = f.radicand().powf(1.0 / f64::from(n));
    let ratio = (peak / root).ln();
    if !ratio.is_finite() || ratio <= 0.0 {
        return DEFAULT_MAX_ITER;
    }

    let nf = f64::from(n);
    let approach = (ratio / (nf / (nf - 1.0)).ln()).ceil() as usize;
    DEFAULT_MAX_ITER.saturating_add(approach)
}
