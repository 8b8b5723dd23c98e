use tracing::{trace, warn};

use crate::convergence::IsConverged;
use crate::error::{Result, RootError};

/// State of the iteration at the moment the convergence criterion fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converged {
    /// Iterate before the final update.
    pub x_pre: f64,
    /// Final update, the one that satisfied the criterion.
    pub x_cur: f64,
    /// Number of updates performed, the final one included.
    pub iterations: usize,
}

/// Driver for iterative root finders.
///
/// Applies `iterate` starting from `start` until `finish` reports convergence
/// between two successive iterates, or `max_iter` updates have been spent.
pub fn iterative_root_find<I, C>(
    iterate: &I,
    start: f64,
    finish: &C,
    max_iter: usize,
) -> Result<Converged>
where
    I: Fn(f64) -> f64,
    C: IsConverged,
{
    let mut x_pre = start;

    // stay inside maximum iteration count
    for it in 1..=max_iter {
        let x_cur = iterate(x_pre);
        if !x_cur.is_finite() {
            warn!(last_x = x_pre, iteration = it, "iterate went non-finite");
            return Err(RootError::NonFinite { last_x: x_pre });
        }

        trace!(iteration = it, x = x_cur, "step");

        if finish.is_converged(x_pre, x_cur) {
            return Ok(Converged {
                x_pre,
                x_cur,
                iterations: it,
            });
        }

        x_pre = x_cur;
    }

    warn!(last_x = x_pre, max_iter, "iteration limit reached");
    Err(RootError::NonConvergence {
        last_x: x_pre,
        iterations: max_iter,
    })
}
