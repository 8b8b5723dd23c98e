use crate::arith::absolute_value;

/// Default tolerance between successive iterates.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Stopping rule for the iteration driver.
pub trait IsConverged {
    fn is_converged(&self, x_pre: f64, x_cur: f64) -> bool;
}

/// Converged once successive iterates differ by strictly less than
/// `epsilon_abs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceDelta {
    epsilon_abs: f64,
}

impl SequenceDelta {
    pub fn new(epsilon_abs: f64) -> SequenceDelta {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        SequenceDelta { epsilon_abs }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon_abs
    }
}

impl Default for SequenceDelta {
    fn default() -> SequenceDelta {
        SequenceDelta::new(DEFAULT_EPSILON)
    }
}

impl IsConverged for SequenceDelta {
    fn is_converged(&self, x_pre: f64, x_cur: f64) -> bool {
        absolute_value(x_cur - x_pre) < self.epsilon_abs
    }
}
