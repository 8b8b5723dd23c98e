use crate::arith::integer_power;

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// The residual `f(x) = x^n - a` whose positive zero is the nth root of `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerResidual {
    radicand: f64,
    degree: u32,
}

impl PowerResidual {
    pub fn new(radicand: f64, degree: u32) -> PowerResidual {
        assert!(degree >= 1);
        PowerResidual { radicand, degree }
    }

    pub fn radicand(&self) -> f64 {
        self.radicand
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// One Newton-Raphson step specialised for `x^n - a`:
    ///
    /// `x_new = ((n - 1) x + a / x^(n-1)) / n`
    ///
    /// Algebraically equal to `x - f(x)/f'(x)` but rounds differently.
    pub fn newton_step(&self, x: f64) -> f64 {
        let n = f64::from(self.degree);
        ((n - 1.0) * x + self.radicand / integer_power(x, self.degree - 1)) / n
    }
}

impl RealFnEval for PowerResidual {
    fn eval_f(&self, x: f64) -> f64 {
        integer_power(x, self.degree) - self.radicand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_zero_at_root() {
        let f = PowerResidual::new(27.0, 3);
        assert_eq!(f.eval_f(3.0), 0.0);
        assert_eq!(f.eval_f(2.0), -19.0);
        assert_eq!(f.eval_f(4.0), 37.0);
    }

    #[test]
    fn test_newton_step_fixed_point() {
        let f = PowerResidual::new(16.0, 2);
        assert_eq!(f.newton_step(4.0), 4.0);

        let f = PowerResidual::new(1024.0, 10);
        assert_eq!(f.newton_step(2.0), 2.0);
    }

    #[test]
    fn test_newton_step_square_root() {
        // Heron's method: (x + a/x) / 2
        let f = PowerResidual::new(2.0, 2);
        assert_eq!(f.newton_step(1.0), 1.5);
        assert!((f.newton_step(1.5) - 17.0 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn test_newton_step_degree_one() {
        // x^1 - a is linear, single step lands on a
        let f = PowerResidual::new(5.5, 1);
        assert_eq!(f.newton_step(123.0), 5.5);
    }

    #[test]
    fn test_newton_step_zero_guess() {
        let f = PowerResidual::new(8.0, 3);
        assert!(!f.newton_step(0.0).is_finite());
    }

    #[test]
    #[should_panic]
    fn test_zero_degree() {
        let _ = PowerResidual::new(8.0, 0);
    }
}
