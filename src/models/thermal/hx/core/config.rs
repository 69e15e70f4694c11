use uom::si::{f64::Power, power::watt};

/// Settings for the shell-and-tube duty iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceConfig {
    /// Maximum number of fixed-point iterations.
    pub max_iters: usize,

    /// Accept the duty once `|Q_calc - Q_guess|` falls below this.
    pub duty_tol: Power,

    /// Fraction of the step toward `Q_calc` taken each iteration.
    ///
    /// `1.0` replaces the guess outright. Smaller values damp the
    /// oscillation that appears at higher NTU.
    pub relaxation: f64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            duty_tol: Power::new::<watt>(0.01),
            relaxation: 1.0,
        }
    }
}
