//! Shell-and-tube LMTD correction factors.

use std::fmt;

use uom::si::f64::TemperatureInterval;

use crate::support::hx::{LmtdCorrection, TerminalDifferences, Terminals};

use super::CounterFlow;

/// Tolerance on `|R - 1|` below which the 1-2 limiting form is used.
const UNIT_RATIO_TOL: f64 = 1e-6;

/// Tolerance on `|W - 1|` below which the correction is abandoned.
const DEGENERATE_W_TOL: f64 = 1e-6;

/// Shell-and-tube heat exchanger pass layout.
///
/// Named by shell passes, then tube passes.
/// The layout only affects the LMTD correction factor; terminal differences
/// are taken as for counter flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShellAndTube {
    /// One shell pass, two (or any even number of) tube passes.
    #[default]
    OneTwo,
    TwoFour,
    OneFour,
    OneSix,
}

impl ShellAndTube {
    #[must_use]
    pub const fn shell_passes(self) -> u16 {
        match self {
            Self::TwoFour => 2,
            Self::OneTwo | Self::OneFour | Self::OneSix => 1,
        }
    }

    #[must_use]
    pub const fn tube_passes(self) -> u16 {
        match self {
            Self::OneTwo => 2,
            Self::TwoFour | Self::OneFour => 4,
            Self::OneSix => 6,
        }
    }
}

impl fmt::Display for ShellAndTube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.shell_passes(), self.tube_passes())
    }
}

impl TerminalDifferences for ShellAndTube {
    fn terminal_differences(&self, terminals: &Terminals) -> [TemperatureInterval; 2] {
        CounterFlow.terminal_differences(terminals)
    }
}

impl LmtdCorrection for ShellAndTube {
    fn correction_factor(&self, p: f64, r: f64) -> f64 {
        if !(p > 0.0 && p < 1.0 && r > 0.0) {
            return 1.0;
        }

        match self {
            Self::OneTwo => one_two(p, r),
            Self::TwoFour => {
                if p < two_four_transition(r) {
                    one_two(p, r)
                } else {
                    generalized(p, r, 0.25, 4.0)
                }
            }
            Self::OneFour => generalized(p, r, 0.25, 4.0),
            Self::OneSix => generalized(p, r, 1.0 / 6.0, 6.0),
        }
    }
}

fn one_two(p: f64, r: f64) -> f64 {
    if (r - 1.0).abs() < UNIT_RATIO_TOL {
        let s = std::f64::consts::SQRT_2;
        let num = s * p / (1.0 - p);
        let arg = (2.0 - p * (2.0 - s)) / (2.0 - p * (2.0 + s));
        return guarded(arg, |ln_arg| num / ln_arg);
    }
    generalized(p, r, 1.0, 1.0)
}

/// Temperature effectiveness of a 1-2 exchanger at `NTU = 1`.
fn two_four_transition(r: f64) -> f64 {
    let s = r.hypot(1.0);
    2.0 / (1.0 + r + s / (s / 2.0).tanh())
}

/// Correction factor with `W = ((1 - PR) / (1 - P))^w_exponent`.
fn generalized(p: f64, r: f64, w_exponent: f64, log_divisor: f64) -> f64 {
    let s = r.hypot(1.0);
    let w = ((1.0 - p * r) / (1.0 - p)).powf(w_exponent);
    if !w.is_finite() || w <= 0.0 || (w - 1.0).abs() < DEGENERATE_W_TOL {
        return 1.0;
    }

    let outer = (1.0 - p) / (1.0 - p * r);
    if !outer.is_finite() || outer <= 0.0 {
        return 1.0;
    }
    let num = s * outer.ln() / (r - 1.0);

    let (a, b) = ((1.0 - r) * (w + 1.0), s * (w - 1.0));
    guarded((a + b) / (a - b), |ln_arg| num / (log_divisor * ln_arg))
}

/// Applies `f` to `ln(arg)`, falling back to 1 on any invalid intermediate.
fn guarded(arg: f64, f: impl Fn(f64) -> f64) -> f64 {
    if !arg.is_finite() || arg <= 0.0 {
        return 1.0;
    }
    let factor = f(arg.ln());
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}
