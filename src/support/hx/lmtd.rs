//! Log-mean temperature difference.

use thiserror::Error;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::TemperatureDifference;

/// Differences closer than this (in kelvin) are treated as equal.
const EQUAL_DIFFERENCE_TOL: f64 = 1e-6;

/// The four terminal temperatures of a two-stream heat exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminals {
    pub hot_inlet: ThermodynamicTemperature,
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_inlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
}

impl Terminals {
    #[must_use]
    pub fn new(
        hot_inlet: ThermodynamicTemperature,
        hot_outlet: ThermodynamicTemperature,
        cold_inlet: ThermodynamicTemperature,
        cold_outlet: ThermodynamicTemperature,
    ) -> Self {
        Self {
            hot_inlet,
            hot_outlet,
            cold_inlet,
            cold_outlet,
        }
    }

    /// Cold-side temperature effectiveness, `P = (Tc_out - Tc_in) / (Th_in - Tc_in)`.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.cold_outlet.minus(self.cold_inlet).get::<delta_kelvin>()
            / self.hot_inlet.minus(self.cold_inlet).get::<delta_kelvin>()
    }

    /// Heat capacity ratio from temperatures, `R = (Th_in - Th_out) / (Tc_out - Tc_in)`.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.hot_inlet.minus(self.hot_outlet).get::<delta_kelvin>()
            / self.cold_outlet.minus(self.cold_inlet).get::<delta_kelvin>()
    }
}

/// Selects the two terminal temperature differences used in the log mean.
///
/// The first element is the difference at the hot inlet end.
pub trait TerminalDifferences {
    fn terminal_differences(&self, terminals: &Terminals) -> [TemperatureInterval; 2];
}

/// Errors from [`log_mean_temperature_difference`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LmtdError {
    /// A terminal difference is zero, negative or not a number.
    ///
    /// The terminal temperatures are infeasible for the flow direction.
    #[error("terminal temperature differences must be positive: dt1={dt1:?}, dt2={dt2:?}")]
    NonPositiveDifference {
        dt1: TemperatureInterval,
        dt2: TemperatureInterval,
    },
}

/// Computes `(dt1 - dt2) / ln(dt1 / dt2)`.
///
/// When the two differences agree within 1e-6 K the log mean degenerates to
/// `dt1`.
///
/// # Errors
///
/// Returns [`LmtdError::NonPositiveDifference`] if either difference is not
/// strictly positive.
pub fn log_mean_temperature_difference(
    dt1: TemperatureInterval,
    dt2: TemperatureInterval,
) -> Result<TemperatureInterval, LmtdError> {
    let (a, b) = (dt1.get::<delta_kelvin>(), dt2.get::<delta_kelvin>());

    if !(a > 0.0 && b > 0.0) {
        return Err(LmtdError::NonPositiveDifference { dt1, dt2 });
    }

    if (a - b).abs() < EQUAL_DIFFERENCE_TOL {
        return Ok(dt1);
    }

    Ok(TemperatureInterval::new::<delta_kelvin>((a - b) / (a / b).ln()))
}
