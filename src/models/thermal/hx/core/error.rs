use thiserror::Error;
use uom::si::f64::{Power, TemperatureInterval};

use crate::support::{constraint::ConstraintError, hx::LmtdError};

use super::{FlowArrangement, Parameter, Values};

/// Errors that can occur while solving a heat exchanger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// No known parameters were supplied.
    #[error("at least one known parameter is required")]
    InsufficientKnowns,

    /// No parameters were selected for derivation.
    #[error("at least one unknown parameter must be selected")]
    NoUnknownsSelected,

    /// A known parameter was declared without a finite value.
    #[error("known parameter {parameter} has no finite value")]
    MissingValue { parameter: Parameter },

    /// A terminal temperature difference used in the LMTD is not positive.
    #[error("terminal temperature differences must be positive: dt1={dt1:?}, dt2={dt2:?}")]
    InvalidTemperatureDifference {
        dt1: TemperatureInterval,
        dt2: TemperatureInterval,
    },

    /// Outlet temperatures that the flow arrangement cannot produce.
    ///
    /// Temperatures are in kelvin.
    #[error(
        "{arrangement} requires {hot} ({hot_temperature} K) above {cold} ({cold_temperature} K)"
    )]
    PhysicallyInvalidResult {
        arrangement: FlowArrangement,
        hot: Parameter,
        hot_temperature: f64,
        cold: Parameter,
        cold_temperature: f64,
    },

    /// The shell-and-tube duty iteration hit its limit.
    #[error("duty iteration did not converge after {iters} iterations: residual={residual:?}")]
    ConvergenceFailure {
        iters: usize,
        /// `|Q_calc - Q_guess|` of the last iteration.
        residual: Power,
    },

    /// A derived quantity violated a constraint, e.g. a non-positive
    /// capacity rate.
    #[error("constraint violated")]
    Constraint(#[from] ConstraintError),
}

impl From<LmtdError> for SolveError {
    fn from(err: LmtdError) -> Self {
        match err {
            LmtdError::NonPositiveDifference { dt1, dt2 } => {
                Self::InvalidTemperatureDifference { dt1, dt2 }
            }
        }
    }
}

impl SolveError {
    /// Checks that the outlet temperatures are reachable for `arrangement`.
    ///
    /// Parallel flow needs `Th_out > Tc_out`; counter flow and
    /// shell-and-tube need `Th_out > Tc_in`. Passes when either temperature
    /// is not yet known.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::PhysicallyInvalidResult`] if the rule is broken.
    pub(super) fn check_physical(arrangement: FlowArrangement, values: &Values) -> Result<(), Self> {
        let (hot, cold) = match arrangement {
            FlowArrangement::ParallelFlow => (
                Parameter::HotOutletTemperature,
                Parameter::ColdOutletTemperature,
            ),
            FlowArrangement::CounterFlow | FlowArrangement::ShellAndTube(_) => (
                Parameter::HotOutletTemperature,
                Parameter::ColdInletTemperature,
            ),
        };

        let (Some(hot_temperature), Some(cold_temperature)) = (values.get(hot), values.get(cold))
        else {
            return Ok(());
        };

        if hot_temperature > cold_temperature {
            Ok(())
        } else {
            Err(Self::PhysicallyInvalidResult {
                arrangement,
                hot,
                hot_temperature,
                cold,
                cold_temperature,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::Parameter::{ColdInletTemperature, ColdOutletTemperature, HotOutletTemperature};

    #[test]
    fn parallel_flow_compares_outlets() {
        let values = Values::default()
            .with(HotOutletTemperature, 320.0)
            .with(ColdOutletTemperature, 330.0)
            .with(ColdInletTemperature, 300.0);

        assert!(matches!(
            SolveError::check_physical(FlowArrangement::ParallelFlow, &values),
            Err(SolveError::PhysicallyInvalidResult {
                cold: ColdOutletTemperature,
                ..
            })
        ));
        assert!(SolveError::check_physical(FlowArrangement::CounterFlow, &values).is_ok());
    }

    #[test]
    fn counter_flow_compares_hot_outlet_with_cold_inlet() {
        let values = Values::default()
            .with(HotOutletTemperature, 300.0)
            .with(ColdInletTemperature, 300.0);

        assert!(SolveError::check_physical(FlowArrangement::CounterFlow, &values).is_err());
    }

    #[test]
    fn incomplete_values_pass() {
        let values = Values::default().with(HotOutletTemperature, 250.0);
        assert!(SolveError::check_physical(FlowArrangement::ParallelFlow, &values).is_ok());
    }
}
