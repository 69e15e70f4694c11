//! Heat exchanger models.
//!
//! This module provides [`twine_core::Model`] implementations for two-stream
//! heat exchangers. The computational core is in the internal [`core`] module.
//!
//! [`HxParameterSolver`] derives the parameters a caller leaves unknown from
//! the ones they supply, for parallel flow, counter flow or shell-and-tube.
//! [`ArrangementComparator`] evaluates one set of boundary temperatures under
//! all three arrangements.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_heat_transfer::models::thermal::hx::{
//!     FlowArrangement, HxParameterSolver, HxProblem, KnownValues, Parameter,
//! };
//!
//! let known = KnownValues::new()
//!     .with(Parameter::HotInletTemperature, 353.0)
//!     .with(Parameter::HotOutletTemperature, 323.0)
//!     .with(Parameter::ColdInletTemperature, 293.0)
//!     .with(Parameter::HotMassFlowRate, 0.5)
//!     .with(Parameter::HotSpecificHeat, 4000.0)
//!     .with(Parameter::ColdMassFlowRate, 1.0)
//!     .with(Parameter::ColdSpecificHeat, 3000.0);
//!
//! let problem = HxProblem::new(
//!     known,
//!     [Parameter::HeatTransferRate, Parameter::ColdOutletTemperature],
//!     FlowArrangement::CounterFlow,
//! );
//!
//! let solution = HxParameterSolver::default().call(&problem).unwrap();
//! assert_eq!(solution.get(Parameter::HeatTransferRate), Some(60_000.0));
//! assert!(solution.is_complete());
//! ```

pub(crate) mod core;

pub use self::core::{
    ArrangementComparison, ConvergenceConfig, FlowArrangement, HxProblem, KnownValues,
    Parameter, ParseParameterError, Performance, Role, Solution, SolveError,
};

use twine_core::Model;

use crate::support::hx::ShellAndTube;

/// Heat exchanger parameter solver.
///
/// Thin adapter over the core solver that carries the shell-and-tube
/// iteration settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HxParameterSolver {
    pub config: ConvergenceConfig,
}

impl HxParameterSolver {
    #[must_use]
    pub fn new(config: ConvergenceConfig) -> Self {
        Self { config }
    }
}

impl Model for HxParameterSolver {
    type Input = HxProblem;
    type Output = Solution;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::solve(input, &self.config)
    }
}

/// Performance of fixed boundary temperatures under every flow arrangement.
///
/// `layout` selects the shell and tube passes of the shell-and-tube entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrangementComparator {
    pub layout: ShellAndTube,
}

impl Model for ArrangementComparator {
    type Input = KnownValues;
    type Output = ArrangementComparison;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::compare_arrangements(input, self.layout)
    }
}
