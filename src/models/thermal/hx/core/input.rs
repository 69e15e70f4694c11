//! Solver inputs.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use uom::si::f64::TemperatureInterval;

use crate::support::hx::{
    CounterFlow, LmtdCorrection, ParallelFlow, ShellAndTube, TerminalDifferences, Terminals,
};

use super::Parameter;

/// Flow arrangement of the two streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlowArrangement {
    ParallelFlow,
    #[default]
    CounterFlow,
    /// Shell-and-tube with the given pass layout.
    ///
    /// The layout only enters through the LMTD correction factor.
    ShellAndTube(ShellAndTube),
}

impl TerminalDifferences for FlowArrangement {
    fn terminal_differences(&self, terminals: &Terminals) -> [TemperatureInterval; 2] {
        match self {
            Self::ParallelFlow => ParallelFlow.terminal_differences(terminals),
            Self::CounterFlow => CounterFlow.terminal_differences(terminals),
            Self::ShellAndTube(layout) => layout.terminal_differences(terminals),
        }
    }
}

impl LmtdCorrection for FlowArrangement {
    fn correction_factor(&self, p: f64, r: f64) -> f64 {
        match self {
            Self::ParallelFlow => ParallelFlow.correction_factor(p, r),
            Self::CounterFlow => CounterFlow.correction_factor(p, r),
            Self::ShellAndTube(layout) => layout.correction_factor(p, r),
        }
    }
}

impl fmt::Display for FlowArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParallelFlow => f.write_str("parallel flow"),
            Self::CounterFlow => f.write_str("counter flow"),
            Self::ShellAndTube(layout) => write!(f, "shell-and-tube {layout}"),
        }
    }
}

/// The parameters a caller declares as known, with their SI values.
///
/// A parameter may be declared without a value, which the solver reports as
/// [`SolveError::MissingValue`](super::SolveError::MissingValue).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnownValues {
    entries: BTreeMap<Parameter, Option<f64>>,
}

impl KnownValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `parameter` known with `value`, replacing any earlier entry.
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.entries.insert(parameter, Some(value));
        self
    }

    /// Declares `parameter` known without supplying its value.
    #[must_use]
    pub fn declare(mut self, parameter: Parameter) -> Self {
        self.entries.insert(parameter, None);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, parameter: Parameter) -> bool {
        self.entries.contains_key(&parameter)
    }

    /// Declared parameters in canonical order, with their values if supplied.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, Option<f64>)> + '_ {
        self.entries.iter().map(|(&p, &v)| (p, v))
    }
}

impl FromIterator<(Parameter, f64)> for KnownValues {
    fn from_iter<I: IntoIterator<Item = (Parameter, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |known, (p, v)| known.with(p, v))
    }
}

/// A heat exchanger rating or sizing problem.
#[derive(Debug, Clone, PartialEq)]
pub struct HxProblem {
    pub known: KnownValues,
    /// The parameters the caller wants derived.
    pub unknowns: BTreeSet<Parameter>,
    pub arrangement: FlowArrangement,
}

impl HxProblem {
    #[must_use]
    pub fn new(
        known: KnownValues,
        unknowns: impl IntoIterator<Item = Parameter>,
        arrangement: FlowArrangement,
    ) -> Self {
        Self {
            known,
            unknowns: unknowns.into_iter().collect(),
            arrangement,
        }
    }
}
