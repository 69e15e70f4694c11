//! Results types for heat exchanger solving.

use std::collections::{BTreeMap, BTreeSet};

use super::{Parameter, Performance, SolveError};

/// Outcome of [`solve`](super::solve).
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Every known or derived parameter, in SI units.
    pub values: BTreeMap<Parameter, f64>,

    pub performance: Performance,

    /// Requested unknowns that no derivation route could reach.
    pub unresolved: BTreeSet<Parameter>,
}

impl Solution {
    /// SI value of `parameter`, if known or derived.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.values.get(&parameter).copied()
    }

    /// Whether every requested unknown was derived.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Performance of the same boundary temperatures under each flow arrangement.
///
/// Each entry is evaluated independently, so one infeasible arrangement does
/// not hide the others.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementComparison {
    pub parallel_flow: Result<Performance, SolveError>,
    pub counter_flow: Result<Performance, SolveError>,
    pub shell_and_tube: Result<Performance, SolveError>,
}
