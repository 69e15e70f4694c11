use std::collections::BTreeMap;

use super::Parameter;

/// Immutable record with one optional SI value per [`Parameter`].
///
/// Each derivation step produces a new record; a filled slot is never
/// overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Values {
    slots: [Option<f64>; Parameter::ALL.len()],
}

impl Values {
    pub(crate) fn get(&self, parameter: Parameter) -> Option<f64> {
        self.slots[parameter.index()]
    }

    pub(crate) fn has(&self, parameter: Parameter) -> bool {
        self.get(parameter).is_some()
    }

    /// Returns a copy with `parameter` set, unless it already holds a value.
    #[must_use]
    pub(crate) fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.slots[parameter.index()].get_or_insert(value);
        self
    }

    /// Values of `parameters` in order, or `None` if any is missing.
    pub(crate) fn all(&self, parameters: &[Parameter]) -> Option<Vec<f64>> {
        parameters.iter().map(|&p| self.get(p)).collect()
    }

    /// Capacity rate `m * cp` of one side, when both factors are present.
    pub(crate) fn capacity_rate(&self, mass_rate: Parameter, specific_heat: Parameter) -> Option<f64> {
        Some(self.get(mass_rate)? * self.get(specific_heat)?)
    }

    pub(crate) fn to_map(self) -> BTreeMap<Parameter, f64> {
        Parameter::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|v| (p, v)))
            .collect()
    }
}
