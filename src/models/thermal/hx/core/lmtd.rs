use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::hx::{
    LmtdCorrection, TerminalDifferences, Terminals, log_mean_temperature_difference,
};

use super::{FlowArrangement, Parameter, SolveError, Values};

/// Log-mean temperature difference and the arrangement's correction to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EffectiveLmtd {
    pub(crate) uncorrected: TemperatureInterval,
    pub(crate) correction_factor: f64,
}

impl EffectiveLmtd {
    /// `F * LMTD` in kelvin.
    pub(crate) fn effective_kelvin(&self) -> f64 {
        self.correction_factor * self.uncorrected.get::<delta_kelvin>()
    }

    /// Computes the LMTD for `[Th_in, Th_out, Tc_in, Tc_out]` in kelvin.
    ///
    /// The outlet feasibility rule of the arrangement is checked before any
    /// terminal difference is formed.
    pub(crate) fn from_kelvin(
        arrangement: FlowArrangement,
        [hot_inlet, hot_outlet, cold_inlet, cold_outlet]: [f64; 4],
    ) -> Result<Self, SolveError> {
        let snapshot = Values::default()
            .with(Parameter::HotInletTemperature, hot_inlet)
            .with(Parameter::HotOutletTemperature, hot_outlet)
            .with(Parameter::ColdInletTemperature, cold_inlet)
            .with(Parameter::ColdOutletTemperature, cold_outlet);
        SolveError::check_physical(arrangement, &snapshot)?;

        let t = ThermodynamicTemperature::new::<kelvin>;
        Self::from_terminals(
            arrangement,
            &Terminals::new(t(hot_inlet), t(hot_outlet), t(cold_inlet), t(cold_outlet)),
        )
    }

    pub(crate) fn from_terminals(
        arrangement: impl TerminalDifferences + LmtdCorrection,
        terminals: &Terminals,
    ) -> Result<Self, SolveError> {
        let [dt1, dt2] = arrangement.terminal_differences(terminals);
        let uncorrected = log_mean_temperature_difference(dt1, dt2)?;

        Ok(Self {
            uncorrected,
            correction_factor: arrangement.correction_factor(terminals.p(), terminals.r()),
        })
    }
}
