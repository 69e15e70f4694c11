//! Outlet temperatures when both are unknown but the exchanger size is known.
//!
//! Parallel and counter flow use the closed-form effectiveness-NTU relations.
//! Shell-and-tube iterates on the duty, since its correction factor depends on
//! the outlets being solved for.

use log::debug;
use uom::si::{
    f64::{
        Area, HeatTransfer, MassRate, Power, SpecificHeatCapacity, ThermalConductance,
        ThermodynamicTemperature,
    },
    area::square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::ConstraintError,
    hx::{
        CapacitanceRate, CounterFlow, ParallelFlow, ShellAndTube, StreamInlet, Terminals,
        functional::{known_conductance_and_inlets, max_heat_rate},
    },
};

use super::{ConvergenceConfig, EffectiveLmtd, FlowArrangement, SolveError, Values};

use super::Parameter::{
    Area as A, ColdInletTemperature, ColdMassFlowRate, ColdOutletTemperature, ColdSpecificHeat,
    HotInletTemperature, HotMassFlowRate, HotOutletTemperature, HotSpecificHeat,
    OverallCoefficient,
};

/// Inputs of the coupled case, read from a value record.
struct Coupled {
    ua: ThermalConductance,
    hot: StreamInlet,
    cold: StreamInlet,
}

impl Coupled {
    /// Applies when both outlets are missing and everything else they depend
    /// on is present.
    fn from_values(values: &Values) -> Result<Option<Self>, SolveError> {
        if values.has(HotOutletTemperature) || values.has(ColdOutletTemperature) {
            return Ok(None);
        }
        let Some(v) = values.all(&[
            OverallCoefficient,
            A,
            HotInletTemperature,
            HotMassFlowRate,
            HotSpecificHeat,
            ColdInletTemperature,
            ColdMassFlowRate,
            ColdSpecificHeat,
        ]) else {
            return Ok(None);
        };

        let ua = HeatTransfer::new::<watt_per_square_meter_kelvin>(v[0])
            * Area::new::<square_meter>(v[1]);
        let inlet = |t: f64, m: f64, cp: f64| -> Result<StreamInlet, SolveError> {
            Ok(StreamInlet::new(
                CapacitanceRate::from_mass_rate_and_specific_heat(
                    MassRate::new::<kilogram_per_second>(m),
                    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
                )?,
                ThermodynamicTemperature::new::<kelvin>(t),
            ))
        };

        let coupled = Self {
            ua,
            hot: inlet(v[2], v[3], v[4])?,
            cold: inlet(v[5], v[6], v[7])?,
        };
        coupled.check_finite()?;
        Ok(Some(coupled))
    }

    /// Rejects `U * A`, `m * cp` or NTU products that overflowed.
    fn check_finite(&self) -> Result<(), SolveError> {
        let hot = *self.hot.capacitance_rate;
        let cold = *self.cold.capacitance_rate;
        let c_min = if hot < cold { hot } else { cold };

        let finite = [self.ua, hot, cold].iter().all(|q| q.is_finite());
        if finite && (self.ua / c_min).is_finite() {
            Ok(())
        } else {
            Err(ConstraintError::AboveMaximum.into())
        }
    }
}

/// Fills both outlet temperatures if the coupled case applies.
///
/// Returns `Ok(None)` when it does not.
///
/// # Errors
///
/// Returns [`SolveError::Constraint`] for non-positive or overflowing
/// capacity rates or conductance, and any error raised by the shell-and-tube iteration.
pub(super) fn resolve_outlets(
    values: &Values,
    arrangement: FlowArrangement,
    config: &ConvergenceConfig,
) -> Result<Option<Values>, SolveError> {
    let Some(Coupled { ua, hot, cold }) = Coupled::from_values(values)? else {
        return Ok(None);
    };

    let (hot_outlet, cold_outlet) = match arrangement {
        FlowArrangement::ParallelFlow => {
            let result = known_conductance_and_inlets(&ParallelFlow, ua, hot, cold)?;
            (result.hot_outlet, result.cold_outlet)
        }
        FlowArrangement::CounterFlow => {
            let result = known_conductance_and_inlets(&CounterFlow, ua, hot, cold)?;
            (result.hot_outlet, result.cold_outlet)
        }
        FlowArrangement::ShellAndTube(layout) => {
            let heat_rate = iterate_duty(layout, ua, hot, cold, config)?;
            (
                hot.outlet_after_rejecting(heat_rate),
                cold.outlet_after_absorbing(heat_rate),
            )
        }
    };

    Ok(Some(
        values
            .with(HotOutletTemperature, hot_outlet.get::<kelvin>())
            .with(ColdOutletTemperature, cold_outlet.get::<kelvin>()),
    ))
}

/// Fixed-point iteration `Q <- UA * F * LMTD(Q)`, starting from half the
/// maximum duty.
///
/// # Errors
///
/// Returns [`SolveError::ConvergenceFailure`] if the duty has not settled
/// within `config.max_iters`, or an LMTD error if an iterate crosses the
/// stream temperatures.
pub(super) fn iterate_duty(
    layout: ShellAndTube,
    ua: ThermalConductance,
    hot: StreamInlet,
    cold: StreamInlet,
    config: &ConvergenceConfig,
) -> Result<Power, SolveError> {
    let mut guess = 0.5 * max_heat_rate(hot, cold);
    let mut residual = Power::new::<watt>(f64::INFINITY);

    for iter in 1..=config.max_iters {
        let terminals = Terminals::new(
            hot.temperature,
            hot.outlet_after_rejecting(guess),
            cold.temperature,
            cold.outlet_after_absorbing(guess),
        );
        let lmtd = EffectiveLmtd::from_terminals(layout, &terminals)?;
        let calculated = ua * lmtd.uncorrected * lmtd.correction_factor;

        residual = (calculated - guess).abs();
        debug!(
            "{layout} duty iteration {iter}: guess={:.6} W, calculated={:.6} W, F={:.6}",
            guess.get::<watt>(),
            calculated.get::<watt>(),
            lmtd.correction_factor,
        );

        if residual < config.duty_tol {
            return Ok(calculated);
        }
        guess += config.relaxation * (calculated - guess);
    }

    Err(SolveError::ConvergenceFailure {
        iters: config.max_iters,
        residual,
    })
}
