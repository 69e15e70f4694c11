//! Functional helpers for common heat exchanger calculations.

use crate::support::{constraint::ConstraintResult, units::TemperatureDifference};
use uom::si::f64::{Power, ThermalConductance, ThermodynamicTemperature};

use super::{Effectiveness, Ntu, StreamInlet, effectiveness_ntu::EffectivenessRelation};

/// Resolve both outlets of an exchanger whose conductance and inlets are known.
///
/// The duty is `Q = ε * C_min * (Th_in - Tc_in)` with `ε` from the
/// arrangement's closed-form relation, and each outlet follows from its
/// stream's energy balance.
///
/// # Errors
///
/// Returns `Err` if `ua` is negative.
pub fn known_conductance_and_inlets(
    arrangement: &impl EffectivenessRelation,
    ua: ThermalConductance,
    hot: StreamInlet,
    cold: StreamInlet,
) -> ConstraintResult<KnownConductanceResult> {
    let capacitance_rates = [hot.capacitance_rate, cold.capacitance_rate];
    let effectiveness = arrangement.effectiveness(
        Ntu::from_conductance_and_capacitance_rates(ua, capacitance_rates)?,
        capacitance_rates,
    );

    let heat_rate = *effectiveness * max_heat_rate(hot, cold);

    Ok(KnownConductanceResult {
        heat_rate,
        hot_outlet: hot.outlet_after_rejecting(heat_rate),
        cold_outlet: cold.outlet_after_absorbing(heat_rate),
        effectiveness,
    })
}

/// Resolved exchanger state returned from [`known_conductance_and_inlets`].
#[derive(Debug, Clone, Copy)]
pub struct KnownConductanceResult {
    /// Heat rate from the hot stream to the cold stream.
    pub heat_rate: Power,
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
    pub effectiveness: Effectiveness,
}

/// `C_min * (Th_in - Tc_in)`.
///
/// Negative when the "cold" inlet is the warmer one.
#[must_use]
pub fn max_heat_rate(hot: StreamInlet, cold: StreamInlet) -> Power {
    let c_min = hot.capacitance_rate.min(*cold.capacitance_rate);
    c_min * hot.temperature.minus(cold.temperature)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        power::kilowatt, ratio::ratio, thermal_conductance::kilowatt_per_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use super::super::CapacitanceRate;
    use super::super::arrangement::{CounterFlow, ParallelFlow};
    use super::*;

    fn inlets() -> ConstraintResult<(StreamInlet, StreamInlet)> {
        Ok((
            StreamInlet::new(
                CapacitanceRate::new::<kilowatt_per_kelvin>(6.)?,
                ThermodynamicTemperature::new::<degree_celsius>(80.),
            ),
            StreamInlet::new(
                CapacitanceRate::new::<kilowatt_per_kelvin>(3.)?,
                ThermodynamicTemperature::new::<degree_celsius>(50.),
            ),
        ))
    }

    #[test]
    fn counter_flow_outlets() -> ConstraintResult<()> {
        let (hot, cold) = inlets()?;
        let result = known_conductance_and_inlets(
            &CounterFlow,
            ThermalConductance::new::<kilowatt_per_kelvin>(3. * 4.0_f64.ln()),
            hot,
            cold,
        )?;

        assert_relative_eq!(result.effectiveness.get::<ratio>(), 2. / 3., epsilon = 1e-12);
        assert_relative_eq!(result.heat_rate.get::<kilowatt>(), 60., max_relative = 1e-12);
        assert_relative_eq!(result.hot_outlet.get::<degree_celsius>(), 70., epsilon = 1e-9);
        assert_relative_eq!(result.cold_outlet.get::<degree_celsius>(), 70., epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn parallel_flow_outlets_never_cross() -> ConstraintResult<()> {
        let (hot, cold) = inlets()?;
        let result = known_conductance_and_inlets(
            &ParallelFlow,
            ThermalConductance::new::<kilowatt_per_kelvin>(100.),
            hot,
            cold,
        )?;

        // Approaches the mixed temperature (6*80 + 3*50) / 9 = 70 C.
        assert_relative_eq!(result.hot_outlet.get::<degree_celsius>(), 70., epsilon = 1e-6);
        assert_relative_eq!(result.cold_outlet.get::<degree_celsius>(), 70., epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn max_heat_rate_sign_follows_inlets() -> ConstraintResult<()> {
        let (hot, cold) = inlets()?;
        assert_relative_eq!(max_heat_rate(hot, cold).get::<kilowatt>(), 90., epsilon = 1e-9);
        assert_relative_eq!(max_heat_rate(cold, hot).get::<kilowatt>(), -90., epsilon = 1e-9);
        Ok(())
    }
}
