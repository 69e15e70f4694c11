//! Counter-flow relationships.

use uom::si::f64::TemperatureInterval;

use crate::support::{
    hx::{
        CapacitanceRate, Effectiveness, LmtdCorrection, Ntu, TerminalDifferences, Terminals,
        effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
    },
    units::TemperatureDifference,
};

/// Counter-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFlow;

/// Capacity ratios this close to one use the balanced-stream form.
///
/// The general form divides two vanishing terms as `cr -> 1`.
const BALANCED_TOLERANCE: f64 = 1e-9;

impl EffectivenessRelation for CounterFlow {
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness {
        effectiveness_via(ntu, capacitance_rates, |ntu, cr| {
            if 1. - cr > BALANCED_TOLERANCE {
                (1. - (-ntu * (1. - cr)).exp()) / (1. - cr * (-ntu * (1. - cr)).exp())
            } else {
                ntu / (1. + ntu)
            }
        })
    }
}

/// Hot inlet faces cold outlet; hot outlet faces cold inlet.
impl TerminalDifferences for CounterFlow {
    fn terminal_differences(&self, t: &Terminals) -> [TemperatureInterval; 2] {
        [
            t.hot_inlet.minus(t.cold_outlet),
            t.hot_outlet.minus(t.cold_inlet),
        ]
    }
}

impl LmtdCorrection for CounterFlow {
    fn correction_factor(&self, _p: f64, _r: f64) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::ConstraintResult;
    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, ratio::ratio, temperature_interval::kelvin,
        thermal_conductance::watt_per_kelvin, thermodynamic_temperature::degree_celsius,
    };

    use super::*;

    fn rates(pair: [f64; 2]) -> ConstraintResult<[CapacitanceRate; 2]> {
        Ok([
            CapacitanceRate::new::<watt_per_kelvin>(pair[0])?,
            CapacitanceRate::new::<watt_per_kelvin>(pair[1])?,
        ])
    }

    #[test]
    fn balanced_streams() -> ConstraintResult<()> {
        for ntu in [0., 0.5, 1., 4.] {
            let eff = CounterFlow.effectiveness(Ntu::new(ntu)?, rates([3., 3.])?);
            assert_relative_eq!(eff.get::<ratio>(), ntu / (1. + ntu), epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn nearly_balanced_streams_match_balanced_form() -> ConstraintResult<()> {
        let ntu = 2000. / 1012.;
        let eff = CounterFlow.effectiveness(Ntu::new(ntu)?, rates([1012., 0.55 * 1840.])?);
        assert_relative_eq!(eff.get::<ratio>(), ntu / (1. + ntu), epsilon = 1e-9);

        let eff = CounterFlow.effectiveness(Ntu::new(ntu)?, rates([1012., 1012. * (1. + 1e-12)])?);
        assert_relative_eq!(eff.get::<ratio>(), ntu / (1. + ntu), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn single_stream_limit() -> ConstraintResult<()> {
        // c_r == 0
        let eff = CounterFlow.effectiveness(Ntu::new(2.)?, rates([1., f64::INFINITY])?);
        assert_relative_eq!(eff.get::<ratio>(), 1. - (-2.0_f64).exp(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn unbalanced_streams_approach_one() -> ConstraintResult<()> {
        let eff = CounterFlow.effectiveness(Ntu::new(50.)?, rates([1., 2.])?);
        assert_relative_eq!(eff.get::<ratio>(), 1., epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn differences_pair_opposite_ends() {
        let t = ThermodynamicTemperature::new::<degree_celsius>;
        let terminals = Terminals::new(t(80.0), t(50.0), t(20.0), t(40.0));

        let [dt1, dt2] = CounterFlow.terminal_differences(&terminals);
        assert_relative_eq!(dt1.get::<kelvin>(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(dt2.get::<kelvin>(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn no_correction() {
        for (p, r) in [(0.1, 0.5), (0.9, 3.0), (-1.0, 0.0), (2.0, f64::NAN)] {
            assert_relative_eq!(CounterFlow.correction_factor(p, r), 1.0);
        }
    }
}
