//! Parallel-flow relationships.

use uom::si::f64::TemperatureInterval;

use crate::support::{
    hx::{
        CapacitanceRate, Effectiveness, LmtdCorrection, Ntu, TerminalDifferences, Terminals,
        effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
    },
    units::TemperatureDifference,
};

/// Parallel-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelFlow;

impl EffectivenessRelation for ParallelFlow {
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness {
        effectiveness_via(ntu, capacitance_rates, |ntu, cr| {
            (1. - (-ntu * (1. + cr)).exp()) / (1. + cr)
        })
    }
}

/// Both inlets share one end; both outlets share the other.
impl TerminalDifferences for ParallelFlow {
    fn terminal_differences(&self, t: &Terminals) -> [TemperatureInterval; 2] {
        [
            t.hot_inlet.minus(t.cold_inlet),
            t.hot_outlet.minus(t.cold_outlet),
        ]
    }
}

impl LmtdCorrection for ParallelFlow {
    fn correction_factor(&self, _p: f64, _r: f64) -> f64 {
        1.0
    }
}
