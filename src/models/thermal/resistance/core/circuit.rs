use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::support::units::{ThermalResistance, thermal_resistance};

/// What a circuit element models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    InsideConvection,
    /// Conduction through the layer at this index.
    Layer(usize),
    OutsideConvection,
}

/// One series resistance in a solved network, inside to outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitElement {
    pub kind: ElementKind,
    pub resistance: ThermalResistance,
    /// Fraction of the total resistance.
    pub share: f64,
    /// Drop from the upstream to the downstream face.
    pub temperature_drop: TemperatureInterval,
    /// Temperature of the face on the outside of this element.
    pub downstream_temperature: ThermodynamicTemperature,
}

/// Lays out `resistances` between the two boundary temperatures.
///
/// Each downstream temperature is `T_inside - dT * R_cumulative / R_total`.
pub(super) fn build(
    resistances: &[(ElementKind, ThermalResistance)],
    total: ThermalResistance,
    inside: ThermodynamicTemperature,
    delta_t: TemperatureInterval,
) -> Vec<CircuitElement> {
    let mut cumulative = thermal_resistance(0.0);
    resistances
        .iter()
        .map(|&(kind, resistance)| {
            cumulative += resistance;
            let share = (resistance / total).get::<ratio>();
            CircuitElement {
                kind,
                resistance,
                share,
                temperature_drop: delta_t * share,
                downstream_temperature: inside - delta_t * (cumulative / total).get::<ratio>(),
            }
        })
        .collect()
}
