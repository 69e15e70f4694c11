use uom::si::f64::{Power, ThermodynamicTemperature};

use super::CapacitanceRate;

/// Inlet state for a stream entering the heat exchanger.
///
/// Assumes the fluid's specific heat remains constant through the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInlet {
    pub capacitance_rate: CapacitanceRate,
    pub temperature: ThermodynamicTemperature,
}

impl StreamInlet {
    #[must_use]
    pub fn new(capacitance_rate: CapacitanceRate, temperature: ThermodynamicTemperature) -> Self {
        Self {
            capacitance_rate,
            temperature,
        }
    }

    /// Outlet temperature after the stream gives up `heat_rate`.
    ///
    /// From the energy balance `Q = C * (T_in - T_out)`; a negative rate
    /// warms the stream.
    #[must_use]
    pub fn outlet_after_rejecting(&self, heat_rate: Power) -> ThermodynamicTemperature {
        self.temperature - heat_rate / *self.capacitance_rate
    }

    /// Outlet temperature after the stream absorbs `heat_rate`.
    #[must_use]
    pub fn outlet_after_absorbing(&self, heat_rate: Power) -> ThermodynamicTemperature {
        self.temperature + heat_rate / *self.capacitance_rate
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        power::watt, thermal_conductance::watt_per_kelvin, thermodynamic_temperature::kelvin,
    };

    use crate::support::constraint::ConstraintResult;

    use super::*;

    #[test]
    fn energy_balance_sets_outlet() -> ConstraintResult<()> {
        let inlet = StreamInlet::new(
            CapacitanceRate::new::<watt_per_kelvin>(10.)?,
            ThermodynamicTemperature::new::<kelvin>(300.),
        );
        let heat_rate = Power::new::<watt>(20.);

        assert_relative_eq!(inlet.outlet_after_absorbing(heat_rate).get::<kelvin>(), 302.);
        assert_relative_eq!(inlet.outlet_after_rejecting(heat_rate).get::<kelvin>(), 298.);
        assert_relative_eq!(inlet.outlet_after_rejecting(-heat_rate).get::<kelvin>(), 302.);
        Ok(())
    }
}
