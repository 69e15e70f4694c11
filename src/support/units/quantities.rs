use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin,
    },
    typenum::{N1, N2, N3, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Heat rate per unit length, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistance`] from a value in kelvin per watt.
#[must_use]
pub fn thermal_resistance(kelvin_per_watt: f64) -> ThermalResistance {
    TemperatureInterval::new::<kelvin>(kelvin_per_watt) / Power::new::<watt>(1.0)
}

/// Returns the value of a [`ThermalResistance`] in kelvin per watt.
#[must_use]
pub fn kelvin_per_watt(resistance: ThermalResistance) -> f64 {
    resistance.value
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{TemperatureInterval, ThermalConductance},
        power::kilowatt,
        thermal_conductance::watt_per_kelvin,
    };

    #[test]
    fn temperature_drop_over_resistance_is_power() {
        let r = thermal_resistance(0.02);
        let q: Power = TemperatureInterval::new::<kelvin>(100.0) / r;
        assert_relative_eq!(q.get::<kilowatt>(), 5.0);
    }

    #[test]
    fn resistance_times_conductance_is_dimensionless() {
        let r = thermal_resistance(0.5);
        let ua = ThermalConductance::new::<watt_per_kelvin>(4.0);
        let product = r * ua;
        assert_relative_eq!(product.value, 2.0);
        assert_relative_eq!(kelvin_per_watt(r), 0.5);
    }
}
