//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical units. This module provides the
//! pieces that are useful for heat transfer modeling but aren't included in
//! [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::kelvin;
//! use twine_heat_transfer::support::units::TemperatureDifference;
//!
//! let t_hot = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let t_cold = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! assert!((t_hot.minus(t_cold).get::<kelvin>() - 80.0).abs() < 1e-12);
//! ```
//!
//! ## Thermal resistance
//!
//! [`ThermalResistance`] (K/W) is the reciprocal of
//! [`ThermalConductance`](uom::si::f64::ThermalConductance). It has no named
//! units in [`uom`], so [`thermal_resistance`] builds it from kelvin per watt
//! and [`kelvin_per_watt`] reads it back.
//!
//! [`LinearHeatRate`] (W/m) is the heat rate per unit length of a pipe.

mod quantities;
mod temperature_difference;

pub use quantities::{LinearHeatRate, ThermalResistance, kelvin_per_watt, thermal_resistance};
pub use temperature_difference::TemperatureDifference;
