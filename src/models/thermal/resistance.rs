//! Thermal resistance network models.
//!
//! This module provides a [`twine_core::Model`] implementation for heat
//! conduction through a composite planar wall or a layered pipe, with
//! optional convection on either side. The computational core is in the
//! internal [`core`] module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_heat_transfer::models::thermal::resistance::{
//!     BoundaryTemperatures, Geometry, Layer, Network, ResistanceNetwork,
//! };
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     power::watt,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let no_convection = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);
//! let network = Network::new(
//!     Geometry::planar(Area::new::<square_meter>(10.0)).unwrap(),
//!     vec![
//!         Layer::planar(
//!             Length::new::<meter>(0.2),
//!             ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
//!         )
//!         .unwrap(),
//!     ],
//!     no_convection,
//!     no_convection,
//! )
//! .unwrap();
//!
//! let results = ResistanceNetwork::new(network)
//!     .call(&BoundaryTemperatures {
//!         inside: ThermodynamicTemperature::new::<degree_celsius>(100.0),
//!         outside: ThermodynamicTemperature::new::<degree_celsius>(0.0),
//!     })
//!     .unwrap();
//!
//! assert!((results.heat_rate.get::<watt>() - 5000.0).abs() < 1e-9);
//! ```

pub(crate) mod core;

pub use self::core::{
    BoundaryTemperatures, CircuitElement, ElementKind, Geometry, Layer, LayerExtent, Network,
    NetworkError, NetworkResults,
};

use std::convert::Infallible;

use twine_core::Model;

/// Steady-state resistance network.
///
/// Thin adapter that solves a fixed [`Network`] for any pair of boundary
/// temperatures. Solving cannot fail once the network is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceNetwork {
    network: Network,
}

impl ResistanceNetwork {
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }
}

impl Model for ResistanceNetwork {
    type Input = BoundaryTemperatures;
    type Output = NetworkResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.network.solve(*input))
    }
}
