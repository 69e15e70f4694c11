use std::f64::consts::TAU;

use log::trace;
use uom::si::{
    f64::{HeatTransfer, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::{TemperatureDifference, ThermalResistance, kelvin_per_watt},
};

use super::{ElementKind, Geometry, Layer, LayerExtent, NetworkError, NetworkResults, circuit};

/// Temperatures of the fluids (or surfaces, without convection) on either
/// side of the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryTemperatures {
    pub inside: ThermodynamicTemperature,
    pub outside: ThermodynamicTemperature,
}

/// A validated series of conduction layers between optional convective
/// boundaries.
///
/// A zero convection coefficient leaves that boundary out of the circuit, so
/// the boundary temperature applies directly to the wall surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    geometry: Geometry,
    layers: Vec<Layer>,
    inside_convection: Constrained<HeatTransfer, NonNegative>,
    outside_convection: Constrained<HeatTransfer, NonNegative>,
}

impl Network {
    /// Builds a network, with layers ordered from the inside out.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Constraint`] for a negative convection
    /// coefficient, [`NetworkError::GeometryMismatch`] for a layer built for
    /// the other geometry, [`NetworkError::RadiusNotIncreasing`] when a shell
    /// does not grow outward, and [`NetworkError::Empty`] when there is
    /// nothing in the circuit.
    pub fn new(
        geometry: Geometry,
        layers: Vec<Layer>,
        inside_convection: HeatTransfer,
        outside_convection: HeatTransfer,
    ) -> Result<Self, NetworkError> {
        let inside_convection = NonNegative::new(inside_convection)?;
        let outside_convection = NonNegative::new(outside_convection)?;

        let mut inner = match geometry {
            Geometry::Planar { .. } => None,
            Geometry::Cylindrical { inner_radius, .. } => Some(inner_radius.into_inner()),
        };
        for (layer, entry) in layers.iter().enumerate() {
            match (entry.extent(), inner) {
                (LayerExtent::Thickness(_), None) => {}
                (LayerExtent::OuterRadius(outer), Some(radius)) => {
                    let outer = outer.into_inner();
                    if outer <= radius {
                        return Err(NetworkError::RadiusNotIncreasing {
                            layer,
                            inner: radius,
                            outer,
                        });
                    }
                    inner = Some(outer);
                }
                _ => return Err(NetworkError::GeometryMismatch { layer }),
            }
        }

        let network = Self {
            geometry,
            layers,
            inside_convection,
            outside_convection,
        };
        if !network.has_inside_convection()
            && !network.has_outside_convection()
            && network.layers.is_empty()
        {
            return Err(NetworkError::Empty);
        }
        Ok(network)
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn has_inside_convection(&self) -> bool {
        self.inside_convection.into_inner().value > 0.0
    }

    fn has_outside_convection(&self) -> bool {
        self.outside_convection.into_inner().value > 0.0
    }

    /// Radius of the bore, zero for planar walls.
    fn inner_radius(&self) -> Length {
        match self.geometry {
            Geometry::Planar { .. } => Length::new::<meter>(0.0),
            Geometry::Cylindrical { inner_radius, .. } => inner_radius.into_inner(),
        }
    }

    /// Radius of the outermost surface, zero for planar walls.
    fn outer_radius(&self) -> Length {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| match layer.extent() {
                LayerExtent::OuterRadius(radius) => Some(radius.into_inner()),
                LayerExtent::Thickness(_) => None,
            })
            .unwrap_or_else(|| self.inner_radius())
    }

    /// Series resistances from the inside out.
    pub(super) fn resistances(&self) -> Vec<(ElementKind, ThermalResistance)> {
        let mut resistances: Vec<(ElementKind, ThermalResistance)> =
            Vec::with_capacity(self.layers.len() + 2);

        if self.has_inside_convection() {
            let area = self.geometry.area_at(self.inner_radius());
            resistances.push((
                ElementKind::InsideConvection,
                (self.inside_convection.into_inner() * area).recip(),
            ));
        }

        let mut inner = self.inner_radius();
        for (index, layer) in self.layers.iter().enumerate() {
            let k = layer.conductivity();
            let resistance: ThermalResistance = match (layer.extent(), self.geometry) {
                (LayerExtent::Thickness(thickness), Geometry::Planar { area }) => {
                    thickness.into_inner() / (k * area.into_inner())
                }
                (LayerExtent::OuterRadius(outer), Geometry::Cylindrical { length, .. }) => {
                    let outer = outer.into_inner();
                    let ln_ratio = (outer / inner).get::<ratio>().ln();
                    inner = outer;
                    (TAU * k * length.into_inner()).recip() * ln_ratio
                }
                _ => unreachable!("layer extents are checked against the geometry in `new`"),
            };
            resistances.push((ElementKind::Layer(index), resistance));
        }

        if self.has_outside_convection() {
            let area = self.geometry.area_at(self.outer_radius());
            resistances.push((
                ElementKind::OutsideConvection,
                (self.outside_convection.into_inner() * area).recip(),
            ));
        }

        resistances
    }

    /// Solves the series circuit between `temperatures`.
    #[must_use]
    pub fn solve(&self, temperatures: BoundaryTemperatures) -> NetworkResults {
        let resistances = self.resistances();
        let total_resistance: ThermalResistance = resistances.iter().map(|&(_, r)| r).sum();

        let delta_t = temperatures.inside.minus(temperatures.outside);
        let heat_rate: Power = delta_t / total_resistance;
        trace!(
            "network R_total={:.6} K/W, Q={:.6} W",
            kelvin_per_watt(total_resistance),
            heat_rate.get::<watt>()
        );

        let reference_area = self.geometry.area_at(self.outer_radius());
        let (heat_flux, heat_rate_per_length) = match self.geometry {
            Geometry::Planar { area } => (Some(heat_rate / area.into_inner()), None),
            Geometry::Cylindrical { length, .. } => (None, Some(heat_rate / length.into_inner())),
        };

        NetworkResults {
            circuit: circuit::build(
                &resistances,
                total_resistance,
                temperatures.inside,
                delta_t,
            ),
            total_resistance,
            heat_rate,
            overall_coefficient: (total_resistance * reference_area).recip(),
            reference_area,
            heat_flux,
            heat_rate_per_length,
            critical_radius: self.critical_radius(),
        }
    }

    /// `k_last / h_outside`, clamped to zero if not finite.
    fn critical_radius(&self) -> Option<Length> {
        if !matches!(self.geometry, Geometry::Cylindrical { .. }) || !self.has_outside_convection()
        {
            return None;
        }
        let last = self.layers.last()?;
        let radius: Length = last.conductivity() / self.outside_convection.into_inner();
        Some(if radius.is_finite() {
            radius
        } else {
            Length::new::<meter>(0.0)
        })
    }
}
