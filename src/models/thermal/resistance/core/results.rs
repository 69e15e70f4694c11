use uom::si::f64::{Area, HeatFluxDensity, HeatTransfer, Length, Power, ThermodynamicTemperature};

use crate::support::units::{LinearHeatRate, ThermalResistance};

use super::CircuitElement;

/// Steady-state solution of a resistance network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkResults {
    /// Series resistances from the inside boundary to the outside one.
    pub circuit: Vec<CircuitElement>,

    pub total_resistance: ThermalResistance,

    /// Heat rate from inside to outside; negative when the outside is hotter.
    pub heat_rate: Power,

    /// `1 / (R_total * A)`, referred to [`Self::reference_area`].
    pub overall_coefficient: HeatTransfer,

    /// The wall area for planar networks; the outermost surface of a pipe.
    pub reference_area: Area,

    /// `Q / A`, planar networks only.
    pub heat_flux: Option<HeatFluxDensity>,

    /// `Q / L`, cylindrical networks only.
    pub heat_rate_per_length: Option<LinearHeatRate>,

    /// `k_last / h_outside` for a pipe with outside convection.
    ///
    /// Adding insulation below this radius increases heat loss.
    pub critical_radius: Option<Length>,
}

impl NetworkResults {
    /// Temperatures of every interface, inside to outside, ending at the
    /// outside boundary.
    pub fn interface_temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.circuit.iter().map(|element| element.downstream_temperature)
    }
}
