use uom::si::f64::{Length, ThermalConductivity};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// How far a layer extends, interpreted by the network geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerExtent {
    /// Wall thickness of a planar layer.
    Thickness(Constrained<Length, StrictlyPositive>),
    /// Outer radius of a cylindrical shell.
    ///
    /// The inner radius is the previous layer's outer radius, or the
    /// network's inner radius for the first layer.
    OuterRadius(Constrained<Length, StrictlyPositive>),
}

/// One conducting layer of a composite wall or pipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    extent: LayerExtent,
    conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    name: Option<String>,
}

impl Layer {
    /// Creates a planar layer.
    ///
    /// # Errors
    ///
    /// Returns an error unless `thickness` and `conductivity` are strictly
    /// positive.
    pub fn planar(thickness: Length, conductivity: ThermalConductivity) -> ConstraintResult<Self> {
        Ok(Self {
            extent: LayerExtent::Thickness(StrictlyPositive::new(thickness)?),
            conductivity: StrictlyPositive::new(conductivity)?,
            name: None,
        })
    }

    /// Creates a cylindrical shell ending at `outer_radius`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `outer_radius` and `conductivity` are strictly
    /// positive.
    pub fn cylindrical(
        outer_radius: Length,
        conductivity: ThermalConductivity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            extent: LayerExtent::OuterRadius(StrictlyPositive::new(outer_radius)?),
            conductivity: StrictlyPositive::new(conductivity)?,
            name: None,
        })
    }

    /// Attaches a label, e.g. the material name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn extent(&self) -> LayerExtent {
        self.extent
    }

    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity.into_inner()
    }
}
