use std::f64::consts::TAU;

use uom::si::f64::{Area, Length};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Shape of the heat flow path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// A flat wall; every resistance shares one reference area.
    Planar {
        area: Constrained<Area, StrictlyPositive>,
    },
    /// Concentric shells around a pipe bore.
    Cylindrical {
        inner_radius: Constrained<Length, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
    },
}

impl Geometry {
    /// # Errors
    ///
    /// Returns an error unless `area` is strictly positive.
    pub fn planar(area: Area) -> ConstraintResult<Self> {
        Ok(Self::Planar {
            area: StrictlyPositive::new(area)?,
        })
    }

    /// # Errors
    ///
    /// Returns an error unless `inner_radius` and `length` are strictly
    /// positive.
    pub fn cylindrical(inner_radius: Length, length: Length) -> ConstraintResult<Self> {
        Ok(Self::Cylindrical {
            inner_radius: StrictlyPositive::new(inner_radius)?,
            length: StrictlyPositive::new(length)?,
        })
    }

    /// Surface area at `radius`; the reference area for planar walls.
    pub(super) fn area_at(&self, radius: Length) -> Area {
        match self {
            Self::Planar { area } => area.into_inner(),
            Self::Cylindrical { length, .. } => TAU * radius * length.into_inner(),
        }
    }
}
