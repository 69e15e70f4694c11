use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio};

/// Closed-form effectiveness of a flow arrangement.
pub trait EffectivenessRelation {
    /// Effectiveness for the given [NTU](Ntu) and the capacitance rates of
    /// both streams, in either order.
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness;
}

/// Heat exchanger effectiveness, `Q / Q_max`, in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Number of transfer units, `UA / C_min`.
///
/// Must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or not a number.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(value))?))
    }

    /// NTU of an exchanger with conductance `ua` between two streams.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ua` is negative.
    pub fn from_conductance_and_capacitance_rates(
        ua: ThermalConductance,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let c_min = capacitance_rates[0].min(*capacitance_rates[1]);
        Ok(Self(NonNegative::new(ua / c_min)?))
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates `fn_raw(ntu, c_r)`, handling the `c_r == 0` limit shared by all
/// arrangements.
#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacitance_rates: [CapacitanceRate; 2],
    fn_raw: impl Fn(f64, f64) -> f64,
) -> Effectiveness {
    let cr = CapacityRatio::from_capacitance_rates(capacitance_rates).get::<ratio>();
    let ntu = ntu.get::<ratio>();
    let raw = if cr == 0.0 {
        1. - (-ntu).exp()
    } else {
        fn_raw(ntu, cr)
    };
    Effectiveness::new(raw).expect("ntu should always yield valid effectiveness")
}
