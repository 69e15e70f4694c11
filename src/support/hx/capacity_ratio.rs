use std::ops::Deref;

use crate::support::constraint::{Constrained, UnitInterval};
use uom::si::f64::Ratio;

use super::CapacitanceRate;

/// Capacity ratio `C_r = C_min / C_max`, in [0, 1].
///
/// Zero when one stream has an unbounded capacitance rate (a condensing or
/// boiling stream).
#[derive(Debug, Clone, Copy)]
pub struct CapacityRatio(Constrained<Ratio, UnitInterval>);

impl CapacityRatio {
    #[must_use]
    pub fn from_capacitance_rates(capacitance_rates: [CapacitanceRate; 2]) -> Self {
        let [first, second] = capacitance_rates;

        Self(
            UnitInterval::new(first.min(*second) / first.max(*second))
                .expect("capacitance rates should always be positive"),
        )
    }
}

impl Deref for CapacityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
