//! Performance metrics derived from a solved value record.

use uom::si::temperature_interval::kelvin as delta_kelvin;

use super::{EffectiveLmtd, FlowArrangement, SolveError, Values};

use super::Parameter::{
    Area, ColdInletTemperature, ColdMassFlowRate, ColdOutletTemperature, ColdSpecificHeat,
    HeatTransferRate, HotInletTemperature, HotMassFlowRate, HotOutletTemperature,
    HotSpecificHeat, OverallCoefficient,
};

/// Heat exchanger performance in SI units.
///
/// Each field is present only when the values it depends on are.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Performance {
    /// Hot-side capacity rate `m_h * cp_h`, W/K.
    pub hot_capacity_rate: Option<f64>,
    /// Cold-side capacity rate `m_c * cp_c`, W/K.
    pub cold_capacity_rate: Option<f64>,
    pub c_min: Option<f64>,
    pub c_max: Option<f64>,
    /// `C_min / C_max`.
    pub capacity_ratio: Option<f64>,
    /// `C_min * (Th_in - Tc_in)`, W.
    pub q_max: Option<f64>,
    /// `Q / Q_max`.
    ///
    /// Absent when `Q_max` is zero. Negative values indicate the "cold"
    /// inlet is the warmer one.
    pub effectiveness: Option<f64>,
    /// Effectiveness as a percentage.
    pub thermal_efficiency: Option<f64>,
    /// `U * A / C_min`.
    pub ntu: Option<f64>,
    /// Log-mean temperature difference before correction, K.
    pub lmtd_uncorrected: Option<f64>,
    /// 1 for parallel and counter flow.
    pub correction_factor: Option<f64>,
    /// `F * LMTD`, K.
    pub lmtd: Option<f64>,
}

impl Performance {
    /// # Errors
    ///
    /// Returns an error if all four temperatures are known but the LMTD
    /// cannot be formed from them.
    pub(super) fn evaluate(arrangement: FlowArrangement, values: &Values) -> Result<Self, SolveError> {
        let hot_capacity_rate = values.capacity_rate(HotMassFlowRate, HotSpecificHeat);
        let cold_capacity_rate = values.capacity_rate(ColdMassFlowRate, ColdSpecificHeat);

        let (c_min, c_max) = match (hot_capacity_rate, cold_capacity_rate) {
            (Some(h), Some(c)) => (Some(h.min(c)), Some(h.max(c))),
            _ => (None, None),
        };

        let q_max = c_min
            .zip(values.get(HotInletTemperature))
            .zip(values.get(ColdInletTemperature))
            .map(|((c_min, th_in), tc_in)| c_min * (th_in - tc_in));

        let effectiveness = values
            .get(HeatTransferRate)
            .zip(q_max.filter(|&q_max| q_max != 0.0))
            .map(|(q, q_max)| q / q_max);

        let ntu = values
            .all(&[OverallCoefficient, Area])
            .zip(c_min)
            .map(|(ua, c_min)| ua[0] * ua[1] / c_min);

        let lmtd = values
            .all(&[
                HotInletTemperature,
                HotOutletTemperature,
                ColdInletTemperature,
                ColdOutletTemperature,
            ])
            .map(|t| EffectiveLmtd::from_kelvin(arrangement, [t[0], t[1], t[2], t[3]]))
            .transpose()?;

        Ok(Self {
            hot_capacity_rate,
            cold_capacity_rate,
            c_min,
            c_max,
            capacity_ratio: c_min.zip(c_max).map(|(lo, hi)| lo / hi),
            q_max,
            effectiveness,
            thermal_efficiency: effectiveness.map(|e| 100.0 * e),
            ntu,
            lmtd_uncorrected: lmtd.map(|l| l.uncorrected.get::<delta_kelvin>()),
            correction_factor: lmtd.map(|l| l.correction_factor),
            lmtd: lmtd.map(|l| l.effective_kelvin()),
        })
    }
}
