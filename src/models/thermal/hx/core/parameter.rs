use std::{fmt, str::FromStr};

use thiserror::Error;

/// A physical quantity the heat exchanger solver can take as known or derive.
///
/// Values are exchanged in canonical SI units (see [`Parameter::si_unit`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    HotInletTemperature,
    ColdInletTemperature,
    HotOutletTemperature,
    ColdOutletTemperature,
    HotMassFlowRate,
    ColdMassFlowRate,
    HotSpecificHeat,
    ColdSpecificHeat,
    Area,
    OverallCoefficient,
    HeatTransferRate,
}

/// What kind of quantity a [`Parameter`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Temperature,
    MassFlowRate,
    SpecificHeat,
    Area,
    Coefficient,
    Rate,
}

impl Parameter {
    /// Every parameter, in canonical order.
    pub const ALL: [Parameter; 11] = [
        Self::HotInletTemperature,
        Self::ColdInletTemperature,
        Self::HotOutletTemperature,
        Self::ColdOutletTemperature,
        Self::HotMassFlowRate,
        Self::ColdMassFlowRate,
        Self::HotSpecificHeat,
        Self::ColdSpecificHeat,
        Self::Area,
        Self::OverallCoefficient,
        Self::HeatTransferRate,
    ];

    /// Short identifier, e.g. `"Th_in"`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::HotInletTemperature => "Th_in",
            Self::ColdInletTemperature => "Tc_in",
            Self::HotOutletTemperature => "Th_out",
            Self::ColdOutletTemperature => "Tc_out",
            Self::HotMassFlowRate => "m_h",
            Self::ColdMassFlowRate => "m_c",
            Self::HotSpecificHeat => "cp_h",
            Self::ColdSpecificHeat => "cp_c",
            Self::Area => "A",
            Self::OverallCoefficient => "U",
            Self::HeatTransferRate => "Q",
        }
    }

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::HotInletTemperature
            | Self::ColdInletTemperature
            | Self::HotOutletTemperature
            | Self::ColdOutletTemperature => Role::Temperature,
            Self::HotMassFlowRate | Self::ColdMassFlowRate => Role::MassFlowRate,
            Self::HotSpecificHeat | Self::ColdSpecificHeat => Role::SpecificHeat,
            Self::Area => Role::Area,
            Self::OverallCoefficient => Role::Coefficient,
            Self::HeatTransferRate => Role::Rate,
        }
    }

    /// Symbol of the SI unit values of this parameter are expressed in.
    #[must_use]
    pub const fn si_unit(self) -> &'static str {
        match self.role() {
            Role::Temperature => "K",
            Role::MassFlowRate => "kg/s",
            Role::SpecificHeat => "J/(kg·K)",
            Role::Area => "m²",
            Role::Coefficient => "W/(m²·K)",
            Role::Rate => "W",
        }
    }

    pub(super) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string is not a parameter id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heat exchanger parameter: {0:?}")]
pub struct ParseParameterError(pub String);

impl FromStr for Parameter {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ParseParameterError(s.to_owned()))
    }
}
