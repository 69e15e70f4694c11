//! Heat exchanger analysis toolkit.
//!
//! This module provides general-purpose relations for two-stream heat
//! exchangers with constant specific heats:
//!
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`], [`Effectiveness`], [`Ntu`]
//! - **Stream modeling**: [`StreamInlet`]
//! - **Flow arrangements**: [`CounterFlow`], [`ParallelFlow`], [`ShellAndTube`]
//! - **Effectiveness-NTU**: [`EffectivenessRelation`] and
//!   [`functional::known_conductance_and_inlets`]
//! - **Log-mean temperature difference**: [`Terminals`], [`TerminalDifferences`],
//!   [`LmtdCorrection`] and [`log_mean_temperature_difference`]
//!
//! # Example
//!
//! ```
//! use twine_heat_transfer::support::hx::{
//!     CounterFlow, LmtdCorrection, ShellAndTube, TerminalDifferences, Terminals,
//!     log_mean_temperature_difference,
//! };
//! use uom::si::{
//!     f64::ThermodynamicTemperature, temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let t = |c| ThermodynamicTemperature::new::<degree_celsius>(c);
//! let terminals = Terminals::new(t(80.0), t(50.0), t(20.0), t(40.0));
//!
//! let [dt1, dt2] = CounterFlow.terminal_differences(&terminals);
//! let lmtd = log_mean_temperature_difference(dt1, dt2).unwrap();
//! assert!((lmtd.get::<kelvin>() - 34.76).abs() < 0.01);
//!
//! let f = ShellAndTube::OneTwo.correction_factor(terminals.p(), terminals.r());
//! assert!(f > 0.0 && f <= 1.0);
//! ```

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod correction;
mod effectiveness_ntu;
pub mod functional;
mod lmtd;
mod stream;

pub use arrangement::{CounterFlow, ParallelFlow, ShellAndTube};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use correction::LmtdCorrection;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu};
pub use lmtd::{LmtdError, TerminalDifferences, Terminals, log_mean_temperature_difference};
pub use stream::StreamInlet;
