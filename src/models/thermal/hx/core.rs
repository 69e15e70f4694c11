//! Two-stream heat exchanger parameter solving.
//!
//! A problem is a set of known parameters, a set of requested unknowns and a
//! flow arrangement. Unknowns are derived from a fixed dependency table of
//! energy balances and rate equations, with a coupled effectiveness-NTU step
//! when both outlet temperatures are unknown but the exchanger is sized.
//!
//! All values are plain SI numbers keyed by [`Parameter`]; temperatures are
//! absolute (K).

mod config;
mod coupled;
mod derivation;
mod error;
mod input;
mod lmtd;
mod metrics;
mod parameter;
mod results;
mod solve;
mod values;

pub use config::ConvergenceConfig;
pub use error::SolveError;
pub use input::{FlowArrangement, HxProblem, KnownValues};
pub use metrics::Performance;
pub use parameter::{Parameter, ParseParameterError, Role};
pub use results::{ArrangementComparison, Solution};
pub use solve::{compare_arrangements, solve};

use lmtd::EffectiveLmtd;
use values::Values;
