//! Supporting utilities shared by the models in this crate.
//!
//! - [`constraint`]: Type-level numeric constraints (`StrictlyPositive`, ...).
//! - [`hx`]: Heat exchanger relations (effectiveness-NTU, LMTD correction).
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod hx;
pub mod units;
