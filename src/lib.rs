//! # Twine Heat Transfer
//!
//! Steady-state heat transfer models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations:
//!   a one-dimensional thermal resistance network for composite walls and
//!   pipes, and a heat exchanger parameter solver.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code that only one model needs lives in that model's internal
//! `core` module. It moves to [`support`] once it is useful across models or
//! outside this crate.

pub mod models;
pub mod support;
