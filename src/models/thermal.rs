//! Thermal systems models.
//!
//! This module contains steady-state models for conduction through layered
//! walls and pipes, and for two-stream heat exchangers.

pub mod hx;
pub mod resistance;
