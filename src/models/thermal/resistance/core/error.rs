use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building a [`Network`](super::Network).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NetworkError {
    /// A convection coefficient or geometry dimension violated a constraint.
    #[error("constraint violated: {0}")]
    Constraint(#[from] ConstraintError),

    /// A layer was built for the other geometry.
    #[error("layer {layer} does not match the network geometry")]
    GeometryMismatch { layer: usize },

    /// A cylindrical layer does not extend past the radius it starts from.
    #[error("layer {layer} outer radius {outer:?} must exceed its inner radius {inner:?}")]
    RadiusNotIncreasing {
        layer: usize,
        inner: Length,
        outer: Length,
    },

    /// No layers and no convection, so there is nothing to resist heat flow.
    #[error("network has no layers and no convection")]
    Empty,
}
