//! One-dimensional steady conduction through layered walls and pipes.
//!
//! Every layer and convective boundary is a thermal resistance in series.
//! The heat rate follows from the total resistance and the boundary
//! temperature difference, and each interface temperature from the share of
//! resistance upstream of it.

mod circuit;
mod error;
mod geometry;
mod layer;
mod network;
mod results;

pub use circuit::{CircuitElement, ElementKind};
pub use error::NetworkError;
pub use geometry::Geometry;
pub use layer::{Layer, LayerExtent};
pub use network::{BoundaryTemperatures, Network};
pub use results::NetworkResults;
