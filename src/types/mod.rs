//! Data model shared by the generator, the step emitters and the animation driver.
//!
//! Everything here is plain data: cloneable, comparable and serializable so frames and
//! runs can be handed to any display surface (or dumped as JSON by the CLI).

mod algorithm;
mod dataset;
mod distance;
#[cfg(test)]
mod distance_test;
mod frame;
mod graph;
#[cfg(test)]
mod graph_test;
mod metrics;
mod run;

pub use algorithm::{Algorithm, AlgorithmFamily};
pub use dataset::Dataset;
pub use distance::Distance;
pub use frame::{Element, Frame, FrameKind, Snapshot};
pub use graph::{Edge, Graph};
pub use metrics::Metrics;
pub use run::{Run, RunParams};

/// Identifier of a graph node.
pub type NodeId = String;
