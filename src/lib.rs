//! # algoviz-engine
//!
//! Stepwise algorithm runner behind an educational visualizer. Classic sorting,
//! searching and graph algorithms are recorded as ordered, replayable frames that a
//! display surface renders at a human pace.
//!
//! ## Architecture
//!
//! - [`generator`] and [`graph_parser`] build datasets from random values or user text.
//! - [`emitters`] turn `(algorithm, dataset, params)` into frames plus metrics, fed by the
//!   [`accumulator`]. Emission is pure, so a run can be re-emitted at will.
//! - [`driver`] publishes frames one at a time to a [`surface::DisplaySurface`], sleeping
//!   the step delay in between.
//! - [`visualizer`] is the per-view controller gluing the above together and gating
//!   every control while a run animates.

pub mod accumulator;
pub mod config;
pub mod driver;
#[cfg(test)]
mod driver_test;
pub mod emitters;
pub mod error;
pub mod generator;
pub mod graph_parser;
pub mod surface;
#[cfg(test)]
mod surface_test;
pub mod types;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use driver::{AnimationDriver, DriverState, Playback};
pub use emitters::{Trace, emit};
pub use error::{ErrorKind, VisualizerError};
pub use generator::{generate_random, generate_random_sorted, parse_user_input};
pub use graph_parser::parse_graph;
pub use surface::{ChannelSurface, DisplaySurface, RecordingSurface, ViewEvent};
pub use types::{
  Algorithm, AlgorithmFamily, Dataset, Distance, Frame, FrameKind, Graph, Metrics, Run,
  RunParams,
};
pub use visualizer::Visualizer;
