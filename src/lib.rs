//! Shortest routes between star systems
//!
//! A `StarGraph` is built once from a star table and a lane table, then queried
//! through a `Navigator` with either Dijkstra or A*. Both run on the same
//! priority-first expansion loop; A* adds the straight-line distance to the
//! target as its heuristic.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod navigator;

mod collections;

pub use catalog::{LaneRecord, StarRecord, sample_catalog};
pub use config::{SearchConfig, StaleEntries};
pub use errors::NavigationError;
pub use geometry::Point3;
pub use graph::{StarGraph, StarId};
pub use navigator::{Algorithm, Comparison, Navigator, SearchResult};
