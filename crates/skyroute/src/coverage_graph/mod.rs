//! Coverage graph: radars as nodes, overlaps as undirected edges.
//!
//! Purpose
//! - Build the dense adjacency over radar indices once per query and answer
//!   reachability between the radars covering the start and the finish.
//!
//! Layout
//! - `types.rs` (ids and the graph), `build.rs` (adjacency builder and coverage
//!   lookup), `dfs.rs` (iterative search with an explicit stack).
//!
//! Code cross-refs: `geom::{Radar, radars_overlap}`, `route::can_traverse`.

mod build;
mod dfs;
mod types;

pub use build::{build_graph, build_graph_with, covering_radars};
pub use dfs::{connected_components, path_exists, reachable_from, route_exists};
pub use types::{Graph, RadarId};
