//! Radar-covered route feasibility.
//!
//! Decide whether a flight from a start point to a finish point can stay inside
//! the union of circular radar zones at all times. Radars are graph nodes, edges
//! join touching or overlapping radars, and the answer is plain reachability
//! between the radars covering the two endpoints.
//!
//! API Policy
//! - `route::can_traverse` is the entrypoint. The building blocks stay public
//!   for the CLI report, benches and tests; `api` re-exports the curated set.

pub mod api;
pub mod coverage_graph;
pub mod error;
pub mod geom;
pub mod route;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ZoneError;
pub use geom::{GeomCfg, Point, Radar};
pub use route::{can_traverse, check_route, check_route_raw, RouteReport};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coverage_graph::{build_graph, covering_radars, route_exists, Graph, RadarId};
    pub use crate::geom::rand::{draw_scenario, FieldCfg, RadarCount, ReplayToken, Scenario};
    pub use crate::geom::{radars_overlap, GeomCfg, Point, Radar};
    pub use crate::route::{can_traverse, check_route, RouteReport};
    pub use crate::ZoneError;
}
