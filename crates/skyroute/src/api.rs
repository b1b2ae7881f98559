//! Curated re-exports for callers outside the crate (CLI, benches, examples).
//!
//! Prefer these paths over reaching into submodules; the module layout may move.

// Geometry
pub use crate::geom::{radars_overlap, radars_overlap_eps, GeomCfg, Point, Radar};
// Random fields
pub use crate::geom::rand::{
    draw_radar_field, draw_scenario, FieldCfg, RadarCount, ReplayToken as FieldReplay, Scenario,
};
// Coverage graph
pub use crate::coverage_graph::{
    build_graph, build_graph_with, connected_components, covering_radars, path_exists,
    reachable_from, route_exists, Graph, RadarId,
};
// Decision
pub use crate::error::ZoneError;
pub use crate::route::{can_traverse, check_route, check_route_raw, RouteReport};
