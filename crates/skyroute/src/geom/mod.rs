//! Planar geometry for circular coverage zones.
//!
//! Purpose
//! - Provide the integer `Point` and the validated `Radar` (center + radius) used by
//!   graph construction, plus the pairwise overlap predicate.
//! - Keep comparisons exact: every distance test is done on squared `i128` values,
//!   so boundary cases (touching circles, points on the rim) never depend on rounding.
//!
//! Tolerant variant
//! - `radars_overlap_eps` compares real distances with `GeomCfg::eps_dist`. It is
//!   opt-in and only meant for moderate coordinate magnitudes.
//!
//! Code cross-refs: `coverage_graph::build_graph`, `route::can_traverse`.

mod overlap;
pub mod rand;
mod types;

pub use overlap::{radars_overlap, radars_overlap_eps};
pub use types::{GeomCfg, Point, Radar};
