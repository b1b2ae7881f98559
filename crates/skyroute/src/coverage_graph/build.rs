//! Graph construction and coverage lookup.

use crate::geom::{radars_overlap, Point, Radar};

use super::types::{Graph, RadarId};

/// Build the overlap graph with the exact predicate.
pub fn build_graph(radars: &[Radar]) -> Graph {
    build_graph_with(radars, radars_overlap)
}

/// Build the overlap graph with a caller-supplied connectivity predicate.
///
/// The predicate is evaluated once per unordered pair `i < j` and both
/// directions are recorded, so the result is symmetric even for a predicate
/// that is not.
pub fn build_graph_with<F>(radars: &[Radar], mut connected: F) -> Graph
where
    F: FnMut(&Radar, &Radar) -> bool,
{
    let n = radars.len();
    let mut adj: Vec<Vec<RadarId>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if connected(&radars[i], &radars[j]) {
                adj[i].push(RadarId(j));
                adj[j].push(RadarId(i));
            }
        }
    }
    // Pushes arrive in increasing order per row already; keep the invariant explicit.
    debug_assert!(adj.iter().all(|row| row.windows(2).all(|w| w[0] < w[1])));
    Graph { adj }
}

/// Indices of every radar covering `p`, ascending. Empty if `p` is uncovered.
pub fn covering_radars(p: Point, radars: &[Radar]) -> Vec<RadarId> {
    radars
        .iter()
        .enumerate()
        .filter(|(_, r)| r.covers_point(p))
        .map(|(i, _)| RadarId(i))
        .collect()
}
