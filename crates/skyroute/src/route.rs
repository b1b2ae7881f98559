//! Route feasibility: the single decision exposed to callers.
//!
//! A route from `start` to `finish` exists iff some radar covering `start` and
//! some radar covering `finish` are joined by a chain of pairwise overlapping
//! radars (a single radar covering both counts).

use crate::coverage_graph::{
    build_graph, connected_components, covering_radars, route_exists, RadarId,
};
use crate::error::ZoneError;
use crate::geom::{Point, Radar};

/// Decision plus the intermediate data it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteReport {
    pub possible: bool,
    /// Radars covering the start point (ascending ids).
    pub start_radars: Vec<RadarId>,
    /// Radars covering the finish point (ascending ids).
    pub finish_radars: Vec<RadarId>,
    pub radar_count: usize,
    pub edge_count: usize,
    /// Number of connected groups of overlapping radars.
    pub component_count: usize,
}

/// True if the route `start → finish` stays inside radar coverage.
///
/// Pure and total: an empty radar list or `start == finish` are ordinary inputs.
pub fn can_traverse(start: Point, finish: Point, radars: &[Radar]) -> bool {
    check_route(start, finish, radars).possible
}

/// Like `can_traverse`, but also returns the candidate sets and graph size.
pub fn check_route(start: Point, finish: Point, radars: &[Radar]) -> RouteReport {
    let graph = build_graph(radars);
    let start_radars = covering_radars(start, radars);
    let finish_radars = covering_radars(finish, radars);
    let possible = route_exists(&graph, &start_radars, &finish_radars);
    let component_count = connected_components(&graph)
        .into_iter()
        .max()
        .map_or(0, |m| m + 1);
    tracing::debug!(
        radars = graph.len(),
        edges = graph.edge_count(),
        components = component_count,
        start_candidates = start_radars.len(),
        finish_candidates = finish_radars.len(),
        possible,
        "route_checked"
    );
    RouteReport {
        possible,
        start_radars,
        finish_radars,
        radar_count: graph.len(),
        edge_count: graph.edge_count(),
        component_count,
    }
}

/// Validate raw `(x, y, r)` triples, then decide.
///
/// Fails with `ZoneError::NegativeRadius` on the first radar with `r < 0`.
pub fn check_route_raw(
    start: (i32, i32),
    finish: (i32, i32),
    radars: &[(i32, i32, i32)],
) -> Result<bool, ZoneError> {
    let radars = radars
        .iter()
        .copied()
        .map(Radar::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(can_traverse(start.into(), finish.into(), &radars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::rand::{draw_scenario, FieldCfg, ReplayToken};
    use proptest::prelude::*;

    fn radar(x: i32, y: i32, r: i32) -> Radar {
        Radar::new(Point::new(x, y), r).unwrap()
    }

    #[test]
    fn chained_circles_reach_finish() {
        let radars = [radar(0, 0, 5), radar(5, 0, 5), radar(10, 0, 5)];
        assert!(can_traverse(Point::new(0, 0), Point::new(10, 0), &radars));
    }

    #[test]
    fn uncovered_finish_is_impossible() {
        let radars = [radar(0, 0, 5)];
        assert!(!can_traverse(Point::new(0, 0), Point::new(100, 100), &radars));
    }

    #[test]
    fn single_radar_covering_both() {
        let radars = [radar(0, 0, 2)];
        let report = check_route(Point::new(0, 0), Point::new(1, 1), &radars);
        assert!(report.possible);
        assert_eq!(report.start_radars, vec![RadarId(0)]);
        assert_eq!(report.finish_radars, vec![RadarId(0)]);
    }

    #[test]
    fn gap_between_radars_is_impossible() {
        let radars = [radar(0, 0, 5), radar(15, 0, 5)];
        let report = check_route(Point::new(0, 0), Point::new(20, 0), &radars);
        assert!(!report.possible);
        assert_eq!(report.edge_count, 0);
        assert_eq!(report.radar_count, 2);
        assert_eq!(report.component_count, 2);
    }

    #[test]
    fn report_counts_components() {
        let radars = [
            radar(0, 0, 5),
            radar(5, 0, 5),
            radar(100, 0, 1),
            radar(200, 0, 1),
        ];
        let report = check_route(Point::new(0, 0), Point::new(5, 0), &radars);
        assert!(report.possible);
        assert_eq!(report.edge_count, 1);
        assert_eq!(report.component_count, 3);
        assert_eq!(check_route(Point::new(0, 0), Point::new(0, 0), &[]).component_count, 0);
    }

    #[test]
    fn empty_radar_list_and_identical_endpoints() {
        assert!(!can_traverse(Point::new(0, 0), Point::new(0, 0), &[]));
        assert!(can_traverse(
            Point::new(3, 3),
            Point::new(3, 3),
            &[radar(3, 3, 0)]
        ));
    }

    #[test]
    fn shared_radar_wins_over_unrelated_ones() {
        let radars = [radar(500, 500, 1), radar(0, 0, 10), radar(-300, 0, 2)];
        assert!(can_traverse(Point::new(-3, 4), Point::new(6, -8), &radars));
    }

    #[test]
    fn uncovered_start_is_impossible() {
        let radars = [radar(10, 0, 3), radar(14, 0, 3)];
        assert!(!can_traverse(Point::new(0, 0), Point::new(14, 0), &radars));
    }

    #[test]
    fn raw_entrypoint_validates() {
        assert_eq!(
            check_route_raw((0, 0), (10, 0), &[(0, 0, 5), (5, 0, 5), (10, 0, 5)]),
            Ok(true)
        );
        assert_eq!(
            check_route_raw((0, 0), (1, 0), &[(0, 0, 5), (1, 0, -3)]),
            Err(ZoneError::NegativeRadius { radius: -3 })
        );
        assert_eq!(check_route_raw((0, 0), (0, 0), &[]), Ok(false));
    }

    proptest! {
        #[test]
        fn order_of_radars_does_not_matter(seed in any::<u64>(), rot in 0usize..64) {
            let s = draw_scenario(FieldCfg::default(), ReplayToken { seed, index: 1 });
            let expected = can_traverse(s.start, s.finish, &s.radars);
            let mut reversed = s.radars.clone();
            reversed.reverse();
            prop_assert_eq!(can_traverse(s.start, s.finish, &reversed), expected);
            let mut rotated = s.radars.clone();
            if !rotated.is_empty() {
                let k = rot % rotated.len();
                rotated.rotate_left(k);
            }
            prop_assert_eq!(can_traverse(s.start, s.finish, &rotated), expected);
        }

        #[test]
        fn route_is_symmetric_in_endpoints(seed in any::<u64>()) {
            let s = draw_scenario(FieldCfg::default(), ReplayToken { seed, index: 2 });
            prop_assert_eq!(
                can_traverse(s.start, s.finish, &s.radars),
                can_traverse(s.finish, s.start, &s.radars)
            );
        }

        #[test]
        fn extra_radars_never_break_a_route(seed in any::<u64>()) {
            let s = draw_scenario(FieldCfg::default(), ReplayToken { seed, index: 3 });
            if can_traverse(s.start, s.finish, &s.radars) {
                let mut more = s.radars.clone();
                more.push(radar(1000, 1000, 7));
                prop_assert!(can_traverse(s.start, s.finish, &more));
            }
        }
    }
}
