//! Feasibility rate of random radar fields, by radar count.
//!
//! Usage:
//!   cargo run -p skyroute --example random_fields -- [samples]
//!
//! Prints, per radar count, how many random start/finish pairs are connected and
//! the mean number of overlap edges.

use skyroute::api::{check_route, draw_scenario, FieldCfg, FieldReplay, RadarCount};

fn main() {
    let samples: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    for n in [5usize, 10, 20, 40, 80] {
        let cfg = FieldCfg {
            radar_count: RadarCount::Fixed(n),
            ..FieldCfg::default()
        };
        let mut possible = 0u64;
        let mut edges = 0usize;
        for index in 0..samples {
            let s = draw_scenario(cfg, FieldReplay { seed: 2025, index });
            let report = check_route(s.start, s.finish, &s.radars);
            if report.possible {
                possible += 1;
            }
            edges += report.edge_count;
        }
        println!(
            "n={:>3}  possible={:>4}/{}  mean_edges={:.1}",
            n,
            possible,
            samples,
            edges as f64 / samples.max(1) as f64
        );
    }
}
