//! Random radar fields (uniform centers + bounded radii, replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for radar layouts used by benches,
//!   the `random_fields` example and property tests. Draws are reproducible from
//!   a `(seed, index)` replay token.
//!
//! Model
//! - Centers are uniform on the square `[-extent, extent]²`, radii uniform on
//!   `[radius_min, radius_max]`; the radar count is fixed or uniform on a range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Radar};

/// Radar count distribution.
#[derive(Clone, Copy, Debug)]
pub enum RadarCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl RadarCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            RadarCount::Fixed(n) => n,
            RadarCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Radar-field sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct FieldCfg {
    pub radar_count: RadarCount,
    /// Half-width of the square holding centers and endpoints. Clamped to >= 0.
    pub extent: i32,
    /// Smallest radius drawn. Clamped to >= 0.
    pub radius_min: i32,
    /// Largest radius drawn. Raised to `radius_min` if smaller.
    pub radius_max: i32,
}
impl Default for FieldCfg {
    fn default() -> Self {
        Self {
            radar_count: RadarCount::Uniform { min: 5, max: 40 },
            extent: 100,
            radius_min: 2,
            radius_max: 25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A drawn query: endpoints plus the radar layout.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub start: Point,
    pub finish: Point,
    pub radars: Vec<Radar>,
}

fn draw_point<R: Rng>(rng: &mut R, extent: i32) -> Point {
    Point::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    )
}

fn draw_radars<R: Rng>(rng: &mut R, cfg: &FieldCfg) -> Vec<Radar> {
    let extent = cfg.extent.max(0);
    let r_lo = cfg.radius_min.max(0);
    let r_hi = cfg.radius_max.max(r_lo);
    let n = cfg.radar_count.sample(rng);
    (0..n)
        .map(|_| {
            let c = draw_point(rng, extent);
            Radar::clamped(c, rng.gen_range(r_lo..=r_hi))
        })
        .collect()
}

/// Draw a radar field only.
pub fn draw_radar_field(cfg: FieldCfg, tok: ReplayToken) -> Vec<Radar> {
    let mut rng = tok.to_std_rng();
    draw_radars(&mut rng, &cfg)
}

/// Draw a full scenario: a radar field plus start and finish inside the same square.
pub fn draw_scenario(cfg: FieldCfg, tok: ReplayToken) -> Scenario {
    let mut rng = tok.to_std_rng();
    let radars = draw_radars(&mut rng, &cfg);
    let extent = cfg.extent.max(0);
    let start = draw_point(&mut rng, extent);
    let finish = draw_point(&mut rng, extent);
    Scenario {
        start,
        finish,
        radars,
    }
}
