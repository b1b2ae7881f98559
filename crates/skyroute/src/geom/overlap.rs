//! Pairwise connectivity of coverage zones.

use super::types::{GeomCfg, Radar};

/// Two radars are connected when their disks touch, intersect, or one contains
/// the other.
///
/// Containment (`d <= |rA - rB|`) implies `d <= rA + rB`, so the whole predicate
/// reduces to `d² <= (rA + rB)²`, evaluated exactly in `i128`.
#[inline]
pub fn radars_overlap(a: &Radar, b: &Radar) -> bool {
    let reach = a.radius() as i128 + b.radius() as i128;
    a.center().dist2(b.center()) <= reach * reach
}

/// Floating-point variant: `‖cA − cB‖ <= rA + rB + eps_dist`.
///
/// Agrees with `radars_overlap` as long as `1 / (2 (rA + rB))` stays well above
/// `eps_dist` and the coordinates are exactly representable.
#[inline]
pub fn radars_overlap_eps(a: &Radar, b: &Radar, cfg: GeomCfg) -> bool {
    let d = (a.center().to_vec2_f64() - b.center().to_vec2_f64()).norm();
    d <= a.radius() as f64 + b.radius() as f64 + cfg.eps_dist
}
