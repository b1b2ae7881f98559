//! Basic value types and tolerances.
//!
//! - `Point`: integer 2D point.
//! - `Radar`: circular coverage zone, radius validated non-negative.
//! - `GeomCfg`: tolerance for the floating-point overlap variant.

use nalgebra::Vector2;

use crate::error::ZoneError;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack added to the radius sum when comparing real center distances.
    pub eps_dist: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_dist: 1e-9 }
    }
}

/// Integer point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widened coordinates; squares and sums of two `i32` differences fit in `i128`.
    #[inline]
    pub fn to_vec2(self) -> Vector2<i128> {
        Vector2::new(self.x as i128, self.y as i128)
    }

    #[inline]
    pub fn to_vec2_f64(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }

    /// Exact squared Euclidean distance.
    #[inline]
    pub fn dist2(self, other: Point) -> i128 {
        let d = self.to_vec2() - other.to_vec2();
        d.dot(&d)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Circular coverage zone. A zero radius covers only the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Radar {
    center: Point,
    radius: i32,
}

impl Radar {
    /// Build a radar, rejecting negative radii.
    pub fn new(center: Point, radius: i32) -> Result<Self, ZoneError> {
        if radius < 0 {
            return Err(ZoneError::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Radius clamped to zero; for internal generators that cannot produce invalid input.
    #[inline]
    pub(crate) fn clamped(center: Point, radius: i32) -> Self {
        Self {
            center,
            radius: radius.max(0),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// `|p - center|² <= radius²`; points on the rim are covered.
    #[inline]
    pub fn covers_point(&self, p: Point) -> bool {
        let r = self.radius as i128;
        self.center.dist2(p) <= r * r
    }

    /// True if `other`'s disk lies inside this one (`d <= r_self - r_other`).
    #[inline]
    pub fn contains_radar(&self, other: &Radar) -> bool {
        let gap = self.radius as i128 - other.radius as i128;
        gap >= 0 && self.center.dist2(other.center) <= gap * gap
    }
}

impl TryFrom<(i32, i32, i32)> for Radar {
    type Error = ZoneError;

    fn try_from((x, y, r): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Radar::new(Point::new(x, y), r)
    }
}
