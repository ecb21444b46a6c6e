//! Integer points in the plane with natural and slope orderings.
//!
//! - Natural order: by `y`, then by `x` (`Ord`).
//! - Slope order: relative to a fixed origin, by `origin.slope_to(p)`.
//!
//! Slopes are `f64` and compared bit-exactly. Coordinate differences are exact
//! in `f64` and division is correctly rounded, so equal rational slopes map to
//! the identical float.

use std::cmp::Ordering;
use std::fmt;

/// Immutable 2D point with integer coordinates.
///
/// Field order is `(y, x)` on purpose: the derived ordering is the natural
/// order (y first, then x).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    y: i32,
    x: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Slope from `self` to `other`.
    ///
    /// - same point: `-inf`
    /// - horizontal: `+0.0`
    /// - vertical: `+inf`
    /// - otherwise `(y1 - y0) / (x1 - x0)`
    pub fn slope_to(&self, other: &Point) -> f64 {
        if self.x == other.x && self.y == other.y {
            f64::NEG_INFINITY
        } else if self.y == other.y {
            0.0
        } else if self.x == other.x {
            f64::INFINITY
        } else {
            (other.y as f64 - self.y as f64) / (other.x as f64 - self.x as f64)
        }
    }

    /// Comparator ordering points by their slope to `self`.
    ///
    /// `self` sorts first (slope `-inf`). NaN never occurs, so `total_cmp`
    /// is a valid total order and equal slopes end up contiguous.
    pub fn slope_order(&self) -> impl Fn(&Point, &Point) -> Ordering {
        let origin = *self;
        move |a, b| origin.slope_to(a).total_cmp(&origin.slope_to(b))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
