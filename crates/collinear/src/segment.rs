//! Line segments between two extreme collinear points.
//!
//! A `LineSegment` only stores its endpoints; the points in between are
//! implied. Equality ignores endpoint order.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::point::Point;

/// Segment spanning two distinct points `p` and `q`.
#[derive(Clone, Copy, Debug)]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    /// Segment from `p` to `q`.
    ///
    /// Callers must pass distinct points; the detectors only build segments
    /// from runs of distinct points. Debug builds panic on `p == q`, release
    /// builds keep the degenerate value. Use [`LineSegment::try_new`] when the
    /// endpoints come from untrusted input.
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        debug_assert!(p != q, "segment endpoints must be distinct: {p}");
        Self { p, q }
    }

    /// `None` if `p == q`.
    #[inline]
    pub fn try_new(p: Point, q: Point) -> Option<Self> {
        (p != q).then_some(Self { p, q })
    }

    #[inline]
    pub fn p(&self) -> Point {
        self.p
    }

    #[inline]
    pub fn q(&self) -> Point {
        self.q
    }

    /// Same segment with endpoints in natural order (smaller first).
    #[inline]
    pub fn canonical(&self) -> Self {
        if self.q < self.p {
            Self {
                p: self.q,
                q: self.p,
            }
        } else {
            *self
        }
    }

    /// True if `r` lies on the infinite line through `p` and `q`.
    pub fn is_on_line(&self, r: Point) -> bool {
        cross(self.p, self.q, r) == 0
    }

    /// True if `other` lies on this segment's line and within its extent.
    ///
    /// Along a fixed line the natural order is monotone, so the extent check
    /// compares canonical endpoints.
    pub fn contains(&self, other: &LineSegment) -> bool {
        if !(self.is_on_line(other.p) && self.is_on_line(other.q)) {
            return false;
        }
        let a = self.canonical();
        let b = other.canonical();
        a.p <= b.p && b.q <= a.q
    }
}

/// Cross product of `(b - a)` and `(c - a)`; zero iff the three are collinear.
#[inline]
fn cross(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (a.x() as i64, a.y() as i64);
    let abx = b.x() as i64 - ax;
    let aby = b.y() as i64 - ay;
    let acx = c.x() as i64 - ax;
    let acy = c.y() as i64 - ay;
    abx * acy - aby * acx
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.p == other.p && self.q == other.q) || (self.p == other.q && self.q == other.p)
    }
}

impl Eq for LineSegment {}

impl Hash for LineSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let c = self.canonical();
        c.p.hash(state);
        c.q.hash(state);
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}

/// Canonicalize, dedup, and drop every segment contained in another one.
///
/// Keeps first-seen order of the survivors. Used to normalize reference
/// output, which reports each qualifying 4-subset of a longer run.
pub fn maximal_segments(segments: &[LineSegment]) -> Vec<LineSegment> {
    let mut uniq: Vec<LineSegment> = Vec::with_capacity(segments.len());
    for s in segments {
        let c = s.canonical();
        if !uniq.contains(&c) {
            uniq.push(c);
        }
    }
    uniq.iter()
        .enumerate()
        .filter(|&(i, s)| {
            !uniq
                .iter()
                .enumerate()
                .any(|(j, t)| i != j && t.contains(s))
        })
        .map(|(_, s)| *s)
        .collect()
}
