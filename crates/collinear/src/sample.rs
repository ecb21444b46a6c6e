//! Random point sets with planted collinear lines.
//!
//! Purpose
//! - Deterministic inputs for property tests, benches, and the CLI `generate`
//!   command. Background noise is uniform in `[0, bound]^2`; planted lines step
//!   a random primitive integer direction from a random start so that every
//!   planted point stays in range.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! a sample can be regenerated from its token alone.

use std::collections::HashSet;
use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::COORD_MAX;
use crate::point::Point;
use crate::segment::LineSegment;

/// Points-per-line distribution.
#[derive(Clone, Copy, Debug)]
pub enum PerLine {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PerLine {
    fn bounds(&self) -> (usize, usize) {
        match *self {
            PerLine::Fixed(n) => (n, n),
            PerLine::Uniform { min, max } => (min, max),
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let (lo, hi) = self.bounds();
        rng.gen_range(lo..=hi)
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Uniform noise points (before dedup).
    pub background: usize,
    /// Number of planted lines.
    pub lines: usize,
    pub per_line: PerLine,
    /// Largest absolute step per axis between consecutive planted points.
    pub max_step: i32,
    /// Coordinates are drawn from `0..=bound`.
    pub bound: i32,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            background: 64,
            lines: 4,
            per_line: PerLine::Uniform { min: 4, max: 8 },
            max_step: 64,
            bound: COORD_MAX,
        }
    }
}

impl SampleCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if self.bound < 1 || self.bound > COORD_MAX {
            return Err(SampleError::invalid(format!(
                "bound must be in 1..={COORD_MAX}, got {}",
                self.bound
            )));
        }
        if self.max_step < 1 {
            return Err(SampleError::invalid("max_step must be >= 1"));
        }
        let (lo, hi) = self.per_line.bounds();
        if lo < 2 || lo > hi {
            return Err(SampleError::invalid(format!(
                "per_line needs 2 <= min <= max, got {lo}..={hi}"
            )));
        }
        if self.lines > 0 && (hi as i64 - 1) * self.max_step as i64 > self.bound as i64 {
            return Err(SampleError::invalid(
                "longest planted line does not fit inside bound",
            ));
        }
        Ok(())
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
        // SplitMix64 finalizer
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

/// Errors surfaced by the sampler.
#[derive(Debug)]
pub enum SampleError {
    InvalidCfg { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCfg {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCfg { reason } => write!(f, "invalid sample config: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// One drawn point set plus the lines planted in it.
#[derive(Clone, Debug)]
pub struct PointSample {
    /// Distinct points, planted lines first, then background noise.
    pub points: Vec<Point>,
    /// Extent of each planted line (first to last planted point).
    pub planted: Vec<LineSegment>,
    pub token: ReplayToken,
}

/// Draw a point set. Same `(cfg, token)` always gives the same sample.
///
/// Planted lines may be extended by noise or by other lines that happen to be
/// collinear with them, so detectors can report longer segments than planted.
pub fn draw_points(cfg: SampleCfg, token: ReplayToken) -> Result<PointSample, SampleError> {
    cfg.validate()?;
    let mut rng = token.to_std_rng();
    let mut seen: HashSet<Point> = HashSet::new();
    let mut points = Vec::new();
    let mut planted = Vec::with_capacity(cfg.lines);

    for _ in 0..cfg.lines {
        let k = cfg.per_line.sample(&mut rng);
        let dir = draw_direction(&mut rng, cfg.max_step);
        let start = draw_start(&mut rng, dir, k, cfg.bound);
        let line: Vec<Point> = (0..k as i64)
            .map(|t| to_point(start + dir * t))
            .collect();
        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            planted.push(LineSegment::new(*first, *last));
        }
        for p in line {
            if seen.insert(p) {
                points.push(p);
            }
        }
    }

    for _ in 0..cfg.background {
        let p = Point::new(
            rng.gen_range(0..=cfg.bound),
            rng.gen_range(0..=cfg.bound),
        );
        if seen.insert(p) {
            points.push(p);
        }
    }

    Ok(PointSample {
        points,
        planted,
        token,
    })
}

/// Primitive nonzero step (gcd of components is 1), each component in
/// `-max_step..=max_step`. No lattice point lies strictly between two
/// consecutive planted points.
fn draw_direction<R: Rng>(rng: &mut R, max_step: i32) -> Vector2<i64> {
    let m = max_step as i64;
    loop {
        let d = Vector2::new(rng.gen_range(-m..=m), rng.gen_range(-m..=m));
        if d != Vector2::zeros() {
            return d / gcd(d.x.abs(), d.y.abs());
        }
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Start point such that `start + dir * t` stays in `[0, bound]^2` for `t < k`.
fn draw_start<R: Rng>(rng: &mut R, dir: Vector2<i64>, k: usize, bound: i32) -> Vector2<i64> {
    let span = dir * (k as i64 - 1);
    let b = bound as i64;
    let x = draw_axis(rng, span.x, b);
    let y = draw_axis(rng, span.y, b);
    Vector2::new(x, y)
}

#[inline]
fn draw_axis<R: Rng>(rng: &mut R, span: i64, bound: i64) -> i64 {
    if span >= 0 {
        rng.gen_range(0..=bound - span)
    } else {
        rng.gen_range(-span..=bound)
    }
}

#[inline]
fn to_point(v: Vector2<i64>) -> Point {
    // in range by construction of `draw_start`
    Point::new(v.x as i32, v.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_sample() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = draw_points(cfg, tok).unwrap();
        let b = draw_points(cfg, tok).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.planted, b.planted);
        let c = draw_points(cfg, ReplayToken { seed: 7, index: 4 }).unwrap();
        assert_ne!(a.points, c.points);
    }

    #[test]
    fn points_are_distinct_and_in_bounds() {
        let cfg = SampleCfg {
            background: 500,
            lines: 6,
            per_line: PerLine::Uniform { min: 4, max: 10 },
            max_step: 3,
            bound: 40,
        };
        let s = draw_points(cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        let uniq: HashSet<_> = s.points.iter().collect();
        assert_eq!(uniq.len(), s.points.len());
        assert!(s
            .points
            .iter()
            .all(|p| (0..=40).contains(&p.x()) && (0..=40).contains(&p.y())));
        assert_eq!(s.planted.len(), 6);
    }

    #[test]
    fn planted_lines_are_collinear_runs() {
        let cfg = SampleCfg {
            background: 0,
            lines: 1,
            per_line: PerLine::Fixed(5),
            max_step: 10,
            bound: 100,
        };
        let s = draw_points(cfg, ReplayToken { seed: 99, index: 0 }).unwrap();
        assert_eq!(s.points.len(), 5);
        let seg = s.planted[0];
        assert!(s.points.iter().all(|p| seg.is_on_line(*p)));
    }

    #[test]
    fn planted_steps_are_primitive() {
        let mut rng = ReplayToken { seed: 3, index: 0 }.to_std_rng();
        for _ in 0..500 {
            let d = draw_direction(&mut rng, 12);
            assert_ne!(d, Vector2::zeros());
            assert_eq!(gcd(d.x.abs(), d.y.abs()), 1, "step {d:?}");
            assert!(d.x.abs() <= 12 && d.y.abs() <= 12);
        }
        assert_eq!(gcd(4, 4), 4);
        assert_eq!(gcd(0, 6), 6);
        assert_eq!(gcd(9, 0), 9);
    }

    #[test]
    fn rejects_lines_that_cannot_fit() {
        let cfg = SampleCfg {
            background: 0,
            lines: 1,
            per_line: PerLine::Fixed(10),
            max_step: 20,
            bound: 100,
        };
        let err = draw_points(cfg, ReplayToken { seed: 0, index: 0 }).unwrap_err();
        assert!(matches!(err, SampleError::InvalidCfg { .. }));
        let bad_bound = SampleCfg {
            bound: COORD_MAX + 1,
            ..SampleCfg::default()
        };
        assert!(draw_points(bad_bound, ReplayToken { seed: 0, index: 0 }).is_err());
    }
}
