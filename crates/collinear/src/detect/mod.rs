//! Collinear point detectors.
//!
//! Purpose
//! - Find every maximal group of 4 or more collinear points and report it as a
//!   `LineSegment` between its two extreme points.
//!
//! Layout
//! - `brute.rs`: O(n^4) reference over all increasing 4-index combinations.
//!   Reports one segment per qualifying 4-subset (no dedup across a longer run).
//! - `fast.rs`: O(n^2 log n) sort-by-slope detector. Reports each maximal
//!   segment exactly once.
//! - Shared input validation lives here so both detectors fail identically.
//!
//! Both detectors compute everything inside the constructor; a value only
//! exists if validation passed.

mod brute;
mod fast;

pub use brute::BruteCollinearPoints;
pub use fast::FastCollinearPoints;

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::point::Point;
use crate::segment::LineSegment;

/// Common read-only surface of both detectors.
pub trait CollinearDetector {
    /// Short algorithm name, used in logs and reports.
    fn name(&self) -> &'static str;

    fn number_of_segments(&self) -> usize;

    /// Owned copy of the discovered segments, in discovery order.
    fn segments(&self) -> Vec<LineSegment>;
}

/// Detector selection by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algo {
    Brute,
    Fast,
}

impl FromStr for Algo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brute" => Ok(Algo::Brute),
            "fast" => Ok(Algo::Fast),
            other => Err(format!("unknown algo '{other}' (expected brute|fast)")),
        }
    }
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algo::Brute => write!(f, "brute"),
            Algo::Fast => write!(f, "fast"),
        }
    }
}

/// Run the chosen detector over `points`.
pub fn detect(algo: Algo, points: &[Point]) -> Result<Box<dyn CollinearDetector>, InputError> {
    Ok(match algo {
        Algo::Brute => Box::new(BruteCollinearPoints::new(points)?),
        Algo::Fast => Box::new(FastCollinearPoints::new(points)?),
    })
}

/// Run the chosen detector over possibly absent input.
pub fn detect_slots(
    algo: Algo,
    points: Option<&[Option<Point>]>,
) -> Result<Box<dyn CollinearDetector>, InputError> {
    let points = unwrap_slots(points)?;
    detect(algo, &points)
}

/// Map absent array/elements onto `NullInput`/`NullPoint`.
pub(crate) fn unwrap_slots(points: Option<&[Option<Point>]>) -> Result<Vec<Point>, InputError> {
    let slots = points.ok_or(InputError::NullInput)?;
    slots
        .iter()
        .enumerate()
        .map(|(index, p)| p.ok_or(InputError::NullPoint { index }))
        .collect()
}

/// Owned copy of `points` in natural order; rejects duplicates.
pub(crate) fn sorted_unique(points: &[Point]) -> Result<Vec<Point>, InputError> {
    let mut sorted = points.to_vec();
    sorted.sort();
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(InputError::DuplicatePoint { point: w[0] });
    }
    Ok(sorted)
}
