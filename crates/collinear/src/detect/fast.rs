use crate::cfg::MIN_POINTS;
use crate::error::InputError;
use crate::point::Point;
use crate::segment::LineSegment;

use super::{sorted_unique, unwrap_slots, CollinearDetector};

/// Other points that must share a slope to the origin.
const MIN_RUN: usize = MIN_POINTS - 1;

/// Sort-by-slope detector.
///
/// For each origin `P` (natural order), sort a working copy by slope to `P`,
/// scan runs of exactly equal slope, and accept a run of `>= 3` points only if
/// `P` is smaller than every point in it. Every maximal line has exactly one
/// such origin, so each segment is reported once and never as a subsegment.
#[derive(Clone, Debug)]
pub struct FastCollinearPoints {
    segments: Vec<LineSegment>,
}

impl FastCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self, InputError> {
        let sorted = sorted_unique(points)?;
        let segments = discover(&sorted);
        tracing::debug!(
            algo = "fast",
            points = sorted.len(),
            segments = segments.len(),
            "detected"
        );
        Ok(Self { segments })
    }

    /// Nullable entry point: `None` array or elements are rejected up front.
    pub fn from_slots(points: Option<&[Option<Point>]>) -> Result<Self, InputError> {
        let points = unwrap_slots(points)?;
        Self::new(&points)
    }

    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> Vec<LineSegment> {
        self.segments.clone()
    }
}

impl CollinearDetector for FastCollinearPoints {
    fn name(&self) -> &'static str {
        "fast"
    }
    fn number_of_segments(&self) -> usize {
        FastCollinearPoints::number_of_segments(self)
    }
    fn segments(&self) -> Vec<LineSegment> {
        FastCollinearPoints::segments(self)
    }
}

/// `points` must be in natural order and free of duplicates.
fn discover(points: &[Point]) -> Vec<LineSegment> {
    let mut out = Vec::new();
    if points.len() < MIN_POINTS {
        return out;
    }
    // Reused across origins; each pass re-sorts it in place.
    let mut work = points.to_vec();
    for origin in points {
        work.sort_by(origin.slope_order());
        debug_assert_eq!(work[0], *origin);

        let rest = &mut work[1..];
        let mut start = 0;
        while start < rest.len() {
            let slope = origin.slope_to(&rest[start]);
            let mut end = start + 1;
            while end < rest.len() && origin.slope_to(&rest[end]) == slope {
                end += 1;
            }
            if end - start >= MIN_RUN {
                if let Some(seg) = accept_run(origin, &mut rest[start..end]) {
                    out.push(seg);
                }
            }
            start = end;
        }
    }
    out
}

/// Segment from `origin` to the run's maximum, if `origin` is the run's minimum.
fn accept_run(origin: &Point, run: &mut [Point]) -> Option<LineSegment> {
    run.sort();
    let (first, last) = (run.first()?, run.last()?);
    if origin < first {
        Some(LineSegment::new(*origin, *last))
    } else {
        None
    }
}
