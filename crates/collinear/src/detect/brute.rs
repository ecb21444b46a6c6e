use crate::cfg::MIN_POINTS;
use crate::error::InputError;
use crate::point::Point;
use crate::segment::LineSegment;

use super::{sorted_unique, unwrap_slots, CollinearDetector};

/// Reference detector: tests every 4-combination of the naturally sorted input.
///
/// Each qualifying 4-subset yields `segment(first, last)`, so a run of k > 4
/// collinear points produces overlapping and repeated entries. Normalize with
/// `segment::maximal_segments` before comparing to `FastCollinearPoints`.
#[derive(Clone, Debug)]
pub struct BruteCollinearPoints {
    segments: Vec<LineSegment>,
}

impl BruteCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self, InputError> {
        let sorted = sorted_unique(points)?;
        let segments = discover(&sorted);
        tracing::debug!(
            algo = "brute",
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

impl CollinearDetector for BruteCollinearPoints {
    fn name(&self) -> &'static str {
        "brute"
    }
    fn number_of_segments(&self) -> usize {
        BruteCollinearPoints::number_of_segments(self)
    }
    fn segments(&self) -> Vec<LineSegment> {
        BruteCollinearPoints::segments(self)
    }
}

/// `points` must be in natural order.
fn discover(points: &[Point]) -> Vec<LineSegment> {
    let n = points.len();
    let mut out = Vec::new();
    if n < MIN_POINTS {
        return out;
    }
    for i in 0..n - 3 {
        let pi = &points[i];
        for j in i + 1..n - 2 {
            let s_ij = pi.slope_to(&points[j]);
            for m in j + 1..n - 1 {
                // first three disagree: no fourth point can fix it
                if s_ij != pi.slope_to(&points[m]) {
                    continue;
                }
                for pn in &points[m + 1..] {
                    if s_ij == pi.slope_to(pn) {
                        out.push(LineSegment::new(*pi, *pn));
                    }
                }
            }
        }
    }
    out
}
