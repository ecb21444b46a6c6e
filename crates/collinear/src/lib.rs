//! Collinear point detection on integer points in the plane.
//!
//! Given a set of distinct points, find every maximal group of 4 or more
//! collinear points and report it once as a segment between its two extreme
//! points.
//!
//! Layout
//! - `point`: `Point`, natural order (y then x), slopes, slope comparator.
//! - `segment`: `LineSegment` and normalization (`maximal_segments`).
//! - `detect`: `FastCollinearPoints` (sort by slope) and the brute-force
//!   reference `BruteCollinearPoints`, behind `CollinearDetector`.
//! - `sample`: seeded point sets with planted lines.
//!
//! All detection is synchronous and finishes inside the detector constructor.

pub mod cfg;
pub mod detect;
pub mod error;
pub mod point;
pub mod sample;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use detect::{
    detect, detect_slots, Algo, BruteCollinearPoints, CollinearDetector, FastCollinearPoints,
};
pub use error::InputError;
pub use point::Point;
pub use segment::{maximal_segments, LineSegment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{COORD_MAX, MIN_POINTS};
    pub use crate::detect::{
        detect, detect_slots, Algo, BruteCollinearPoints, CollinearDetector,
        FastCollinearPoints,
    };
    pub use crate::error::InputError;
    pub use crate::point::Point;
    pub use crate::sample::{draw_points, PerLine, PointSample, ReplayToken, SampleCfg};
    pub use crate::segment::{maximal_segments, LineSegment};
}
