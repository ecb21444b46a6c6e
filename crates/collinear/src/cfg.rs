//! Fixed constants shared by detectors and the sample generator.
//!
//! Policy
//! - These are conventions of the input format, not tuning knobs. Detectors do
//!   not enforce `COORD_MAX`; readers and generators do.

/// Largest conventional coordinate value (inclusive); the smallest is 0.
pub const COORD_MAX: i32 = 32767;
/// Number of collinear points that makes a reportable segment.
pub const MIN_POINTS: usize = 4;
