use std::fmt;

use crate::point::Point;

/// Invalid detector input. Raised before any geometry runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The point array itself is absent.
    NullInput,
    /// An element of the point array is absent.
    NullPoint { index: usize },
    /// Two input points compare equal under natural order.
    DuplicatePoint { point: Point },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NullInput => write!(f, "null input array"),
            InputError::NullPoint { index } => {
                write!(f, "null point in input (index {index})")
            }
            InputError::DuplicatePoint { point } => {
                write!(f, "duplicate point in input: {point}")
            }
        }
    }
}

impl std::error::Error for InputError {}
