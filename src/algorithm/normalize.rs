//! Dimension normalization with advisory reporting

use std::fmt;

use crate::io::configuration::{DEFAULT_DIMENSION, MIN_DIMENSION};
use crate::spatial::Dimensions;

/// Grid axis a correction applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row count
    Height,
    /// Column count
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height => f.write_str("height"),
            Self::Width => f.write_str("width"),
        }
    }
}

/// Non-fatal note describing an automatic dimension correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Requested value was below the minimum and the default was used instead
    BelowMinimum {
        /// Corrected axis
        axis: Axis,
        /// Value the caller asked for
        requested: i64,
        /// Value actually used
        replacement: usize,
    },
    /// Requested value was even and was bumped to the next odd number
    Even {
        /// Corrected axis
        axis: Axis,
        /// Value the caller asked for
        requested: i64,
        /// Value actually used
        replacement: usize,
    },
}

impl Advisory {
    /// Axis the correction applies to
    pub const fn axis(&self) -> Axis {
        match self {
            Self::BelowMinimum { axis, .. } | Self::Even { axis, .. } => *axis,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum {
                axis, replacement, ..
            } => write!(f, "{axis} below minimum, defaulted to {replacement}"),
            Self::Even { axis, .. } => write!(f, "{axis} is even, incremented by 1"),
        }
    }
}

/// Repair requested dimensions so both are odd and at least 3
///
/// Height is checked before width and each axis is judged on its requested
/// value alone. Never fails; every correction is reported as an [`Advisory`].
pub fn normalize(height: i64, width: i64) -> (Dimensions, Vec<Advisory>) {
    let mut advisories = Vec::new();
    let height = normalize_axis(Axis::Height, height, &mut advisories);
    let width = normalize_axis(Axis::Width, width, &mut advisories);
    (Dimensions::from_normalized(height, width), advisories)
}

fn normalize_axis(axis: Axis, requested: i64, advisories: &mut Vec<Advisory>) -> usize {
    if requested < MIN_DIMENSION {
        advisories.push(Advisory::BelowMinimum {
            axis,
            requested,
            replacement: DEFAULT_DIMENSION,
        });
        return DEFAULT_DIMENSION;
    }

    // requested >= 2 here, so the conversion only fails beyond the address space
    let value = usize::try_from(requested).unwrap_or(usize::MAX - 1);
    if value % 2 == 0 {
        let replacement = value + 1;
        advisories.push(Advisory::Even {
            axis,
            requested,
            replacement,
        });
        replacement
    } else {
        value
    }
}
