#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The band of distances the sensor can measure reliably.
/// Samples at or outside the bounds must be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidRange {
    /// Smallest trustworthy distance (in mm, exclusive).
    pub min: u32,
    /// Largest trustworthy distance (in mm, exclusive).
    pub max: u32,
}

impl ValidRange {
    /// True iff `distance` lies strictly between `min` and `max`.
    pub fn contains(&self, distance: u32) -> bool {
        self.min < distance && distance < self.max
    }
}
