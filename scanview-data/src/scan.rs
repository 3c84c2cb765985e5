#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold one sweep of range sensor data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    /// Distance to an object per angular index (in mm).
    pub distances: Vec<u32>,
    /// Sensor timestamp of the sweep (in ms).
    pub timestamp: i64,
}

impl Scan {
    pub fn new(distances: Vec<u32>, timestamp: i64) -> Scan {
        Scan {
            distances,
            timestamp,
        }
    }
}
