#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D obstacle position in sensor-centered coordinates (in mm).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstaclePoint {
    pub x: f64,
    pub y: f64,
}
