#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::range::ValidRange;

/// Sensor calibration reported once at connection time.
///
/// Angular positions are expressed in steps of the sensor's rotating head.
/// `front_step` is the step pointing straight ahead of the sensor, which
/// maps to an angle of zero radian.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calibration {
    /// Smallest trustworthy distance (in mm).
    pub min_distance: u32,
    /// Largest trustworthy distance (in mm).
    pub max_distance: u32,
    /// First measurable step of the head.
    pub min_step: i32,
    /// Last measurable step of the head.
    pub max_step: i32,
    /// Step pointing straight ahead (angle zero).
    pub front_step: i32,
    /// Number of steps in one full rotation.
    pub steps_per_rotation: u32,
}

impl Calibration {
    /// The measurement band outside of which samples must be discarded.
    pub fn valid_range(&self) -> ValidRange {
        ValidRange {
            min: self.min_distance,
            max: self.max_distance,
        }
    }

    /// Angle of a head step in radian, zero at `front_step`,
    /// counter-clockwise positive.
    pub fn step_to_radian(&self, step: i32) -> f64 {
        let offset = (step - self.front_step) as f64;
        offset * 2. * std::f64::consts::PI / (self.steps_per_rotation as f64)
    }

    /// Head step closest to an angle given in degrees relative to the front.
    pub fn deg_to_step(&self, degree: f64) -> i32 {
        let offset = degree * (self.steps_per_rotation as f64) / 360.;
        self.front_step + offset.round() as i32
    }
}
