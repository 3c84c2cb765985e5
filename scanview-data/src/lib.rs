pub mod calibration;
pub mod point;
pub mod range;
pub mod scan;

pub use calibration::Calibration;
pub use point::ObstaclePoint;
pub use range::ValidRange;
pub use scan::Scan;
