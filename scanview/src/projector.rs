use scanview_data::{ObstaclePoint, Scan, ValidRange};

/// Convert one sweep into obstacle positions around the sensor.
///
/// Samples outside the valid measurement band are dropped. Output order
/// follows sample order. Pure function of its inputs; an empty or
/// all-invalid scan yields an empty result.
pub fn project_scan<F>(scan: &Scan, range: ValidRange, index_to_radian: F) -> Vec<ObstaclePoint>
where
    F: Fn(usize) -> f64,
{
    scan.distances
        .iter()
        .enumerate()
        .filter(|(_, &distance)| range.contains(distance))
        .map(|(index, &distance)| {
            let radian = index_to_radian(index);
            ObstaclePoint {
                x: (distance as f64) * radian.cos(),
                y: (distance as f64) * radian.sin(),
            }
        })
        .collect()
}
