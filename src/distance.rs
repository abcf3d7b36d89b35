use crate::point::{Centroid, DataPoint};

/// Euclidean distance between a point and a centroid.
pub fn euclidean_distance(point: &DataPoint, centroid: &Centroid) -> f64 {
    ((point.x - centroid.x).powi(2) + (point.y - centroid.y).powi(2)).sqrt()
}
