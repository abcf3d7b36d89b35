use crate::distance::euclidean_distance;
use crate::point::{Cluster, DataPoint};

/// Within-cluster sum of squared distances, reported as a final diagnostic.
/// Plays no part in the termination decision.
pub fn calculate_inertia(points: &[DataPoint], clusters: &[Cluster]) -> f64 {
    points
        .iter()
        .filter_map(|point| {
            point.cluster.map(|index| {
                let distance = euclidean_distance(point, &clusters[index].centroid);
                distance * distance
            })
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_squared_distances_to_assigned_centroids() {
        let mut points = vec![DataPoint::new(0.0, 0.0), DataPoint::new(0.0, 4.0)];
        points[0].cluster = Some(0);
        points[1].cluster = Some(0);
        let clusters = vec![Cluster::at(0.0, 1.0)];

        // 1^2 + 3^2
        assert!((calculate_inertia(&points, &clusters) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn unassigned_points_contribute_nothing() {
        let points = vec![DataPoint::new(5.0, 5.0)];
        let clusters = vec![Cluster::at(0.0, 0.0)];
        assert_eq!(calculate_inertia(&points, &clusters), 0.0);
    }
}
