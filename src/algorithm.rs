use crate::distance::euclidean_distance;
use crate::point::{Cluster, DataPoint};

/// Knobs for the Lloyd iteration loop.
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Safety valve against oscillation; exceeding it is not an error, the
    /// last computed assignment is accepted as final.
    pub max_iterations: usize,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self { max_iterations: 100 }
    }
}

/// Assigns every point to its nearest centroid, recording the previous
/// assignment first. On an exact distance tie the lowest centroid index wins
/// (only a strictly smaller distance replaces the running minimum).
///
/// Cluster sizes must have been reset to 0 by the caller before this runs.
pub fn assign_points(points: &mut [DataPoint], clusters: &mut [Cluster]) {
    for point in points.iter_mut() {
        point.previous_cluster = point.cluster;

        let mut nearest = 0;
        let mut min_distance = euclidean_distance(point, &clusters[0].centroid);
        for (index, cluster) in clusters.iter().enumerate().skip(1) {
            let distance = euclidean_distance(point, &cluster.centroid);
            if distance < min_distance {
                min_distance = distance;
                nearest = index;
            }
        }

        point.cluster = Some(nearest);
        clusters[nearest].size += 1;
    }
}

/// Overwrites each centroid with the mean of its currently assigned points.
/// A cluster that ended the assignment step empty keeps its previous
/// coordinates unchanged.
pub fn update_centroids(points: &[DataPoint], clusters: &mut [Cluster]) {
    let mut sums = vec![(0.0_f64, 0.0_f64); clusters.len()];
    for point in points {
        if let Some(index) = point.cluster {
            sums[index].0 += point.x;
            sums[index].1 += point.y;
        }
    }

    for (cluster, (sum_x, sum_y)) in clusters.iter_mut().zip(sums) {
        if cluster.size > 0 {
            cluster.centroid.x = sum_x / cluster.size as f64;
            cluster.centroid.y = sum_y / cluster.size as f64;
        }
    }
}

fn assignments_changed(points: &[DataPoint]) -> bool {
    points
        .iter()
        .any(|point| point.cluster != point.previous_cluster)
}

/// Runs assignment/update cycles until no point changes cluster or the
/// iteration cap is exceeded. Returns the number of cycles executed,
/// including the final cycle that detected convergence.
///
/// Inputs are assumed validated by the initializer; this loop itself cannot
/// fail.
pub fn kmeans_lloyd(
    points: &mut [DataPoint],
    clusters: &mut [Cluster],
    config: &KMeansConfig,
) -> usize {
    let mut iteration = 0;
    loop {
        for cluster in clusters.iter_mut() {
            cluster.size = 0;
        }

        iteration += 1;
        assign_points(points, clusters);
        update_centroids(points, clusters);

        if iteration % 10 == 0 {
            log::info!("Finished iteration {}", iteration);
        }

        if iteration > config.max_iterations || !assignments_changed(points) {
            break;
        }
    }

    log::info!("Converged after {} iterations", iteration);
    iteration
}
