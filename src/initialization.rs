use rand::Rng;

use crate::error::KMeansError;
use crate::point::{Cluster, DataPoint};

/// How the initial centroid set is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initialization {
    /// Sample k point indices uniformly at random, with replacement.
    Random,
    /// Use the points at the supplied indices, in order (exactly k of them).
    Explicit(Vec<usize>),
}

/// Builds the initial cluster array. Validates k and any explicit indices
/// before touching anything; input points are never mutated.
pub fn initialize_clusters<R: Rng>(
    points: &[DataPoint],
    k: usize,
    initialization: &Initialization,
    rng: &mut R,
) -> Result<Vec<Cluster>, KMeansError> {
    if points.is_empty() {
        return Err(KMeansError::EmptyInput);
    }
    if k < 1 || k > points.len() {
        return Err(KMeansError::InvalidClusterCount {
            k,
            num_points: points.len(),
        });
    }

    match initialization {
        Initialization::Random => {
            // Duplicate draws are permitted, the update step separates them.
            Ok((0..k)
                .map(|_| {
                    let index = rng.gen_range(0..points.len());
                    Cluster::at(points[index].x, points[index].y)
                })
                .collect())
        }
        Initialization::Explicit(indices) => {
            if indices.len() != k {
                return Err(KMeansError::InvalidClusterCount {
                    k: indices.len(),
                    num_points: points.len(),
                });
            }
            for &index in indices {
                if index >= points.len() {
                    return Err(KMeansError::InvalidIndex {
                        index,
                        num_points: points.len(),
                    });
                }
            }
            Ok(indices
                .iter()
                .map(|&index| Cluster::at(points[index].x, points[index].y))
                .collect())
        }
    }
}
