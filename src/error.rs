use thiserror::Error;

/// Failures raised by the clustering engine before any iteration runs.
/// Once initialization succeeds the engine always terminates normally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KMeansError {
    #[error("no data points supplied")]
    EmptyInput,
    #[error("number of clusters must be between 1 and {num_points}, got {k}")]
    InvalidClusterCount { k: usize, num_points: usize },
    #[error("centroid index {index} is out of range for {num_points} points")]
    InvalidIndex { index: usize, num_points: usize },
}
