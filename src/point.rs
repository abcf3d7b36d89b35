/// A 2-D input point together with its current and previous cluster labels.
/// `cluster` is `None` only before the first assignment pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub cluster: Option<usize>,
    pub previous_cluster: Option<usize>,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            cluster: None,
            previous_cluster: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

/// A cluster owns its centroid coordinates outright; they are overwritten
/// wholesale on every update step. `size` is recomputed from scratch each
/// iteration and never carried across iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub centroid: Centroid,
    pub size: usize,
}

impl Cluster {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            centroid: Centroid { x, y },
            size: 0,
        }
    }
}
