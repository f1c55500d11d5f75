//! Accuracy measurement for conversion comparisons
//!
//! Errors are absolute per-component differences. No perceptual metric is
//! involved; the comparisons are between two computations of the same
//! coordinates.

/// Statistics from a component-wise comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    /// Mean of the per-sample maximum component error
    pub mean: f64,
    /// Largest component error over all samples
    pub max: f64,
    /// Index of the sample with the largest error
    pub worst: usize,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Compare two equally long sequences of triplets
    pub fn compare<I, J>(expected: I, actual: J) -> Self
    where
        I: IntoIterator<Item = [f64; 3]>,
        J: IntoIterator<Item = [f64; 3]>,
    {
        let mut sum = 0.0;
        let mut max = 0.0;
        let mut worst = 0;
        let mut count = 0;

        for (i, (e, a)) in expected.into_iter().zip(actual).enumerate() {
            let diff = max_abs_diff(e, a);
            sum += diff;
            // NaN never compares greater, so treat it as the worst case
            if diff > max || diff.is_nan() {
                max = diff;
                worst = i;
            }
            count += 1;
        }

        Self {
            mean: if count > 0 { sum / count as f64 } else { 0.0 },
            max,
            worst,
            count,
        }
    }

    /// Check that every sample is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Largest absolute component difference between two triplets
pub fn max_abs_diff(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, |acc, d| if d > acc || d.is_nan() { d } else { acc })
}
