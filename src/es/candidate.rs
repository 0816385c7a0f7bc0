//! Points in the search space.

use super::config::Bounds;
use rand::Rng;
use rand_distr::StandardNormal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One point in the search space.
///
/// Immutable once created: [`mutate`](Candidate::mutate) always returns a
/// new candidate. Every coordinate lies within the bounds it was created
/// with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    values: Vec<f64>,
}

impl Candidate {
    /// Samples each of `dimensions` coordinates uniformly from `bounds`.
    ///
    /// Bounds whose width overflows `f64` are sampled by interpolating
    /// between the endpoints instead of scaling the width.
    pub fn random<R: Rng>(bounds: &Bounds, dimensions: usize, rng: &mut R) -> Self {
        let values = (0..dimensions)
            .map(|_| {
                if bounds.width() <= f64::MAX / 2.0 {
                    rng.random_range(bounds.low..=bounds.high)
                } else {
                    let u: f64 = rng.random();
                    bounds.clip(bounds.low + u * bounds.high - u * bounds.low)
                }
            })
            .collect();
        Self { values }
    }

    /// Produces an offspring by adding `N(0, sigma)` noise per dimension
    /// and clipping into `bounds`.
    ///
    /// Total for any finite `sigma >= 0`: out-of-range draws are clamped,
    /// never resampled. With `sigma == 0` the child equals the parent.
    pub fn mutate<R: Rng>(&self, bounds: &Bounds, sigma: f64, rng: &mut R) -> Self {
        let values = self
            .values
            .iter()
            .map(|&mu| {
                let z: f64 = rng.sample(StandardNormal);
                bounds.clip(z * sigma + mu)
            })
            .collect();
        Self { values }
    }

    /// Coordinates of this candidate.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }
}

impl From<Vec<f64>> for Candidate {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds::new(-3.0, 7.0);
        for _ in 0..200 {
            let c = Candidate::random(&bounds, 5, &mut rng);
            assert_eq!(c.dimensions(), 5);
            assert!(c.values().iter().all(|&x| bounds.contains(x)));
        }
    }

    #[test]
    fn test_random_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::new(2.5, 2.5);
        let c = Candidate::random(&bounds, 3, &mut rng);
        assert_eq!(c.values(), &[2.5, 2.5, 2.5]);
    }

    #[test]
    fn test_random_extreme_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for bounds in [Bounds::new(-1e308, 1e308), Bounds::new(f64::MIN, f64::MAX)] {
            for _ in 0..100 {
                let c = Candidate::random(&bounds, 4, &mut rng);
                assert!(c
                    .values()
                    .iter()
                    .all(|&x| x.is_finite() && bounds.contains(x)));
            }
        }
    }

    #[test]
    fn test_mutate_extreme_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let bounds = Bounds::new(f64::MIN, f64::MAX);
        let parent = Candidate::from(vec![f64::MAX, f64::MIN, 0.0]);
        for _ in 0..50 {
            let child = parent.mutate(&bounds, 1e300, &mut rng);
            assert!(child.values().iter().all(|&x| bounds.contains(x)));
        }
    }

    #[test]
    fn test_mutate_zero_sigma_is_copy() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds::new(-10.0, 10.0);
        let parent = Candidate::from(vec![1.0, -2.0, 3.5]);
        let child = parent.mutate(&bounds, 0.0, &mut rng);
        assert_eq!(child, parent);
    }

    #[test]
    fn test_mutate_leaves_parent_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds::new(-10.0, 10.0);
        let parent = Candidate::from(vec![0.0, 0.0]);
        let child = parent.mutate(&bounds, 1.0, &mut rng);
        assert_eq!(parent.values(), &[0.0, 0.0]);
        assert_ne!(child, parent);
    }

    #[test]
    fn test_mutate_clips_huge_sigma() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(-1.0, 1.0);
        let parent = Candidate::from(vec![0.0; 10]);
        let mut hit_edge = false;
        for _ in 0..50 {
            let child = parent.mutate(&bounds, 1e12, &mut rng);
            assert!(child.values().iter().all(|&x| bounds.contains(x)));
            hit_edge |= child.values().iter().any(|&x| x == -1.0 || x == 1.0);
        }
        assert!(hit_edge, "expected clamped values at the bounds");
    }

    #[test]
    fn test_mutate_centered_on_parent() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(-100.0, 100.0);
        let parent = Candidate::from(vec![5.0]);
        let n = 5000;
        let mean: f64 = (0..n)
            .map(|_| parent.mutate(&bounds, 0.5, &mut rng).values()[0])
            .sum::<f64>()
            / n as f64;
        assert!((mean - 5.0).abs() < 0.05, "sample mean {mean} too far from 5.0");
    }
}
