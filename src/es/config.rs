//! ES configuration, search bounds and mutation-strength schedules.

use crate::error::EsError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed search interval `[low, high]`, shared by every dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Clips `x` into `[low, high]`.
    #[inline]
    pub fn clip(&self, x: f64) -> f64 {
        x.max(self.low).min(self.high)
    }

    /// Returns `true` if `x` lies in `[low, high]`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x <= self.high
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-100.0, 100.0)
    }
}

/// Schedule for the per-generation mutation strength.
///
/// # Formulas
///
/// With initial strength `sigma`, decay divisor `s`, total generations
/// `G` and current generation index `g`:
///
/// - `Constant`: `sigma / (G / s + 1)`, identical for every generation
/// - `Annealing`: `sigma / (g / s + 1)`, shrinking as the run progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SigmaSchedule {
    /// Denominator built from the total generation budget.
    ///
    /// The step size never changes during a run. This is the classic
    /// behavior and the default.
    #[default]
    Constant,

    /// Denominator built from the elapsed generation index.
    ///
    /// Generation 0 mutates with the full `sigma`. Converges very
    /// differently from `Constant` on the same budget.
    Annealing,
}

/// Configuration for the evolution strategy.
///
/// Parents are the best `population_size / children_per_parent`
/// candidates; each produces `children_per_parent` offspring and survives
/// unmutated alongside them.
///
/// # Examples
///
/// ```
/// use u_evostrat::es::{Bounds, EsConfig};
///
/// let config = EsConfig::default()
///     .with_bounds(Bounds::new(-10.0, 10.0))
///     .with_population_size(8)
///     .with_children_per_parent(3)
///     .with_generations(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.parent_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EsConfig {
    /// Search interval applied to every dimension.
    pub bounds: Bounds,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Size of the initial population; also the numerator of the parent count.
    pub population_size: usize,

    /// Offspring produced by each parent. Also the truncation divisor.
    pub children_per_parent: usize,

    /// Number of optimized dimensions.
    pub dimensions: usize,

    /// Initial mutation strength (standard deviation), non-negative.
    pub sigma: f64,

    /// Decay divisor `s` in the mutation-strength formula. Positive.
    pub decay_divisor: f64,

    /// How the mutation strength evolves over the run.
    pub schedule: SigmaSchedule,

    /// Progress is reported every `report_interval` generations.
    pub report_interval: usize,

    /// Reject configurations whose population size would drift.
    ///
    /// When `false` (default), a population that is not exactly
    /// `parent_count * (1 + children_per_parent)` is accepted and changes
    /// size after the first generation.
    pub strict_population: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            generations: 1000,
            population_size: 5,
            children_per_parent: 3,
            dimensions: 2,
            sigma: 100.0,
            decay_divisor: 1.0,
            schedule: SigmaSchedule::Constant,
            report_interval: 50,
            strict_population: false,
            seed: None,
        }
    }
}

impl EsConfig {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_children_per_parent(mut self, n: usize) -> Self {
        self.children_per_parent = n;
        self
    }

    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = n;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_decay_divisor(mut self, s: f64) -> Self {
        self.decay_divisor = s;
        self
    }

    pub fn with_schedule(mut self, schedule: SigmaSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    pub fn with_strict_population(mut self, strict: bool) -> Self {
        self.strict_population = strict;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents kept by truncation selection.
    pub fn parent_count(&self) -> usize {
        self.population_size / self.children_per_parent.max(1)
    }

    /// Population size after every generation.
    pub fn steady_population_size(&self) -> usize {
        self.parent_count() * (1 + self.children_per_parent)
    }

    /// Returns `true` if the population size stays constant across generations.
    pub fn preserves_population(&self) -> bool {
        self.steady_population_size() == self.population_size
    }

    /// Mutation strength used while producing generation `generation`.
    pub fn mutation_strength(&self, generation: usize) -> f64 {
        let elapsed = match self.schedule {
            SigmaSchedule::Constant => self.generations,
            SigmaSchedule::Annealing => generation,
        };
        self.sigma / (elapsed as f64 / self.decay_divisor + 1.0)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), EsError> {
        let fail = |msg: String| Err(EsError::Configuration(msg));

        if self.generations == 0 {
            return fail("generations must be at least 1".into());
        }
        if self.population_size == 0 {
            return fail("population_size must be at least 1".into());
        }
        if self.children_per_parent == 0 {
            return fail("children_per_parent must be at least 1".into());
        }
        if self.dimensions == 0 {
            return fail("dimensions must be at least 1".into());
        }
        if self.report_interval == 0 {
            return fail("report_interval must be at least 1".into());
        }
        if self.population_size < self.children_per_parent {
            return fail(format!(
                "population_size ({}) must be >= children_per_parent ({}), otherwise no parents survive",
                self.population_size, self.children_per_parent
            ));
        }
        if !self.bounds.low.is_finite() || !self.bounds.high.is_finite() {
            return fail("bounds must be finite".into());
        }
        if self.bounds.low > self.bounds.high {
            return fail(format!(
                "bounds low ({}) must not exceed high ({})",
                self.bounds.low, self.bounds.high
            ));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return fail(format!("sigma must be finite and non-negative, got {}", self.sigma));
        }
        if !self.decay_divisor.is_finite() || self.decay_divisor <= 0.0 {
            return fail(format!(
                "decay_divisor must be finite and positive, got {}",
                self.decay_divisor
            ));
        }
        if self.strict_population && !self.preserves_population() {
            return fail(format!(
                "population_size {} drifts to {} with {} children per parent",
                self.population_size,
                self.steady_population_size(),
                self.children_per_parent
            ));
        }
        Ok(())
    }
}
