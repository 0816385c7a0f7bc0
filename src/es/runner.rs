//! ES generational loop.
//!
//! [`EvolutionStrategy`] owns the population, the RNG and the fitness
//! history of one run and exposes each step of the loop individually:
//! initialize → (rank → truncate → reproduce → replace → record) × generations.
//! [`EsRunner`] wraps the whole run in a single call.

use super::candidate::Candidate;
use super::config::EsConfig;
use super::types::EsProblem;
use crate::error::EsError;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle of an [`EvolutionStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsState {
    /// Constructed, no population yet.
    Uninitialized,
    /// Population sampled; `completed` generations have run.
    Running { completed: usize },
    /// Every configured generation has run.
    Terminal,
}

/// Result of an ES run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EsResult {
    /// Best candidate of the final population.
    pub best: Candidate,

    /// Objective value of `best`.
    pub best_fitness: f64,

    /// Final population, best first.
    pub population: Vec<Candidate>,

    /// Best fitness per generation, `generations + 1` entries.
    ///
    /// Entry 0 is the best of the initial population; entry `g + 1` is the
    /// best after generation `g`.
    pub fitness_history: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,
}

impl EsResult {
    /// Best fitness recorded after generation `generation`, if it ran.
    pub fn best_fitness_at(&self, generation: usize) -> Option<f64> {
        self.fitness_history.get(generation + 1).copied()
    }
}

/// Elitist evolution strategy with truncation selection.
///
/// # Usage
///
/// ```
/// use u_evostrat::es::{Bounds, EsConfig, EvolutionStrategy};
///
/// let sphere = |v: &[f64]| v.iter().map(|x| x * x).sum::<f64>();
/// let config = EsConfig::default()
///     .with_bounds(Bounds::new(-5.0, 5.0))
///     .with_population_size(8)
///     .with_sigma(5.0)
///     .with_generations(200)
///     .with_seed(42);
///
/// let mut es = EvolutionStrategy::new(&sphere, config).unwrap();
/// es.initialize().unwrap();
/// let first = es.advance_generation().unwrap();
///
/// let result = es.run().unwrap();
/// assert_eq!(result.fitness_history.len(), 201);
/// assert!(result.best_fitness <= first);
/// ```
pub struct EvolutionStrategy<'p, P: EsProblem + ?Sized, R: Rng = StdRng> {
    problem: &'p P,
    config: EsConfig,
    rng: R,
    population: Vec<Candidate>,
    fitness_history: Vec<f64>,
    state: EsState,
}

impl<'p, P: EsProblem + ?Sized> EvolutionStrategy<'p, P, StdRng> {
    /// Creates an optimizer seeded from `config.seed`, or from entropy.
    pub fn new(problem: &'p P, config: EsConfig) -> Result<Self, EsError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(problem, config, rng)
    }
}

impl<'p, P: EsProblem + ?Sized, R: Rng> EvolutionStrategy<'p, P, R> {
    /// Creates an optimizer drawing from a caller-supplied RNG.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(problem: &'p P, config: EsConfig, rng: R) -> Result<Self, EsError> {
        config.validate()?;

        if !config.preserves_population() {
            warn!(
                "population size {} will drift to {} ({} parents x {} slots)",
                config.population_size,
                config.steady_population_size(),
                config.parent_count(),
                1 + config.children_per_parent
            );
        }

        Ok(Self {
            problem,
            fitness_history: Vec::with_capacity(config.generations + 1),
            population: Vec::with_capacity(config.population_size),
            config,
            rng,
            state: EsState::Uninitialized,
        })
    }

    pub fn config(&self) -> &EsConfig {
        &self.config
    }

    pub fn state(&self) -> EsState {
        self.state
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        match self.state {
            EsState::Uninitialized => 0,
            EsState::Running { completed } => completed,
            EsState::Terminal => self.config.generations,
        }
    }

    /// Current population. Empty before initialization.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Fitness history recorded so far.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Samples the initial population uniformly from the bounds.
    pub fn initialize(&mut self) -> Result<(), EsError> {
        if self.state != EsState::Uninitialized {
            return Err(EsError::AlreadyInitialized);
        }

        let bounds = self.config.bounds;
        let dims = self.config.dimensions;
        self.population = (0..self.config.population_size)
            .map(|_| Candidate::random(&bounds, dims, &mut self.rng))
            .collect();

        let (_, best_fitness) = self.best_with_fitness().ok_or(EsError::NotInitialized)?;
        self.fitness_history.push(best_fitness);
        self.state = EsState::Running { completed: 0 };

        debug!(
            "initialized {} candidates in {} dimensions, best fitness {best_fitness}, sigma {}",
            self.population.len(),
            dims,
            self.mutation_strength(0)
        );
        Ok(())
    }

    /// Objective value of `candidate`. Not cached.
    pub fn fitness(&self, candidate: &Candidate) -> f64 {
        self.problem.objective(candidate.values())
    }

    /// Mutation strength used for offspring of generation `generation`.
    pub fn mutation_strength(&self, generation: usize) -> f64 {
        self.config.mutation_strength(generation)
    }

    /// Ranks the population ascending by fitness and returns the best
    /// `population_size / children_per_parent` candidates.
    ///
    /// The sort is stable: equal-fitness candidates keep their order.
    /// The population itself is left in ranked order.
    pub fn select_parents(&mut self) -> Vec<Candidate> {
        let mut ranked: Vec<(f64, Candidate)> = self
            .population
            .drain(..)
            .map(|c| (self.problem.objective(c.values()), c))
            .collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        self.population = ranked.into_iter().map(|(_, c)| c).collect();

        let amount = self.config.parent_count().min(self.population.len());
        self.population[..amount].to_vec()
    }

    /// Produces `children_per_parent` offspring for each parent, grouped
    /// by parent in input order.
    pub fn reproduce(&mut self, parents: &[Candidate]) -> Vec<Candidate> {
        let sigma = self.mutation_strength(self.generation());
        let bounds = self.config.bounds;
        let per_parent = self.config.children_per_parent;

        let mut children = Vec::with_capacity(parents.len() * per_parent);
        for parent in parents {
            for _ in 0..per_parent {
                children.push(parent.mutate(&bounds, sigma, &mut self.rng));
            }
        }
        children
    }

    /// Runs one generation and returns the best fitness it produced.
    ///
    /// Parents survive unmutated next to their offspring, so the recorded
    /// best fitness never increases.
    pub fn advance_generation(&mut self) -> Result<f64, EsError> {
        let generation = match self.state {
            EsState::Uninitialized => return Err(EsError::NotInitialized),
            EsState::Terminal => {
                return Err(EsError::BudgetExhausted {
                    generations: self.config.generations,
                })
            }
            EsState::Running { completed } => completed,
        };

        let parents = self.select_parents();
        let children = self.reproduce(&parents);

        let mut next = parents;
        next.extend(children);
        self.population = next;

        let (_, best_fitness) = self.best_with_fitness().ok_or(EsError::NotInitialized)?;
        self.fitness_history.push(best_fitness);

        if generation % self.config.report_interval == 0 {
            info!("gen {generation}: fitness {best_fitness}");
            self.problem.on_progress(generation, best_fitness);
        }

        let completed = generation + 1;
        self.state = if completed >= self.config.generations {
            EsState::Terminal
        } else {
            EsState::Running { completed }
        };
        Ok(best_fitness)
    }

    /// Best candidate of the current population and its fitness.
    ///
    /// Ties go to the earliest candidate. `None` before initialization.
    pub fn best(&self) -> Option<(&Candidate, f64)> {
        self.best_with_fitness()
    }

    fn best_with_fitness(&self) -> Option<(&Candidate, f64)> {
        let mut iter = self.population.iter();
        let first = iter.next()?;
        let mut best = (first, self.fitness(first));
        for candidate in iter {
            let f = self.fitness(candidate);
            if f < best.1 {
                best = (candidate, f);
            }
        }
        Some(best)
    }

    /// Initializes if needed and runs all remaining generations.
    pub fn run(mut self) -> Result<EsResult, EsError> {
        if self.state == EsState::Uninitialized {
            self.initialize()?;
        }
        while self.state != EsState::Terminal {
            self.advance_generation()?;
        }
        Ok(self.into_result())
    }

    fn into_result(mut self) -> EsResult {
        let mut ranked: Vec<(f64, Candidate)> = self
            .population
            .drain(..)
            .map(|c| (self.problem.objective(c.values()), c))
            .collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let best_fitness = ranked.first().map_or(f64::INFINITY, |(f, _)| *f);
        let population: Vec<Candidate> = ranked.into_iter().map(|(_, c)| c).collect();
        let best = population
            .first()
            .cloned()
            .unwrap_or_else(|| Candidate::from(Vec::new()));

        EsResult {
            best,
            best_fitness,
            population,
            fitness_history: self.fitness_history,
            generations: self.config.generations,
        }
    }
}

/// Executes a complete ES run in one call.
pub struct EsRunner;

impl EsRunner {
    /// Runs the evolution strategy with a fresh optimizer.
    pub fn run<P: EsProblem + ?Sized>(problem: &P, config: &EsConfig) -> Result<EsResult, EsError> {
        EvolutionStrategy::new(problem, config.clone())?.run()
    }
}

// ============================================================================
// Tests
// ============================================================================
