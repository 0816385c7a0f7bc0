//! Evolution Strategy (ES).
//!
//! A population-based, derivative-free minimizer for bounded continuous
//! search spaces. Each generation keeps the best
//! `population_size / children_per_parent` candidates as parents, draws
//! `children_per_parent` Gaussian offspring from each, and carries the
//! parents over unmutated next to their children (a "plus" strategy), so
//! the best fitness never regresses.
//!
//! # Key Types
//!
//! - [`EsProblem`]: the objective (any `Fn(&[f64]) -> f64` qualifies)
//! - [`EsConfig`]: bounds, budget, population arithmetic, step size
//! - [`Candidate`]: one point in the search space
//! - [`EvolutionStrategy`]: step-by-step optimizer with an owned RNG
//! - [`EsRunner`] / [`EsResult`]: one-shot run and its output
//!
//! # Examples
//!
//! ```
//! use u_evostrat::es::{Bounds, EsConfig, EsRunner};
//!
//! let booth = |v: &[f64]| {
//!     let a = v[0] + 2.0 * v[1] - 7.0;
//!     let b = 2.0 * v[0] + v[1] - 5.0;
//!     a * a + b * b
//! };
//! let config = EsConfig::default()
//!     .with_bounds(Bounds::new(-10.0, 10.0))
//!     .with_seed(42);
//!
//! let result = EsRunner::run(&booth, &config).unwrap();
//! assert_eq!(result.fitness_history.len(), config.generations + 1);
//! assert!(result.best_fitness <= result.fitness_history[0]);
//! ```
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Schwefel (1981), *Numerical Optimization of Computer Models*
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive introduction"

mod candidate;
mod config;
mod runner;
mod types;

pub use candidate::Candidate;
pub use config::{Bounds, EsConfig, SigmaSchedule};
pub use runner::{EsResult, EsRunner, EsState, EvolutionStrategy};
pub use types::EsProblem;
