//! Elitist evolution strategy for bounded continuous minimization.
//!
//! Finds near-optimal input vectors for non-convex, non-differentiable or
//! black-box objectives where gradients are unavailable:
//!
//! - **Evolution Strategy (ES)**: truncation selection, Gaussian mutation
//!   with box clipping, parents retained next to offspring, and a
//!   configurable step-size schedule.
//!
//! # Architecture
//!
//! The optimizer owns its population, fitness history and random number
//! generator. Seeding the generator makes a run fully reproducible.
//! Charting and terminal presentation are left to consumers, which read
//! the fitness history from [`es::EsResult`] or receive periodic progress
//! through [`es::EsProblem::on_progress`] and the `log` facade.

pub mod error;
pub mod es;

pub use error::EsError;
