//! Minimizes three classic two-dimensional test functions.
//!
//! Run with `RUST_LOG=info cargo run --example classic_functions` to see
//! progress every 50 generations.

use u_evostrat::es::{EsConfig, EsRunner};
use u_evostrat::EsError;

/// Booth: minimum 0 at (1, 3).
fn booth(v: &[f64]) -> f64 {
    let a = v[0] + 2.0 * v[1] - 7.0;
    let b = 2.0 * v[0] + v[1] - 5.0;
    a * a + b * b
}

/// Three-hump camel: minimum 0 at (0, 0).
fn camel(v: &[f64]) -> f64 {
    let (x, y) = (v[0], v[1]);
    2.0 * x * x - 1.05 * x.powi(4) + x.powi(6) / 6.0 + x * y + y * y
}

/// Beale: minimum 0 at (3, 0.5).
fn beale(v: &[f64]) -> f64 {
    let (x, y) = (v[0], v[1]);
    (1.5 - x + x * y).powi(2) + (2.25 - x + x * y * y).powi(2) + (2.625 - x + x * y.powi(3)).powi(2)
}

fn main() -> Result<(), EsError> {
    env_logger::init();

    let config = EsConfig::default();
    let functions: [(&str, fn(&[f64]) -> f64); 3] =
        [("booth", booth), ("camel", camel), ("beale", beale)];

    for (name, f) in functions {
        let result = EsRunner::run(&f, &config)?;
        println!(
            "{name}: best fitness {:.6} at {:?} after {} generations",
            result.best_fitness,
            result.best.values(),
            result.generations
        );
        for (g, fitness) in result.fitness_history.iter().enumerate().step_by(100) {
            println!("  history[{g:>4}] = {fitness:.6}");
        }
    }
    Ok(())
}
