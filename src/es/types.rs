//! Core trait for the evolution strategy.

/// Defines an ES minimization problem.
///
/// The user supplies the objective; the framework handles sampling,
/// selection, mutation and bookkeeping. Any `Fn(&[f64]) -> f64` closure
/// is already an `EsProblem`.
///
/// # Minimization
///
/// Lower objective values are better. For maximization, negate.
///
/// # Examples
///
/// ```
/// use u_evostrat::es::EsProblem;
///
/// struct Booth;
///
/// impl EsProblem for Booth {
///     fn objective(&self, v: &[f64]) -> f64 {
///         let a = v[0] + 2.0 * v[1] - 7.0;
///         let b = 2.0 * v[0] + v[1] - 5.0;
///         a * a + b * b
///     }
/// }
///
/// assert_eq!(Booth.objective(&[1.0, 3.0]), 0.0);
///
/// let sphere = |v: &[f64]| v.iter().map(|x| x * x).sum::<f64>();
/// assert_eq!(sphere.objective(&[3.0, 4.0]), 25.0);
/// ```
pub trait EsProblem {
    /// Evaluates the objective at `values`. Lower is better.
    ///
    /// Must be pure: the optimizer does not cache results and calls this
    /// repeatedly on the same point while ranking.
    fn objective(&self, values: &[f64]) -> f64;

    /// Called every `report_interval` generations with the best fitness
    /// of the current population.
    ///
    /// The default implementation is a no-op.
    fn on_progress(&self, _generation: usize, _best_fitness: f64) {}
}

impl<F> EsProblem for F
where
    F: Fn(&[f64]) -> f64,
{
    fn objective(&self, values: &[f64]) -> f64 {
        self(values)
    }
}
