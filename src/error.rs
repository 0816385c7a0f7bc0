//! Error types for the evolution strategy.

use thiserror::Error;

/// Errors raised while configuring or driving an [`EvolutionStrategy`](crate::es::EvolutionStrategy).
///
/// Objective evaluation itself is infallible; every variant here is either
/// a rejected configuration or a call made in the wrong lifecycle state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EsError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// `initialize` was called on an optimizer that already has a population.
    #[error("optimizer is already initialized")]
    AlreadyInitialized,

    /// A generation was requested before the population was initialized.
    #[error("optimizer has not been initialized")]
    NotInitialized,

    /// All configured generations have already run.
    #[error("generation budget exhausted after {generations} generations")]
    BudgetExhausted { generations: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EsError::Configuration("sigma must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: sigma must be non-negative"
        );

        let err = EsError::BudgetExhausted { generations: 10 };
        assert_eq!(
            err.to_string(),
            "generation budget exhausted after 10 generations"
        );
    }
}
