//! Property-based tests for the evolution strategy.
//!
//! Uses proptest to check bounds, offspring and history invariants over
//! arbitrary configurations.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_evostrat::es::{Bounds, Candidate, EsConfig, EsRunner, EvolutionStrategy};

fn sphere(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (-1e6f64..1e6, 0.0f64..1e6).prop_map(|(low, width)| Bounds::new(low, low + width))
}

proptest! {
    #[test]
    fn random_candidates_within_bounds(
        bounds in bounds_strategy(),
        dims in 1usize..16,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = Candidate::random(&bounds, dims, &mut rng);
        prop_assert_eq!(c.dimensions(), dims);
        for &x in c.values() {
            prop_assert!(bounds.contains(x), "{} outside [{}, {}]", x, bounds.low, bounds.high);
        }
    }

    #[test]
    fn mutated_candidates_within_bounds(
        bounds in bounds_strategy(),
        sigma in prop_oneof![0.0f64..10.0, 1e3f64..1e300],
        dims in 1usize..16,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let parent = Candidate::random(&bounds, dims, &mut rng);
        for _ in 0..8 {
            let child = parent.mutate(&bounds, sigma, &mut rng);
            prop_assert_eq!(child.dimensions(), dims);
            for &x in child.values() {
                prop_assert!(bounds.contains(x), "{} outside [{}, {}]", x, bounds.low, bounds.high);
            }
        }
    }

    #[test]
    fn reproduce_yields_parents_times_children(
        parents in 0usize..6,
        children in 1usize..6,
        seed in any::<u64>(),
    ) {
        let config = EsConfig::default()
            .with_bounds(Bounds::new(-5.0, 5.0))
            .with_population_size(children)
            .with_children_per_parent(children)
            .with_seed(seed);
        let mut es = EvolutionStrategy::new(&sphere, config).unwrap();
        let parent_list: Vec<Candidate> = (0..parents)
            .map(|i| Candidate::from(vec![i as f64 - 2.5, 0.0]))
            .collect();

        let offspring = es.reproduce(&parent_list);
        prop_assert_eq!(offspring.len(), parents * children);

        // Default step is 100 / 1001, so children stay near their own parent.
        for (i, group) in offspring.chunks(children).enumerate() {
            for child in group {
                prop_assert!((child.values()[0] - parent_list[i].values()[0]).abs() < 1.0);
            }
        }
    }

    #[test]
    fn steady_population_keeps_size_and_improves(
        parents in 1usize..4,
        children in 2usize..6,
        generations in 1usize..60,
        seed in any::<u64>(),
    ) {
        // parents < children keeps `population / children == parents`.
        prop_assume!(parents < children);
        let size = parents * (1 + children);
        let config = EsConfig::default()
            .with_bounds(Bounds::new(-20.0, 20.0))
            .with_population_size(size)
            .with_children_per_parent(children)
            .with_dimensions(3)
            .with_sigma(10.0)
            .with_generations(generations)
            .with_strict_population(true)
            .with_seed(seed);
        prop_assert!(config.preserves_population());

        let mut es = EvolutionStrategy::new(&sphere, config).unwrap();
        es.initialize().unwrap();
        prop_assert_eq!(es.population().len(), size);
        for _ in 0..generations {
            es.advance_generation().unwrap();
            prop_assert_eq!(es.population().len(), size);
        }

        let history = es.fitness_history().to_vec();
        prop_assert_eq!(history.len(), generations + 1);
        for w in history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
        for c in es.population() {
            prop_assert!(c.values().iter().all(|&x| (-20.0..=20.0).contains(&x)));
        }
    }
}
