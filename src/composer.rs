use crate::{
    materials::{Composition, CompositionEntry, MATERIALS},
    normalize::Normalize,
    weights::WeightSet,
};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

pub const MIN_DRAW: f64 = 0.1;
pub const MAX_DRAW: f64 = 1.0;

pub type Draws = [f64; MATERIALS.len()];

// draws one score per material uniformly from [MIN_DRAW, MAX_DRAW] and hands them to
// `compose_with_draws`. the caller owns the random source, so a seeded rng gives a reproducible
// composition
pub fn compose<R: Rng + ?Sized>(weights: &WeightSet, rng: &mut R) -> Composition {
    let distribution = Uniform::new_inclusive(MIN_DRAW, MAX_DRAW);
    let draws: Draws = std::array::from_fn(|_| distribution.sample(rng));
    compose_with_draws(weights, draws)
}

// every draw is scaled by the weight total to get the raw score, and the raw scores are
// normalized into percentages. all-zero weights make every raw score zero, in which case each
// material gets an equal share
pub fn compose_with_draws(weights: &WeightSet, draws: Draws) -> Composition {
    let weight_total = weights.total();
    let raw_scores: Vec<f64> = draws.iter().map(|draw| draw * weight_total).collect();
    let percentages = raw_scores.clone().normalize();

    if weight_total == 0.0 {
        log::warn!("All weights are zero, falling back to an equal composition");
    }

    Composition::new(
        MATERIALS
            .into_iter()
            .zip(raw_scores)
            .zip(percentages)
            .map(|((material, raw_score), percentage)| CompositionEntry {
                material,
                raw_score,
                percentage,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_close, get_test_weights, get_zero_weights};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_compose_with_known_draws() {
        let weights = get_test_weights();
        let composition = compose_with_draws(&weights, [0.1, 0.2, 0.3, 0.4, 1.0]);

        assert_eq!(composition.components(), MATERIALS.to_vec());

        let raw_scores: Vec<_> = composition.iter().map(|entry| entry.raw_score).collect();
        for (raw_score, expected) in raw_scores.into_iter().zip([0.3, 0.6, 0.9, 1.2, 3.0]) {
            assert_close(raw_score, expected);
        }

        // raw scores add up to 6.0
        for (percentage, expected) in composition
            .percentages()
            .into_iter()
            .zip([5.0, 10.0, 15.0, 20.0, 50.0])
        {
            assert_close(percentage, expected);
        }
        assert_close(composition.percentages().iter().sum(), 100.0);
    }

    #[test]
    fn test_compose_zero_weights() {
        let weights = get_zero_weights();
        let mut rng = StdRng::seed_from_u64(7);
        let composition = compose(&weights, &mut rng);

        assert_eq!(composition.len(), MATERIALS.len());
        for entry in composition.iter() {
            assert_eq!(entry.raw_score, 0.0);
            assert_eq!(entry.percentage, 20.0);
        }
    }

    #[test]
    fn test_compose_tiny_weight() {
        let weights = WeightSet::try_from(vec![("Tensile Strength", 1e-17)]).unwrap();
        let composition = compose_with_draws(&weights, [0.1, 0.2, 0.3, 0.4, 1.0]);

        // the weight total cancels out, so the shares follow the draws alone
        for (percentage, expected) in composition
            .percentages()
            .into_iter()
            .zip([5.0, 10.0, 15.0, 20.0, 50.0])
        {
            assert_close(percentage, expected);
        }
        assert!(composition.iter().all(|entry| entry.raw_score > 0.0));
    }

    #[test]
    fn test_compose_is_reproducible() {
        let weights = get_test_weights();

        let first = compose(&weights, &mut StdRng::seed_from_u64(42));
        let second = compose(&weights, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);

        let other = compose(&weights, &mut StdRng::seed_from_u64(43));
        assert_ne!(first, other);
    }

    #[test]
    fn test_compose_matches_seeded_draws() {
        let weights = get_test_weights();
        let distribution = Uniform::new_inclusive(MIN_DRAW, MAX_DRAW);

        let mut rng = StdRng::seed_from_u64(1234);
        let draws: Draws = std::array::from_fn(|_| distribution.sample(&mut rng));
        for draw in draws {
            assert!((MIN_DRAW..=MAX_DRAW).contains(&draw));
        }

        let composition = compose(&weights, &mut StdRng::seed_from_u64(1234));
        assert_eq!(composition, compose_with_draws(&weights, draws));

        let total = draws.iter().sum::<f64>();
        for (entry, draw) in composition.iter().zip(draws) {
            assert_close(entry.raw_score, draw * 3.0);
            assert_close(entry.percentage, draw / total * 100.0);
        }
    }

    proptest! {
        #[test]
        fn prop_compose_is_a_distribution(
            values in proptest::collection::vec(0.0f64..=1.0, 1..=3),
            seed in any::<u64>(),
        ) {
            let weights = WeightSet::try_from(
                values
                    .into_iter()
                    .enumerate()
                    .map(|(idx, weight)| (format!("Property {idx}"), weight))
                    .collect::<Vec<_>>(),
            )
            .unwrap();
            let composition = compose(&weights, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(composition.components(), MATERIALS.to_vec());
            for entry in composition.iter() {
                prop_assert!((0.0..=100.0).contains(&entry.percentage));
                prop_assert!(entry.raw_score >= 0.0);
            }
            let sum = composition.percentages().iter().sum::<f64>();
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }
}
