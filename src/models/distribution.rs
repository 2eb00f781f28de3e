use crate::models::{Morphology, Population};
use tracing::instrument;

/// Generation 0: `population_size` independent random permutations of the point set.
#[instrument(level = "debug", skip(morphology, rng), fields(points_count = morphology.len()))]
pub(crate) fn random_distribution(
    population_size: usize,
    morphology: &Morphology,
    rng: &mut impl rand::Rng,
) -> Population {
    let mut population = Population::with_capacity(population_size);

    for _ in 0..population_size {
        population.push(morphology.random(rng));
    }

    population
}
