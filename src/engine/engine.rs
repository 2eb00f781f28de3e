use super::{EngineBuilder, Error};
use crate::builder::Unset;
use crate::models::{
    Breeder, Crossover, Morphology, Mutagen, Population, Route, Selector, random_distribution,
};
use rand::rngs::StdRng;
use tracing::instrument;

/// Breeds one generation of routes into the next.
///
/// The engine owns its configuration and its random source; the caller owns the populations.
/// Each generation is bred from scratch: two parents are selected by rejection sampling, a
/// single child is produced by ordered crossover and swap mutation, and this repeats until the
/// next generation is as large as the current one. No route survives unchanged by right
/// (there is no elitism) and no history is kept.
pub struct GeneticEngine<R = StdRng> {
    pub(super) population_size: usize,
    pub(super) selector: Selector,
    pub(super) crossover: Crossover,
    pub(super) mutagen: Mutagen,
    pub(super) rng: R,
}

impl GeneticEngine {
    pub fn builder() -> EngineBuilder<Unset<Crossover>, Unset<Mutagen>> {
        EngineBuilder::new()
    }
}

impl<R: rand::Rng> GeneticEngine<R> {
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn crossover_chance(&self) -> f64 {
        self.crossover.probability()
    }

    pub fn mutation_chance(&self) -> f64 {
        self.mutagen.mutation_rate()
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Seeds generation 0 with `population_size` random permutations of the point set.
    #[instrument(level = "info", skip(self, morphology), fields(population_size = self.population_size, points_count = morphology.len()))]
    pub fn initial_population(&mut self, morphology: &Morphology) -> Population {
        tracing::info!("Generating initial population");
        random_distribution(self.population_size, morphology, &mut self.rng)
    }

    /// Selects two parents from `population` that differ by value.
    pub fn select_parents<'p>(
        &mut self,
        population: &'p Population,
    ) -> Result<(&'p Route, &'p Route), Error> {
        let candidates = evaluate(population);
        let (first, second) = self.selector.select_parents(&candidates, &mut self.rng)?;

        Ok((candidates[first].0, candidates[second].0))
    }

    /// Produces a child from two parents, applying ordered crossover with the configured chance.
    pub fn crossover(&mut self, parent1: &Route, parent2: &Route) -> Result<Route, Error> {
        Ok(self.crossover.apply(&mut self.rng, parent1, parent2)?)
    }

    /// Swaps two random positions of `route` with the configured chance.
    pub fn mutate(&mut self, route: &mut Route) -> bool {
        self.mutagen.mutate(&mut self.rng, route)
    }

    /// Breeds the generation following `current`. The result has the same size as `current`.
    #[instrument(level = "info", skip(self, current), fields(population_size = current.len()))]
    pub fn advance_generation(&mut self, current: &Population) -> Result<Population, Error> {
        tracing::debug!("Breeding next generation");

        // Fitness is a pure function of the route, so it is computed once per generation
        let candidates = evaluate(current);
        let breeder = Breeder::new(&self.crossover, &self.mutagen);
        let mut next = Population::with_capacity(current.len());

        while next.len() != current.len() {
            let (first, second) = self
                .selector
                .select_parents(&candidates, &mut self.rng)
                .inspect_err(|e| {
                    tracing::error!(bred = next.len(), "Parent selection failed: {e}");
                })?;

            let child =
                breeder.breed_child(candidates[first].0, candidates[second].0, &mut self.rng)?;
            next.push(child);
        }

        Ok(next)
    }
}

fn evaluate(population: &Population) -> Vec<(&Route, f64)> {
    population
        .iter()
        .map(|route| (route, route.fitness()))
        .collect()
}
