use crate::engine::{Error, GeneticEngine};
use crate::models::{Morphology, Population, Route, Statistics};
use rand::rngs::StdRng;
use tracing::instrument;

/// Drives a [`GeneticEngine`] one generation per trigger.
///
/// Holds the fixed point set and the current generation; each `step` replaces the generation
/// with the one bred from it.
pub struct Simulation<R = StdRng> {
    morphology: Morphology,
    engine: GeneticEngine<R>,
    population: Population,
    iteration: u64,
}

impl<R: rand::Rng> Simulation<R> {
    /// Seeds generation 0 from `morphology`.
    pub fn new(morphology: Morphology, mut engine: GeneticEngine<R>) -> Self {
        let population = engine.initial_population(&morphology);

        Self {
            morphology,
            engine,
            population,
            iteration: 0,
        }
    }

    pub fn morphology(&self) -> &Morphology {
        &self.morphology
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// The route a viewer displays: the first one of the current generation.
    pub fn representative(&self) -> Option<&Route> {
        self.population.get(0)
    }

    /// The shortest route of the current generation.
    pub fn best(&self) -> Option<&Route> {
        self.population
            .iter()
            .max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::collect(
            self.iteration,
            &self.population,
            self.engine.crossover_chance(),
            self.engine.mutation_chance(),
        )
    }

    /// Advances one generation. On error the current generation is kept.
    #[instrument(level = "debug", skip(self), fields(iteration = self.iteration))]
    pub fn step(&mut self) -> Result<&Population, Error> {
        let next = self.engine.advance_generation(&self.population)?;
        self.population = next;
        self.iteration += 1;

        let statistics = self.statistics();
        tracing::info!(
            iteration = statistics.iteration,
            first_route = ?statistics.first_route_length,
            best_route = ?statistics.best_route_length,
            mean_route = ?statistics.mean_route_length,
            "Generation advanced"
        );

        Ok(&self.population)
    }

    /// Advances `generations` times, stopping at the first error.
    pub fn run(&mut self, generations: u64) -> Result<Statistics, Error> {
        for _ in 0..generations {
            self.step()?;
        }

        Ok(self.statistics())
    }
}
