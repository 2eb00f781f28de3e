use super::{Error, GeneticEngine};
use crate::builder::{Set, Unset};
use crate::models::{Crossover, Mutagen, Selector};
use rand::{SeedableRng, rngs::StdRng};
use tracing::instrument;

pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// Collects engine configuration. `build` is only available once both the crossover and the
/// mutagen have been supplied.
pub struct EngineBuilder<C, M> {
    pub(super) population_size: usize,
    pub(super) selector: Selector,
    pub(super) crossover: C,
    pub(super) mutagen: M,
}

impl EngineBuilder<Unset<Crossover>, Unset<Mutagen>> {
    pub(super) fn new() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            selector: Selector::default(),
            crossover: Unset::new(),
            mutagen: Unset::new(),
        }
    }
}

impl<C, M> EngineBuilder<C, M> {
    /// Sets the number of routes per generation. A single route cannot breed, since the
    /// second parent must differ from the first, so a size of 1 fails on the first advance.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    pub fn crossover(self, crossover: Crossover) -> EngineBuilder<Set<Crossover>, M> {
        EngineBuilder {
            population_size: self.population_size,
            selector: self.selector,
            crossover: Set::new(crossover),
            mutagen: self.mutagen,
        }
    }

    pub fn mutagen(self, mutagen: Mutagen) -> EngineBuilder<C, Set<Mutagen>> {
        EngineBuilder {
            population_size: self.population_size,
            selector: self.selector,
            crossover: self.crossover,
            mutagen: Set::new(mutagen),
        }
    }
}

impl EngineBuilder<Set<Crossover>, Set<Mutagen>> {
    /// Builds an engine drawing from `rng`.
    #[instrument(level = "debug", skip(self, rng), fields(population_size = self.population_size, crossover = self.crossover.as_ref_inner().probability(), mutation_rate = self.mutagen.as_ref_inner().mutation_rate()))]
    pub fn build_with_rng<R: rand::Rng>(self, rng: R) -> Result<GeneticEngine<R>, Error> {
        if self.population_size == 0 {
            return Err(Error::InvalidPopulationSize);
        }
        if self.population_size == 1 {
            tracing::warn!("A single route cannot breed; advancing a generation will fail");
        }

        Ok(GeneticEngine {
            population_size: self.population_size,
            selector: self.selector,
            crossover: self.crossover.into_inner(),
            mutagen: self.mutagen.into_inner(),
            rng,
        })
    }

    /// Builds an engine with a reproducible random stream.
    pub fn build_seeded(self, seed: u64) -> Result<GeneticEngine<StdRng>, Error> {
        self.build_with_rng(StdRng::seed_from_u64(seed))
    }

    /// Builds an engine seeded from the operating system.
    pub fn build(self) -> Result<GeneticEngine<StdRng>, Error> {
        self.build_with_rng(StdRng::from_os_rng())
    }
}
