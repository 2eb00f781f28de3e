use crate::models::{Crossover, CrossoverError, Mutagen, Route};

pub(crate) struct Breeder<'a> {
    crossover: &'a Crossover,
    mutagen: &'a Mutagen,
}

impl<'a> Breeder<'a> {
    pub(crate) fn new(crossover: &'a Crossover, mutagen: &'a Mutagen) -> Self {
        Self { crossover, mutagen }
    }

    /// Crossover followed by a single mutation attempt.
    pub(crate) fn breed_child(
        &self,
        parent1: &Route,
        parent2: &Route,
        rng: &mut impl rand::Rng,
    ) -> Result<Route, CrossoverError> {
        let mut child = self.crossover.apply(rng, parent1, parent2)?;
        self.mutagen.mutate(rng, &mut child);

        Ok(child)
    }
}
