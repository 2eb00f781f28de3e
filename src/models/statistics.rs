use crate::models::Population;
use serde::Serialize;

/// Snapshot of a simulation after a given number of generations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub iteration: u64,
    pub population_size: usize,
    pub crossover_chance: f64,
    pub mutation_chance: f64,
    /// Tour length of the route at index 0, the one a viewer would display
    pub first_route_length: Option<f64>,
    pub best_route_length: Option<f64>,
    pub mean_route_length: Option<f64>,
}

impl Statistics {
    pub(crate) fn collect(
        iteration: u64,
        population: &Population,
        crossover_chance: f64,
        mutation_chance: f64,
    ) -> Self {
        let lengths: Vec<f64> = population.iter().map(|route| route.total_distance()).collect();

        let best_route_length = lengths.iter().copied().reduce(f64::min);
        let mean_route_length = if lengths.is_empty() {
            None
        } else {
            Some(lengths.iter().sum::<f64>() / lengths.len() as f64)
        };

        Self {
            iteration,
            population_size: population.len(),
            crossover_chance,
            mutation_chance,
            first_route_length: lengths.first().copied(),
            best_route_length,
            mean_route_length,
        }
    }
}
