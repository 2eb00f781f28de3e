mod engine;
mod engine_builder;
mod errors;

pub use engine::GeneticEngine;
pub use engine_builder::{DEFAULT_POPULATION_SIZE, EngineBuilder};
pub use errors::Error;
