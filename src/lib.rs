mod builder;

pub mod bootstrap;
pub mod engine;
pub mod models;
pub mod shapes;
pub mod simulation;

pub use engine::GeneticEngine;
pub use simulation::Simulation;
