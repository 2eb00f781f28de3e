mod breeder;
mod crossover;
mod distribution;
mod morphology;
mod mutagen;
mod point;
mod population;
mod route;
mod selector;
mod statistics;

pub use crossover::{Crossover, CrossoverError, ProbabilityOutOfRangeError};
pub use morphology::{MIN_POINTS, Morphology, MorphologyError};
pub use mutagen::{Mutagen, MutationRate, MutationRateOutOfRange};
pub use point::Point;
pub use population::Population;
pub use route::Route;
pub use selector::{DEFAULT_MAX_SCANS, SelectionError, Selector};
pub use statistics::Statistics;

pub(crate) use breeder::Breeder;
pub(crate) use distribution::random_distribution;
