use crate::{
    engine::{DEFAULT_POPULATION_SIZE, GeneticEngine},
    models::{Crossover, DEFAULT_MAX_SCANS, Morphology, Mutagen, Selector},
    shapes::Shape,
    simulation::Simulation,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};
use tracing::instrument;

const ENV_PREFIX: &str = "POLY_TOUR_";

/// Settings for a headless run. Defaults mirror the classic demo: a dodecagon, 100 routes,
/// a 30% crossover chance and a 5% mutation chance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub shape: Shape,
    pub population_size: usize,
    pub crossover_chance: f64,
    pub mutation_chance: f64,
    pub generations: u64,
    pub seed: Option<u64>,
    pub max_selection_scans: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            population_size: DEFAULT_POPULATION_SIZE,
            crossover_chance: 0.30,
            mutation_chance: 0.05,
            generations: 100,
            seed: None,
            max_selection_scans: DEFAULT_MAX_SCANS,
        }
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    fallback: T,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let key = format!("{ENV_PREFIX}{name}");
    match lookup(&key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(fallback),
    }
}

impl Configuration {
    /// Reads `POLY_TOUR_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to the defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        // Unseeded unless asked otherwise
        let seed = lookup(&format!("{ENV_PREFIX}SEED"))
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{ENV_PREFIX}SEED has an invalid value: {raw:?}"))
            })
            .transpose()?;

        Ok(Self {
            shape: read_var(&lookup, "SHAPE", defaults.shape)?,
            population_size: read_var(&lookup, "POPULATION_SIZE", defaults.population_size)?,
            crossover_chance: read_var(&lookup, "CROSSOVER_CHANCE", defaults.crossover_chance)?,
            mutation_chance: read_var(&lookup, "MUTATION_CHANCE", defaults.mutation_chance)?,
            generations: read_var(&lookup, "GENERATIONS", defaults.generations)?,
            seed,
            max_selection_scans: read_var(
                &lookup,
                "MAX_SELECTION_SCANS",
                defaults.max_selection_scans,
            )?,
        })
    }
}

/// Validates `config` and seeds generation 0 of a simulation over the configured shape.
#[instrument(level = "info", skip(config), fields(shape = ?config.shape, population_size = config.population_size, seed = ?config.seed))]
pub fn bootstrap(config: &Configuration) -> anyhow::Result<Simulation> {
    let morphology = Morphology::new(config.shape.polygon().vertices())?;

    let builder = GeneticEngine::builder()
        .with_population_size(config.population_size)
        .with_selector(Selector::rejection(config.max_selection_scans)?)
        .crossover(Crossover::new(config.crossover_chance)?)
        .mutagen(Mutagen::constant(config.mutation_chance)?);

    let engine = match config.seed {
        Some(seed) => builder.build_seeded(seed)?,
        None => builder.build()?,
    };

    Ok(Simulation::new(morphology, engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn it_falls_back_to_defaults() {
        let config = Configuration::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn it_reads_overrides() {
        let config = Configuration::from_lookup(lookup_from(&[
            ("POLY_TOUR_SHAPE", "icosagon"),
            ("POLY_TOUR_POPULATION_SIZE", "40"),
            ("POLY_TOUR_CROSSOVER_CHANCE", "0.5"),
            ("POLY_TOUR_MUTATION_CHANCE", "0.1"),
            ("POLY_TOUR_GENERATIONS", "7"),
            ("POLY_TOUR_SEED", "1234"),
            ("POLY_TOUR_MAX_SELECTION_SCANS", "500"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Configuration {
                shape: Shape::Icosagon,
                population_size: 40,
                crossover_chance: 0.5,
                mutation_chance: 0.1,
                generations: 7,
                seed: Some(1234),
                max_selection_scans: 500,
            }
        );
    }

    #[test]
    fn it_rejects_unparsable_values() {
        let result =
            Configuration::from_lookup(lookup_from(&[("POLY_TOUR_POPULATION_SIZE", "many")]));
        assert!(result.is_err());

        let result = Configuration::from_lookup(lookup_from(&[("POLY_TOUR_SHAPE", "circle")]));
        assert!(result.is_err());
    }

    #[test]
    fn it_rejects_out_of_range_chances_instead_of_clamping() {
        let config = Configuration {
            crossover_chance: 1.2,
            ..Configuration::default()
        };
        assert!(bootstrap(&config).is_err());

        let config = Configuration {
            mutation_chance: -0.5,
            ..Configuration::default()
        };
        assert!(bootstrap(&config).is_err());

        let config = Configuration {
            population_size: 0,
            ..Configuration::default()
        };
        assert!(bootstrap(&config).is_err());
    }

    #[test]
    fn it_bootstraps_a_seeded_simulation() {
        let config = Configuration {
            shape: Shape::Heptagon,
            population_size: 12,
            seed: Some(42),
            ..Configuration::default()
        };

        let simulation = bootstrap(&config).unwrap();

        assert_eq!(simulation.population().len(), 12);
        assert_eq!(simulation.morphology().len(), 7);
    }
}
