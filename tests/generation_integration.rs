use poly_tour_ga::{
    GeneticEngine, Simulation,
    models::{Crossover, Morphology, Mutagen, Point, Population, Route},
    shapes::Shape,
};
use rand::{SeedableRng, rngs::StdRng};

fn create_engine(
    population_size: usize,
    crossover: f64,
    mutation: f64,
    seed: u64,
) -> GeneticEngine {
    GeneticEngine::builder()
        .with_population_size(population_size)
        .crossover(Crossover::new(crossover).unwrap())
        .mutagen(Mutagen::constant(mutation).unwrap())
        .build_seeded(seed)
        .unwrap()
}

fn assert_is_tour(route: &Route, morphology: &Morphology) {
    assert_eq!(route.len(), morphology.len());
    for point in morphology.points() {
        let occurrences = route.points().iter().filter(|p| *p == point).count();
        assert_eq!(occurrences, 1, "{point} must appear exactly once in {route}");
    }
}

#[test]
fn test_generations_stay_valid_tours() {
    let morphology = Morphology::new(Shape::Dodecagon.polygon().vertices()).unwrap();
    let mut engine = create_engine(100, 0.9, 0.5, 42);
    let mut population = engine.initial_population(&morphology);

    for _ in 0..25 {
        population = engine.advance_generation(&population).unwrap();

        assert_eq!(population.len(), 100);
        for route in &population {
            assert_is_tour(route, &morphology);
        }
    }
}

#[test]
fn test_without_crossover_or_mutation_children_are_copies() {
    let morphology = Morphology::new(Shape::Heptagon.polygon().vertices()).unwrap();
    let mut engine = create_engine(40, 0.0, 0.0, 7);
    let population = engine.initial_population(&morphology);

    let next = engine.advance_generation(&population).unwrap();

    // Every child is an exact copy of some route of the previous generation
    for child in &next {
        assert!(population.iter().any(|route| route == child));
    }
}

#[test]
fn test_crossover_and_mutation_preserve_the_point_set() {
    let morphology = Morphology::new(Shape::Icosagon.polygon().vertices()).unwrap();
    let mut engine = create_engine(10, 1.0, 1.0, 3);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let lhs = morphology.random(&mut rng);
        let rhs = morphology.random(&mut rng);

        let mut child = engine.crossover(&lhs, &rhs).unwrap();
        assert_is_tour(&child, &morphology);

        engine.mutate(&mut child);
        assert_is_tour(&child, &morphology);
    }
}

#[test]
fn test_seeded_engines_are_deterministic() {
    let morphology = Morphology::new(Shape::Heptagon.polygon().vertices()).unwrap();

    let run = |seed| {
        let engine = create_engine(20, 0.3, 0.05, seed);
        let mut simulation = Simulation::new(morphology.clone(), engine);
        simulation.run(10).unwrap();
        simulation.population().clone()
    };

    assert_eq!(run(5), run(5));
}

#[test]
fn test_best_route_is_bounded_by_the_perimeter() {
    let morphology = Morphology::new(Shape::Heptagon.polygon().vertices()).unwrap();
    let mut simulation = Simulation::new(morphology, create_engine(100, 0.8, 0.2, 42));
    let perimeter = Shape::Heptagon.polygon().perimeter();
    let initial_mean = simulation.statistics().mean_route_length.unwrap();

    let statistics = simulation.run(30).unwrap();

    // No tour of a convex polygon beats its perimeter
    let best = statistics.best_route_length.unwrap();
    assert!(best >= perimeter - 1e-9);
    assert!(best < initial_mean, "best route {best} vs initial mean {initial_mean}");
}

#[test]
fn test_unit_square_fitness_scenario() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let c = Point::new(1.0, 1.0);
    let d = Point::new(0.0, 1.0);

    let perimeter = Route::new(vec![a, b, c, d]);
    let crossing = Route::new(vec![a, c, b, d]);

    assert!((perimeter.fitness() - 0.25).abs() < 1e-12);
    assert!((crossing.total_distance() - (2.0 + 2.0 * 2.0_f64.sqrt())).abs() < 1e-12);
    assert!(crossing.fitness() < perimeter.fitness());
}

#[test]
fn test_empty_generation_advances_to_empty() {
    let mut engine = create_engine(10, 0.3, 0.05, 1);

    let next = engine.advance_generation(&Population::new()).unwrap();
    assert!(next.is_empty());
}
