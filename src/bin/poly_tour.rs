use poly_tour_ga::bootstrap::{Configuration, bootstrap};
use tracing::Level;

// Headless stand-in for the interactive viewer: steps the configured number of generations
// and logs the running statistics.
fn main() -> anyhow::Result<()> {
    dotenv::from_filename(".env.local").ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(Level::INFO)
        .init();

    let config = Configuration::from_env()?;
    tracing::info!(?config, "Starting tour optimization");

    let mut simulation = bootstrap(&config)?;
    let optimum = config.shape.polygon().perimeter();
    let statistics = simulation.run(config.generations)?;

    tracing::info!(
        generations = statistics.iteration,
        first_route = ?statistics.first_route_length,
        best_route = ?statistics.best_route_length,
        perimeter = optimum,
        "Optimization finished"
    );

    if let Some(best) = simulation.best() {
        println!("Best route ({:.3}): {}", best.total_distance(), best);
    }

    Ok(())
}
