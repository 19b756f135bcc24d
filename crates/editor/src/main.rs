use anyhow::Result;
use snowfall_editor::config::RunConfig;
use snowfall_editor::demo;
use snowfall_editor::run::run_snowfall;
use snowfall_engine::world::World;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    tracing::debug!("Run configuration: {:?}", config);

    tracing::info!("Generating demo snowfield ({} chunk radius)...", config.world_radius);
    let world = World::new();
    demo::generate_snowfield(&world, config.world_radius);
    tracing::info!("World ready: {} chunks", world.chunk_count());

    let report = run_snowfall(&world, &config)?;
    tracing::info!(
        "{} frozen, {} snow layers, {} columns untouched",
        report.ice,
        report.snow,
        report.columns.saturating_sub(report.affected),
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
