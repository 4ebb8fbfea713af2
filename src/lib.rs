pub mod constants;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod rendering;
pub mod shell;
pub mod simulation;
pub mod statistics;
pub mod traffic_light;
pub mod trees;
pub mod vehicle;

pub use error::ShellError;
pub use game::Game;
pub use rendering::{Scene, SceneVariant};
pub use simulation::{SimulationState, TickReport};
pub use traffic_light::{LightPhase, PhaseDurations, TrafficLight};
pub use vehicle::Car;

/// Logs to stderr, `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Opens the SDL window for `variant` and runs until the user quits.
#[cfg(feature = "window")]
pub fn run(variant: SceneVariant) -> anyhow::Result<statistics::Statistics> {
    use anyhow::Context;

    let config = shell::ShellConfig::for_variant(variant);
    let mut window = shell::SdlShell::open(&config)
        .with_context(|| format!("could not open the '{}' window", config.title))?;

    let statistics = Game::new(variant, config.pacing)
        .run(&mut window)
        .context("rendering failed")?;
    Ok(statistics)
}
