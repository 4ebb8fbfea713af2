use std::time::Instant;

use log::{debug, info};

use crate::constants::STATS_LOG_INTERVAL;
use crate::error::ShellError;
use crate::rendering::{Scene, SceneVariant};
use crate::shell::{FramePacing, WindowShell};
use crate::simulation::SimulationState;
use crate::statistics::Statistics;

/// Owns the simulation for the lifetime of the program and drives it
/// one frame at a time against a [`WindowShell`].
pub struct Game {
    state: SimulationState,
    scene: Scene,
    statistics: Statistics,
    pacing: FramePacing,
}

impl Game {
    pub fn new(variant: SceneVariant, pacing: FramePacing) -> Self {
        Game::with_state(SimulationState::new(), Scene::new(variant), pacing)
    }

    pub fn with_state(state: SimulationState, scene: Scene, pacing: FramePacing) -> Self {
        Game {
            state,
            scene,
            statistics: Statistics::new(),
            pacing,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// One frame: tick, draw, render, present.
    pub fn step<S: WindowShell>(&mut self, shell: &mut S) -> Result<(), ShellError> {
        let report = self.state.tick();
        self.statistics.record_tick(&report, self.state.phase());

        let primitives = self.scene.draw(&self.state);
        shell.render(self.scene.background(), &primitives)?;
        shell.present();
        Ok(())
    }

    /// Runs frames until the shell asks to quit.
    pub fn run<S: WindowShell>(mut self, shell: &mut S) -> Result<Statistics, ShellError> {
        info!(
            "starting {:?} scene with {} car(s), light {:?}",
            self.scene.variant(),
            self.state.cars.len(),
            self.state.phase()
        );

        loop {
            let frame_start = Instant::now();

            shell.poll_input();
            if shell.should_quit() {
                info!("quit requested after {} frames", self.statistics.ticks);
                break;
            }

            self.step(shell)?;

            if self.statistics.ticks % STATS_LOG_INTERVAL == 0 {
                debug!("{}", self.statistics.summary());
            }

            self.pacing.wait(frame_start);
        }

        self.statistics.display();
        Ok(self.statistics)
    }
}
