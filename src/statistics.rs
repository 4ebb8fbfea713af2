use std::time::Instant;

use log::info;

use crate::simulation::TickReport;
use crate::traffic_light::LightPhase;

pub struct Statistics {
    pub ticks: u64,
    pub phase_changes: u32,
    pub stop_line_holds: u32,
    pub wraparounds: u32,
    ticks_by_phase: [u64; 3], // Red, Yellow, Green
    simulation_start: Instant,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            ticks: 0,
            phase_changes: 0,
            stop_line_holds: 0,
            wraparounds: 0,
            ticks_by_phase: [0; 3],
            simulation_start: Instant::now(),
        }
    }

    pub fn record_tick(&mut self, report: &TickReport, phase: LightPhase) {
        self.ticks += 1;
        if report.phase_change.is_some() {
            self.phase_changes += 1;
        }
        self.stop_line_holds += report.cars_held as u32;
        self.wraparounds += report.cars_wrapped as u32;
        self.ticks_by_phase[phase_index(phase)] += 1;
    }

    pub fn ticks_in(&self, phase: LightPhase) -> u64 {
        self.ticks_by_phase[phase_index(phase)]
    }

    pub fn summary(&self) -> String {
        format!(
            "ticks: {} (red {}, yellow {}, green {}), phase changes: {}, stop-line holds: {}, wraparounds: {}",
            self.ticks,
            self.ticks_in(LightPhase::Red),
            self.ticks_in(LightPhase::Yellow),
            self.ticks_in(LightPhase::Green),
            self.phase_changes,
            self.stop_line_holds,
            self.wraparounds,
        )
    }

    pub fn display(&self) {
        let elapsed_sec = self.simulation_start.elapsed().as_secs_f32();
        let fps = if elapsed_sec > 0.0 { self.ticks as f32 / elapsed_sec } else { 0.0 };

        info!("=== FINAL STATISTICS ===");
        info!("Run time: {:.1}s at {:.1} frames/s", elapsed_sec, fps);
        info!("{}", self.summary());
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Statistics::new()
    }
}

fn phase_index(phase: LightPhase) -> usize {
    match phase {
        LightPhase::Red => 0,
        LightPhase::Yellow => 1,
        LightPhase::Green => 2,
    }
}
