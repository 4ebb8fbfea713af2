use log::debug;

use crate::constants::*;
use crate::traffic_light::{LightPhase, PhaseChange, TrafficLight};
use crate::vehicle::Car;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub phase_change: Option<PhaseChange>,
    pub cars_held: usize,
    pub cars_wrapped: usize,
}

/// Everything that changes between frames: the light and the cars.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub light: TrafficLight,
    pub cars: Vec<Car>,
    pub car_speed: f32,
    pub stop_line: f32,
    tick_count: u64,
}

impl SimulationState {
    /// One blue car at the left of the road, light on red.
    pub fn new() -> Self {
        SimulationState::with_cars(TrafficLight::new(), vec![Car::default()])
    }

    pub fn with_cars(light: TrafficLight, cars: Vec<Car>) -> Self {
        SimulationState {
            light,
            cars,
            car_speed: CAR_SPEED,
            stop_line: STOP_LINE,
            tick_count: 0,
        }
    }

    pub fn phase(&self) -> LightPhase {
        self.light.phase()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Light first, then car motion under the resulting phase, then wraparound.
    pub fn tick(&mut self) -> TickReport {
        self.tick_count += 1;
        let mut report = TickReport {
            phase_change: self.light.tick(),
            ..TickReport::default()
        };

        if let Some(change) = report.phase_change {
            debug!(
                "tick {}: light {:?} -> {:?}",
                self.tick_count, change.from, change.to
            );
        }

        match self.light.phase() {
            LightPhase::Green => {
                for car in &mut self.cars {
                    car.advance(self.car_speed);
                }
            }
            LightPhase::Red => {
                let stop_line = self.stop_line;
                report.cars_held = self
                    .cars
                    .iter_mut()
                    .map(|car| car.hold_at(stop_line))
                    .filter(|held| *held)
                    .count();
            }
            LightPhase::Yellow => {}
        }

        report.cars_wrapped = self
            .cars
            .iter_mut()
            .map(|car| car.wrap_around())
            .filter(|wrapped| *wrapped)
            .count();

        report
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        SimulationState::new()
    }
}
