use crate::constants::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LightPhase {
    Red,
    Yellow,
    Green,
}

impl LightPhase {
    /// Phase that follows `self` in the fixed Red -> Green -> Yellow cycle.
    pub fn next(&self) -> LightPhase {
        match self {
            LightPhase::Red => LightPhase::Green,
            LightPhase::Green => LightPhase::Yellow,
            LightPhase::Yellow => LightPhase::Red,
        }
    }
}

/// How many ticks each phase lasts before the light moves on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhaseDurations {
    pub red: u32,
    pub yellow: u32,
    pub green: u32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        PhaseDurations {
            red: RED_TICKS,
            yellow: YELLOW_TICKS,
            green: GREEN_TICKS,
        }
    }
}

impl PhaseDurations {
    pub fn for_phase(&self, phase: LightPhase) -> u32 {
        match phase {
            LightPhase::Red => self.red,
            LightPhase::Yellow => self.yellow,
            LightPhase::Green => self.green,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: LightPhase,
    pub to: LightPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficLight {
    phase: LightPhase,
    elapsed_ticks: u32,
    durations: PhaseDurations,
}

impl TrafficLight {
    pub fn new() -> Self {
        TrafficLight::with_durations(PhaseDurations::default())
    }

    pub fn with_durations(durations: PhaseDurations) -> Self {
        TrafficLight {
            phase: LightPhase::Red,
            elapsed_ticks: 0,
            durations,
        }
    }

    pub fn phase(&self) -> LightPhase {
        self.phase
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    /// Advances the timer by one tick and fires at most one transition.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        self.elapsed_ticks += 1;

        if self.elapsed_ticks <= self.durations.for_phase(self.phase) {
            return None;
        }

        let change = PhaseChange {
            from: self.phase,
            to: self.phase.next(),
        };
        self.phase = change.to;
        self.elapsed_ticks = 0;
        Some(change)
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        TrafficLight::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_red_with_fresh_timer() {
        let light = TrafficLight::new();
        assert_eq!(light.phase(), LightPhase::Red);
        assert_eq!(light.elapsed_ticks(), 0);
    }

    #[test]
    fn timer_counts_up_until_threshold_is_exceeded() {
        let mut light = TrafficLight::new();
        for expected in 1..=RED_TICKS {
            assert_eq!(light.tick(), None);
            assert_eq!(light.elapsed_ticks(), expected);
        }
        let change = light.tick();
        assert_eq!(
            change,
            Some(PhaseChange {
                from: LightPhase::Red,
                to: LightPhase::Green,
            })
        );
        assert_eq!(light.elapsed_ticks(), 0);
    }

    #[test]
    fn zero_thresholds_still_step_one_phase_per_tick() {
        let mut light = TrafficLight::with_durations(PhaseDurations {
            red: 0,
            yellow: 0,
            green: 0,
        });
        let mut seen = Vec::new();
        for _ in 0..6 {
            light.tick();
            seen.push(light.phase());
        }
        assert_eq!(
            seen,
            vec![
                LightPhase::Green,
                LightPhase::Yellow,
                LightPhase::Red,
                LightPhase::Green,
                LightPhase::Yellow,
                LightPhase::Red,
            ]
        );
    }

    #[test]
    fn yellow_is_the_short_phase() {
        let mut light = TrafficLight::new();
        let mut ticks_in_yellow = 0;
        let mut cycles = 0;
        while cycles < 1 {
            if let Some(change) = light.tick() {
                if change.to == LightPhase::Red {
                    cycles += 1;
                }
            }
            if light.phase() == LightPhase::Yellow {
                ticks_in_yellow += 1;
            }
        }
        // The tick that enters yellow and the YELLOW_TICKS ticks spent counting.
        assert_eq!(ticks_in_yellow, YELLOW_TICKS + 1);
    }
}
