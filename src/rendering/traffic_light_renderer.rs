use crate::constants::{CIRCLE_SEGMENTS, DIM_INTENSITY};
use crate::geometry::{draw_circle, draw_rectangle, Primitive, Rgb};
use crate::traffic_light::LightPhase;

const HOUSING_COLOR: Rgb = Rgb::gray(0.2);
const LAMP_RADIUS: f32 = 0.03;
const LAMP_SPACING: f32 = 0.1;

/// Lamp color for `lamp`, lit only while it is the active phase.
pub fn lamp_color(lamp: LightPhase, active: LightPhase) -> Rgb {
    let intensity = if lamp == active { 1.0 } else { DIM_INTENSITY };
    match lamp {
        LightPhase::Red => Rgb::new(intensity, 0.0, 0.0),
        LightPhase::Yellow => Rgb::new(intensity, intensity, 0.0),
        LightPhase::Green => Rgb::new(0.0, intensity, 0.0),
    }
}

/// Housing, then red, yellow and green lamps from top to bottom.
pub fn traffic_light_primitives(x: f32, y: f32, active: LightPhase) -> [Primitive; 4] {
    let lamp = |phase: LightPhase, lamp_y: f32| {
        draw_circle(x, lamp_y, LAMP_RADIUS, CIRCLE_SEGMENTS, lamp_color(phase, active))
    };

    [
        draw_rectangle(x - 0.05, y - 0.15, x + 0.05, y + 0.15, HOUSING_COLOR),
        lamp(LightPhase::Red, y + LAMP_SPACING),
        lamp(LightPhase::Yellow, y),
        lamp(LightPhase::Green, y - LAMP_SPACING),
    ]
}
