use crate::constants::{CIRCLE_SEGMENTS, ROOF_SHADE};
use crate::geometry::{draw_circle, draw_rectangle, Primitive, Rgb};
use crate::vehicle::Car;

const WINDOW_COLOR: Rgb = Rgb::new(0.6, 0.8, 1.0);
const WHEEL_RADIUS: f32 = 0.04;

/// Body and roof always; windows and wheels only when `detailed`.
pub fn car_primitives(car: &Car, detailed: bool) -> Vec<Primitive> {
    let (x, y) = (car.x, car.lane_y);

    let mut primitives = vec![
        draw_rectangle(x - 0.2, y - 0.1, x + 0.2, y + 0.1, car.color),
        draw_rectangle(
            x - 0.15,
            y + 0.05,
            x + 0.15,
            y + 0.12,
            car.color.shade(ROOF_SHADE),
        ),
    ];

    if detailed {
        primitives.extend([
            draw_rectangle(x - 0.13, y + 0.06, x - 0.02, y + 0.11, WINDOW_COLOR),
            draw_rectangle(x + 0.02, y + 0.06, x + 0.13, y + 0.11, WINDOW_COLOR),
            draw_circle(x - 0.15, y - 0.12, WHEEL_RADIUS, CIRCLE_SEGMENTS, Rgb::BLACK),
            draw_circle(x + 0.15, y - 0.12, WHEEL_RADIUS, CIRCLE_SEGMENTS, Rgb::BLACK),
        ]);
    }

    primitives
}
