use crate::constants::*;
use crate::geometry::{draw_rectangle, Primitive, Rgb};

const ROAD_COLOR: Rgb = Rgb::gray(0.3);
const SIDEWALK_COLOR: Rgb = Rgb::gray(0.6);
const MARKING_COLOR: Rgb = Rgb::WHITE;

pub struct RoadRenderer;

impl RoadRenderer {
    pub fn road_surface() -> Primitive {
        draw_rectangle(
            WORLD_LEFT,
            -ROAD_HALF_HEIGHT,
            WORLD_RIGHT,
            ROAD_HALF_HEIGHT,
            ROAD_COLOR,
        )
    }

    /// Dashed centre line, rebuilt from the layout constants on every call.
    pub fn lane_dividers() -> impl Iterator<Item = Primitive> {
        (0..)
            .map(|i| DIVIDER_START_X + i as f32 * DIVIDER_STRIDE)
            .take_while(|x| *x < WORLD_RIGHT)
            .map(|x| {
                draw_rectangle(
                    x,
                    -DIVIDER_HALF_HEIGHT,
                    x + DIVIDER_LENGTH,
                    DIVIDER_HALF_HEIGHT,
                    MARKING_COLOR,
                )
            })
    }

    pub fn sidewalks() -> [Primitive; 2] {
        [
            draw_rectangle(
                WORLD_LEFT,
                ROAD_HALF_HEIGHT,
                WORLD_RIGHT,
                SIDEWALK_OUTER,
                SIDEWALK_COLOR,
            ),
            draw_rectangle(
                WORLD_LEFT,
                -ROAD_HALF_HEIGHT,
                WORLD_RIGHT,
                -SIDEWALK_OUTER,
                SIDEWALK_COLOR,
            ),
        ]
    }

    /// Stripes across the road centred on `crossing_x`.
    pub fn zebra_stripes(crossing_x: f32) -> impl Iterator<Item = Primitive> {
        (0..ZEBRA_STRIPE_COUNT)
            .map(|i| ZEBRA_FIRST_STRIPE_Y + i as f32 * ZEBRA_STRIPE_STRIDE)
            .map(move |y| {
                draw_rectangle(
                    crossing_x - ZEBRA_HALF_WIDTH,
                    y - ZEBRA_HALF_HEIGHT,
                    crossing_x + ZEBRA_HALF_WIDTH,
                    y + ZEBRA_HALF_HEIGHT,
                    MARKING_COLOR,
                )
            })
    }
}
