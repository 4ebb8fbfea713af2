use std::time::Duration;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

// Visible world span, orthographic
pub const WORLD_LEFT: f32 = -2.5;
pub const WORLD_RIGHT: f32 = 1.5;
pub const WORLD_BOTTOM: f32 = -1.0;
pub const WORLD_TOP: f32 = 1.0;

pub const TRAFFIC_LIGHT_X: f32 = 0.7;
pub const TRAFFIC_LIGHT_Y: f32 = 0.4;
pub const ZEBRA_CROSSING_X: f32 = TRAFFIC_LIGHT_X - 0.3;
pub const STOP_LINE: f32 = ZEBRA_CROSSING_X - 0.2;
/// Half-width of the band around the stop line that holds cars on red.
pub const CLAMP_BAND: f32 = 0.1;

pub const RED_TICKS: u32 = 200;
pub const YELLOW_TICKS: u32 = 50;
pub const GREEN_TICKS: u32 = 200;

pub const CAR_SPEED: f32 = 0.01;
pub const CAR_START_X: f32 = -1.5;
pub const CAR_LANE_Y: f32 = -0.05;
pub const WRAP_THRESHOLD_X: f32 = 1.5;
pub const RESPAWN_X: f32 = -2.0;

// Road layout
pub const ROAD_HALF_HEIGHT: f32 = 0.5;
pub const SIDEWALK_OUTER: f32 = 0.6;
pub const DIVIDER_START_X: f32 = -2.4;
pub const DIVIDER_STRIDE: f32 = 0.2;
pub const DIVIDER_LENGTH: f32 = 0.1;
pub const DIVIDER_HALF_HEIGHT: f32 = 0.02;
pub const ZEBRA_STRIPE_COUNT: usize = 5;
pub const ZEBRA_FIRST_STRIPE_Y: f32 = -0.4;
pub const ZEBRA_STRIPE_STRIDE: f32 = 0.2;
pub const ZEBRA_HALF_WIDTH: f32 = 0.1;
pub const ZEBRA_HALF_HEIGHT: f32 = 0.05;

pub const CIRCLE_SEGMENTS: u32 = 20;
pub const ROOF_SHADE: f32 = 0.8;
pub const DIM_INTENSITY: f32 = 0.3;

pub const STATS_LOG_INTERVAL: u64 = 300;
