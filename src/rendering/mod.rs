pub mod road_renderer;
pub mod scene;
pub mod traffic_light_renderer;
pub mod vehicle_renderer;

pub use scene::{Scene, SceneVariant};
