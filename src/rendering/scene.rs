use crate::constants::*;
use crate::geometry::{Primitive, Rgb};
use crate::simulation::SimulationState;
use crate::trees::ROADSIDE_TREES;

use super::road_renderer::RoadRenderer;
use super::traffic_light_renderer::traffic_light_primitives;
use super::vehicle_renderer::car_primitives;

/// The two flavours of the intersection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneVariant {
    /// Road, car and light only.
    Plain,
    /// Adds the zebra crossing, trees and a detailed car.
    Crossing,
}

impl SceneVariant {
    pub fn title(&self) -> &'static str {
        match self {
            SceneVariant::Plain => "Cars Stop at Zebra Crossing",
            SceneVariant::Crossing => "Cars Stop at Zebra Crossing and Continue",
        }
    }

    pub fn background(&self) -> Rgb {
        match self {
            SceneVariant::Plain => Rgb::BLACK,
            SceneVariant::Crossing => Rgb::new(0.53, 0.81, 0.92),
        }
    }

    fn has_decorations(&self) -> bool {
        match self {
            SceneVariant::Plain => false,
            SceneVariant::Crossing => true,
        }
    }
}

/// Turns a simulation state into an ordered list of draw calls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scene {
    variant: SceneVariant,
}

impl Scene {
    pub fn new(variant: SceneVariant) -> Self {
        Scene { variant }
    }

    pub fn variant(&self) -> SceneVariant {
        self.variant
    }

    pub fn background(&self) -> Rgb {
        self.variant.background()
    }

    /// Back to front: road, markings, sidewalks, crossing and trees, cars, light.
    pub fn draw(&self, state: &SimulationState) -> Vec<Primitive> {
        let decorated = self.variant.has_decorations();

        let mut primitives = vec![RoadRenderer::road_surface()];
        primitives.extend(RoadRenderer::lane_dividers());
        primitives.extend(RoadRenderer::sidewalks());

        if decorated {
            primitives.extend(RoadRenderer::zebra_stripes(ZEBRA_CROSSING_X));
            primitives.extend(ROADSIDE_TREES.iter().flat_map(|tree| tree.primitives()));
        }

        for car in &state.cars {
            primitives.extend(car_primitives(car, decorated));
        }

        primitives.extend(traffic_light_primitives(
            TRAFFIC_LIGHT_X,
            TRAFFIC_LIGHT_Y,
            state.phase(),
        ));

        primitives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rgb;
    use crate::traffic_light::TrafficLight;
    use crate::vehicle::Car;

    #[test]
    fn crossing_adds_stripes_trees_and_car_details() {
        let state = SimulationState::new();
        let plain = Scene::new(SceneVariant::Plain).draw(&state);
        let crossing = Scene::new(SceneVariant::Crossing).draw(&state);
        // 5 stripes, 2 trees of 2 parts, 2 windows, 2 wheels
        assert_eq!(crossing.len() - plain.len(), 5 + 4 + 4);
    }

    #[test]
    fn road_is_drawn_first_and_light_last() {
        let state = SimulationState::new();
        let primitives = Scene::new(SceneVariant::Crossing).draw(&state);
        assert_eq!(primitives[0], RoadRenderer::road_surface());
        let last_four = &primitives[primitives.len() - 4..];
        assert_eq!(
            last_four,
            &traffic_light_primitives(TRAFFIC_LIGHT_X, TRAFFIC_LIGHT_Y, state.phase())
        );
    }

    #[test]
    fn cars_are_drawn_in_sequence_order() {
        let red = Rgb::new(0.9, 0.1, 0.1);
        let state = SimulationState::with_cars(
            TrafficLight::new(),
            vec![Car::new(-1.0, CAR_LANE_Y, Car::BLUE), Car::new(0.0, CAR_LANE_Y, red)],
        );
        let primitives = Scene::new(SceneVariant::Plain).draw(&state);
        let bodies: Vec<Rgb> = primitives
            .iter()
            .map(|p| p.color())
            .filter(|c| *c == Car::BLUE || *c == red)
            .collect();
        assert_eq!(bodies, vec![Car::BLUE, red]);
    }
}
