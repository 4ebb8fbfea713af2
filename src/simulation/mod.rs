pub mod state;

pub use state::{SimulationState, TickReport};
