pub mod clock;
pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod presentation;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use clock::FixedStepClock;
pub use config::MissionConfig;
pub use control::input::{Command, ThrustDirection, ThrustKeys, TickInput};
pub use control::mission::{Mission, MissionLimits, MissionStatus};
pub use control::planet::Planet;
pub use control::satellite::{CraftState, Satellite, Thruster};
pub use errors::SimulationError;
pub use presentation::{Color, LogPresenter, NullPresenter, Presenter};
pub use simulation::{Simulation, Snapshot, TickReport};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::flight_path::{FlightPath, PathSegment};
pub use trajectory_system::orbit_evaluator::{eccentricity_from, OrbitEvaluator};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
