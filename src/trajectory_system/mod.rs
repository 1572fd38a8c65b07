pub mod flight_path;
pub mod orbit_evaluator;
