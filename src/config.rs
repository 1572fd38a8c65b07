//! Tunable mission parameters.
//!
//! Every field has a default taken from [`crate::constants`], so a TOML file only
//! needs to name the values it changes.

use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissionConfig {
    pub gravitational_constant: f64,
    pub planet_mass: f64,
    pub planet_position: Vector2D,
    pub planet_rotation_step: f64,
    pub satellite_mass: f64,
    pub starting_fuel: f64,
    pub thrust_delta_v: f64,
    pub fuel_cost: f64,
    pub initial_speed: f64,
    pub spawn_x: [f64; 2],
    pub spawn_y: [f64; 2],
    pub atmosphere_altitude: f64,
    pub target_altitude_min: f64,
    pub target_altitude_max: f64,
    pub target_eccentricity: f64,
    pub initial_eccentricity: f64,
    pub eccentricity_window_seconds: u32,
    pub tick_rate: u32,
    pub intro_seconds: u32,
    pub max_path_segments: usize,
}

impl Default for MissionConfig {
    fn default() -> Self {
        MissionConfig {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            planet_mass: PLANET_MASS,
            planet_position: Vector2D::new(PLANET_X, PLANET_Y),
            planet_rotation_step: PLANET_ROTATION_STEP,
            satellite_mass: SATELLITE_MASS,
            starting_fuel: STARTING_FUEL,
            thrust_delta_v: THRUST_DELTA_V,
            fuel_cost: FUEL_COST,
            initial_speed: INITIAL_SPEED,
            spawn_x: [SPAWN_X_MIN, SPAWN_X_MAX],
            spawn_y: [SPAWN_Y_MIN, SPAWN_Y_MAX],
            atmosphere_altitude: ATMOSPHERE_ALTITUDE,
            target_altitude_min: TARGET_ALTITUDE_MIN,
            target_altitude_max: TARGET_ALTITUDE_MAX,
            target_eccentricity: TARGET_ECCENTRICITY,
            initial_eccentricity: INITIAL_ECCENTRICITY,
            eccentricity_window_seconds: ECCENTRICITY_WINDOW_SECONDS,
            tick_rate: TICK_RATE,
            intro_seconds: INTRO_SECONDS,
            max_path_segments: MAX_PATH_SEGMENTS,
        }
    }
}

impl MissionConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: MissionConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn window_ticks(&self) -> u64 {
        u64::from(self.eccentricity_window_seconds) * u64::from(self.tick_rate)
    }

    pub fn intro_ticks(&self) -> u64 {
        u64::from(self.intro_seconds) * u64::from(self.tick_rate)
    }

    pub fn ticks_in(&self, seconds: u64) -> Result<u64, SimulationError> {
        seconds
            .checked_mul(u64::from(self.tick_rate))
            .ok_or_else(|| invalid(format!("{seconds} s at {} ticks/s overflows", self.tick_rate)))
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let values = [
            ("gravitational_constant", self.gravitational_constant),
            ("planet_mass", self.planet_mass),
            ("planet_position.x", self.planet_position.x),
            ("planet_position.y", self.planet_position.y),
            ("planet_rotation_step", self.planet_rotation_step),
            ("satellite_mass", self.satellite_mass),
            ("starting_fuel", self.starting_fuel),
            ("thrust_delta_v", self.thrust_delta_v),
            ("fuel_cost", self.fuel_cost),
            ("initial_speed", self.initial_speed),
            ("spawn_x[0]", self.spawn_x[0]),
            ("spawn_x[1]", self.spawn_x[1]),
            ("spawn_y[0]", self.spawn_y[0]),
            ("spawn_y[1]", self.spawn_y[1]),
            ("atmosphere_altitude", self.atmosphere_altitude),
            ("target_altitude_min", self.target_altitude_min),
            ("target_altitude_max", self.target_altitude_max),
            ("target_eccentricity", self.target_eccentricity),
            ("initial_eccentricity", self.initial_eccentricity),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be a finite number, got {value}")));
            }
        }

        let positive = [
            ("gravitational_constant", self.gravitational_constant),
            ("planet_mass", self.planet_mass),
            ("satellite_mass", self.satellite_mass),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("starting_fuel", self.starting_fuel),
            ("thrust_delta_v", self.thrust_delta_v),
            ("fuel_cost", self.fuel_cost),
            ("initial_speed", self.initial_speed),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        if self.tick_rate == 0 {
            return Err(invalid("tick_rate must be at least 1".to_string()));
        }
        if self.eccentricity_window_seconds == 0 {
            return Err(invalid(
                "eccentricity_window_seconds must be at least 1".to_string(),
            ));
        }
        if self.window_ticks() > MAX_WINDOW_TICKS {
            return Err(invalid(format!(
                "eccentricity window of {} ticks exceeds {MAX_WINDOW_TICKS}",
                self.window_ticks()
            )));
        }

        for (name, [low, high]) in [("spawn_x", self.spawn_x), ("spawn_y", self.spawn_y)] {
            if !(low < high) {
                return Err(invalid(format!("{name} range [{low}, {high}) is empty")));
            }
            if !(high - low).is_finite() {
                return Err(invalid(format!("{name} range [{low}, {high}) is too wide")));
            }
        }

        if !(self.atmosphere_altitude >= 0.0) {
            return Err(invalid("atmosphere_altitude must not be negative".to_string()));
        }
        if self.target_altitude_min > self.target_altitude_max {
            return Err(invalid(format!(
                "target altitude band {}-{} is inverted",
                self.target_altitude_min, self.target_altitude_max
            )));
        }
        if self.target_altitude_min <= self.atmosphere_altitude {
            return Err(invalid(format!(
                "target altitude band starts at {} inside the atmosphere ({})",
                self.target_altitude_min, self.atmosphere_altitude
            )));
        }
        if !(self.target_eccentricity > 0.0 && self.target_eccentricity <= 1.0) {
            return Err(invalid(format!(
                "target_eccentricity must be in (0, 1], got {}",
                self.target_eccentricity
            )));
        }
        if !(0.0..=1.0).contains(&self.initial_eccentricity) {
            return Err(invalid(format!(
                "initial_eccentricity must be in [0, 1], got {}",
                self.initial_eccentricity
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> SimulationError {
    SimulationError::InvalidConfig(message)
}
