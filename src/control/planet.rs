use crate::config::MissionConfig;
use crate::control::satellite::Satellite;
use crate::utils::vector2d::Vector2D;

/// The body the satellite orbits. It never moves; only its artwork spins.
#[derive(Clone, Debug)]
pub struct Planet {
    position: Vector2D,
    mass: f64,
    gravitational_constant: f64,
    rotation_angle: f64,
    rotation_step: f64,
}

impl Planet {
    pub fn new(position: Vector2D, mass: f64, gravitational_constant: f64) -> Self {
        Planet {
            position,
            mass,
            gravitational_constant,
            rotation_angle: 0.0,
            rotation_step: 0.0,
        }
    }

    pub fn from_config(config: &MissionConfig) -> Self {
        let mut planet = Planet::new(
            config.planet_position,
            config.planet_mass,
            config.gravitational_constant,
        );
        planet.rotation_step = config.planet_rotation_step;
        planet
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Velocity change (px/tick) gravity would impart on a craft of `craft_mass`
    /// sitting at `craft_position`.
    ///
    /// The magnitude is `G * m * M / d²`, pointed at the planet's center. At zero
    /// distance the direction is undefined and no pull is applied.
    pub fn pull_on(&self, craft_position: Vector2D, craft_mass: f64) -> Vector2D {
        let offset = self.position - craft_position;
        let distance = offset.magnitude();
        match offset.normalize() {
            Some(direction) => {
                let force =
                    self.gravitational_constant * craft_mass * self.mass / distance.powi(2);
                force * direction
            }
            None => Vector2D::ZERO,
        }
    }

    /// Pulls the satellite toward the planet. Returns the velocity change applied,
    /// which is zero once the satellite is frozen by a failed mission.
    pub fn apply_gravity(&self, satellite: &mut Satellite) -> Vector2D {
        let delta = self.pull_on(satellite.position, satellite.mass());
        satellite.add_velocity(delta)
    }

    pub fn rotate(&mut self) {
        self.rotation_angle = (self.rotation_angle + self.rotation_step) % 360.0;
    }
}
