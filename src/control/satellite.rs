use rand::Rng;

use crate::config::MissionConfig;
use crate::control::input::ThrustDirection;
use crate::control::planet::Planet;
use crate::trajectory_system::flight_path::PathSegment;
use crate::utils::vector2d::Vector2D;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CraftState {
    Alive,
    FuelDepleted,
    Crashed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thruster {
    pub delta_v: f64,
    pub fuel_cost: f64,
}

impl Thruster {
    pub fn new(delta_v: f64, fuel_cost: f64) -> Self {
        Thruster { delta_v, fuel_cost }
    }
}

#[derive(Debug, Clone)]
pub struct Satellite {
    pub position: Vector2D,
    pub velocity: Vector2D, // px/tick, y grows downward
    mass: f64,
    fuel: f64,
    thruster: Thruster,
    distance: f64,
    heading: f64,
    state: CraftState,
}

impl Satellite {
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        fuel: f64,
        thruster: Thruster,
    ) -> Self {
        Satellite {
            position,
            velocity,
            mass,
            fuel: fuel.max(0.0),
            thruster,
            distance: 0.0,
            heading: 0.0,
            state: CraftState::Alive,
        }
    }

    /// Places a fresh satellite somewhere in the configured spawn box, drifting
    /// horizontally in a random direction, already located relative to `planet`.
    pub fn spawn<R: Rng + ?Sized>(config: &MissionConfig, planet: &Planet, rng: &mut R) -> Self {
        let position = Vector2D::new(
            rng.gen_range(config.spawn_x[0]..config.spawn_x[1]),
            rng.gen_range(config.spawn_y[0]..config.spawn_y[1]),
        );
        // Negative drift gives a counterclockwise orbit
        let dx = if rng.gen_bool(0.5) {
            -config.initial_speed
        } else {
            config.initial_speed
        };

        let mut satellite = Satellite::new(
            position,
            Vector2D::new(dx, 0.0),
            config.satellite_mass,
            config.starting_fuel,
            Thruster::new(config.thrust_delta_v, config.fuel_cost),
        );
        satellite.locate(planet);
        satellite
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn state(&self) -> CraftState {
        self.state
    }

    pub fn is_frozen(&self) -> bool {
        self.state != CraftState::Alive
    }

    /// Fires one thruster burn. Returns whether the burn happened; with an empty
    /// tank nothing changes and no fuel is charged.
    pub fn apply_thrust(&mut self, direction: ThrustDirection) -> bool {
        if self.fuel <= 0.0 || self.is_frozen() {
            return false;
        }

        let dv = self.thruster.delta_v;
        match direction {
            ThrustDirection::Left => self.velocity.x -= dv,
            ThrustDirection::Right => self.velocity.x += dv,
            ThrustDirection::Up => self.velocity.y -= dv,
            ThrustDirection::Down => self.velocity.y += dv,
        }
        self.fuel = (self.fuel - self.thruster.fuel_cost).max(0.0);
        true
    }

    pub fn add_velocity(&mut self, delta: Vector2D) -> Vector2D {
        if self.is_frozen() {
            return Vector2D::ZERO;
        }
        self.velocity += delta;
        delta
    }

    pub fn integrate(&mut self) -> PathSegment {
        let from = self.position;
        self.position += self.velocity;
        PathSegment::new(from, self.position)
    }

    pub fn locate(&mut self, planet: &Planet) {
        let center = planet.position();
        self.distance = self.position.distance_to(&center);
        self.heading = self.position.heading_to(&center);
    }

    pub fn freeze(&mut self, state: CraftState) {
        self.state = state;
        self.velocity = Vector2D::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_satellite(fuel: f64) -> Satellite {
        Satellite::new(
            Vector2D::new(400.0, 220.0),
            Vector2D::new(3.0, 0.0),
            1.0,
            fuel,
            Thruster::new(0.05, 2.0),
        )
    }

    #[test]
    fn test_thrust_directions() {
        let mut satellite = test_satellite(100.0);

        assert!(satellite.apply_thrust(ThrustDirection::Right));
        assert_abs_diff_eq!(satellite.velocity.x, 3.05, epsilon = 1e-12);
        assert!(satellite.apply_thrust(ThrustDirection::Left));
        assert!(satellite.apply_thrust(ThrustDirection::Left));
        assert_abs_diff_eq!(satellite.velocity.x, 2.95, epsilon = 1e-12);

        // Screen y points down, so "up" shrinks dy
        assert!(satellite.apply_thrust(ThrustDirection::Up));
        assert_abs_diff_eq!(satellite.velocity.y, -0.05, epsilon = 1e-12);
        assert!(satellite.apply_thrust(ThrustDirection::Down));
        assert!(satellite.apply_thrust(ThrustDirection::Down));
        assert_abs_diff_eq!(satellite.velocity.y, 0.05, epsilon = 1e-12);

        assert_abs_diff_eq!(satellite.fuel(), 88.0, epsilon = 1e-12);
    }

    #[test]
    fn test_thrust_with_empty_tank_is_noop() {
        let mut satellite = test_satellite(2.0);

        assert!(satellite.apply_thrust(ThrustDirection::Right));
        assert_eq!(satellite.fuel(), 0.0);
        let velocity = satellite.velocity;

        assert!(!satellite.apply_thrust(ThrustDirection::Right));
        assert_eq!(satellite.velocity, velocity);
        assert_eq!(satellite.fuel(), 0.0);
    }

    #[test]
    fn test_fuel_clamps_at_zero() {
        let mut satellite = test_satellite(1.0);
        assert!(satellite.apply_thrust(ThrustDirection::Up));
        assert_eq!(satellite.fuel(), 0.0);
    }

    #[test]
    fn test_integrate_traces_segment() {
        let mut satellite = test_satellite(100.0);
        satellite.velocity = Vector2D::new(1.5, -2.0);

        let segment = satellite.integrate();

        assert_eq!(segment.from, Vector2D::new(400.0, 220.0));
        assert_eq!(segment.to, Vector2D::new(401.5, 218.0));
        assert_eq!(satellite.position, segment.to);
    }

    #[test]
    fn test_locate_is_idempotent() {
        let planet = Planet::new(Vector2D::new(400.0, 320.0), 2000.0, 1.0);
        let mut satellite = test_satellite(100.0);
        satellite.position = Vector2D::new(350.0, 200.0);

        satellite.locate(&planet);
        let (distance, heading) = (satellite.distance(), satellite.heading());
        satellite.locate(&planet);

        assert_eq!(satellite.distance(), distance);
        assert_eq!(satellite.heading(), heading);
        assert_abs_diff_eq!(distance, 130.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frozen_craft_ignores_velocity_changes() {
        let mut satellite = test_satellite(100.0);
        satellite.freeze(CraftState::Crashed);

        assert_eq!(satellite.velocity, Vector2D::ZERO);
        assert_eq!(satellite.add_velocity(Vector2D::new(1.0, 1.0)), Vector2D::ZERO);
        assert!(!satellite.apply_thrust(ThrustDirection::Down));
        assert_eq!(satellite.fuel(), 100.0);

        let segment = satellite.integrate();
        assert_eq!(segment.from, segment.to);
    }

    #[test]
    fn test_spawn_is_deterministic_and_in_bounds() {
        let config = MissionConfig::default();
        let planet = Planet::from_config(&config);

        let first = Satellite::spawn(&config, &planet, &mut StdRng::seed_from_u64(7));
        let second = Satellite::spawn(&config, &planet, &mut StdRng::seed_from_u64(7));
        assert_eq!(first.position, second.position);
        assert_eq!(first.velocity, second.velocity);

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let satellite = Satellite::spawn(&config, &planet, &mut rng);
            assert!((315.0..425.0).contains(&satellite.position.x));
            assert!((70.0..180.0).contains(&satellite.position.y));
            assert_eq!(satellite.velocity.x.abs(), 3.0);
            assert_eq!(satellite.velocity.y, 0.0);
            assert_eq!(satellite.fuel(), 100.0);
            assert_abs_diff_eq!(
                satellite.distance(),
                satellite.position.distance_to(&planet.position()),
                epsilon = 1e-12
            );
        }
    }
}
