use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MissionConfig;
use crate::control::input::{Command, TickInput};
use crate::control::mission::{Mission, MissionLimits, MissionStatus};
use crate::control::planet::Planet;
use crate::control::satellite::{CraftState, Satellite};
use crate::errors::SimulationError;
use crate::presentation::{
    Color, Presenter, CONTROLS_POSITION, CONTROLS_TEXT, FAILURE_POSITION, INTRO_POSITION,
    INTRO_TEXT, RULES_POSITION, RULES_TEXT,
};
use crate::trajectory_system::flight_path::{FlightPath, PathSegment};
use crate::trajectory_system::orbit_evaluator::OrbitEvaluator;
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub altitude: f64,
    pub heading: f64,
    pub fuel: f64,
    pub eccentricity: f64,
    pub status: MissionStatus,
    pub craft_state: CraftState,
    pub mapping_enabled: bool,
    pub planet_rotation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub burns: u32,
    pub eccentricity_update: Option<f64>,
    pub transition: Option<MissionStatus>,
    pub segment: PathSegment,
}

pub struct Simulation<R: Rng = StdRng> {
    config: MissionConfig,
    planet: Planet,
    satellite: Satellite,
    evaluator: OrbitEvaluator,
    mission: Mission,
    path: FlightPath,
    tick: u64,
    mapping_enabled: bool,
    thrusting: bool,
    running: bool,
    restart_requested: bool,
    rng: R,
}

impl Simulation<StdRng> {
    pub fn with_seed(config: MissionConfig, seed: u64) -> Result<Self, SimulationError> {
        Simulation::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(config: MissionConfig, mut rng: R) -> Result<Self, SimulationError> {
        config.validate()?;

        let planet = Planet::from_config(&config);
        let satellite = Satellite::spawn(&config, &planet, &mut rng);
        info!(
            "mission start: satellite at ({:.0}, {:.0}), dx {:+.1}, altitude {:.1}",
            satellite.position.x,
            satellite.position.y,
            satellite.velocity.x,
            satellite.distance()
        );

        Ok(Simulation {
            evaluator: OrbitEvaluator::new(config.window_ticks(), config.initial_eccentricity),
            mission: Mission::new(MissionLimits::from_config(&config)),
            path: FlightPath::new(config.max_path_segments),
            planet,
            satellite,
            tick: 0,
            mapping_enabled: false,
            thrusting: false,
            running: true,
            restart_requested: false,
            config,
            rng,
        })
    }

    pub fn with_satellite(mut self, mut satellite: Satellite) -> Self {
        satellite.locate(&self.planet);
        self.satellite = satellite;
        self
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    pub fn evaluator(&self) -> &OrbitEvaluator {
        &self.evaluator
    }

    pub fn path(&self) -> &FlightPath {
        &self.path
    }

    pub fn status(&self) -> MissionStatus {
        self.mission.status()
    }

    pub fn eccentricity(&self) -> f64 {
        self.evaluator.eccentricity()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn mapping_enabled(&self) -> bool {
        self.mapping_enabled
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            position: self.satellite.position,
            velocity: self.satellite.velocity,
            altitude: self.satellite.distance(),
            heading: self.satellite.heading(),
            fuel: self.satellite.fuel(),
            eccentricity: self.evaluator.eccentricity(),
            status: self.mission.status(),
            craft_state: self.satellite.state(),
            mapping_enabled: self.mapping_enabled,
            planet_rotation: self.planet.rotation_angle(),
        }
    }

    /// One fixed-timestep update: sample, input, gravity, eccentricity window,
    /// integration, mission status, then presentation.
    pub fn tick<P: Presenter + ?Sized>(
        &mut self,
        input: &TickInput,
        presenter: &mut P,
    ) -> TickReport {
        self.tick += 1;
        self.evaluator.record_sample(self.satellite.distance());

        for command in &input.commands {
            self.handle_command(*command, presenter);
        }
        let burns = self.fire_thrusters(input, presenter);

        self.satellite.locate(&self.planet);
        self.planet.apply_gravity(&mut self.satellite);

        let eccentricity_update = self.evaluator.maybe_recompute(self.tick);

        let segment = self.satellite.integrate();
        self.path.record(segment);
        presenter.draw_path_segment(&segment);

        let transition = self
            .mission
            .evaluate(&mut self.satellite, self.evaluator.eccentricity());
        if transition.is_some_and(|status| status.is_terminal()) {
            presenter.set_craft_visual(self.satellite.state());
        }

        if self.tick <= self.config.intro_ticks() {
            presenter.render_status_message(&INTRO_TEXT, Color::WHITE, INTRO_POSITION);
        }
        presenter.render_status_message(&RULES_TEXT, Color::LT_BLUE, RULES_POSITION);
        presenter.render_status_message(&CONTROLS_TEXT, Color::LT_BLUE, CONTROLS_POSITION);
        if let Some(message) = self.mission.status().failure_message() {
            presenter.render_status_message(&[message], Color::RED, FAILURE_POSITION);
        }

        self.planet.rotate();
        presenter.present(&self.snapshot());

        let report = TickReport {
            tick: self.tick,
            burns,
            eccentricity_update,
            transition,
            segment,
        };

        if self.restart_requested {
            self.restart(presenter);
        }
        report
    }

    /// Starts a fresh mission with a new random satellite and resets what
    /// `presenter` shows: trail, craft imagery, mapping view and thrust sound.
    pub fn restart<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        if self.satellite.state() != CraftState::Alive {
            presenter.set_craft_visual(CraftState::Alive);
        }
        if self.mapping_enabled {
            presenter.toggle_mapping_view(false);
        }
        if self.thrusting {
            presenter.stop_thrust_sound();
        }
        presenter.clear_path();

        self.satellite = Satellite::spawn(&self.config, &self.planet, &mut self.rng);
        self.evaluator =
            OrbitEvaluator::new(self.config.window_ticks(), self.config.initial_eccentricity);
        self.mission = Mission::new(MissionLimits::from_config(&self.config));
        self.path.clear();
        self.tick = 0;
        self.mapping_enabled = false;
        self.thrusting = false;
        self.restart_requested = false;
        info!(
            "mission restarted: satellite at ({:.0}, {:.0}), dx {:+.1}",
            self.satellite.position.x, self.satellite.position.y, self.satellite.velocity.x
        );
    }

    fn handle_command<P: Presenter + ?Sized>(&mut self, command: Command, presenter: &mut P) {
        match command {
            Command::ClearPath => {
                self.path.clear();
                presenter.clear_path();
            }
            Command::ToggleMapping => {
                if self.mission.status() == MissionStatus::OrbitAchieved {
                    self.mapping_enabled = !self.mapping_enabled;
                    presenter.toggle_mapping_view(self.mapping_enabled);
                    info!("mapping view toggled to {}", self.mapping_enabled);
                } else {
                    debug!("mapping view locked until orbit is achieved");
                }
            }
            Command::ExitFullscreen => presenter.exit_fullscreen(),
            Command::Restart => self.restart_requested = true,
            Command::Quit => {
                info!("quit requested at tick {}", self.tick);
                self.running = false;
            }
        }
    }

    fn fire_thrusters<P: Presenter + ?Sized>(
        &mut self,
        input: &TickInput,
        presenter: &mut P,
    ) -> u32 {
        let mut burns = 0;
        for direction in input.thrust.held() {
            if self.satellite.apply_thrust(direction) {
                burns += 1;
            }
        }

        if burns > 0 {
            presenter.play_thrust_sound();
            self.thrusting = true;
        } else if self.thrusting {
            presenter.stop_thrust_sound();
            self.thrusting = false;
        }
        burns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::input::{ThrustDirection, ThrustKeys};
    use crate::control::satellite::Thruster;
    use crate::presentation::NullPresenter;
    use approx::assert_abs_diff_eq;

    fn satellite_at(position: Vector2D, velocity: Vector2D, fuel: f64) -> Satellite {
        Satellite::new(position, velocity, 1.0, fuel, Thruster::new(0.05, 2.0))
    }

    #[test]
    fn test_seeded_starts_match() {
        let a = Simulation::with_seed(MissionConfig::default(), 11).unwrap();
        let b = Simulation::with_seed(MissionConfig::default(), 11).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.tick_count(), 0);
        assert!(a.is_running());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MissionConfig {
            planet_mass: 0.0,
            ..MissionConfig::default()
        };
        assert!(matches!(
            Simulation::with_seed(config, 1),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_tick_applies_gravity_then_integrates() {
        let mut sim = Simulation::with_seed(MissionConfig::default(), 1)
            .unwrap()
            .with_satellite(satellite_at(
                Vector2D::new(400.0, 220.0),
                Vector2D::new(3.0, 0.0),
                100.0,
            ));

        let report = sim.tick(&TickInput::idle(), &mut NullPresenter);

        // Pull of 2000 / 100² = 0.2 toward the planet, added before the move
        assert_abs_diff_eq!(sim.satellite().velocity.y, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(report.segment.to.x, 403.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.segment.to.y, 220.2, epsilon = 1e-12);
        assert_eq!(sim.path().len(), 1);
        assert_eq!(report.burns, 0);
    }

    #[test]
    fn test_multiple_directions_fire_in_one_tick() {
        let mut sim = Simulation::with_seed(MissionConfig::default(), 1).unwrap();
        let input = TickInput {
            thrust: ThrustKeys {
                left: true,
                up: true,
                ..ThrustKeys::none()
            },
            commands: Vec::new(),
        };

        let report = sim.tick(&input, &mut NullPresenter);

        assert_eq!(report.burns, 2);
        assert_abs_diff_eq!(sim.satellite().fuel(), 96.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mapping_locked_until_orbit_achieved() {
        let mut sim = Simulation::with_seed(MissionConfig::default(), 3).unwrap();
        sim.tick(&TickInput::command(Command::ToggleMapping), &mut NullPresenter);
        assert!(!sim.mapping_enabled());
    }

    #[test]
    fn test_quit_finishes_current_tick() {
        let mut sim = Simulation::with_seed(MissionConfig::default(), 3).unwrap();
        let report = sim.tick(&TickInput::command(Command::Quit), &mut NullPresenter);
        assert!(!sim.is_running());
        assert_eq!(report.tick, 1);
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn test_restart_resets_mission() {
        let mut sim = Simulation::with_seed(MissionConfig::default(), 5).unwrap();
        for _ in 0..10 {
            sim.tick(&TickInput::thrusting(ThrustDirection::Down), &mut NullPresenter);
        }
        assert_eq!(sim.satellite().fuel(), 80.0);

        sim.tick(&TickInput::command(Command::Restart), &mut NullPresenter);

        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.satellite().fuel(), 100.0);
        assert_eq!(sim.status(), MissionStatus::Nominal);
        assert_eq!(sim.eccentricity(), 1.0);
        assert!(sim.path().is_empty());
        assert_eq!(sim.evaluator().sample_count(), 0);
    }
}
