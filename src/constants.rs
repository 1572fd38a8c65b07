// Physics tuning (game-balance units, not SI)
pub const GRAVITATIONAL_CONSTANT: f64 = 1.0;
pub const PLANET_MASS: f64 = 2000.0;
pub const PLANET_X: f64 = 400.0; // px
pub const PLANET_Y: f64 = 320.0; // px
pub const SATELLITE_MASS: f64 = 1.0;

// Cosmetic planet spin, 0.01 rad worth of degrees per tick
pub const PLANET_ROTATION_STEP: f64 = 0.572_957_795_130_823_2; // deg/tick

// Thrusters
pub const STARTING_FUEL: f64 = 100.0;
pub const THRUST_DELTA_V: f64 = 0.05; // px/tick per burn
pub const FUEL_COST: f64 = 2.0; // per burn

// Spawn box and initial horizontal speed
pub const SPAWN_X_MIN: f64 = 315.0;
pub const SPAWN_X_MAX: f64 = 425.0;
pub const SPAWN_Y_MIN: f64 = 70.0;
pub const SPAWN_Y_MAX: f64 = 180.0;
pub const INITIAL_SPEED: f64 = 3.0; // px/tick

// Sprite art points "up", headings are measured from the +y axis
pub const HEADING_OFFSET_DEGREES: f64 = -90.0;

// Mission limits
pub const ATMOSPHERE_ALTITUDE: f64 = 68.0;
pub const TARGET_ALTITUDE_MIN: f64 = 69.0;
pub const TARGET_ALTITUDE_MAX: f64 = 120.0;
pub const TARGET_ECCENTRICITY: f64 = 0.05;
pub const INITIAL_ECCENTRICITY: f64 = 1.0;

// Simulation Parameters
pub const TICK_RATE: u32 = 60; // ticks/s
pub const ECCENTRICITY_WINDOW_SECONDS: u32 = 5;
pub const INTRO_SECONDS: u32 = 15;
pub const MAX_PATH_SEGMENTS: usize = 20_000;
pub const MAX_WINDOW_TICKS: u64 = 3_600 * 60; // one hour at 60 ticks/s
