// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

// Projectile Defaults
pub const DEFAULT_INITIAL_SPEED: f64 = 30.0; // m/s
pub const DEFAULT_LAUNCH_ANGLE_DEG: f64 = 45.0; // degrees
pub const DEFAULT_MASS: f64 = 1.0; // kg
pub const DEFAULT_FRONTAL_AREA: f64 = 0.01; // m²
pub const DEFAULT_WIND_SPEED: f64 = 0.0; // m/s, positive towards +x
pub const DEFAULT_INITIAL_HEIGHT: f64 = 0.0; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const MAX_SIMULATION_TIME: f64 = 300.0; // s
