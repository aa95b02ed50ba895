use serde::Serialize;

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DEFAULT_FRONTAL_AREA, DEFAULT_INITIAL_HEIGHT, DEFAULT_INITIAL_SPEED,
    DEFAULT_LAUNCH_ANGLE_DEG, DEFAULT_MASS, DEFAULT_WIND_SPEED, GRAVITY, MAX_SIMULATION_TIME,
    SPHERE_DRAG_COEFFICIENT, TIME_STEP,
};
use crate::errors::ValidationError;

/// How the step that first reaches the ground reports the landing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LandingMode {
    /// Keep the sample where ground contact was detected and set `y` to 0.
    #[default]
    Clamp,
    /// Move the final sample back to the linear estimate of the y = 0 crossing.
    Interpolate,
}

/// Launch conditions and environment for a single run.
///
/// The angle is stored in radians; use [`SimulationParameters::from_degrees`]
/// or [`SimulationParameters::with_launch_angle_degrees`] for degree input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationParameters {
    pub initial_speed: f64,
    pub launch_angle: f64,
    pub mass: f64,
    pub frontal_area: f64,
    pub drag_coefficient: f64,
    pub wind_speed: f64,
    pub gravity: f64,
    pub air_density: f64,
    pub time_step: f64,
    pub max_simulated_time: f64,
    pub initial_height: f64,
    pub landing_mode: LandingMode,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            initial_speed: DEFAULT_INITIAL_SPEED,
            launch_angle: DEFAULT_LAUNCH_ANGLE_DEG.to_radians(),
            mass: DEFAULT_MASS,
            frontal_area: DEFAULT_FRONTAL_AREA,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            wind_speed: DEFAULT_WIND_SPEED,
            gravity: GRAVITY,
            air_density: AIR_DENSITY_SEA_LEVEL,
            time_step: TIME_STEP,
            max_simulated_time: MAX_SIMULATION_TIME,
            initial_height: DEFAULT_INITIAL_HEIGHT,
            landing_mode: LandingMode::Clamp,
        }
    }
}

impl SimulationParameters {
    pub fn from_degrees(initial_speed: f64, launch_angle_deg: f64) -> Self {
        SimulationParameters {
            initial_speed,
            launch_angle: launch_angle_deg.to_radians(),
            ..Default::default()
        }
    }

    pub fn with_launch_angle_degrees(mut self, degrees: f64) -> Self {
        self.launch_angle = degrees.to_radians();
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_frontal_area(mut self, frontal_area: f64) -> Self {
        self.frontal_area = frontal_area;
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_max_simulated_time(mut self, max_simulated_time: f64) -> Self {
        self.max_simulated_time = max_simulated_time;
        self
    }

    pub fn with_initial_height(mut self, initial_height: f64) -> Self {
        self.initial_height = initial_height;
        self
    }

    pub fn with_landing_mode(mut self, landing_mode: LandingMode) -> Self {
        self.landing_mode = landing_mode;
        self
    }

    /// Same parameters with drag switched off (Cd = 0, no wind).
    pub fn without_drag(self) -> Self {
        self.with_drag_coefficient(0.0).with_wind_speed(0.0)
    }

    pub fn launch_angle_degrees(&self) -> f64 {
        self.launch_angle.to_degrees()
    }

    /// Upper bound on the number of steps a run can take before it terminates.
    pub fn step_budget(&self) -> u64 {
        (self.max_simulated_time / self.time_step).ceil() as u64 + 1
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("initial_speed", self.initial_speed),
            ("launch_angle", self.launch_angle),
            ("mass", self.mass),
            ("frontal_area", self.frontal_area),
            ("drag_coefficient", self.drag_coefficient),
            ("wind_speed", self.wind_speed),
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("time_step", self.time_step),
            ("max_simulated_time", self.max_simulated_time),
            ("initial_height", self.initial_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("mass", self.mass),
            ("time_step", self.time_step),
            ("max_simulated_time", self.max_simulated_time),
        ] {
            if value <= 0.0 {
                return Err(ValidationError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("initial_speed", self.initial_speed),
            ("frontal_area", self.frontal_area),
            ("drag_coefficient", self.drag_coefficient),
            ("air_density", self.air_density),
        ] {
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }

        Ok(())
    }
}
