use log::{debug, info, trace};
use serde::Serialize;

use crate::{
    errors::ValidationError,
    telemetry_system::record::{EnergyRecord, StateRecord},
    trajectory_system::{aerodynamics::Aerodynamics, kinematics::Kinematics},
    utils::vector2d::Vector2D,
};

use super::parameters::{LandingMode, SimulationParameters};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub enum TerminationReason {
    GroundContact,
    TimeLimit,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub enum ProjectileState {
    Running,
    Terminated(TerminationReason),
}

/// A point mass under gravity and quadratic drag, advanced one fixed step at a time.
///
/// Only [`Projectile::step`] mutates the state. Every reported quantity is
/// recomputed from the current position and velocity on each query.
#[derive(Debug, Clone)]
pub struct Projectile {
    params: SimulationParameters,
    aerodynamics: Aerodynamics,
    kinematics: Kinematics,
    state: ProjectileState,
}

impl Projectile {
    pub fn new(params: SimulationParameters) -> Result<Self, ValidationError> {
        params.validate()?;

        let aerodynamics = Aerodynamics::from_parameters(&params);
        let kinematics = Kinematics::new(&params);
        debug!(
            "Projectile created: v0 = {:.2} m/s, angle = {:.2}°, dt = {} s, max time = {} s, drag free = {}",
            params.initial_speed,
            params.launch_angle_degrees(),
            params.time_step,
            params.max_simulated_time,
            aerodynamics.is_drag_free()
        );

        Ok(Projectile {
            params,
            aerodynamics,
            kinematics,
            state: ProjectileState::Running,
        })
    }

    pub fn step(&mut self) {
        if self.is_terminal() {
            return;
        }

        let previous = self.kinematics;
        let acceleration = self.acceleration();
        self.kinematics.update(acceleration, self.params.time_step);
        trace!(
            "t = {:.4} s, x = {:.4} m, y = {:.4} m",
            self.kinematics.time,
            self.kinematics.position.x,
            self.kinematics.position.y
        );

        if self.kinematics.is_at_or_below_ground() {
            match self.params.landing_mode {
                LandingMode::Clamp => self.kinematics.clamp_to_ground(),
                LandingMode::Interpolate => self.kinematics.interpolate_ground_crossing(&previous),
            }
            self.terminate(TerminationReason::GroundContact);
        } else if self.kinematics.time >= self.params.max_simulated_time {
            self.terminate(TerminationReason::TimeLimit);
        }
    }

    /// Steps until the run terminates and returns how many steps were taken.
    pub fn run_to_completion(&mut self) -> u64 {
        let mut steps = 0;
        while !self.is_terminal() {
            self.step();
            steps += 1;
        }
        steps
    }

    fn terminate(&mut self, reason: TerminationReason) {
        self.state = ProjectileState::Terminated(reason);
        info!(
            "Simulation finished ({:?}) at t = {:.3} s, range = {:.3} m",
            reason, self.kinematics.time, self.kinematics.position.x
        );
    }

    pub fn drag_force(&self) -> Vector2D {
        self.aerodynamics.calculate_drag(self.kinematics.velocity)
    }

    fn weight(&self) -> Vector2D {
        Vector2D::new(0.0, -self.params.mass * self.params.gravity)
    }

    pub fn net_force(&self) -> Vector2D {
        self.drag_force() + self.weight()
    }

    pub fn acceleration(&self) -> Vector2D {
        self.net_force() / self.params.mass
    }

    pub fn speed(&self) -> f64 {
        self.kinematics.get_speed()
    }

    pub fn kinetic_energy(&self) -> f64 {
        let speed = self.speed();
        0.5 * self.params.mass * speed * speed
    }

    pub fn potential_energy(&self) -> f64 {
        self.params.mass * self.params.gravity * self.kinematics.get_height().max(0.0)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Collects the current sample and every derived quantity into one record.
    ///
    /// If a run has overflowed (huge speeds or drag with a coarse step), fields can
    /// be inf or NaN. A terminated projectile still reports the same bits on
    /// every call, but NaN fields make `==` between two such records false.
    pub fn snapshot(&self) -> StateRecord {
        let kinetic = self.kinetic_energy();
        let potential = self.potential_energy();
        StateRecord {
            time: self.kinematics.time,
            position: self.kinematics.position,
            velocity: self.kinematics.velocity,
            speed: self.speed(),
            acceleration: self.acceleration(),
            force: self.net_force(),
            energy: EnergyRecord {
                kinetic,
                potential,
                total: kinetic + potential,
            },
            terminal: self.is_terminal(),
        }
    }

    pub fn time(&self) -> f64 {
        self.kinematics.time
    }

    pub fn position(&self) -> Vector2D {
        self.kinematics.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.kinematics.velocity
    }

    pub fn state(&self) -> ProjectileState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, ProjectileState::Terminated(_))
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self.state {
            ProjectileState::Running => None,
            ProjectileState::Terminated(reason) => Some(reason),
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_new_derives_initial_velocity() {
        let projectile = Projectile::new(SimulationParameters::from_degrees(30.0, 45.0)).unwrap();

        assert_eq!(projectile.state(), ProjectileState::Running);
        assert_relative_eq!(projectile.velocity().x, 21.213203435596427, epsilon = 1e-9);
        assert_relative_eq!(projectile.velocity().y, 21.213203435596427, epsilon = 1e-9);
        assert_eq!(projectile.position(), Vector2D::new(0.0, 0.0));
        assert_eq!(projectile.time(), 0.0);
        assert_eq!(projectile.termination_reason(), None);
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        let err = Projectile::new(SimulationParameters::default().with_mass(0.0)).unwrap_err();
        assert_eq!(err.field(), "mass");
    }

    #[test]
    fn test_first_step_matches_hand_computation() {
        let params = SimulationParameters::from_degrees(10.0, 0.0)
            .with_initial_height(100.0)
            .with_drag_coefficient(0.5)
            .with_frontal_area(0.1)
            .with_air_density(1.0)
            .with_wind_speed(2.0)
            .with_mass(2.0)
            .with_gravity(10.0)
            .with_time_step(0.1);
        let mut projectile = Projectile::new(params).unwrap();

        // Relative velocity (8, 0): Fd = 0.5 * 1.0 * 0.5 * 0.1 * 64 = 1.6 N against +x.
        let force = projectile.net_force();
        assert_relative_eq!(force.x, -1.6, epsilon = EPSILON);
        assert_relative_eq!(force.y, -20.0, epsilon = EPSILON);

        let acceleration = projectile.acceleration();
        assert_relative_eq!(acceleration.x, -0.8, epsilon = EPSILON);
        assert_relative_eq!(acceleration.y, -10.0, epsilon = EPSILON);

        projectile.step();

        assert_relative_eq!(projectile.velocity().x, 9.92, epsilon = EPSILON);
        assert_relative_eq!(projectile.velocity().y, -1.0, epsilon = EPSILON);
        assert_relative_eq!(projectile.position().x, 0.992, epsilon = EPSILON);
        assert_relative_eq!(projectile.position().y, 99.9, epsilon = EPSILON);
        assert_relative_eq!(projectile.time(), 0.1, epsilon = EPSILON);
        assert!(!projectile.is_terminal());
    }

    #[test]
    fn test_energy_queries() {
        let params = SimulationParameters::from_degrees(4.0, 90.0)
            .with_mass(2.0)
            .with_gravity(10.0)
            .with_initial_height(3.0);
        let projectile = Projectile::new(params).unwrap();

        assert_relative_eq!(projectile.speed(), 4.0, epsilon = EPSILON);
        assert_relative_eq!(projectile.kinetic_energy(), 16.0, epsilon = 1e-9);
        assert_relative_eq!(projectile.potential_energy(), 60.0, epsilon = EPSILON);
        assert_relative_eq!(projectile.total_energy(), 76.0, epsilon = 1e-9);
    }

    #[test]
    fn test_potential_energy_ignores_below_ground_height() {
        let projectile =
            Projectile::new(SimulationParameters::default().with_initial_height(-5.0)).unwrap();
        assert_eq!(projectile.potential_energy(), 0.0);
    }

    #[test]
    fn test_ground_contact_clamps_height() {
        let mut projectile = Projectile::new(SimulationParameters::default()).unwrap();
        let steps = projectile.run_to_completion();

        assert!(steps > 1);
        assert_eq!(projectile.position().y, 0.0);
        assert_eq!(
            projectile.termination_reason(),
            Some(TerminationReason::GroundContact)
        );
        assert!(projectile.snapshot().terminal);
    }

    #[test]
    fn test_time_limit_terminates() {
        let params = SimulationParameters::from_degrees(30.0, 90.0)
            .with_time_step(0.1)
            .with_max_simulated_time(1.0);
        let mut projectile = Projectile::new(params).unwrap();

        let steps = projectile.run_to_completion();

        assert_eq!(
            projectile.state(),
            ProjectileState::Terminated(TerminationReason::TimeLimit)
        );
        assert!(steps <= projectile.parameters().step_budget());
        assert!(projectile.time() >= 1.0 - 1e-9);
        assert!(projectile.position().y > 0.0);
    }

    #[test]
    fn test_negative_initial_height_terminates_on_first_step() {
        let params = SimulationParameters::default().with_initial_height(-1.0);
        let mut projectile = Projectile::new(params).unwrap();

        projectile.step();

        assert!(projectile.is_terminal());
        assert_eq!(projectile.position().y, 0.0);
        assert_abs_diff_eq!(projectile.time(), 0.01, epsilon = EPSILON);
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let mut projectile = Projectile::new(SimulationParameters::default()).unwrap();
        projectile.run_to_completion();
        let final_record = projectile.snapshot();

        for _ in 0..10 {
            projectile.step();
        }

        assert_eq!(projectile.snapshot(), final_record);
        assert_eq!(projectile.run_to_completion(), 0);
    }

    #[test]
    fn test_snapshot_aggregates_queries() {
        let mut projectile =
            Projectile::new(SimulationParameters::default().with_wind_speed(-4.0)).unwrap();
        for _ in 0..25 {
            projectile.step();
        }

        let record = projectile.snapshot();
        assert_eq!(record.time, projectile.time());
        assert_eq!(record.position, projectile.position());
        assert_eq!(record.velocity, projectile.velocity());
        assert_eq!(record.speed, projectile.speed());
        assert_eq!(record.acceleration, projectile.acceleration());
        assert_eq!(record.force, projectile.net_force());
        assert_eq!(record.energy.kinetic, projectile.kinetic_energy());
        assert_eq!(record.energy.potential, projectile.potential_energy());
        assert_eq!(record.energy.total, projectile.total_energy());
        assert!(!record.terminal);
    }

    #[test]
    fn test_interpolated_landing_is_earlier_than_clamped() {
        let base = SimulationParameters::default().with_time_step(0.05);
        let mut clamped = Projectile::new(base.clone()).unwrap();
        let mut interpolated =
            Projectile::new(base.with_landing_mode(LandingMode::Interpolate)).unwrap();

        let clamped_steps = clamped.run_to_completion();
        let interpolated_steps = interpolated.run_to_completion();

        assert_eq!(clamped_steps, interpolated_steps);
        assert_eq!(interpolated.position().y, 0.0);
        assert!(interpolated.time() <= clamped.time());
        assert!(interpolated.time() > clamped.time() - 0.05 - 1e-9);
        assert!(interpolated.position().x <= clamped.position().x);
    }
}
