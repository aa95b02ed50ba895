use crate::{control::parameters::SimulationParameters, utils::vector2d::Vector2D};

/// Quadratic drag on a point mass moving through a uniformly moving air mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub frontal_area: f64,
    pub air_density: f64,
    pub wind_speed: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, frontal_area: f64, air_density: f64, wind_speed: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            frontal_area,
            air_density,
            wind_speed,
        }
    }

    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Aerodynamics::new(
            params.drag_coefficient,
            params.frontal_area,
            params.air_density,
            params.wind_speed,
        )
    }

    /// Velocity of the body as seen from the air. Wind is horizontal only.
    pub fn relative_velocity(&self, velocity: Vector2D) -> Vector2D {
        Vector2D::new(velocity.x - self.wind_speed, velocity.y)
    }

    pub fn calculate_drag(&self, velocity: Vector2D) -> Vector2D {
        let relative = self.relative_velocity(velocity);
        let relative_speed = relative.magnitude();

        // Exact limit, not a cutoff: no airflow means no drag.
        if relative_speed == 0.0 {
            return Vector2D::ZERO;
        }

        let drag_magnitude = self.calculate_dynamic_pressure(relative_speed)
            * self.drag_coefficient
            * self.frontal_area;

        Vector2D::new(
            -drag_magnitude * relative.x / relative_speed,
            -drag_magnitude * relative.y / relative_speed,
        )
    }

    fn calculate_dynamic_pressure(&self, relative_speed: f64) -> f64 {
        0.5 * self.air_density * relative_speed * relative_speed
    }

    /// True when the configuration can never produce a drag force.
    pub fn is_drag_free(&self) -> bool {
        self.drag_coefficient == 0.0 || self.frontal_area == 0.0 || self.air_density == 0.0
    }
}
