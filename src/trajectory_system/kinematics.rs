use crate::{control::parameters::SimulationParameters, utils::vector2d::Vector2D};

/// Mutable state of a projectile run: elapsed simulated time, position and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub time: f64,
}

impl Kinematics {
    pub fn new(params: &SimulationParameters) -> Self {
        Kinematics {
            position: Vector2D::new(0.0, params.initial_height),
            velocity: Vector2D::from_polar(params.initial_speed, params.launch_angle),
            time: 0.0,
        }
    }

    /// Semi-implicit Euler: velocity first, then position from the updated velocity.
    ///
    /// The update order is observable in the produced trajectory and must not change.
    pub fn update(&mut self, acceleration: Vector2D, delta_time: f64) {
        self.velocity.x += acceleration.x * delta_time;
        self.velocity.y += acceleration.y * delta_time;
        self.position.x += self.velocity.x * delta_time;
        self.position.y += self.velocity.y * delta_time;
        self.time += delta_time;
    }

    pub fn is_at_or_below_ground(&self) -> bool {
        self.position.y <= 0.0 && self.time > 0.0
    }

    pub fn clamp_to_ground(&mut self) {
        self.position.y = 0.0;
    }

    /// Pulls the state back along the last step to where `y` crossed zero.
    ///
    /// `previous` is the state before the step that went below ground. If it
    /// was not above ground the crossing cannot be bracketed and this falls
    /// back to a clamp.
    pub fn interpolate_ground_crossing(&mut self, previous: &Kinematics) {
        let drop = previous.position.y - self.position.y;
        if previous.position.y <= 0.0 || drop <= 0.0 {
            self.clamp_to_ground();
            return;
        }
        let fraction = (previous.position.y / drop).clamp(0.0, 1.0);

        self.position.x = lerp(previous.position.x, self.position.x, fraction);
        self.velocity.x = lerp(previous.velocity.x, self.velocity.x, fraction);
        self.velocity.y = lerp(previous.velocity.y, self.velocity.y, fraction);
        self.time = lerp(previous.time, self.time, fraction);
        self.clamp_to_ground();
    }

    pub fn get_speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn get_height(&self) -> f64 {
        self.position.y
    }
}

fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}
