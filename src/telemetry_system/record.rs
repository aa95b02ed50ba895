use serde::Serialize;

use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyRecord {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

/// Everything a caller needs to display or log one sample of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateRecord {
    pub time: f64,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub speed: f64,
    pub acceleration: Vector2D,
    pub force: Vector2D,
    pub energy: EnergyRecord,
    pub terminal: bool,
}

impl StateRecord {
    pub const CSV_HEADER: &'static str =
        "time,x,y,vx,vy,speed,ax,ay,fx,fy,kinetic,potential,total,terminal";

    pub fn to_csv_row(&self) -> String {
        format!(
            "{:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
            self.time,
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
            self.speed,
            self.acceleration.x,
            self.acceleration.y,
            self.force.x,
            self.force.y,
            self.energy.kinetic,
            self.energy.potential,
            self.energy.total,
            self.terminal
        )
    }
}
