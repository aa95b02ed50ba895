pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::parameters::{LandingMode, SimulationParameters};
pub use control::projectile::{Projectile, ProjectileState, TerminationReason};
pub use errors::ValidationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::record::{EnergyRecord, StateRecord};
pub use telemetry_system::telemetry::{FlightSummary, Telemetry};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
