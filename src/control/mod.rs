pub mod parameters;
pub mod projectile;
