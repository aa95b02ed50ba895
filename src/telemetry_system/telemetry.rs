use serde::Serialize;

use crate::control::projectile::{Projectile, TerminationReason};
use crate::utils::vector2d::Vector2D;

use super::record::StateRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub samples: usize,
    pub flight_time: f64,
    pub range: f64,
    pub max_height: f64,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub impact_speed: f64,
    pub energy_drift: f64,
    pub termination: Option<TerminationReason>,
}

/// Caller-side recorder of the snapshots a run produces, plus running extrema.
#[derive(Debug, Default)]
pub struct Telemetry {
    records: Vec<StateRecord>,
    max_speed: f64,
    max_height: f64,
    max_acceleration: f64,
    initial_energy: Option<f64>,
    energy_drift: f64,
    termination: Option<TerminationReason>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry::default()
    }

    /// Records the launch sample and every step until `projectile` terminates.
    pub fn record_run(projectile: &mut Projectile) -> Self {
        let mut telemetry = Telemetry::new();
        telemetry.collect(projectile);
        while !projectile.is_terminal() {
            projectile.step();
            telemetry.collect(projectile);
        }
        telemetry
    }

    pub fn collect(&mut self, projectile: &Projectile) {
        let record = projectile.snapshot();
        if self.records.is_empty() {
            self.max_height = record.position.y;
        }

        self.max_speed = self.max_speed.max(record.speed);
        self.max_height = self.max_height.max(record.position.y);
        self.max_acceleration = self.max_acceleration.max(record.acceleration.magnitude());

        let initial_energy = *self.initial_energy.get_or_insert(record.energy.total);
        self.energy_drift = self
            .energy_drift
            .max((record.energy.total - initial_energy).abs());
        self.termination = projectile.termination_reason();

        self.records.push(record);
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn final_record(&self) -> Option<&StateRecord> {
        self.records.last()
    }

    /// Path of the projectile as (x, y) points, in recording order.
    pub fn path(&self) -> Vec<Vector2D> {
        self.records.iter().map(|record| record.position).collect()
    }

    pub fn range(&self) -> f64 {
        self.final_record().map_or(0.0, |record| record.position.x)
    }

    pub fn flight_time(&self) -> f64 {
        self.final_record().map_or(0.0, |record| record.time)
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Largest deviation of total mechanical energy from the first sample.
    pub fn energy_drift(&self) -> f64 {
        self.energy_drift
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            samples: self.records.len(),
            flight_time: self.flight_time(),
            range: self.range(),
            max_height: self.max_height,
            max_speed: self.max_speed,
            max_acceleration: self.max_acceleration,
            impact_speed: self.final_record().map_or(0.0, |record| record.speed),
            energy_drift: self.energy_drift,
            termination: self.termination,
        }
    }

    fn format_vector2d(vec: &Vector2D, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}",
            vec.x,
            vec.y,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    pub fn format_record(record: &StateRecord) -> String {
        format!(
            "Time: {}\n\
                 Position: {} m\n\
                 Velocity: {} m/s (Speed: {:.2} m/s)\n\
                 Acceleration: {} m/s²\n\
                 Force: {} N\n\
                 Energy: kinetic = {:.3} J, potential = {:.3} J, total = {:.3} J\n",
            Self::format_time(record.time),
            Self::format_vector2d(&record.position, 2),
            Self::format_vector2d(&record.velocity, 2),
            record.speed,
            Self::format_vector2d(&record.acceleration, 3),
            Self::format_vector2d(&record.force, 3),
            record.energy.kinetic,
            record.energy.potential,
            record.energy.total
        )
    }

    pub fn display_data(&self, every: usize) {
        println!("--- Telemetry Data ---");
        let every = every.max(1);
        let last = self.records.len().saturating_sub(1);
        for (index, record) in self.records.iter().enumerate() {
            if index % every == 0 || index == last {
                println!("{}", Self::format_record(record));
            }
        }
        println!("--- End of Telemetry ---");

        self.display_summary();
    }

    pub fn display_summary(&self) {
        let summary = self.summary();
        println!("\n--- Flight Summary ---");
        println!("Samples: {}", summary.samples);
        println!("Flight Time: {}", Self::format_time(summary.flight_time));
        println!("Range: {}", Self::format_distance(summary.range));
        println!("Max Height: {}", Self::format_distance(summary.max_height));
        println!("Max Speed: {:.2} m/s", summary.max_speed);
        println!("Impact Speed: {:.2} m/s", summary.impact_speed);
        println!("Max Acceleration: {:.2} m/s²", summary.max_acceleration);
        println!("Energy Drift: {:.4} J", summary.energy_drift);
        match summary.termination {
            Some(reason) => println!("Terminated by: {:?}", reason),
            None => println!("Terminated by: still running"),
        }
    }
}
