use clap::{Parser, ValueEnum};
use projectile_simulation::*;

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "2D projectile simulator with quadratic drag and horizontal wind", long_about = None)]
struct Cli {
    /// Initial speed (m/s)
    #[arg(short = 'v', long, default_value_t = DEFAULT_INITIAL_SPEED)]
    speed: f64,

    /// Launch angle (degrees)
    #[arg(short = 'a', long, default_value_t = DEFAULT_LAUNCH_ANGLE_DEG, allow_negative_numbers = true)]
    angle: f64,

    /// Mass (kg)
    #[arg(short = 'm', long, default_value_t = DEFAULT_MASS)]
    mass: f64,

    /// Frontal area (m²)
    #[arg(long, default_value_t = DEFAULT_FRONTAL_AREA)]
    area: f64,

    /// Drag coefficient
    #[arg(long, default_value_t = SPHERE_DRAG_COEFFICIENT)]
    cd: f64,

    /// Horizontal wind speed (m/s, positive towards +x)
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIND_SPEED, allow_negative_numbers = true)]
    wind: f64,

    /// Gravitational acceleration (m/s²)
    #[arg(short = 'g', long, default_value_t = GRAVITY)]
    gravity: f64,

    /// Air density (kg/m³)
    #[arg(long, default_value_t = AIR_DENSITY_SEA_LEVEL)]
    density: f64,

    /// Integration time step (s)
    #[arg(long, default_value_t = TIME_STEP)]
    time_step: f64,

    /// Maximum simulated time (s)
    #[arg(long, default_value_t = MAX_SIMULATION_TIME)]
    max_time: f64,

    /// Launch height (m)
    #[arg(long, default_value_t = DEFAULT_INITIAL_HEIGHT, allow_negative_numbers = true)]
    height: f64,

    /// Interpolate the landing point between the last two samples
    #[arg(long)]
    interpolate_landing: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Print every Nth sample (the final sample is always printed)
    #[arg(long, default_value_t = 10)]
    every: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
    Summary,
}

impl Cli {
    fn parameters(&self) -> SimulationParameters {
        let landing_mode = if self.interpolate_landing {
            LandingMode::Interpolate
        } else {
            LandingMode::Clamp
        };

        SimulationParameters::from_degrees(self.speed, self.angle)
            .with_mass(self.mass)
            .with_frontal_area(self.area)
            .with_drag_coefficient(self.cd)
            .with_wind_speed(self.wind)
            .with_gravity(self.gravity)
            .with_air_density(self.density)
            .with_time_step(self.time_step)
            .with_max_simulated_time(self.max_time)
            .with_initial_height(self.height)
            .with_landing_mode(landing_mode)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut projectile = Projectile::new(cli.parameters())?;
    let telemetry = Telemetry::record_run(&mut projectile);
    let every = cli.every.max(1);

    match cli.output {
        OutputFormat::Table => telemetry.display_data(every),
        OutputFormat::Summary => telemetry.display_summary(),
        OutputFormat::Csv => {
            println!("{}", StateRecord::CSV_HEADER);
            let last = telemetry.records().len().saturating_sub(1);
            for (index, record) in telemetry.records().iter().enumerate() {
                if index % every == 0 || index == last {
                    println!("{}", record.to_csv_row());
                }
            }
        }
        OutputFormat::Json => {
            let samples: Vec<&StateRecord> = telemetry
                .records()
                .iter()
                .enumerate()
                .filter(|(index, _)| {
                    index % every == 0 || *index + 1 == telemetry.records().len()
                })
                .map(|(_, record)| record)
                .collect();
            let output = serde_json::json!({
                "parameters": projectile.parameters(),
                "trajectory": samples,
                "summary": telemetry.summary(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
