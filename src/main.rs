mod footprint;
mod planner;
mod web;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::process::ExitCode;

use crate::footprint::{compute_footprint, to_grid_cell, CameraGeometry};
use crate::planner::{render_waypoints, survey, Rectangle};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "sweep-o-mat")]
#[command(about = "Lawn-mower coverage paths for aerial camera surveys")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the camera ground footprint and grid cell
    Footprint {
        #[command(flatten)]
        camera: CameraArgs,
    },
    /// Print the serpentine coverage path
    Plan {
        #[command(flatten)]
        camera: CameraArgs,
        /// JSON file with `LeftBottom`/`RightTop` corners
        #[arg(long)]
        area: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve the planner over HTTP
    Serve,
}

#[derive(Args)]
struct CameraArgs {
    /// Vertical half-angle in radians
    #[arg(long)]
    vertical: Option<f64>,
    /// Horizontal half-angle in radians
    #[arg(long)]
    horizontal: Option<f64>,
    /// Flight altitude in metres
    #[arg(long)]
    altitude: Option<f64>,
}

impl CameraArgs {
    fn resolve(&self, defaults: CameraGeometry) -> CameraGeometry {
        CameraGeometry {
            vertical_half_angle_rad: self.vertical.unwrap_or(defaults.vertical_half_angle_rad),
            horizontal_half_angle_rad: self
                .horizontal
                .unwrap_or(defaults.horizontal_half_angle_rad),
            altitude_m: self.altitude.unwrap_or(defaults.altitude_m),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Footprint { camera } => print_footprint(camera.resolve(config.camera)),
        Commands::Plan {
            camera,
            area,
            format,
        } => plan(&config, camera.resolve(config.camera), area.as_deref(), format),
        Commands::Serve => serve(config),
    }
}

fn print_footprint(camera: CameraGeometry) -> ExitCode {
    let footprint = match compute_footprint(&camera) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let cell = to_grid_cell(&footprint);

    println!("FOV width:            {} m", footprint.width_m);
    println!("FOV length:           {} m", footprint.length_m);
    println!("FOV width in degree:  {}", cell.width_deg);
    println!("FOV length in degree: {}", cell.length_deg);
    ExitCode::SUCCESS
}

fn plan(
    config: &Config,
    camera: CameraGeometry,
    area_path: Option<&str>,
    format: OutputFormat,
) -> ExitCode {
    let area = match area_path {
        Some(path) => match read_area(path) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Error reading area {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => config.area,
    };

    let plan = match survey(&area, &camera) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Planning error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match format {
        OutputFormat::Text => println!("Navigation as: {}", render_waypoints(&plan.waypoints)),
        OutputFormat::Json => match serde_json::to_string_pretty(&plan) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding path: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}

fn read_area(path: &str) -> Result<Rectangle, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn serve(config: Config) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
