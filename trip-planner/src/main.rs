use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use trip_planner::planner::Planner;
use trip_planner::{reader, report};

/// Data file used when no path is given on the command line.
const DEFAULT_DATA_FILE: &str = "donnees.txt";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let raw = reader::load(path)?;
    let (request, legs) = reader::parse(&raw)?;
    tracing::info!(
        origin = request.origin(),
        destination = request.destination(),
        legs = legs.len(),
        "planning trip"
    );

    let planner = Planner::new(&legs)?;
    let evaluation = planner.plan(&request);

    match evaluation.fastest().and_then(report::render) {
        Some(line) => println!("{line}"),
        None => println!(
            "No feasible route from {} to {} departing at {}",
            request.origin(),
            request.destination(),
            request.departure()
        ),
    }

    Ok(())
}
