mod algorithm;
mod distance;
mod error;
mod inertia;
mod initialization;
mod load;
mod logger;
mod point;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use algorithm::{kmeans_lloyd, KMeansConfig};
use inertia::calculate_inertia;
use initialization::{initialize_clusters, Initialization};
use logger::init_logger;

static INPUT_PATH: &str = "kmeans-data.txt";
static OUTPUT_PATH: &str = "kmeans-output.txt";

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut points = load::read_points(INPUT_PATH)?;
    log::info!("Loaded {} points from {}", points.len(), INPUT_PATH);

    let answer = prompt("Enter the number of clusters (k): ")?;
    let k: usize = answer
        .parse()
        .map_err(|_| format!("invalid cluster count: {:?}", answer))?;

    let answer = prompt("Initialize centroid selection (y/n)?: ")?;
    let initialization = match answer.as_str() {
        "y" => {
            let mut indices = Vec::with_capacity(k);
            for i in 0..k {
                let answer = prompt(&format!(
                    "Select index for centroid {} (0-{}): ",
                    i + 1,
                    points.len().saturating_sub(1)
                ))?;
                let index: usize = answer
                    .parse()
                    .map_err(|_| format!("invalid centroid index: {:?}", answer))?;
                indices.push(index);
            }
            Initialization::Explicit(indices)
        }
        "n" => Initialization::Random,
        other => return Err(format!("invalid choice (y/n): {:?}", other).into()),
    };

    let mut rng = rand::thread_rng();
    let mut clusters = initialize_clusters(&points, k, &initialization, &mut rng)?;

    let config = KMeansConfig::default();
    let iterations = kmeans_lloyd(&mut points, &mut clusters, &config);
    log::info!(
        "Finished clustering: {} iterations, inertia {}",
        iterations,
        calculate_inertia(&points, &clusters)
    );

    load::write_results(OUTPUT_PATH, &points)?;
    println!("Results written to '{}'", OUTPUT_PATH);
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = init_logger() {
        eprintln!("Failed to initialize logger: {}", err);
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
