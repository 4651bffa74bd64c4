//! Command-line front end for openneb.
//!
//! Runs a NEB relaxation on one of the built-in surfaces and writes the
//! relaxed path to a plain-text file for external plotting.

use nalgebra::Vector2;
use openneb::{io, relax, surfaces, NebConfig};
use std::env;
use std::f64::consts::PI;
use std::path::Path;
use std::process;

/// Default number of movable interior images.
const DEFAULT_NUM_IMAGES: usize = 11;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <surface> [num-images] [output-file]", program);
    eprintln!();
    eprintln!("Surfaces:");
    eprintln!("  cosine            cosine ridge with a tilted valley");
    eprintln!("  cosine-symmetric  cosine ridge without the tilt term");
    eprintln!("  muller-brown      Muller-Brown benchmark surface");
    eprintln!();
    eprintln!("Defaults: num-images = {}, output-file = neb_path.dat", DEFAULT_NUM_IMAGES);
}

/// Endpoints and integration parameters suited to each built-in surface.
fn config_for(surface: &str, num_images: usize) -> NebConfig {
    match surface {
        "muller-brown" => {
            // Gradients on this surface reach several hundred, so the
            // time step must be much smaller than the cosine default.
            let mut config = NebConfig::new(
                num_images,
                Vector2::new(-0.558, 1.442),
                Vector2::new(0.623, 0.028),
                2_000_000,
            );
            config.time_step = 1e-4;
            config
        }
        _ => NebConfig::new(
            num_images,
            Vector2::new(-2.0 * PI, 0.0),
            Vector2::new(2.0 * PI, 0.0),
            500_000,
        ),
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let surface_name = &args[1];
    let potential = match surfaces::by_name(surface_name) {
        Some(potential) => potential,
        None => {
            eprintln!("Error: Unknown surface: {}", surface_name);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let num_images = match args.get(2) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: num-images must be a non-negative integer, got {}", arg);
                process::exit(1);
            }
        },
        None => DEFAULT_NUM_IMAGES,
    };
    let output = args
        .get(3)
        .map(String::as_str)
        .unwrap_or("neb_path.dat");

    let config = config_for(surface_name, num_images);

    match relax(&config, potential) {
        Ok(result) => {
            println!(
                "Converged after {} iterations (path length {:.4})",
                result.iterations,
                result.chain.path_length()
            );
            if let Some(barrier) = result.chain.highest_interior_energy(&potential) {
                println!("Highest interior image energy: {:.6}", barrier);
            }
            if let Err(e) = io::write_path(&result.chain, Path::new(output)) {
                eprintln!("Error writing {}: {}", output, e);
                process::exit(1);
            }
            println!("Path written to {}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
