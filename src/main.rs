//! Contact Sim entry point
//!
//! Headless driver: steps the simulation at a notional 60 Hz and logs the
//! susceptible/infected/recovered census once per simulated second. The
//! windowed frontends own their own frame loops and call `step` the same way.
//!
//! Usage: contact-sim [frames] [seed] [params.json]

use std::env;
use std::fs;

use contact_sim::consts::{DEFAULT_POPULATION, FRAME_RATE, PARTICLE_RADIUS};
use contact_sim::error::{Error, Result};
use contact_sim::sim::{MeshHandle, Population, SimParams, step};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let frames: u64 = parse_arg(args.first(), "frames")?.unwrap_or(3600);
    let seed: u64 = parse_arg(args.get(1), "seed")?.unwrap_or(42);

    let params = match args.get(2) {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let params: SimParams = serde_json::from_str(&json)?;
            params.validate()?;
            log::info!("loaded params from {path}");
            params
        }
        None => SimParams::default(),
    };

    // Headless runs never draw, so any shared handle value will do
    let mut population = Population::spawn(DEFAULT_POPULATION, PARTICLE_RADIUS, MeshHandle(0), seed)?;

    let census_interval = FRAME_RATE as u64;
    for frame in 1..=frames {
        step(&mut population, &params);

        let census = population.census();
        if frame % census_interval == 0 {
            log::info!(
                "t={}s susceptible={} infected={} recovered={}",
                frame / census_interval,
                census.susceptible,
                census.infected,
                census.recovered
            );
        }

        if census.infected == 0 {
            log::info!("epidemic extinguished after {frame} frames");
            break;
        }
    }

    let census = population.census();
    println!(
        "final: susceptible={} infected={} recovered={} (seed {})",
        census.susceptible,
        census.infected,
        census.recovered,
        population.seed()
    );
    Ok(())
}

fn parse_arg(arg: Option<&String>, name: &str) -> Result<Option<u64>> {
    match arg {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidParam(format!("{name} must be a non-negative integer"))),
        None => Ok(None),
    }
}
