//! Runs every smoothing variant against the same input and compares them.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare
//! cargo run --example compare -- absolute
//! RUST_LOG=debug cargo run --example compare -- relative 0.25
//! ```
//!
//! The optional first argument picks the positioning policy (`relative` by
//! default), the second the smooth time (`1` by default). For each variant the
//! program prints the peak overshoot, the final distance to the target, and the
//! inspector readout at the middle of the run.

use std::error::Error;

use smoothcd_observers::{Channel, LogObserver, Readout, Traces};
use smoothcd_simulation::{Positioning, SimulationConfig, Smoothing, solve};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let positioning = match args.next().as_deref() {
        None | Some("relative") => Positioning::Relative,
        Some("absolute") => Positioning::Absolute,
        Some(other) => {
            eprintln!("Unknown positioning: {other}");
            eprintln!("Usage: compare [relative|absolute] [smooth_time]");
            std::process::exit(1);
        }
    };
    let smooth_time = args.next().map(|arg| arg.parse::<f64>()).transpose()?.unwrap_or(1.0);

    let config = SimulationConfig::default()
        .with_positioning(positioning)
        .with_smooth_time(smooth_time)
        .with_duration(8.0)
        .with_inspect_fraction(0.5);
    config.validate()?;
    info!(?positioning, smooth_time, steps = config.steps(), "comparing variants");

    for smoothing in Smoothing::ALL {
        let config = config.with_smoothing(smoothing);
        let solution = solve(&config, LogObserver::new(Level::TRACE))?;
        let traces = Traces::from_series(&solution.series);

        println!("== {smoothing} ==");
        match solution.series.peak_overshoot() {
            Some(peak) => println!("peak overshoot: {peak:.4}"),
            None => println!("peak overshoot: not measured"),
        }
        if let Some(last) = solution.series.last() {
            println!("final distance: {:.4}", last.distance);
        }
        println!(
            "position range: {:.4}",
            range(traces.points(Channel::Position))
        );
        println!("{}\n", Readout::new(solution.inspection()?).with_precision(4));
    }

    Ok(())
}

fn range(points: &[[f64; 2]]) -> f64 {
    let (low, high) = points
        .iter()
        .map(|point| point[1])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
            (low.min(value), high.max(value))
        });
    high - low
}
