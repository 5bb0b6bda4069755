// Standard library
use std::io::{self, BufWriter};

// External libraries
use clap::Parser;
use tracing::{error, info};

// LIFE
use life::config::SimulationConfig;
use life::error::Result;

mod logging;

fn main() {
    let config = SimulationConfig::parse();
    logging::setup_logging(config.verbose, config.quiet);

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &SimulationConfig) -> Result<()> {
    let mut engine = config.build_engine()?;
    info!(
        rows = config.rows,
        columns = config.columns,
        engine = ?config.engine,
        generations = config.generations,
        "starting simulation"
    );

    let projector = config.projector();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if config.run_async {
        projector.simulate_async(engine.as_mut(), &mut out, config.generations)
    } else {
        projector.simulate(engine.as_mut(), &mut out, config.generations)
    }
}
