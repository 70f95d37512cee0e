use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;

use cellular_network_sim::cli::menu::Session;
use cellular_network_sim::domain::directory::network_directory::NetworkDirectory;
use cellular_network_sim::{generate_network_directory, logger};

#[derive(Parser, Debug)]
#[command(version, about = "Simulates cellular network zones: towers, a switching center, mobile users and call routing")]
struct Cli {
    /// Scenario file (JSON) with networks, towers and users to preload
    #[arg(short, long)]
    scenario: Option<String>,

    /// Print the JSON snapshot of every loaded network and exit
    #[arg(long, requires = "scenario")]
    snapshot: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init();
    log::info!("Logger initialized. Starting network simulation.");

    let directory = match &cli.scenario {
        Some(path) => generate_network_directory(path).with_context(|| format!("Failed to load scenario '{}'", path))?,
        None => NetworkDirectory::new(),
    };

    if cli.snapshot {
        let snapshots: Vec<_> = directory.networks().map(|zone| zone.describe()).collect();
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout());
    let mut session = Session::new(directory, stdin.lock(), stdout);

    println!("--- Mobile Network Simulation System ---");
    if session.directory().is_empty() {
        session.create_networks()?;
    }
    session.run()?;

    log::info!("Simulation finished.");
    Ok(())
}
