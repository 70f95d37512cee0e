use crate::api::scenario_dto::ScenarioDto;
use crate::domain::directory::network_directory::NetworkDirectory;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod cli;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a scenario file and builds the network directory it describes.
pub fn generate_network_directory(file_path: &str) -> Result<NetworkDirectory> {
    log::info!("Loading scenario from '{}'.", file_path);

    let root_dto: ScenarioDto = parse_json_file::<ScenarioDto>(file_path)?;
    log::info!("Scenario file parsed successfully: {} networks.", root_dto.networks.len());

    let directory = NetworkDirectory::from_dto(root_dto)?;
    log::info!("Network directory constructed successfully.");

    Ok(directory)
}
