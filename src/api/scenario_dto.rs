use serde::Deserialize;

use crate::domain::geometry::Position;

/// Root of a scenario file: the zones to build at startup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    pub networks: Vec<NetworkDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDto {
    pub name: String,
    pub switching_center: Position,
    /// Overrides the default coverage radius per unit of tower height.
    pub coverage_factor: Option<f64>,
    #[serde(default)]
    pub towers: Vec<TowerDto>,
    #[serde(default)]
    pub users: Vec<UserDto>,
}

#[derive(Debug, Deserialize)]
pub struct TowerDto {
    pub name: String,
    pub position: Position,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub phone: String,
    pub position: Position,
}
