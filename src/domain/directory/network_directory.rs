use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::api::scenario_dto::{NetworkDto, ScenarioDto};
use crate::api::snapshot_dto::NetworkSummary;
use crate::domain::geometry::Position;
use crate::domain::graph::tower::COVERAGE_FACTOR;
use crate::domain::utils::id::ZoneId;
use crate::domain::zone::network_zone::NetworkZone;
use crate::error::{Error, Result};

/// All network zones of a simulation run, indexed by name.
#[derive(Debug, Default)]
pub struct NetworkDirectory {
    zones: HashMap<ZoneId, NetworkZone>,

    /// Zone names in creation order, for stable summaries.
    order: Vec<ZoneId>,
}

impl NetworkDirectory {
    pub fn new() -> Self {
        Self { zones: HashMap::new(), order: Vec::new() }
    }

    /// Builds a directory from a scenario, running every entry through the regular operations.
    ///
    /// The first rejected network, tower or user aborts the build.
    pub fn from_dto(dto: ScenarioDto) -> Result<Self> {
        let mut directory = NetworkDirectory::new();

        for network_dto in dto.networks {
            directory.add_network_from_dto(network_dto)?;
        }

        log::info!("Network directory built with {} networks.", directory.len());
        Ok(directory)
    }

    fn add_network_from_dto(&mut self, dto: NetworkDto) -> Result<()> {
        let coverage_factor = dto.coverage_factor.unwrap_or(COVERAGE_FACTOR);
        let zone = self.add_network_with_coverage_factor(&dto.name, dto.switching_center, coverage_factor)?;

        for tower in dto.towers {
            zone.add_tower(&tower.name, tower.position, tower.height)?;
        }

        for user in dto.users {
            let report = zone.register_user(&user.name, &user.phone, user.position)?;
            log::debug!("Scenario user {} connected: {}", report.phone, report.is_connected());
        }

        Ok(())
    }

    /// Creates a zone together with its switching center.
    pub fn add_network(&mut self, name: &str, switching_center_pos: Position) -> Result<&mut NetworkZone> {
        self.add_network_with_coverage_factor(name, switching_center_pos, COVERAGE_FACTOR)
    }

    pub fn add_network_with_coverage_factor(&mut self, name: &str, switching_center_pos: Position, coverage_factor: f64) -> Result<&mut NetworkZone> {
        let zone = NetworkZone::with_coverage_factor(name, switching_center_pos, coverage_factor)?;

        match self.zones.entry(zone.get_id().clone()) {
            Entry::Occupied(entry) => {
                log::warn!("Network '{}' already exists.", entry.key());
                Err(Error::DuplicateName(entry.key().to_string()))
            }
            Entry::Vacant(entry) => {
                log::info!("Network '{}' created.", entry.key());
                self.order.push(entry.key().clone());
                Ok(entry.insert(zone))
            }
        }
    }

    pub fn get_network(&self, name: &str) -> Option<&NetworkZone> {
        self.zones.get(&ZoneId::new(name.trim()))
    }

    pub fn get_network_mut(&mut self, name: &str) -> Option<&mut NetworkZone> {
        self.zones.get_mut(&ZoneId::new(name.trim()))
    }

    /// Zones in creation order.
    pub fn networks(&self) -> impl Iterator<Item = &NetworkZone> {
        self.order.iter().filter_map(|id| self.zones.get(id))
    }

    /// Name of the first zone created, if any.
    pub fn first_network_name(&self) -> Option<&ZoneId> {
        self.order.first()
    }

    pub fn list_network_summaries(&self) -> Vec<NetworkSummary> {
        self.networks()
            .map(|zone| NetworkSummary { name: zone.get_id().clone(), tower_count: zone.tower_count(), user_count: zone.user_count() })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
