use std::collections::HashMap;

use crate::api::snapshot_dto::{ConnectedUserSnapshot, LinkSnapshot, SwitchingCenterSnapshot, TowerSnapshot, UserSnapshot, ZoneSnapshot};
use crate::domain::geometry::{Position, distance, in_range, overlaps};
use crate::domain::graph::switching_center::SwitchingCenter;
use crate::domain::graph::tower::{COVERAGE_FACTOR, Tower};
use crate::domain::graph::vertex::GraphVertex;
use crate::domain::registry::telephone_registry::TelephoneRegistry;
use crate::domain::user::{CallState, User};
use crate::domain::utils::id::{PhoneNumber, VertexId, ZoneId};
use crate::domain::zone::events::{CallRoute, ConnectivityReport, EndCallOutcome, ZoneEvent};
use crate::domain::zone::routing::{VertexLookup, compose_call_route, shortest_hop_path};
use crate::error::{Error, Result};

const ANALYTICS_TARGET: &str = "network_analytics";

/// An independently managed network: towers, one switching center and the registered users.
///
/// The zone owns every entity. Relations between them (user -> tower, tower -> users,
/// user -> call partner) are stored as identifiers and kept consistent by the zone's operations.
#[derive(Debug)]
pub struct NetworkZone {
    id: ZoneId,
    coverage_factor: f64,
    switching_center: SwitchingCenter,

    /// All towers of the zone, indexed by name.
    towers: HashMap<VertexId, Tower>,

    /// Tower names in insertion order. Used for scans where the first match wins.
    tower_order: Vec<VertexId>,

    registry: TelephoneRegistry,
}

impl NetworkZone {
    pub fn new(name: &str, switching_center_pos: Position) -> Result<Self> {
        Self::with_coverage_factor(name, switching_center_pos, COVERAGE_FACTOR)
    }

    pub fn with_coverage_factor(name: &str, switching_center_pos: Position, coverage_factor: f64) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("Network name cannot be empty".to_string()));
        }
        if !coverage_factor.is_finite() || coverage_factor <= 0.0 {
            return Err(Error::InvalidInput(format!("Coverage factor must be a positive number, got {}", coverage_factor)));
        }
        switching_center_pos.validate()?;

        let center_id = VertexId::new(format!("{}_MSC", name));

        Ok(NetworkZone {
            id: ZoneId::new(name),
            coverage_factor,
            switching_center: SwitchingCenter::new(center_id, switching_center_pos),
            towers: HashMap::new(),
            tower_order: Vec::new(),
            registry: TelephoneRegistry::new(),
        })
    }

    //----------------------
    // --- Accessors ---
    //----------------------
    pub fn get_id(&self) -> &ZoneId {
        &self.id
    }

    pub fn get_coverage_factor(&self) -> f64 {
        self.coverage_factor
    }

    pub fn get_switching_center(&self) -> &SwitchingCenter {
        &self.switching_center
    }

    pub fn get_tower(&self, name: &str) -> Option<&Tower> {
        self.towers.get(&VertexId::new(name))
    }

    /// Towers in insertion order.
    pub fn towers(&self) -> impl Iterator<Item = &Tower> {
        self.tower_order.iter().filter_map(|id| self.towers.get(id))
    }

    pub fn tower_count(&self) -> usize {
        self.towers.len()
    }

    pub fn get_user(&self, phone: &str) -> Option<&User> {
        self.registry.get(&PhoneNumber::new(phone))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.registry.all_users()
    }

    pub fn user_count(&self) -> usize {
        self.registry.count()
    }

    pub fn get_registry(&self) -> &TelephoneRegistry {
        &self.registry
    }

    /// Looks up any vertex of the zone graph, tower or switching center.
    pub fn get_vertex(&self, name: &str) -> Option<&dyn GraphVertex> {
        self.lookup(&VertexId::new(name))
    }

    //----------------------
    // --- Towers ---
    //----------------------

    /// Adds a tower and links it to the switching center in both directions.
    ///
    /// The tower is rejected if its coverage circle overlaps the circle of any existing tower.
    pub fn add_tower(&mut self, name: &str, position: Position, height: f64) -> Result<&Tower> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("Tower name cannot be empty".to_string()));
        }

        let tower_id = VertexId::new(name);
        if self.towers.contains_key(&tower_id) || tower_id == *self.switching_center.get_id() {
            log::warn!("Tower '{}' already exists in network '{}'.", tower_id, self.id);
            return Err(Error::DuplicateName(name.to_string()));
        }

        let mut tower = Tower::new(tower_id.clone(), position, height, self.coverage_factor)?;

        if let Some(existing) = self.towers().find(|existing| overlaps(&position, tower.get_coverage_radius(), &existing.get_position(), existing.get_coverage_radius())) {
            log::warn!("Tower '{}' coverage overlaps with '{}' in network '{}'.", tower_id, existing.get_id(), self.id);
            return Err(Error::CoverageOverlap { tower: tower_id, existing: existing.get_id().clone() });
        }

        let distance_to_center = distance(&position, &self.switching_center.get_position());
        tower.add_edge(self.switching_center.get_id().clone(), distance_to_center);
        self.switching_center.add_edge(tower_id.clone(), distance_to_center);

        log::info!("Tower '{}' added to network '{}' with coverage radius {:.2}m.", tower_id, self.id, tower.get_coverage_radius());

        self.tower_order.push(tower_id.clone());
        Ok(self.towers.entry(tower_id).or_insert(tower))
    }

    //----------------------
    // --- Users ---
    //----------------------

    /// Registers a new user and attaches them to the nearest tower in range, if any.
    pub fn register_user(&mut self, name: &str, phone: &str, initial_pos: Position) -> Result<ConnectivityReport> {
        let phone_number = PhoneNumber::new(phone);
        if self.registry.contains(&phone_number) {
            log::warn!("User with phone number {} already registered in network '{}'.", phone_number, self.id);
            return Err(Error::DuplicatePhone(phone_number));
        }

        let mut user = User::new(name, phone, initial_pos)?;
        user.set_zone(self.id.clone());
        let registered = ZoneEvent::UserRegistered { phone: phone_number.clone(), name: user.get_name().to_string() };
        self.registry.insert(phone_number.clone(), user);

        log::info!("User {} registered to network '{}'.", phone_number, self.id);

        let mut report = self.assign_nearest_tower(&phone_number)?;
        report.events.insert(0, registered);
        Ok(report)
    }

    /// Moves a user and re-runs nearest-tower assignment, performing a handover if needed.
    pub fn move_user(&mut self, phone: &str, new_pos: Position) -> Result<ConnectivityReport> {
        let phone_number = PhoneNumber::new(phone);
        let user = self.registry.get_mut(&phone_number).ok_or_else(|| Error::UserNotFound(phone_number.clone()))?;

        let old_pos = user.get_position();
        user.set_position(new_pos)?;
        log::info!("User {} moved from {} to {}.", phone_number, old_pos, new_pos);

        let mut report = self.assign_nearest_tower(&phone_number)?;
        report.events.insert(0, ZoneEvent::UserMoved { phone: phone_number, from: old_pos, to: new_pos });
        Ok(report)
    }

    /// Attaches the user to the closest tower whose coverage contains the user's position.
    ///
    /// Ties are resolved in favour of the tower added first. If no tower covers the
    /// user, any existing connection is dropped.
    pub fn assign_nearest_tower(&mut self, phone: &PhoneNumber) -> Result<ConnectivityReport> {
        let user = self.registry.get(phone).ok_or_else(|| Error::UserNotFound(phone.clone()))?;
        let current = user.get_current_tower().cloned();
        let nearest = self.nearest_tower_in_range(&user.get_position());

        let mut events = Vec::new();

        match (nearest, current) {
            (Some(nearest), Some(current)) if nearest == current => {
                log::debug!("User {} remains connected to {}.", phone, current);
                events.push(ZoneEvent::RemainedConnected { phone: phone.clone(), tower: current });
            }
            (Some(nearest), current) => {
                if let Some(current) = current {
                    log::info!("Handover: user {} moving from {} to {}.", phone, current, nearest);
                    self.detach_user(phone, &current)?;
                    events.push(ZoneEvent::Handover { phone: phone.clone(), from: current, to: nearest.clone() });
                } else {
                    events.push(ZoneEvent::Connected { phone: phone.clone(), tower: nearest.clone() });
                }
                self.attach_user(phone, &nearest)?;
            }
            (None, current) => {
                if let Some(current) = current {
                    self.detach_user(phone, &current)?;
                    events.push(ZoneEvent::Disconnected { phone: phone.clone(), tower: current });
                }
                log::info!("User {} is currently outside network '{}' coverage.", phone, self.id);
                events.push(ZoneEvent::OutOfCoverage { phone: phone.clone() });
            }
        }

        let tower = self.registry.get(phone).and_then(|user| user.get_current_tower().cloned());
        Ok(ConnectivityReport { phone: phone.clone(), tower, events })
    }

    fn nearest_tower_in_range(&self, position: &Position) -> Option<VertexId> {
        let mut nearest: Option<(&Tower, f64)> = None;

        for tower in self.towers() {
            if !in_range(position, &tower.get_position(), tower.get_coverage_radius()) {
                continue;
            }
            let d = distance(position, &tower.get_position());
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((tower, d));
            }
        }

        nearest.map(|(tower, _)| tower.get_id().clone())
    }

    fn attach_user(&mut self, phone: &PhoneNumber, tower_id: &VertexId) -> Result<()> {
        let user = self.registry.get_mut(phone).ok_or_else(|| Error::UserNotFound(phone.clone()))?;
        let tower = self.towers.get_mut(tower_id).ok_or_else(|| Error::InternalInconsistency(format!("Tower '{}' is not part of network '{}'", tower_id, self.id)))?;
        tower.connect_user(user);
        Ok(())
    }

    fn detach_user(&mut self, phone: &PhoneNumber, tower_id: &VertexId) -> Result<()> {
        let user = self.registry.get_mut(phone).ok_or_else(|| Error::UserNotFound(phone.clone()))?;
        match self.towers.get_mut(tower_id) {
            Some(tower) => {
                tower.disconnect_user(user);
            }
            None => user.set_current_tower(None),
        }
        Ok(())
    }

    //----------------------
    // --- Calls ---
    //----------------------

    /// Hop-count shortest path from a tower of this zone to the switching center.
    ///
    /// Returns `None` if `start_tower` is not a tower of this zone or the center is unreachable.
    pub fn find_path_to_switching_center(&self, start_tower: &VertexId) -> Option<Vec<VertexId>> {
        if !self.towers.contains_key(start_tower) {
            return None;
        }
        shortest_hop_path(self, start_tower, self.switching_center.get_id())
    }

    /// Sets up a call between two registered, idle, covered users.
    pub fn make_call(&mut self, caller_phone: &str, receiver_phone: &str) -> Result<CallRoute> {
        let caller_number = PhoneNumber::new(caller_phone);
        let receiver_number = PhoneNumber::new(receiver_phone);

        let caller = self.registry.get(&caller_number).ok_or_else(|| Error::UserNotFound(caller_number.clone()))?;
        let receiver = self.registry.get(&receiver_number).ok_or_else(|| Error::UserNotFound(receiver_number.clone()))?;

        if caller_number == receiver_number {
            return Err(Error::SelfCall(caller_number));
        }

        for party in [caller, receiver] {
            if !party.is_idle() {
                log::warn!("Call from {} to {} rejected: {} is {}.", caller_number, receiver_number, party.get_phone(), party.get_call_status());
                return Err(Error::UserBusy { phone: party.get_phone().clone(), status: party.get_call_status() });
            }
        }

        let caller_tower = caller.get_current_tower().cloned().ok_or_else(|| Error::OutOfCoverage(caller_number.clone()))?;
        let receiver_tower = receiver.get_current_tower().cloned().ok_or_else(|| Error::OutOfCoverage(receiver_number.clone()))?;

        let caller_path = self.find_path_to_switching_center(&caller_tower).ok_or_else(|| Error::NoRoute(caller_tower.clone()))?;
        let receiver_path = self.find_path_to_switching_center(&receiver_tower).ok_or_else(|| Error::NoRoute(receiver_tower.clone()))?;

        let hops = compose_call_route(&caller_path, &receiver_path);

        if let Some(caller) = self.registry.get_mut(&caller_number) {
            caller.set_call_state(CallState::Calling(receiver_number.clone()));
        }
        if let Some(receiver) = self.registry.get_mut(&receiver_number) {
            receiver.set_call_state(CallState::Receiving(caller_number.clone()));
        }

        let route = CallRoute { caller: caller_number, receiver: receiver_number, hops };

        log::info!("Call established in network '{}'. Routing path: {}", self.id, route);
        tracing::info!(
            target: ANALYTICS_TARGET,
            Network = %self.id,
            LogDescription = "Call established",
            Caller = %route.caller,
            Receiver = %route.receiver,
            Hops = route.hops.len(),
        );

        Ok(route)
    }

    /// Ends the call the user is part of, resetting both parties to idle.
    pub fn end_call(&mut self, phone: &str) -> Result<EndCallOutcome> {
        let phone_number = PhoneNumber::new(phone);
        let user = self.registry.get(&phone_number).ok_or_else(|| Error::UserNotFound(phone_number.clone()))?;

        let Some(partner_number) = user.get_call_partner().cloned() else {
            log::info!("User {} is not on a call.", phone_number);
            return Ok(EndCallOutcome::NotOnCall(phone_number));
        };

        let partner_points_back = self.registry.get(&partner_number).and_then(|partner| partner.get_call_partner()) == Some(&phone_number);

        if let Some(user) = self.registry.get_mut(&phone_number) {
            user.set_call_state(CallState::Idle);
        }

        if !partner_points_back {
            log::error!("User {} was in a call with {} but the partner does not point back.", phone_number, partner_number);
            return Err(Error::InternalInconsistency(format!("User {} is on a call but partner {} is not linked back", phone_number, partner_number)));
        }

        if let Some(partner) = self.registry.get_mut(&partner_number) {
            partner.set_call_state(CallState::Idle);
        }

        log::info!("Call between {} and {} ended.", phone_number, partner_number);
        tracing::info!(
            target: ANALYTICS_TARGET,
            Network = %self.id,
            LogDescription = "Call ended",
            User = %phone_number,
            Partner = %partner_number,
        );

        Ok(EndCallOutcome::Ended { user: phone_number, partner: partner_number })
    }

    //----------------------
    // --- Display ---
    //----------------------

    /// Structured view of the zone for presentation.
    pub fn describe(&self) -> ZoneSnapshot {
        let linked_towers = self
            .towers()
            .filter_map(|tower| self.switching_center.edge_to(tower.get_id()))
            .map(|edge| LinkSnapshot { tower: edge.destination.clone(), distance: edge.distance })
            .collect();

        let towers = self
            .towers()
            .map(|tower| TowerSnapshot {
                name: tower.get_id().clone(),
                position: tower.get_position(),
                height: tower.get_height(),
                coverage_radius: tower.get_coverage_radius(),
                connected_users: tower
                    .get_connected_users()
                    .iter()
                    .filter_map(|phone| self.registry.get(phone))
                    .map(|user| ConnectedUserSnapshot { name: user.get_name().to_string(), phone: user.get_phone().clone(), position: user.get_position() })
                    .collect(),
            })
            .collect();

        let mut users: Vec<UserSnapshot> = self
            .registry
            .all_users()
            .map(|user| UserSnapshot {
                name: user.get_name().to_string(),
                phone: user.get_phone().clone(),
                position: user.get_position(),
                zone: user.get_zone().cloned(),
                tower: user.get_current_tower().cloned(),
                call_status: user.get_call_status(),
                call_partner: user.get_call_partner().cloned(),
            })
            .collect();
        users.sort_by(|a, b| a.phone.cmp(&b.phone));

        ZoneSnapshot {
            name: self.id.clone(),
            coverage_factor: self.coverage_factor,
            switching_center: SwitchingCenterSnapshot {
                name: self.switching_center.get_id().clone(),
                position: self.switching_center.get_position(),
                registered_users: self.registry.count(),
                linked_towers,
            },
            towers,
            users,
        }
    }

    #[cfg(test)]
    pub(crate) fn registry_mut(&mut self) -> &mut TelephoneRegistry {
        &mut self.registry
    }
}

impl VertexLookup for NetworkZone {
    fn lookup(&self, id: &VertexId) -> Option<&dyn GraphVertex> {
        if id == self.switching_center.get_id() {
            return Some(&self.switching_center as &dyn GraphVertex);
        }
        self.towers.get(id).map(|tower| tower as &dyn GraphVertex)
    }
}
