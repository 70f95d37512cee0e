use std::fmt;

use crate::domain::geometry::Position;
use crate::domain::graph::tower::Tower;
use crate::domain::graph::vertex::GraphVertex;
use crate::domain::utils::id::{PhoneNumber, VertexId};

/// Something observable that happened while a zone operation ran.
///
/// Operations return these instead of printing; the caller decides how to render them.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneEvent {
    TowerAdded { tower: VertexId, coverage_radius: f64 },
    UserRegistered { phone: PhoneNumber, name: String },
    UserMoved { phone: PhoneNumber, from: Position, to: Position },
    Connected { phone: PhoneNumber, tower: VertexId },
    Disconnected { phone: PhoneNumber, tower: VertexId },
    Handover { phone: PhoneNumber, from: VertexId, to: VertexId },
    RemainedConnected { phone: PhoneNumber, tower: VertexId },
    OutOfCoverage { phone: PhoneNumber },
    CallEstablished { caller: PhoneNumber, receiver: PhoneNumber, route: Vec<VertexId> },
    CallEnded { user: PhoneNumber, partner: PhoneNumber },
    NotOnCall { phone: PhoneNumber },
}

impl ZoneEvent {
    pub fn tower_added(tower: &Tower) -> Self {
        ZoneEvent::TowerAdded { tower: tower.get_id().clone(), coverage_radius: tower.get_coverage_radius() }
    }
}

impl fmt::Display for ZoneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneEvent::TowerAdded { tower, coverage_radius } => {
                write!(f, "Tower '{}' added with coverage radius {:.2}m", tower, coverage_radius)
            }
            ZoneEvent::UserRegistered { phone, name } => write!(f, "User {} ({}) registered", name, phone),
            ZoneEvent::UserMoved { phone, from, to } => write!(f, "User {} moved from {} to {}", phone, from, to),
            ZoneEvent::Connected { phone, tower } => write!(f, "User {} connected to tower {}", phone, tower),
            ZoneEvent::Disconnected { phone, tower } => write!(f, "User {} disconnected from tower {}", phone, tower),
            ZoneEvent::Handover { phone, from, to } => write!(f, "Handover: user {} moved from {} to {}", phone, from, to),
            ZoneEvent::RemainedConnected { phone, tower } => write!(f, "User {} remains connected to {}", phone, tower),
            ZoneEvent::OutOfCoverage { phone } => write!(f, "User {} is outside network coverage", phone),
            ZoneEvent::CallEstablished { caller, receiver, route } => {
                write!(f, "Call established from {} to {}. Routing path: {}", caller, receiver, format_route(route))
            }
            ZoneEvent::CallEnded { user, partner } => write!(f, "Call between {} and {} ended", user, partner),
            ZoneEvent::NotOnCall { phone } => write!(f, "User {} is not on a call", phone),
        }
    }
}

/// Result of running nearest-tower assignment for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityReport {
    pub phone: PhoneNumber,
    /// The tower the user ended up on, if any.
    pub tower: Option<VertexId>,
    pub events: Vec<ZoneEvent>,
}

impl ConnectivityReport {
    pub fn is_connected(&self) -> bool {
        self.tower.is_some()
    }
}

/// A successfully established call and the vertices it is routed over.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRoute {
    pub caller: PhoneNumber,
    pub receiver: PhoneNumber,
    /// caller tower -> ... -> switching center -> ... -> receiver tower
    pub hops: Vec<VertexId>,
}

impl CallRoute {
    pub fn to_event(&self) -> ZoneEvent {
        ZoneEvent::CallEstablished { caller: self.caller.clone(), receiver: self.receiver.clone(), route: self.hops.clone() }
    }
}

impl fmt::Display for CallRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_route(&self.hops))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EndCallOutcome {
    Ended { user: PhoneNumber, partner: PhoneNumber },
    NotOnCall(PhoneNumber),
}

impl EndCallOutcome {
    pub fn to_event(&self) -> ZoneEvent {
        match self {
            EndCallOutcome::Ended { user, partner } => ZoneEvent::CallEnded { user: user.clone(), partner: partner.clone() },
            EndCallOutcome::NotOnCall(phone) => ZoneEvent::NotOnCall { phone: phone.clone() },
        }
    }
}

pub fn format_route(route: &[VertexId]) -> String {
    route.iter().map(|hop| hop.as_str()).collect::<Vec<_>>().join(" -> ")
}
