use serde::Serialize;

use crate::domain::geometry::Position;
use crate::domain::user::CallStatus;
use crate::domain::utils::id::{PhoneNumber, VertexId, ZoneId};

/// Point-in-time view of a zone, produced by `NetworkZone::describe`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSnapshot {
    pub name: ZoneId,
    pub coverage_factor: f64,
    pub switching_center: SwitchingCenterSnapshot,
    /// Towers in the order they were added.
    pub towers: Vec<TowerSnapshot>,
    /// All registered users, sorted by phone number.
    pub users: Vec<UserSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchingCenterSnapshot {
    pub name: VertexId,
    pub position: Position,
    pub registered_users: usize,
    pub linked_towers: Vec<LinkSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSnapshot {
    pub tower: VertexId,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerSnapshot {
    pub name: VertexId,
    pub position: Position,
    pub height: f64,
    pub coverage_radius: f64,
    pub connected_users: Vec<ConnectedUserSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedUserSnapshot {
    pub name: String,
    pub phone: PhoneNumber,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub name: String,
    pub phone: PhoneNumber,
    pub position: Position,
    pub zone: Option<ZoneId>,
    pub tower: Option<VertexId>,
    pub call_status: CallStatus,
    pub call_partner: Option<PhoneNumber>,
}

/// One line of the directory overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSummary {
    pub name: ZoneId,
    pub tower_count: usize,
    pub user_count: usize,
}
