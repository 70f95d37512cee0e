use std::collections::BTreeSet;
use std::fmt;

use crate::domain::geometry::Position;
use crate::domain::graph::vertex::{GraphVertex, VertexBase};
use crate::domain::user::User;
use crate::domain::utils::id::{PhoneNumber, VertexId};
use crate::error::{Error, Result};

/// Coverage radius per unit of tower height.
pub const COVERAGE_FACTOR: f64 = 50.0;

/// A radio tower. Its coverage radius is derived from its height once, at construction.
#[derive(Debug, Clone)]
pub struct Tower {
    base: VertexBase,
    height: f64,
    coverage_radius: f64,

    /// Phone numbers of the users currently attached to this tower.
    connected_users: BTreeSet<PhoneNumber>,
}

impl Tower {
    pub fn new(id: VertexId, position: Position, height: f64, coverage_factor: f64) -> Result<Self> {
        if id.as_str().trim().is_empty() {
            return Err(Error::InvalidInput("Tower name cannot be empty".to_string()));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidInput(format!("Tower height must be a positive number, got {}", height)));
        }
        position.validate()?;

        Ok(Tower { base: VertexBase::new(id, position), height, coverage_radius: height * coverage_factor, connected_users: BTreeSet::new() })
    }

    pub fn get_height(&self) -> f64 {
        self.height
    }

    pub fn get_coverage_radius(&self) -> f64 {
        self.coverage_radius
    }

    pub fn get_connected_users(&self) -> &BTreeSet<PhoneNumber> {
        &self.connected_users
    }

    pub fn is_connected(&self, phone: &PhoneNumber) -> bool {
        self.connected_users.contains(phone)
    }

    /// Attaches `user` to this tower and points the user back at it.
    ///
    /// Returns `false` if the user was already attached.
    pub fn connect_user(&mut self, user: &mut User) -> bool {
        if !self.connected_users.insert(user.get_phone().clone()) {
            return false;
        }
        user.set_current_tower(Some(self.base.id.clone()));
        log::debug!("User {} ({}) connected to tower {}.", user.get_name(), user.get_phone(), self.base.id);
        true
    }

    /// Detaches `user` from this tower and clears the user's tower reference.
    ///
    /// Returns `false` if the user was not attached.
    pub fn disconnect_user(&mut self, user: &mut User) -> bool {
        if !self.connected_users.remove(user.get_phone()) {
            return false;
        }
        user.set_current_tower(None);
        log::debug!("User {} ({}) disconnected from tower {}.", user.get_name(), user.get_phone(), self.base.id);
        true
    }
}

impl GraphVertex for Tower {
    fn base(&self) -> &VertexBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VertexBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Tower"
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tower({}, Pos={}, Height={}, Coverage={:.2}m)", self.base.id, self.base.position, self.height, self.coverage_radius)
    }
}
