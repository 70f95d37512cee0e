use serde::Serialize;
use std::fmt;

use crate::domain::geometry::Position;
use crate::domain::utils::id::{PhoneNumber, VertexId, ZoneId};
use crate::error::{Error, Result};

/// Minimum number of digits a phone number must have.
pub const MIN_PHONE_DIGITS: usize = 7;

/// The externally visible call status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Idle,
    Calling,
    Receiving,
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CallStatus::Idle => "idle",
            CallStatus::Calling => "calling",
            CallStatus::Receiving => "receiving",
        };
        write!(f, "{}", label)
    }
}

/// Call state with the partner attached to the non-idle variants,
/// so an idle user can never carry a partner and a busy one always has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallState {
    Idle,
    Calling(PhoneNumber),
    Receiving(PhoneNumber),
}

impl CallState {
    pub fn status(&self) -> CallStatus {
        match self {
            CallState::Idle => CallStatus::Idle,
            CallState::Calling(_) => CallStatus::Calling,
            CallState::Receiving(_) => CallStatus::Receiving,
        }
    }

    pub fn partner(&self) -> Option<&PhoneNumber> {
        match self {
            CallState::Idle => None,
            CallState::Calling(partner) | CallState::Receiving(partner) => Some(partner),
        }
    }
}

/// A mobile subscriber.
///
/// Relations to other entities are stored as identifiers: the tower is a `VertexId`
/// in the owning zone and the call partner is a `PhoneNumber` in the same registry.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    phone: PhoneNumber,
    position: Position,
    zone: Option<ZoneId>,
    current_tower: Option<VertexId>,
    call_state: CallState,
}

impl User {
    pub fn new(name: &str, phone: &str, position: Position) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("User name cannot be empty".to_string()));
        }
        validate_phone_number(phone)?;
        position.validate()?;

        Ok(User {
            name: name.to_string(),
            phone: PhoneNumber::new(phone),
            position,
            zone: None,
            current_tower: None,
            call_state: CallState::Idle,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_zone(&self) -> Option<&ZoneId> {
        self.zone.as_ref()
    }

    pub fn get_current_tower(&self) -> Option<&VertexId> {
        self.current_tower.as_ref()
    }

    pub fn get_call_state(&self) -> &CallState {
        &self.call_state
    }

    pub fn get_call_status(&self) -> CallStatus {
        self.call_state.status()
    }

    pub fn get_call_partner(&self) -> Option<&PhoneNumber> {
        self.call_state.partner()
    }

    pub fn is_idle(&self) -> bool {
        self.call_state == CallState::Idle
    }

    pub(crate) fn set_position(&mut self, position: Position) -> Result<()> {
        position.validate()?;
        self.position = position;
        Ok(())
    }

    pub(crate) fn set_zone(&mut self, zone: ZoneId) {
        self.zone = Some(zone);
    }

    pub(crate) fn set_current_tower(&mut self, tower: Option<VertexId>) {
        self.current_tower = tower;
    }

    pub(crate) fn set_call_state(&mut self, call_state: CallState) {
        self.call_state = call_state;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tower = self.current_tower.as_ref().map(|t| t.as_str()).unwrap_or("None");
        let zone = self.zone.as_ref().map(|z| z.as_str()).unwrap_or("None");
        write!(
            f,
            "User(Name={}, Phone={}, Pos={}, ConnectedTower={}, Network={}, Status={})",
            self.name,
            self.phone,
            self.position,
            tower,
            zone,
            self.get_call_status()
        )
    }
}

/// Phone numbers are digit strings of at least `MIN_PHONE_DIGITS` characters.
pub fn validate_phone_number(phone: &str) -> Result<()> {
    if phone.len() < MIN_PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidInput(format!(
            "Phone number '{}' must contain only digits and be at least {} digits long",
            phone, MIN_PHONE_DIGITS
        )));
    }
    Ok(())
}
