use thiserror::Error;

use crate::domain::user::CallStatus;
use crate::domain::utils::id::{PhoneNumber, VertexId};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Name '{0}' is already in use")]
    DuplicateName(String),

    #[error("A user with phone number {0} is already registered")]
    DuplicatePhone(PhoneNumber),

    #[error("Coverage of tower '{tower}' overlaps with tower '{existing}'")]
    CoverageOverlap { tower: VertexId, existing: VertexId },

    #[error("User with phone number {0} not found")]
    UserNotFound(PhoneNumber),

    #[error("User {0} cannot call themselves")]
    SelfCall(PhoneNumber),

    #[error("User {phone} is busy (status: {status})")]
    UserBusy { phone: PhoneNumber, status: CallStatus },

    #[error("User {0} is outside network coverage")]
    OutOfCoverage(PhoneNumber),

    #[error("No route from tower '{0}' to the switching center")]
    NoRoute(VertexId),

    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}

pub type Result<T> = std::result::Result<T, Error>;
