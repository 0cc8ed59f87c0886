//! # Participants and Roles
//!
//! Defines the `ParticipantRole` enumeration and the `Participant` record.
//! This is the one role definition used across the entire workspace; every
//! `match` on `ParticipantRole` must be exhaustive, so adding a role forces
//! every consumer to handle it at compile time.
//!
//! Participants are provisioned externally (identity issuance is the host's
//! concern). A participant's role is immutable for the lifetime of the
//! entity: there is no API to change it after construction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::identity::ParticipantId;

/// The four supply chain roles.
///
/// Canonical string names are SCREAMING_SNAKE_CASE, matching the wire
/// form used by the host network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantRole {
    /// Grows the coffee and harvests the batch.
    Grower,
    /// Inspects the crop before harvest and records seed details.
    // The host network spells this role as a single word.
    #[serde(rename = "FARMINSPECTOR")]
    FarmInspector,
    /// Transports the harvested batch to the processor.
    Shipper,
    /// Roasts and packages the shipped batch.
    Processor,
}

impl ParticipantRole {
    /// Returns the canonical role name (e.g., "GROWER").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grower => "GROWER",
            Self::FarmInspector => "FARMINSPECTOR",
            Self::Shipper => "SHIPPER",
            Self::Processor => "PROCESSOR",
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized role name.
#[derive(Error, Debug)]
#[error("unknown participant role: {0:?}")]
pub struct UnknownRoleError(pub String);

impl FromStr for ParticipantRole {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GROWER" => Ok(Self::Grower),
            "FARMINSPECTOR" => Ok(Self::FarmInspector),
            "SHIPPER" => Ok(Self::Shipper),
            "PROCESSOR" => Ok(Self::Processor),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}

/// A registered supply chain participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique participant identifier.
    pub id: ParticipantId,
    /// Human-readable name.
    pub name: String,
    /// The participant's role. Immutable once assigned.
    pub role: ParticipantRole,
}

impl Participant {
    /// Construct a participant record.
    pub fn new(id: ParticipantId, name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }
}
