//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers in the supply chain core. These
//! prevent accidental identifier confusion: you cannot pass a `BatchId`
//! where a `ContractId` is expected.
//!
//! Identifiers are caller-supplied strings. The host assigns them at
//! transaction submission time; this crate treats them as opaque keys.

use serde::{Deserialize, Serialize};

/// Unique identifier for a participant (grower, inspector, shipper, processor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub String);

/// Unique identifier for a supply chain contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub String);

/// Unique identifier for a coffee batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(pub String);

impl ParticipantId {
    /// Wrap a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ContractId {
    /// Wrap a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl BatchId {
    /// Wrap a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "participant:{}", self.0)
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "contract:{}", self.0)
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "batch:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_namespace() {
        assert_eq!(ParticipantId::new("G1").to_string(), "participant:G1");
        assert_eq!(ContractId::new("C1").to_string(), "contract:C1");
        assert_eq!(BatchId::new("B1").to_string(), "batch:B1");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Equality only compares within one identifier namespace.
        let a = ContractId::new("X");
        let b = ContractId::new("X");
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let id = BatchId::new("B-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"B-42\"");
        let parsed: BatchId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
