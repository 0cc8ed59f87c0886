//! # Contract Relationship Model
//!
//! A contract ties a batch to the participants who move it through the
//! pipeline. The grower and the batch are fixed at creation; the farm
//! inspector, shipper, and processor are attached later, each at most
//! once.
//!
//! Relationship slots are explicit optional fields behind a closed
//! `ContractRole` enum, so a `match` over the slots is exhaustive and a
//! misspelled relationship name cannot exist. A relationship is a
//! reference to the participant's identifier; the participant itself is
//! owned by its registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use coffeescm_core::{BatchId, ContractId, ParticipantId, ParticipantRole, Timestamp};

// ─── Contract Roles ──────────────────────────────────────────────────

/// The three participant slots that can be attached to a contract after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractRole {
    /// Inspects the crop before harvest.
    FarmInspector,
    /// Transports the harvested batch.
    Shipper,
    /// Roasts and packages the shipped batch.
    Processor,
}

impl ContractRole {
    /// The participant role a candidate must hold to fill this slot.
    pub fn required_participant_role(&self) -> ParticipantRole {
        match self {
            Self::FarmInspector => ParticipantRole::FarmInspector,
            Self::Shipper => ParticipantRole::Shipper,
            Self::Processor => ParticipantRole::Processor,
        }
    }
}

impl std::fmt::Display for ContractRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FarmInspector => "farm inspector",
            Self::Shipper => "shipper",
            Self::Processor => "processor",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from contract relationship checks.
#[derive(Error, Debug)]
pub enum ContractError {
    /// A required relationship slot is not set.
    #[error("{contract} has no {relation} attached")]
    MissingRelationship {
        /// The contract that was checked.
        contract: ContractId,
        /// The slot that is unset.
        relation: ContractRole,
    },

    /// A relationship slot is already set; slots are assigned exactly once.
    #[error("{contract} already has a {relation} attached")]
    DuplicateRelationship {
        /// The contract that was checked.
        contract: ContractId,
        /// The slot that is already occupied.
        relation: ContractRole,
    },
}

// ─── Contract ────────────────────────────────────────────────────────

/// A supply chain contract.
///
/// The optional slots are private: `assign` is the only writer, and it
/// rejects re-assignment. The grower and batch references are fixed at
/// construction and always present, so "is the grower attached" is a
/// compile-time fact rather than a runtime check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique contract identifier.
    pub id: ContractId,
    /// Caller-supplied creation time.
    pub created_at: Timestamp,
    /// The grower who opened the contract.
    pub grower: ParticipantId,
    /// The batch created together with this contract.
    pub batch: BatchId,

    farm_inspector: Option<ParticipantId>,
    shipper: Option<ParticipantId>,
    processor: Option<ParticipantId>,
}

impl Contract {
    /// Create a contract referencing its grower and batch.
    pub fn new(
        id: ContractId,
        created_at: Timestamp,
        grower: ParticipantId,
        batch: BatchId,
    ) -> Self {
        Self {
            id,
            created_at,
            grower,
            batch,
            farm_inspector: None,
            shipper: None,
            processor: None,
        }
    }

    /// The participant attached to the given slot, if any.
    pub fn assigned(&self, relation: ContractRole) -> Option<&ParticipantId> {
        self.slot(relation).as_ref()
    }

    /// Require that a slot is set, returning the attached participant.
    pub fn require_assigned(&self, relation: ContractRole) -> Result<&ParticipantId, ContractError> {
        self.slot(relation)
            .as_ref()
            .ok_or_else(|| ContractError::MissingRelationship {
                contract: self.id.clone(),
                relation,
            })
    }

    /// Require that a slot is still free.
    pub fn require_unassigned(&self, relation: ContractRole) -> Result<(), ContractError> {
        if self.slot(relation).is_some() {
            return Err(ContractError::DuplicateRelationship {
                contract: self.id.clone(),
                relation,
            });
        }
        Ok(())
    }

    /// Attach a participant to a slot. Rejects if the slot is occupied.
    pub fn assign(
        &mut self,
        relation: ContractRole,
        participant: ParticipantId,
    ) -> Result<(), ContractError> {
        self.require_unassigned(relation)?;
        *self.slot_mut(relation) = Some(participant);
        Ok(())
    }

    fn slot(&self, relation: ContractRole) -> &Option<ParticipantId> {
        match relation {
            ContractRole::FarmInspector => &self.farm_inspector,
            ContractRole::Shipper => &self.shipper,
            ContractRole::Processor => &self.processor,
        }
    }

    fn slot_mut(&mut self, relation: ContractRole) -> &mut Option<ParticipantId> {
        match relation {
            ContractRole::FarmInspector => &mut self.farm_inspector,
            ContractRole::Shipper => &mut self.shipper,
            ContractRole::Processor => &mut self.processor,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_contract() -> Contract {
        Contract::new(
            ContractId::new("C1"),
            Timestamp::parse("2024-05-01T10:00:00Z").unwrap(),
            ParticipantId::new("G1"),
            BatchId::new("B1"),
        )
    }

    #[test]
    fn test_new_contract_has_no_optional_slots() {
        let contract = make_contract();
        assert!(contract.assigned(ContractRole::FarmInspector).is_none());
        assert!(contract.assigned(ContractRole::Shipper).is_none());
        assert!(contract.assigned(ContractRole::Processor).is_none());
    }

    #[test]
    fn test_assign_then_read_back() {
        let mut contract = make_contract();
        contract
            .assign(ContractRole::Shipper, ParticipantId::new("S1"))
            .unwrap();
        assert_eq!(
            contract.assigned(ContractRole::Shipper),
            Some(&ParticipantId::new("S1"))
        );
        // Other slots are unaffected.
        assert!(contract.assigned(ContractRole::Processor).is_none());
    }

    #[test]
    fn test_assign_twice_is_rejected() {
        let mut contract = make_contract();
        contract
            .assign(ContractRole::FarmInspector, ParticipantId::new("FI1"))
            .unwrap();
        let err = contract
            .assign(ContractRole::FarmInspector, ParticipantId::new("FI2"))
            .unwrap_err();
        assert!(matches!(err, ContractError::DuplicateRelationship { .. }));
        // No overwrite: the original assignment survives.
        assert_eq!(
            contract.assigned(ContractRole::FarmInspector),
            Some(&ParticipantId::new("FI1"))
        );
    }

    #[test]
    fn test_require_assigned_on_empty_slot() {
        let contract = make_contract();
        let err = contract
            .require_assigned(ContractRole::Processor)
            .unwrap_err();
        assert!(matches!(err, ContractError::MissingRelationship { .. }));
        assert!(err.to_string().contains("processor"));
    }

    #[test]
    fn test_require_unassigned_on_free_slot() {
        let contract = make_contract();
        assert!(contract.require_unassigned(ContractRole::Shipper).is_ok());
    }

    #[test]
    fn test_required_participant_roles() {
        use coffeescm_core::ParticipantRole;
        assert_eq!(
            ContractRole::FarmInspector.required_participant_role(),
            ParticipantRole::FarmInspector
        );
        assert_eq!(
            ContractRole::Shipper.required_participant_role(),
            ParticipantRole::Shipper
        );
        assert_eq!(
            ContractRole::Processor.required_participant_role(),
            ParticipantRole::Processor
        );
    }

    #[test]
    fn test_serde_round_trip_preserves_slots() {
        let mut contract = make_contract();
        contract
            .assign(ContractRole::Processor, ParticipantId::new("P1"))
            .unwrap();
        let json = serde_json::to_string(&contract).unwrap();
        let parsed: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.assigned(ContractRole::Processor),
            Some(&ParticipantId::new("P1"))
        );
        assert_eq!(parsed.grower, contract.grower);
        assert_eq!(parsed.batch, contract.batch);
    }
}
