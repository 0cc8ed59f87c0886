//! # Precondition Guards
//!
//! Pure checks shared by the transaction handlers. Each guard either
//! passes or fails with a typed error; none has side effects. Guards run
//! strictly in the sequence the handler dictates, because later checks
//! rely on earlier ones having passed (a relationship slot must be proven
//! free before the candidate participant is even looked up).

use coffeescm_core::{Participant, ParticipantId, ParticipantRole};
use coffeescm_registry::Registry;
use coffeescm_state::{Batch, BatchStatus};

use crate::error::TxError;

/// Look up a participant, failing with `NotFound` if absent.
pub fn require_participant<P: Registry<Participant>>(
    participants: &P,
    id: &ParticipantId,
) -> Result<Participant, TxError> {
    Ok(participants.get(id.as_str())?)
}

/// Require that a participant holds an exact role.
pub fn require_role(participant: &Participant, required: ParticipantRole) -> Result<(), TxError> {
    if participant.role != required {
        return Err(TxError::Unauthorized {
            participant: participant.id.clone(),
            required,
            actual: participant.role,
        });
    }
    Ok(())
}

/// Require that a batch is in an exact status.
pub fn require_status(batch: &Batch, expected: BatchStatus) -> Result<(), TxError> {
    batch.require_status(expected)?;
    Ok(())
}
