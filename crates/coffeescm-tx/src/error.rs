//! Top-level transaction error type.

use thiserror::Error;

use coffeescm_core::{ParticipantId, ParticipantRole};
use coffeescm_registry::RegistryError;
use coffeescm_state::{ContractError, StatusError};

/// Everything a transaction handler can reject with.
///
/// Lower-level error enums are wrapped, not flattened, so callers can
/// match on the exact kind (missing entity, occupied relationship slot,
/// wrong status, wrong role).
#[derive(Error, Debug)]
pub enum TxError {
    /// Missing or duplicate entity in a registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Relationship slot violation on a contract.
    #[error("contract error: {0}")]
    Contract(#[from] ContractError),

    /// Batch not in the status the operation requires.
    #[error("status error: {0}")]
    Status(#[from] StatusError),

    /// The acting participant does not hold the required role.
    #[error("{participant} is not authorized: requires role {required}, has {actual}")]
    Unauthorized {
        /// The participant that was checked.
        participant: ParticipantId,
        /// Role the operation requires.
        required: ParticipantRole,
        /// Role the participant actually holds.
        actual: ParticipantRole,
    },

    /// The request itself is malformed.
    #[error("invalid request: {0}")]
    Validation(String),
}
