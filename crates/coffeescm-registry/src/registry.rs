//! # Registry Trait and Errors
//!
//! One registry holds entities of one kind. Lookups return an owned copy
//! of the stored entity: callers mutate the copy and write it back with
//! `update`, matching the fetch-mutate-persist cycle of the host ledger.

use thiserror::Error;

/// The kinds of entity a registry can hold. Used to name the entity kind
/// in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A supply chain participant.
    Participant,
    /// A supply chain contract.
    Contract,
    /// A coffee batch.
    Batch,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Participant => "participant",
            Self::Contract => "contract",
            Self::Batch => "batch",
        };
        f.write_str(s)
    }
}

/// Errors from registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No entity with the given identifier.
    #[error("{kind} {id:?} does not exist")]
    NotFound {
        /// Kind of entity that was looked up.
        kind: EntityKind,
        /// The identifier that missed.
        id: String,
    },

    /// An entity with the given identifier is already present.
    #[error("{kind} {id:?} already exists")]
    AlreadyExists {
        /// Kind of entity that collided.
        kind: EntityKind,
        /// The identifier that collided.
        id: String,
    },
}

/// A keyed store of entities of one kind.
///
/// This is the collaborator contract the host provides. `add` fails if the
/// identifier is already present; `update` fails if it is absent. Each call
/// is atomic at the entity level.
pub trait Registry<T> {
    /// Whether an entity with this identifier exists.
    fn exists(&self, id: &str) -> bool;

    /// Fetch a copy of the entity.
    fn get(&self, id: &str) -> Result<T, RegistryError>;

    /// Insert a new entity under `id`.
    fn add(&mut self, id: &str, entity: T) -> Result<(), RegistryError>;

    /// Replace the entity stored under `id`.
    fn update(&mut self, id: &str, entity: T) -> Result<(), RegistryError>;
}
