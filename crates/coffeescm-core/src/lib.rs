//! # coffeescm-core — Foundational Types for the Coffee Supply Chain Core
//!
//! This crate is the bedrock of the workspace. It defines the primitives
//! every other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `ParticipantId`, `ContractId`,
//!    `BatchId` are distinct types over caller-supplied strings. You cannot
//!    pass a batch identifier where a contract identifier is expected.
//!
//! 2. **Closed role enumeration.** `ParticipantRole` has exactly four
//!    variants and every `match` on it is exhaustive. There are no loose
//!    role strings anywhere in the workspace.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Timestamps are caller-supplied and not
//!    validated for plausibility; only their form is checked.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `coffeescm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod identity;
pub mod participant;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use identity::{BatchId, ContractId, ParticipantId};
pub use participant::{Participant, ParticipantRole, UnknownRoleError};
pub use temporal::{Timestamp, TimestampError};
