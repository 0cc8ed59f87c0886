//! # coffeescm-tx — Supply Chain Transaction Handlers
//!
//! The business logic layer: one handler per supply chain event, each
//! composing precondition guards, the batch state machine, and registry
//! writes.
//!
//! ## Control Flow
//!
//! A handler receives a request, runs its checks strictly in sequence
//! against current registry state, computes the next entity state through
//! the `coffeescm-state` types, and writes the result back. A failed check
//! aborts the handler immediately with a structured error; there is no
//! retry and no internal concurrency. Per-entity serialization of
//! concurrent submissions is the host's responsibility.
//!
//! ## Errors
//!
//! Error kinds stay distinguishable end-to-end: [`TxError`] wraps the
//! registry, contract, and status errors rather than flattening them into
//! a single failure string. Rejections are additionally logged through
//! `tracing` with the offending entity in the message.

pub mod error;
pub mod handler;
pub mod request;
pub mod validate;

pub use error::TxError;
pub use handler::SupplyChain;
pub use request::{
    AddParticipants, CreateContract, HarvestBatch, InspectBatch, ProcessBatch, ShipBatch,
};
