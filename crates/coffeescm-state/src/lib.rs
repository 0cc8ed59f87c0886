//! # coffeescm-state — Supply Chain Lifecycle State Machines
//!
//! Implements the entity state of the coffee supply chain core.
//!
//! ## State Machines
//!
//! - **Batch** (`batch.rs`): the five-stage batch lifecycle
//!   `Growing → Inspection → Harvested → Shipping → Processing`, with one
//!   transition method per edge and an append-only transition log.
//!
//! - **Contract** (`contract.rs`): the contract relationship model. Each
//!   optional participant slot (farm inspector, shipper, processor) is an
//!   explicit field that can be assigned exactly once.
//!
//! ## Design
//!
//! Statuses and relationship slots are closed enums, not strings. Every
//! transition method checks the exact required prior status and leaves the
//! entity untouched on rejection. Stage data (seed details, shipping
//! manifest, processing record) is written by the transition that produces
//! it and never reset.

pub mod batch;
pub mod contract;

// ─── Batch re-exports ───────────────────────────────────────────────

pub use batch::{
    Batch, BatchStatus, InspectionRecord, ProcessingRecord, ShippingRecord, StatusError,
    StatusTransitionRecord,
};

// ─── Contract re-exports ────────────────────────────────────────────

pub use contract::{Contract, ContractError, ContractRole};
