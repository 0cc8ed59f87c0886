//! # Batch Lifecycle State Machine
//!
//! Models a coffee batch as it moves through the supply chain.
//!
//! ## States
//!
//! ```text
//! Growing ──inspect──▶ Inspection ──harvest──▶ Harvested ──ship──▶ Shipping ──process──▶ Processing
//! ```
//!
//! `Growing` is the initial status, set at creation. `Processing` is
//! terminal. There are exactly four edges, each advanced by exactly one
//! method; no method may skip or reverse a stage.
//!
//! ## Stage Data
//!
//! Each transition records the data its stage produces: inspection writes
//! the seed details, harvest the harvest time, shipping the manifest,
//! processing the packaging record. Fields are written exactly once and
//! never reset. Every applied transition is also appended to an ordered
//! transition log for audit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use coffeescm_core::{BatchId, ContractId, Timestamp};

// ─── Batch Status ────────────────────────────────────────────────────

/// The lifecycle status of a batch.
///
/// Variant order is lifecycle order; the derived `Ord` reflects how far
/// a batch has progressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Crop is in the ground; the batch was just created.
    Growing,
    /// Farm inspector has recorded the seed details.
    Inspection,
    /// Crop has been harvested.
    Harvested,
    /// Batch is in transit to the processor.
    Shipping,
    /// Batch has been roasted and packaged (terminal).
    Processing,
}

impl BatchStatus {
    /// Returns the canonical status name (e.g., "GROWING").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Growing => "GROWING",
            Self::Inspection => "INSPECTION",
            Self::Harvested => "HARVESTED",
            Self::Shipping => "SHIPPING",
            Self::Processing => "PROCESSING",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Processing)
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from batch status preconditions.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The batch is not in the exact status the operation requires.
    #[error("{batch} is {actual}, operation requires {expected}")]
    NotInStatus {
        /// The batch that was checked.
        batch: BatchId,
        /// Status the operation requires.
        expected: BatchStatus,
        /// Status the batch is actually in.
        actual: BatchStatus,
    },
}

// ─── Stage Records ───────────────────────────────────────────────────

/// Seed details recorded by the farm inspection (GROWING → INSPECTION).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// Seed variety planted.
    pub type_of_seed: String,
    /// Coffee family (e.g., arabica, robusta).
    pub coffee_family: String,
    /// Fertilizers applied during growing.
    pub fertilizers_used: String,
}

/// Shipping manifest recorded at dispatch (HARVESTED → SHIPPING).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingRecord {
    /// Warehouse the batch ships from.
    pub warehouse_name: String,
    /// Warehouse street address.
    pub warehouse_address: String,
    /// Name of the carrying vessel.
    pub ship_name: String,
    /// Vessel identifier.
    pub ship_id: String,
    /// Quantity shipped, in bags.
    pub shipping_quantity: u32,
    /// Caller-supplied estimated arrival time.
    pub estimated_delivery: Timestamp,
}

/// Packaging record written by the processor (SHIPPING → PROCESSING).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingRecord {
    /// When the batch was packaged.
    pub packaged_at: Timestamp,
    /// Number of packages produced.
    pub packaged_count: u32,
    /// Roasting temperature in degrees Celsius.
    pub temperature_celsius: i32,
    /// Roasting duration, free-form (e.g., "12m30s").
    pub roasting_time: String,
}

/// Record of a single applied status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTransitionRecord {
    /// Status before the transition.
    pub from_status: BatchStatus,
    /// Status after the transition.
    pub to_status: BatchStatus,
    /// When the transition was applied (wall clock, UTC).
    pub timestamp: Timestamp,
}

// ─── Batch ───────────────────────────────────────────────────────────

/// A coffee batch with its lifecycle status, stage data, and transition log.
///
/// The transition methods are the only sanctioned writers of `status`;
/// each one checks the exact required prior status and appends to the
/// transition log on success. A rejected transition leaves the batch
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: BatchId,
    /// The contract this batch belongs to.
    pub contract: ContractId,
    /// Current lifecycle status.
    pub status: BatchStatus,

    /// Seed variety, set at inspection.
    pub type_of_seed: Option<String>,
    /// Coffee family, set at inspection.
    pub coffee_family: Option<String>,
    /// Fertilizers applied, set at inspection.
    pub fertilizers_used: Option<String>,

    /// Harvest time, set at harvest.
    pub harvested_at: Option<Timestamp>,

    /// Origin warehouse, set at shipping.
    pub warehouse_name: Option<String>,
    /// Origin warehouse address, set at shipping.
    pub warehouse_address: Option<String>,
    /// Carrying vessel name, set at shipping.
    pub ship_name: Option<String>,
    /// Carrying vessel identifier, set at shipping.
    pub ship_id: Option<String>,
    /// Quantity shipped in bags, set at shipping.
    pub shipping_quantity: Option<u32>,
    /// Estimated arrival time, set at shipping.
    pub estimated_delivery: Option<Timestamp>,

    /// Packaging time, set at processing.
    pub packaged_at: Option<Timestamp>,
    /// Package count, set at processing.
    pub packaged_count: Option<u32>,
    /// Roasting temperature in degrees Celsius, set at processing.
    pub temperature_celsius: Option<i32>,
    /// Roasting duration, set at processing.
    pub roasting_time: Option<String>,

    /// Ordered log of all applied status transitions.
    pub transitions: Vec<StatusTransitionRecord>,
}

impl Batch {
    /// Create a new batch in `Growing` status.
    ///
    /// Creation is not recorded as a transition; the log starts empty.
    pub fn new(id: BatchId, contract: ContractId) -> Self {
        Self {
            id,
            contract,
            status: BatchStatus::Growing,
            type_of_seed: None,
            coffee_family: None,
            fertilizers_used: None,
            harvested_at: None,
            warehouse_name: None,
            warehouse_address: None,
            ship_name: None,
            ship_id: None,
            shipping_quantity: None,
            estimated_delivery: None,
            packaged_at: None,
            packaged_count: None,
            temperature_celsius: None,
            roasting_time: None,
            transitions: Vec::new(),
        }
    }

    /// Record the farm inspection (GROWING → INSPECTION).
    pub fn begin_inspection(&mut self, record: InspectionRecord) -> Result<(), StatusError> {
        self.require_status(BatchStatus::Growing)?;
        self.type_of_seed = Some(record.type_of_seed);
        self.coffee_family = Some(record.coffee_family);
        self.fertilizers_used = Some(record.fertilizers_used);
        self.advance(BatchStatus::Inspection);
        Ok(())
    }

    /// Record the harvest (INSPECTION → HARVESTED).
    pub fn harvest(&mut self, harvested_at: Timestamp) -> Result<(), StatusError> {
        self.require_status(BatchStatus::Inspection)?;
        self.harvested_at = Some(harvested_at);
        self.advance(BatchStatus::Harvested);
        Ok(())
    }

    /// Record the shipping manifest (HARVESTED → SHIPPING).
    pub fn ship(&mut self, record: ShippingRecord) -> Result<(), StatusError> {
        self.require_status(BatchStatus::Harvested)?;
        self.warehouse_name = Some(record.warehouse_name);
        self.warehouse_address = Some(record.warehouse_address);
        self.ship_name = Some(record.ship_name);
        self.ship_id = Some(record.ship_id);
        self.shipping_quantity = Some(record.shipping_quantity);
        self.estimated_delivery = Some(record.estimated_delivery);
        self.advance(BatchStatus::Shipping);
        Ok(())
    }

    /// Record the packaging details (SHIPPING → PROCESSING).
    pub fn process(&mut self, record: ProcessingRecord) -> Result<(), StatusError> {
        self.require_status(BatchStatus::Shipping)?;
        self.packaged_at = Some(record.packaged_at);
        self.packaged_count = Some(record.packaged_count);
        self.temperature_celsius = Some(record.temperature_celsius);
        self.roasting_time = Some(record.roasting_time);
        self.advance(BatchStatus::Processing);
        Ok(())
    }

    /// Whether the batch has reached the end of the pipeline.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Validate that the batch is in the expected status.
    pub fn require_status(&self, expected: BatchStatus) -> Result<(), StatusError> {
        if self.status != expected {
            return Err(StatusError::NotInStatus {
                batch: self.id.clone(),
                expected,
                actual: self.status,
            });
        }
        Ok(())
    }

    /// Record a status transition.
    fn advance(&mut self, to: BatchStatus) {
        self.transitions.push(StatusTransitionRecord {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
        });
        self.status = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
