//! # Transaction Requests
//!
//! One structured request type per supply chain event. All identifiers
//! are caller-supplied; timestamps are caller-supplied and not checked
//! for plausibility.

use serde::{Deserialize, Serialize};

use coffeescm_core::{BatchId, ContractId, ParticipantId, Timestamp};

/// Open a contract and create its batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContract {
    /// Identifier for the new contract.
    pub contract_id: ContractId,
    /// Identifier for the new batch.
    pub batch_id: BatchId,
    /// The grower opening the contract.
    pub grower: ParticipantId,
    /// Contract creation time.
    pub timestamp: Timestamp,
}

/// Attach one or more participants to an existing contract.
///
/// At least one of the three slots must be supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddParticipants {
    /// The contract to update.
    pub contract_id: ContractId,
    /// Farm inspector to attach, if any.
    pub farm_inspector: Option<ParticipantId>,
    /// Shipper to attach, if any.
    pub shipper: Option<ParticipantId>,
    /// Processor to attach, if any.
    pub processor: Option<ParticipantId>,
}

/// Record the farm inspection for a contract's batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectBatch {
    /// The contract whose batch is inspected.
    pub contract_id: ContractId,
    /// Seed variety planted.
    pub type_of_seed: String,
    /// Coffee family (e.g., arabica).
    pub coffee_family: String,
    /// Fertilizers applied during growing.
    pub fertilizers_used: String,
}

/// Record the harvest for a contract's batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestBatch {
    /// The contract whose batch is harvested.
    pub contract_id: ContractId,
    /// Harvest time.
    pub timestamp: Timestamp,
}

/// Record the shipping manifest for a contract's batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipBatch {
    /// The contract whose batch ships.
    pub contract_id: ContractId,
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
    /// Estimated arrival time.
    pub estimated_delivery: Timestamp,
}

/// Record the packaging details for a contract's batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessBatch {
    /// The contract whose batch is processed.
    pub contract_id: ContractId,
    /// When the batch was packaged.
    pub packaging_timestamp: Timestamp,
    /// Number of packages produced.
    pub packaged_count: u32,
    /// Roasting temperature in degrees Celsius.
    pub temperature_celsius: i32,
    /// Roasting duration, free-form.
    pub roasting_time: String,
}
