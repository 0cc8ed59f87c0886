//! # Transaction Handlers
//!
//! One method per supply chain event, composed over three injected
//! registries. Checks run in a fixed sequence per operation; the first
//! failure aborts the handler with a structured error and the affected
//! entities keep their prior state (except where per-role commit applies,
//! see [`SupplyChain::add_participants`]).

use coffeescm_core::{Participant, ParticipantRole};
use coffeescm_registry::{EntityKind, Registry, RegistryError};
use coffeescm_state::{
    Batch, BatchStatus, Contract, ContractRole, InspectionRecord, ProcessingRecord, ShippingRecord,
};

use crate::error::TxError;
use crate::request::{
    AddParticipants, CreateContract, HarvestBatch, InspectBatch, ProcessBatch, ShipBatch,
};
use crate::validate;

/// Log a rejected transaction and pass the error through unchanged.
fn rejected(op: &'static str) -> impl FnOnce(TxError) -> TxError {
    move |err| {
        tracing::warn!(op, %err, "transaction rejected");
        err
    }
}

/// The supply chain transaction service.
///
/// Generic over its registries: the host injects its own ledger-backed
/// implementations, tests inject `MemoryRegistry`. Handlers are
/// synchronous and run to completion; serialization of concurrent
/// submissions per entity is the host's concern.
#[derive(Debug)]
pub struct SupplyChain<P, C, B>
where
    P: Registry<Participant>,
    C: Registry<Contract>,
    B: Registry<Batch>,
{
    participants: P,
    contracts: C,
    batches: B,
}

impl<P, C, B> SupplyChain<P, C, B>
where
    P: Registry<Participant>,
    C: Registry<Contract>,
    B: Registry<Batch>,
{
    /// Build the service over its registries.
    pub fn new(participants: P, contracts: C, batches: B) -> Self {
        Self {
            participants,
            contracts,
            batches,
        }
    }

    /// The participant registry.
    pub fn participants(&self) -> &P {
        &self.participants
    }

    /// The contract registry.
    pub fn contracts(&self) -> &C {
        &self.contracts
    }

    /// The batch registry.
    pub fn batches(&self) -> &B {
        &self.batches
    }

    /// Open a contract and create its batch, atomically.
    ///
    /// The grower must exist and hold the GROWER role; neither identifier
    /// may be taken. All checks complete before either write, so a
    /// rejection persists nothing.
    pub fn create_contract(&mut self, req: CreateContract) -> Result<(), TxError> {
        self.apply_create_contract(req)
            .map_err(rejected("create_contract"))
    }

    /// Attach participants to a contract, in the fixed order farm
    /// inspector, shipper, processor.
    ///
    /// Each supplied role is validated and persisted independently: the
    /// contract update is written after every accepted role, and the first
    /// failing role aborts the call leaving earlier assignments committed.
    pub fn add_participants(&mut self, req: AddParticipants) -> Result<(), TxError> {
        self.apply_add_participants(req)
            .map_err(rejected("add_participants"))
    }

    /// Record the farm inspection; the batch moves GROWING → INSPECTION.
    pub fn inspect_batch(&mut self, req: InspectBatch) -> Result<(), TxError> {
        self.apply_inspect_batch(req)
            .map_err(rejected("inspect_batch"))
    }

    /// Record the harvest; the batch moves INSPECTION → HARVESTED.
    pub fn harvest_batch(&mut self, req: HarvestBatch) -> Result<(), TxError> {
        self.apply_harvest_batch(req)
            .map_err(rejected("harvest_batch"))
    }

    /// Record the shipping manifest; the batch moves HARVESTED → SHIPPING.
    pub fn ship_batch(&mut self, req: ShipBatch) -> Result<(), TxError> {
        self.apply_ship_batch(req).map_err(rejected("ship_batch"))
    }

    /// Record the packaging details; the batch moves SHIPPING → PROCESSING.
    pub fn process_batch(&mut self, req: ProcessBatch) -> Result<(), TxError> {
        self.apply_process_batch(req)
            .map_err(rejected("process_batch"))
    }

    fn apply_create_contract(&mut self, req: CreateContract) -> Result<(), TxError> {
        let CreateContract {
            contract_id,
            batch_id,
            grower,
            timestamp,
        } = req;

        let grower_record = validate::require_participant(&self.participants, &grower)?;
        validate::require_role(&grower_record, ParticipantRole::Grower)?;

        if self.batches.exists(batch_id.as_str()) {
            return Err(RegistryError::AlreadyExists {
                kind: EntityKind::Batch,
                id: batch_id.as_str().to_string(),
            }
            .into());
        }
        if self.contracts.exists(contract_id.as_str()) {
            return Err(RegistryError::AlreadyExists {
                kind: EntityKind::Contract,
                id: contract_id.as_str().to_string(),
            }
            .into());
        }

        let batch = Batch::new(batch_id.clone(), contract_id.clone());
        let contract = Contract::new(contract_id.clone(), timestamp, grower, batch_id.clone());

        self.batches.add(batch_id.as_str(), batch)?;
        self.contracts.add(contract_id.as_str(), contract)?;

        tracing::info!(contract = %contract_id, batch = %batch_id, "contract created, batch growing");
        Ok(())
    }

    fn apply_add_participants(&mut self, req: AddParticipants) -> Result<(), TxError> {
        let AddParticipants {
            contract_id,
            farm_inspector,
            shipper,
            processor,
        } = req;

        if farm_inspector.is_none() && shipper.is_none() && processor.is_none() {
            return Err(TxError::Validation(
                "at least one participant must be supplied".to_string(),
            ));
        }

        let mut contract = self.contracts.get(contract_id.as_str())?;

        let assignments = [
            (ContractRole::FarmInspector, farm_inspector),
            (ContractRole::Shipper, shipper),
            (ContractRole::Processor, processor),
        ];

        for (relation, candidate) in assignments {
            let Some(candidate) = candidate else { continue };

            contract.require_unassigned(relation)?;
            let record = validate::require_participant(&self.participants, &candidate)?;
            validate::require_role(&record, relation.required_participant_role())?;

            contract.assign(relation, candidate)?;
            // Persist after each accepted role: a later rejection leaves
            // this assignment committed.
            self.contracts.update(contract_id.as_str(), contract.clone())?;
            tracing::info!(contract = %contract_id, %relation, "participant attached");
        }

        Ok(())
    }

    fn apply_inspect_batch(&mut self, req: InspectBatch) -> Result<(), TxError> {
        let InspectBatch {
            contract_id,
            type_of_seed,
            coffee_family,
            fertilizers_used,
        } = req;

        let contract = self.contracts.get(contract_id.as_str())?;
        let mut batch = self.batches.get(contract.batch.as_str())?;
        let inspector_id = contract.require_assigned(ContractRole::FarmInspector)?.clone();
        validate::require_status(&batch, BatchStatus::Growing)?;
        let inspector = validate::require_participant(&self.participants, &inspector_id)?;
        validate::require_role(&inspector, ParticipantRole::FarmInspector)?;

        batch.begin_inspection(InspectionRecord {
            type_of_seed,
            coffee_family,
            fertilizers_used,
        })?;
        let batch_id = batch.id.clone();
        self.batches.update(batch_id.as_str(), batch)?;

        tracing::info!(contract = %contract_id, batch = %batch_id, "batch inspected");
        Ok(())
    }

    fn apply_harvest_batch(&mut self, req: HarvestBatch) -> Result<(), TxError> {
        let HarvestBatch {
            contract_id,
            timestamp,
        } = req;

        let contract = self.contracts.get(contract_id.as_str())?;
        let mut batch = self.batches.get(contract.batch.as_str())?;
        // The grower reference is non-optional on the contract, so the
        // relationship requirement holds by construction.
        validate::require_status(&batch, BatchStatus::Inspection)?;
        let grower = validate::require_participant(&self.participants, &contract.grower)?;
        validate::require_role(&grower, ParticipantRole::Grower)?;

        batch.harvest(timestamp)?;
        let batch_id = batch.id.clone();
        self.batches.update(batch_id.as_str(), batch)?;

        tracing::info!(contract = %contract_id, batch = %batch_id, "batch harvested");
        Ok(())
    }

    fn apply_ship_batch(&mut self, req: ShipBatch) -> Result<(), TxError> {
        let ShipBatch {
            contract_id,
            warehouse_name,
            warehouse_address,
            ship_name,
            ship_id,
            shipping_quantity,
            estimated_delivery,
        } = req;

        let contract = self.contracts.get(contract_id.as_str())?;
        let mut batch = self.batches.get(contract.batch.as_str())?;
        let shipper_id = contract.require_assigned(ContractRole::Shipper)?.clone();
        validate::require_status(&batch, BatchStatus::Harvested)?;
        let shipper = validate::require_participant(&self.participants, &shipper_id)?;
        validate::require_role(&shipper, ParticipantRole::Shipper)?;

        batch.ship(ShippingRecord {
            warehouse_name,
            warehouse_address,
            ship_name,
            ship_id,
            shipping_quantity,
            estimated_delivery,
        })?;
        let batch_id = batch.id.clone();
        self.batches.update(batch_id.as_str(), batch)?;

        tracing::info!(contract = %contract_id, batch = %batch_id, "batch shipped");
        Ok(())
    }

    fn apply_process_batch(&mut self, req: ProcessBatch) -> Result<(), TxError> {
        let ProcessBatch {
            contract_id,
            packaging_timestamp,
            packaged_count,
            temperature_celsius,
            roasting_time,
        } = req;

        let contract = self.contracts.get(contract_id.as_str())?;
        let mut batch = self.batches.get(contract.batch.as_str())?;
        let processor_id = contract.require_assigned(ContractRole::Processor)?.clone();
        validate::require_status(&batch, BatchStatus::Shipping)?;
        let processor = validate::require_participant(&self.participants, &processor_id)?;
        validate::require_role(&processor, ParticipantRole::Processor)?;

        batch.process(ProcessingRecord {
            packaged_at: packaging_timestamp,
            packaged_count,
            temperature_celsius,
            roasting_time,
        })?;
        let batch_id = batch.id.clone();
        self.batches.update(batch_id.as_str(), batch)?;

        tracing::info!(contract = %contract_id, batch = %batch_id, "batch processed");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
