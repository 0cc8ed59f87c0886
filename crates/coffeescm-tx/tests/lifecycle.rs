//! End-to-end walk of a batch through the whole pipeline, driving the
//! public handler API over in-memory registries the way a host would
//! drive it over ledger-backed ones.

use coffeescm_core::{BatchId, ContractId, Participant, ParticipantId, ParticipantRole, Timestamp};
use coffeescm_registry::{EntityKind, MemoryRegistry, Registry};
use coffeescm_state::{Batch, BatchStatus, Contract, ContractRole};
use coffeescm_tx::{
    AddParticipants, CreateContract, HarvestBatch, InspectBatch, ProcessBatch, ShipBatch,
    SupplyChain, TxError,
};

type Service =
    SupplyChain<MemoryRegistry<Participant>, MemoryRegistry<Contract>, MemoryRegistry<Batch>>;

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn seeded_service() -> Service {
    let mut participants = MemoryRegistry::new(EntityKind::Participant);
    for (id, name, role) in [
        ("G1", "Finca El Paraiso", ParticipantRole::Grower),
        ("FI1", "AgroCert Ltda", ParticipantRole::FarmInspector),
        ("S1", "Pacifico Lines", ParticipantRole::Shipper),
        ("P1", "Nordic Roasters", ParticipantRole::Processor),
    ] {
        participants
            .add(id, Participant::new(ParticipantId::new(id), name, role))
            .unwrap();
    }
    SupplyChain::new(
        participants,
        MemoryRegistry::new(EntityKind::Contract),
        MemoryRegistry::new(EntityKind::Batch),
    )
}

#[test]
fn full_lifecycle_growing_through_processing() {
    let mut svc = seeded_service();

    // Contract C1 and batch B1 come into being together.
    svc.create_contract(CreateContract {
        contract_id: ContractId::new("C1"),
        batch_id: BatchId::new("B1"),
        grower: ParticipantId::new("G1"),
        timestamp: ts("2024-05-01T10:00:00Z"),
    })
    .unwrap();
    assert_eq!(
        svc.batches().get("B1").unwrap().status,
        BatchStatus::Growing
    );

    // Inspecting before a farm inspector is attached is rejected.
    let err = svc
        .inspect_batch(InspectBatch {
            contract_id: ContractId::new("C1"),
            type_of_seed: "bourbon".into(),
            coffee_family: "arabica".into(),
            fertilizers_used: "organic compost".into(),
        })
        .unwrap_err();
    assert!(matches!(err, TxError::Contract(_)));

    // Attach the remaining participants in one call.
    svc.add_participants(AddParticipants {
        contract_id: ContractId::new("C1"),
        farm_inspector: Some(ParticipantId::new("FI1")),
        shipper: Some(ParticipantId::new("S1")),
        processor: Some(ParticipantId::new("P1")),
    })
    .unwrap();

    // Repeating an assignment is rejected, not overwritten.
    let err = svc
        .add_participants(AddParticipants {
            contract_id: ContractId::new("C1"),
            farm_inspector: Some(ParticipantId::new("FI1")),
            shipper: None,
            processor: None,
        })
        .unwrap_err();
    assert!(matches!(err, TxError::Contract(_)));
    assert_eq!(
        svc.contracts()
            .get("C1")
            .unwrap()
            .assigned(ContractRole::FarmInspector),
        Some(&ParticipantId::new("FI1"))
    );

    // Shipping out of order is rejected while the crop is still growing.
    let premature_ship = ShipBatch {
        contract_id: ContractId::new("C1"),
        warehouse_name: "Central Beneficio".into(),
        warehouse_address: "Km 4, Ruta 9".into(),
        ship_name: "MV Aurora".into(),
        ship_id: "IMO-9441130".into(),
        shipping_quantity: 250,
        estimated_delivery: ts("2024-07-15T00:00:00Z"),
    };
    let err = svc.ship_batch(premature_ship.clone()).unwrap_err();
    assert!(matches!(err, TxError::Status(_)));

    // Inspection.
    svc.inspect_batch(InspectBatch {
        contract_id: ContractId::new("C1"),
        type_of_seed: "bourbon".into(),
        coffee_family: "arabica".into(),
        fertilizers_used: "organic compost".into(),
    })
    .unwrap();
    let batch = svc.batches().get("B1").unwrap();
    assert_eq!(batch.status, BatchStatus::Inspection);
    assert_eq!(batch.coffee_family.as_deref(), Some("arabica"));

    // Harvest.
    svc.harvest_batch(HarvestBatch {
        contract_id: ContractId::new("C1"),
        timestamp: ts("2024-06-30T06:00:00Z"),
    })
    .unwrap();
    let batch = svc.batches().get("B1").unwrap();
    assert_eq!(batch.status, BatchStatus::Harvested);
    assert_eq!(batch.harvested_at, Some(ts("2024-06-30T06:00:00Z")));

    // Shipping, now in order.
    svc.ship_batch(premature_ship).unwrap();
    let batch = svc.batches().get("B1").unwrap();
    assert_eq!(batch.status, BatchStatus::Shipping);
    assert_eq!(batch.shipping_quantity, Some(250));

    // Processing, the terminal stage.
    svc.process_batch(ProcessBatch {
        contract_id: ContractId::new("C1"),
        packaging_timestamp: ts("2024-07-20T09:00:00Z"),
        packaged_count: 1200,
        temperature_celsius: 215,
        roasting_time: "12m30s".into(),
    })
    .unwrap();
    let batch = svc.batches().get("B1").unwrap();
    assert_eq!(batch.status, BatchStatus::Processing);
    assert!(batch.is_terminal());
    assert_eq!(batch.packaged_count, Some(1200));

    // The audit log shows the four edges in order.
    let edges: Vec<_> = batch
        .transitions
        .iter()
        .map(|t| (t.from_status, t.to_status))
        .collect();
    assert_eq!(
        edges,
        vec![
            (BatchStatus::Growing, BatchStatus::Inspection),
            (BatchStatus::Inspection, BatchStatus::Harvested),
            (BatchStatus::Harvested, BatchStatus::Shipping),
            (BatchStatus::Shipping, BatchStatus::Processing),
        ]
    );
}

#[test]
fn two_contracts_do_not_interfere() {
    let mut svc = seeded_service();
    for (c, b) in [("C1", "B1"), ("C2", "B2")] {
        svc.create_contract(CreateContract {
            contract_id: ContractId::new(c),
            batch_id: BatchId::new(b),
            grower: ParticipantId::new("G1"),
            timestamp: ts("2024-05-01T10:00:00Z"),
        })
        .unwrap();
    }
    svc.add_participants(AddParticipants {
        contract_id: ContractId::new("C1"),
        farm_inspector: Some(ParticipantId::new("FI1")),
        shipper: None,
        processor: None,
    })
    .unwrap();
    svc.inspect_batch(InspectBatch {
        contract_id: ContractId::new("C1"),
        type_of_seed: "typica".into(),
        coffee_family: "arabica".into(),
        fertilizers_used: "none".into(),
    })
    .unwrap();

    // C2's batch is untouched by C1's progress.
    assert_eq!(
        svc.batches().get("B1").unwrap().status,
        BatchStatus::Inspection
    );
    assert_eq!(
        svc.batches().get("B2").unwrap().status,
        BatchStatus::Growing
    );
}

#[test]
fn create_rejects_reused_identifiers() {
    let mut svc = seeded_service();
    svc.create_contract(CreateContract {
        contract_id: ContractId::new("C1"),
        batch_id: BatchId::new("B1"),
        grower: ParticipantId::new("G1"),
        timestamp: ts("2024-05-01T10:00:00Z"),
    })
    .unwrap();

    // Same batch id under a fresh contract id: nothing new is persisted.
    let err = svc
        .create_contract(CreateContract {
            contract_id: ContractId::new("C2"),
            batch_id: BatchId::new("B1"),
            grower: ParticipantId::new("G1"),
            timestamp: ts("2024-05-02T10:00:00Z"),
        })
        .unwrap_err();
    assert!(matches!(err, TxError::Registry(_)));
    assert!(!svc.contracts().exists("C2"));
}
