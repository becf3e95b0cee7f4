use depot_core::db::{ConnectionConfig, DbError};
use depot_core::model::{StorageKind, Zone};
use depot_core::schema::EmbeddedSchemaSource;
use depot_core::service::{ServiceError, Warehouse};

fn open_warehouse() -> Warehouse {
    Warehouse::open(ConnectionConfig::in_memory(), &EmbeddedSchemaSource::new()).unwrap()
}

#[test]
fn zone_table_is_created_and_seeded_on_open() {
    let warehouse = open_warehouse();

    let zones = warehouse.zones().find_all().unwrap();
    let ids: Vec<char> = zones.iter().map(|zone| zone.id).collect();
    assert_eq!(ids, vec!['X', 'Y', 'Z']);
}

#[test]
fn reopening_the_same_database_does_not_reseed() {
    let config = ConnectionConfig::in_memory();
    let schema = EmbeddedSchemaSource::new();

    let first = Warehouse::open(config.clone(), &schema).unwrap();
    assert_eq!(first.zones().find_all().unwrap().len(), 3);

    let second = Warehouse::open(config, &schema).unwrap();
    assert_eq!(second.zones().find_all().unwrap().len(), 3);
}

#[test]
fn zone_lifecycle_end_to_end() {
    let warehouse = open_warehouse();
    let zone = Zone::new('A', StorageKind::Cold);

    warehouse.zones().insert(&zone).unwrap();

    let duplicate = warehouse.zones().insert(&zone).unwrap_err();
    assert!(matches!(
        duplicate,
        ServiceError::AlreadyExists { entity: "zone", ref key } if key == "A"
    ));

    let found = warehouse.zones().find(&'A').unwrap().unwrap();
    assert_eq!(found, zone);

    warehouse.zones().delete(&zone).unwrap();
    assert!(warehouse.zones().find(&'A').unwrap().is_none());

    let gone = warehouse.zones().delete(&zone).unwrap_err();
    assert!(matches!(
        gone,
        ServiceError::NotFound { entity: "zone", ref key } if key == "A"
    ));
}

#[test]
fn update_of_missing_zone_is_not_found() {
    let warehouse = open_warehouse();
    let zone = Zone::new('Q', StorageKind::Dry);

    let err = warehouse.zones().update(&zone).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "zone", .. }));
}

#[test]
fn update_changes_the_stored_kind() {
    let warehouse = open_warehouse();
    warehouse
        .zones()
        .insert(&Zone::new('B', StorageKind::Dry))
        .unwrap();

    warehouse
        .zones()
        .update(&Zone::new('B', StorageKind::Frozen))
        .unwrap();

    let stored = warehouse.zones().find(&'B').unwrap().unwrap();
    assert_eq!(stored.kind, StorageKind::Frozen);
}

#[test]
fn invalid_zone_is_rejected_before_any_write() {
    let warehouse = open_warehouse();

    let err = warehouse
        .zones()
        .insert(&Zone::new('ñ', StorageKind::Cold))
        .unwrap_err();
    match err {
        ServiceError::Validation(violations) => {
            assert_eq!(violations.entity(), "zone");
            assert_eq!(violations.violations().len(), 1);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(warehouse.zones().find_all().unwrap().len(), 3);
}

// The existence check and the insert are separate statements; a caller
// racing past the check loses with a driver-level constraint error, not
// a domain `AlreadyExists`.
#[test]
fn lost_check_then_act_race_surfaces_as_driver_error() {
    let warehouse = open_warehouse();
    let zone = Zone::new('C', StorageKind::Cold);
    warehouse.zones().insert(&zone).unwrap();

    let err = warehouse.zones().repo().insert(&zone).unwrap_err();
    assert!(matches!(
        err,
        DbError::Statement { table: "zone", op: "execute", .. }
    ));
}
