use depot_core::db::ConnectionConfig;
use depot_core::model::{Dock, Placement, PlacementKey, Product, Shelf, StorageKind};
use depot_core::schema::EmbeddedSchemaSource;
use depot_core::service::{ServiceError, Warehouse};

fn open_warehouse() -> Warehouse {
    Warehouse::open(ConnectionConfig::in_memory(), &EmbeddedSchemaSource::new()).unwrap()
}

#[test]
fn placement_crud_with_composite_key() {
    let warehouse = open_warehouse();
    warehouse
        .products()
        .insert(&Product::new(1, "Milk", 1.10, StorageKind::Cold))
        .unwrap();
    warehouse.shelves().insert(&Shelf::new(1, 10)).unwrap();

    let placement = Placement::new(1, 1, 4);
    warehouse.placements().insert(&placement).unwrap();

    let key = PlacementKey {
        product_id: 1,
        shelf_id: 1,
    };
    assert_eq!(warehouse.placements().find(key).unwrap().unwrap(), placement);

    warehouse
        .placements()
        .update(&Placement::new(1, 1, 7))
        .unwrap();
    assert_eq!(
        warehouse.placements().find(key).unwrap().unwrap().quantity,
        7
    );

    warehouse.placements().delete(&placement).unwrap();
    assert!(warehouse.placements().find(key).unwrap().is_none());
}

#[test]
fn duplicate_placement_already_exists() {
    let warehouse = open_warehouse();
    warehouse
        .products()
        .insert(&Product::new(1, "Milk", 1.10, StorageKind::Cold))
        .unwrap();
    warehouse.shelves().insert(&Shelf::new(1, 10)).unwrap();

    let placement = Placement::new(1, 1, 4);
    warehouse.placements().insert(&placement).unwrap();

    let err = warehouse.placements().insert(&placement).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::AlreadyExists { entity: "placement", ref key }
            if key == "product 1 on shelf 1"
    ));
}

#[test]
fn placement_requires_existing_product_and_shelf() {
    let warehouse = open_warehouse();
    warehouse.shelves().insert(&Shelf::new(1, 10)).unwrap();

    let err = warehouse
        .placements()
        .insert(&Placement::new(9, 1, 2))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::MissingReference { entity: "placement", reference: "product", ref key }
            if key == "9"
    ));

    warehouse
        .products()
        .insert(&Product::new(9, "Beans", 0.80, StorageKind::Dry))
        .unwrap();
    let err = warehouse
        .placements()
        .insert(&Placement::new(9, 5, 2))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::MissingReference { entity: "placement", reference: "shelf", ref key }
            if key == "5"
    ));
}

#[test]
fn dock_requires_existing_zone() {
    let warehouse = open_warehouse();

    let err = warehouse.docks().insert(&Dock::new(1, 'A')).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::MissingReference { entity: "dock", reference: "zone", ref key }
            if key == "A"
    ));

    // Zone `X` ships with the embedded seed.
    warehouse.docks().insert(&Dock::new(1, 'X')).unwrap();
    assert_eq!(warehouse.docks().find(1).unwrap().unwrap().zone_id, 'X');
}

#[test]
fn aggregates_cover_value_and_slot_usage() {
    let warehouse = open_warehouse();
    warehouse
        .products()
        .insert(&Product::new(1, "Milk", 2.50, StorageKind::Cold))
        .unwrap();
    warehouse
        .products()
        .insert(&Product::new(2, "Beans", 1.00, StorageKind::Dry))
        .unwrap();
    warehouse.shelves().insert(&Shelf::new(1, 10)).unwrap();
    warehouse.shelves().insert(&Shelf::new(2, 8)).unwrap();

    warehouse
        .placements()
        .insert(&Placement::new(1, 1, 4))
        .unwrap();
    warehouse
        .placements()
        .insert(&Placement::new(2, 2, 6))
        .unwrap();

    let value = warehouse.placements().total_stock_value().unwrap();
    assert!((value - 16.0).abs() < f64::EPSILON);

    assert_eq!(warehouse.placements().occupied_slots().unwrap(), 10);
    assert_eq!(warehouse.placements().total_slots().unwrap(), 18);

    let usage = warehouse.placements().slot_usage().unwrap();
    assert_eq!((usage.occupied, usage.total), (10, 18));
}

#[test]
fn aggregates_over_empty_warehouse_are_zero() {
    let warehouse = open_warehouse();

    assert_eq!(warehouse.placements().total_stock_value().unwrap(), 0.0);
    assert_eq!(warehouse.placements().occupied_slots().unwrap(), 0);
    assert_eq!(warehouse.placements().total_slots().unwrap(), 0);
}
