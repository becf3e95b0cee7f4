use depot_core::db::ConnectionConfig;
use depot_core::model::{Client, Product, Shelf, StorageKind};
use depot_core::schema::EmbeddedSchemaSource;
use depot_core::service::{ServiceError, Warehouse};

fn open_warehouse() -> Warehouse {
    Warehouse::open(ConnectionConfig::in_memory(), &EmbeddedSchemaSource::new()).unwrap()
}

#[test]
fn client_lifecycle() {
    let warehouse = open_warehouse();
    let client = Client::new("A1234567B", "Acme Storage", 5.0);

    warehouse.clients().insert(&client).unwrap();
    assert_eq!(
        warehouse
            .clients()
            .find(&"A1234567B".to_string())
            .unwrap()
            .unwrap(),
        client
    );

    let updated = Client::new("A1234567B", "Acme Storage SL", 7.5);
    warehouse.clients().update(&updated).unwrap();
    assert_eq!(
        warehouse
            .clients()
            .find(&"A1234567B".to_string())
            .unwrap()
            .unwrap()
            .discount_pct,
        7.5
    );

    warehouse.clients().delete(&updated).unwrap();
    assert!(warehouse
        .clients()
        .find(&"A1234567B".to_string())
        .unwrap()
        .is_none());
}

#[test]
fn duplicate_client_insert_already_exists() {
    let warehouse = open_warehouse();
    let client = Client::new("B7654321C", "Beta Goods", 0.0);

    warehouse.clients().insert(&client).unwrap();
    let err = warehouse.clients().insert(&client).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::AlreadyExists { entity: "client", ref key } if key == "B7654321C"
    ));
}

#[test]
fn update_and_delete_of_missing_client_are_not_found() {
    let warehouse = open_warehouse();
    let ghost = Client::new("C1111111D", "Ghost", 0.0);

    assert!(matches!(
        warehouse.clients().update(&ghost).unwrap_err(),
        ServiceError::NotFound { entity: "client", .. }
    ));
    assert!(matches!(
        warehouse.clients().delete(&ghost).unwrap_err(),
        ServiceError::NotFound { entity: "client", .. }
    ));
}

#[test]
fn invalid_client_never_reaches_the_database() {
    let warehouse = open_warehouse();

    let err = warehouse
        .clients()
        .insert(&Client::new("nope", "", -2.0))
        .unwrap_err();
    match err {
        ServiceError::Validation(violations) => {
            assert_eq!(violations.violations().len(), 3)
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(warehouse.clients().find_all().unwrap().is_empty());
}

#[test]
fn find_all_orders_by_natural_key() {
    let warehouse = open_warehouse();
    warehouse
        .clients()
        .insert(&Client::new("C1111111D", "Third", 0.0))
        .unwrap();
    warehouse
        .clients()
        .insert(&Client::new("A1234567B", "First", 0.0))
        .unwrap();
    warehouse
        .clients()
        .insert(&Client::new("B7654321C", "Second", 0.0))
        .unwrap();

    let cifs: Vec<String> = warehouse
        .clients()
        .find_all()
        .unwrap()
        .into_iter()
        .map(|client| client.cif)
        .collect();
    assert_eq!(cifs, vec!["A1234567B", "B7654321C", "C1111111D"]);
}

#[test]
fn product_and_shelf_catalogs_share_the_same_contract() {
    let warehouse = open_warehouse();

    warehouse
        .products()
        .insert(&Product::new(1, "Milk", 1.10, StorageKind::Cold))
        .unwrap();
    warehouse.shelves().insert(&Shelf::new(1, 12)).unwrap();

    assert!(matches!(
        warehouse.shelves().delete(&Shelf::new(2, 12)).unwrap_err(),
        ServiceError::NotFound { entity: "shelf", ref key } if key == "2"
    ));

    let stored = warehouse.products().find(&1).unwrap().unwrap();
    assert_eq!(stored.kind, StorageKind::Cold);
}
