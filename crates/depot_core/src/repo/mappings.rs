//! `EntityMapping` implementations for the six warehouse entities.

use rusqlite::types::{Type, Value};
use rusqlite::Row;

use crate::model::{Client, Dock, Placement, PlacementKey, Product, Shelf, StorageKind, Zone};
use crate::store::TableDescriptor;

use super::EntityMapping;

fn decode_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, message.into())
}

fn zone_letter(row: &Row<'_>, index: usize) -> rusqlite::Result<char> {
    let text: String = row.get(index)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(decode_error(
            index,
            format!("expected a single zone letter, got `{text}`"),
        )),
    }
}

fn storage_kind(row: &Row<'_>, index: usize) -> rusqlite::Result<StorageKind> {
    let text: String = row.get(index)?;
    StorageKind::parse_db_str(&text)
        .ok_or_else(|| decode_error(index, format!("unknown storage kind `{text}`")))
}

impl EntityMapping for Client {
    type Key = String;

    const TABLE: TableDescriptor = TableDescriptor {
        name: "client",
        key_column: "cif",
    };
    const ENTITY: &'static str = "client";
    const COLUMNS: &'static str = "cif, name, discount_pct";
    const KEY_PREDICATE: &'static str = "cif = ?1";

    fn key(&self) -> String {
        self.cif.clone()
    }

    fn key_values(key: &String) -> Vec<Value> {
        vec![Value::Text(key.clone())]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            cif: row.get(0)?,
            name: row.get(1)?,
            discount_pct: row.get(2)?,
        })
    }

    fn insert_sql() -> &'static str {
        "INSERT INTO client (cif, name, discount_pct) VALUES (?1, ?2, ?3)"
    }

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.cif.clone()),
            Value::Text(self.name.clone()),
            Value::Real(self.discount_pct),
        ]
    }

    fn update_sql() -> &'static str {
        "UPDATE client SET name = ?2, discount_pct = ?3 WHERE cif = ?1"
    }

    fn update_values(&self) -> Vec<Value> {
        self.insert_values()
    }
}

impl EntityMapping for Zone {
    type Key = char;

    const TABLE: TableDescriptor = TableDescriptor {
        name: "zone",
        key_column: "id",
    };
    const ENTITY: &'static str = "zone";
    const COLUMNS: &'static str = "id, kind";
    const KEY_PREDICATE: &'static str = "id = ?1";

    fn key(&self) -> char {
        self.id
    }

    fn key_values(key: &char) -> Vec<Value> {
        vec![Value::Text(key.to_string())]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: zone_letter(row, 0)?,
            kind: storage_kind(row, 1)?,
        })
    }

    fn insert_sql() -> &'static str {
        "INSERT INTO zone (id, kind) VALUES (?1, ?2)"
    }

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.id.to_string()),
            Value::Text(self.kind.as_db_str().to_string()),
        ]
    }

    fn update_sql() -> &'static str {
        "UPDATE zone SET kind = ?2 WHERE id = ?1"
    }

    fn update_values(&self) -> Vec<Value> {
        self.insert_values()
    }
}

impl EntityMapping for Dock {
    type Key = i64;

    const TABLE: TableDescriptor = TableDescriptor {
        name: "dock",
        key_column: "id",
    };
    const ENTITY: &'static str = "dock";
    const COLUMNS: &'static str = "id, zone_id";
    const KEY_PREDICATE: &'static str = "id = ?1";

    fn key(&self) -> i64 {
        self.id
    }

    fn key_values(key: &i64) -> Vec<Value> {
        vec![Value::Integer(*key)]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            zone_id: zone_letter(row, 1)?,
        })
    }

    fn insert_sql() -> &'static str {
        "INSERT INTO dock (id, zone_id) VALUES (?1, ?2)"
    }

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::Text(self.zone_id.to_string()),
        ]
    }

    fn update_sql() -> &'static str {
        "UPDATE dock SET zone_id = ?2 WHERE id = ?1"
    }

    fn update_values(&self) -> Vec<Value> {
        self.insert_values()
    }
}

impl EntityMapping for Shelf {
    type Key = i64;

    const TABLE: TableDescriptor = TableDescriptor {
        name: "shelf",
        key_column: "id",
    };
    const ENTITY: &'static str = "shelf";
    const COLUMNS: &'static str = "id, slots";
    const KEY_PREDICATE: &'static str = "id = ?1";

    fn key(&self) -> i64 {
        self.id
    }

    fn key_values(key: &i64) -> Vec<Value> {
        vec![Value::Integer(*key)]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            slots: row.get(1)?,
        })
    }

    fn insert_sql() -> &'static str {
        "INSERT INTO shelf (id, slots) VALUES (?1, ?2)"
    }

    fn insert_values(&self) -> Vec<Value> {
        vec![Value::Integer(self.id), Value::Integer(self.slots)]
    }

    fn update_sql() -> &'static str {
        "UPDATE shelf SET slots = ?2 WHERE id = ?1"
    }

    fn update_values(&self) -> Vec<Value> {
        self.insert_values()
    }
}

impl EntityMapping for Product {
    type Key = i64;

    const TABLE: TableDescriptor = TableDescriptor {
        name: "product",
        key_column: "id",
    };
    const ENTITY: &'static str = "product";
    const COLUMNS: &'static str = "id, name, price, kind";
    const KEY_PREDICATE: &'static str = "id = ?1";

    fn key(&self) -> i64 {
        self.id
    }

    fn key_values(key: &i64) -> Vec<Value> {
        vec![Value::Integer(*key)]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            kind: storage_kind(row, 3)?,
        })
    }

    fn insert_sql() -> &'static str {
        "INSERT INTO product (id, name, price, kind) VALUES (?1, ?2, ?3, ?4)"
    }

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::Text(self.name.clone()),
            Value::Real(self.price),
            Value::Text(self.kind.as_db_str().to_string()),
        ]
    }

    fn update_sql() -> &'static str {
        "UPDATE product SET name = ?2, price = ?3, kind = ?4 WHERE id = ?1"
    }

    fn update_values(&self) -> Vec<Value> {
        self.insert_values()
    }
}

impl EntityMapping for Placement {
    type Key = PlacementKey;

    const TABLE: TableDescriptor = TableDescriptor {
        name: "placement",
        key_column: "product_id, shelf_id",
    };
    const ENTITY: &'static str = "placement";
    const COLUMNS: &'static str = "product_id, shelf_id, quantity";
    const KEY_PREDICATE: &'static str = "product_id = ?1 AND shelf_id = ?2";

    fn key(&self) -> PlacementKey {
        PlacementKey {
            product_id: self.product_id,
            shelf_id: self.shelf_id,
        }
    }

    fn key_values(key: &PlacementKey) -> Vec<Value> {
        vec![Value::Integer(key.product_id), Value::Integer(key.shelf_id)]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            product_id: row.get(0)?,
            shelf_id: row.get(1)?,
            quantity: row.get(2)?,
        })
    }

    fn insert_sql() -> &'static str {
        "INSERT INTO placement (product_id, shelf_id, quantity) VALUES (?1, ?2, ?3)"
    }

    fn insert_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.product_id),
            Value::Integer(self.shelf_id),
            Value::Integer(self.quantity),
        ]
    }

    fn update_sql() -> &'static str {
        "UPDATE placement SET quantity = ?3 WHERE product_id = ?1 AND shelf_id = ?2"
    }

    fn update_values(&self) -> Vec<Value> {
        self.insert_values()
    }
}
