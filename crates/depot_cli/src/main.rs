//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `depot_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use depot_core::{ConnectionConfig, EmbeddedSchemaSource, Warehouse};

fn main() {
    println!("depot_core version={}", depot_core::core_version());

    match Warehouse::open(ConnectionConfig::in_memory(), &EmbeddedSchemaSource::new()) {
        Ok(warehouse) => match warehouse.zones().find_all() {
            Ok(zones) => println!("depot_core seeded_zones={}", zones.len()),
            Err(err) => eprintln!("depot_core zone listing failed: {err}"),
        },
        Err(err) => eprintln!("depot_core warehouse open failed: {err}"),
    }
}
