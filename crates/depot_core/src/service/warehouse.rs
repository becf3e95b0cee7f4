//! Warehouse facade wiring every entity service to one database.

use log::info;

use crate::db::{ConnectionConfig, ConnectionProvider, DbResult};
use crate::model::{Client, Dock, Placement, Product, Shelf, Zone};
use crate::repo::TableRepository;
use crate::schema::SchemaSource;

use super::{CatalogService, DockService, PlacementService};

/// One handle over all six entity services.
///
/// Opening the warehouse bootstraps every table against the same
/// database, in dependency order (zones before docks, products and
/// shelves before placements).
pub struct Warehouse {
    clients: CatalogService<Client>,
    zones: CatalogService<Zone>,
    docks: DockService,
    shelves: CatalogService<Shelf>,
    products: CatalogService<Product>,
    placements: PlacementService,
}

impl Warehouse {
    /// Opens (and, when needed, bootstraps) a warehouse database.
    ///
    /// Each repository gets its own provider built from a clone of
    /// `config`; in-memory configurations therefore share one named
    /// database across all services.
    pub fn open(config: ConnectionConfig, schema: &dyn SchemaSource) -> DbResult<Self> {
        let zones = TableRepository::<Zone>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let clients =
            TableRepository::<Client>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let products =
            TableRepository::<Product>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let shelves =
            TableRepository::<Shelf>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let docks = TableRepository::<Dock>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let placements =
            TableRepository::<Placement>::new(ConnectionProvider::new(config.clone())?, schema)?;

        // Referential checks need their own view of the referenced tables.
        let dock_zones =
            TableRepository::<Zone>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let placement_products =
            TableRepository::<Product>::new(ConnectionProvider::new(config.clone())?, schema)?;
        let placement_shelves =
            TableRepository::<Shelf>::new(ConnectionProvider::new(config)?, schema)?;

        info!("event=warehouse_open module=service status=ok");

        Ok(Self {
            clients: CatalogService::new(clients),
            zones: CatalogService::new(zones),
            docks: DockService::new(docks, dock_zones),
            shelves: CatalogService::new(shelves),
            products: CatalogService::new(products),
            placements: PlacementService::new(placements, placement_products, placement_shelves),
        })
    }

    pub fn clients(&self) -> &CatalogService<Client> {
        &self.clients
    }

    pub fn zones(&self) -> &CatalogService<Zone> {
        &self.zones
    }

    pub fn docks(&self) -> &DockService {
        &self.docks
    }

    pub fn shelves(&self) -> &CatalogService<Shelf> {
        &self.shelves
    }

    pub fn products(&self) -> &CatalogService<Product> {
        &self.products
    }

    pub fn placements(&self) -> &PlacementService {
        &self.placements
    }
}
